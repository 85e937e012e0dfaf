use super::*;

pub(super) fn handle_init_command(force: bool, path: Option<std::path::PathBuf>) -> Result<()> {
    let root = path.unwrap_or(std::env::current_dir().context("get current dir")?);
    Market::init(&root, force)?;
    println!("Initialized Campus Circle board at {}", root.display());
    Ok(())
}

pub(super) fn handle_seed_command(market: &Market, force: bool) -> Result<()> {
    let (requests, offers) = market.seed_demo(force)?;
    println!("Seeded {} requests and {} offers", requests, offers);
    Ok(())
}

pub(super) fn handle_language_command(market: &Market, code: Option<&str>) -> Result<()> {
    match code {
        Some(code) => {
            market.set_language(code)?;
            println!("Language set to {}", code.trim().to_lowercase());
        }
        None => println!("{}", market.language()?),
    }
    Ok(())
}
