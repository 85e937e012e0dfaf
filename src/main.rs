use anyhow::Result;
use clap::Parser;

mod cli_commands;
mod cli_exec;

use cli_commands::Commands;

#[derive(Parser)]
#[command(name = "campus-circle")]
#[command(about = "Campus Circle student exchange board", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    cli_exec::handle_command(cli.command)
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
