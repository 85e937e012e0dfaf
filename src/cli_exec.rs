use anyhow::{Context, Result};

use campus_circle::market::Market;

use crate::cli_commands::{AssistantCommands, Commands, ListCommands, PostCommands};

mod assistant;
mod board;
mod dispatch;
mod listings;
mod session;

pub(super) fn handle_command(command: Commands) -> Result<()> {
    dispatch::handle_command(command)
}

fn discover_market() -> Result<Market> {
    Market::discover(&std::env::current_dir().context("get current dir")?)
}

fn with_market<F>(f: F) -> Result<()>
where
    F: FnOnce(&mut Market) -> Result<()>,
{
    let mut market = discover_market()?;
    f(&mut market)
}
