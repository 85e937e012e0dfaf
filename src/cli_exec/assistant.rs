use std::io::{BufRead, Write};

use super::*;

use campus_circle::assistant::AssistantClient;
use campus_circle::model::ChatPurpose;

pub(super) fn handle_assistant_login_command(
    market: &Market,
    api_key: String,
    url: Option<String>,
    model: Option<String>,
) -> Result<()> {
    let mut config = market.assistant_config()?.unwrap_or_default();
    config.api_key = Some(api_key);
    if let Some(url) = url {
        config.base_url = url;
    }
    if let Some(model) = model {
        config.model = model;
    }
    println!("Assistant configured ({} at {})", config.model, config.base_url);
    market.set_assistant_config(config)
}

pub(super) fn handle_ask_command(
    market: &Market,
    purpose: ChatPurpose,
    message: &str,
) -> Result<()> {
    let client = assistant_client(market)?;
    let mut transcript = Vec::new();
    let reply = client.send(&mut transcript, purpose, message);
    println!("{}", reply);
    Ok(())
}

/// Reads messages from stdin until EOF or an empty line. The transcript lives
/// in memory for this process only; nothing is persisted.
pub(super) fn handle_chat_command(market: &Market, purpose: ChatPurpose) -> Result<()> {
    let client = assistant_client(market)?;
    let mut transcript = Vec::new();

    println!("Chatting with the {} assistant (empty line to quit)", purpose);
    let stdin = std::io::stdin();
    loop {
        print!("you> ");
        std::io::stdout().flush().context("flush stdout")?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("read chat input")?;
        let message = line.trim();
        if read == 0 || message.is_empty() {
            break;
        }

        let reply = client.send(&mut transcript, purpose, message);
        println!("assistant> {}", reply);
    }
    Ok(())
}

fn assistant_client(market: &Market) -> Result<AssistantClient> {
    let config = market.assistant_config()?.unwrap_or_default();
    AssistantClient::new(config)
}
