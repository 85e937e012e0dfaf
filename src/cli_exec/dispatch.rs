use super::assistant::{handle_ask_command, handle_assistant_login_command, handle_chat_command};
use super::board::{handle_init_command, handle_language_command, handle_seed_command};
use super::listings::{
    handle_claim_command, handle_delete_command, handle_edit_command, handle_list_offers_command,
    handle_list_requests_command, handle_post_offer_command, handle_post_request_command,
    handle_toggle_command,
};
use super::session::{
    handle_login_command, handle_logout_command, handle_signup_command, handle_whoami_command,
};
use super::with_market;
use super::*;

pub(super) fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Init(args) => handle_init_command(args.force, args.path)?,
        Commands::Signup(args) => with_market(|market| handle_signup_command(market, args))?,
        Commands::Login(args) => {
            with_market(|market| handle_login_command(market, &args.email, &args.password))?
        }
        Commands::Logout => with_market(|market| handle_logout_command(market))?,
        Commands::Whoami(args) => with_market(|market| handle_whoami_command(market, args.json))?,
        Commands::Post { command } => match command {
            PostCommands::Request(args) => {
                with_market(|market| handle_post_request_command(market, args))?
            }
            PostCommands::Offer(args) => {
                with_market(|market| handle_post_offer_command(market, args))?
            }
        },
        Commands::List { command } => match command {
            ListCommands::Requests(args) => {
                with_market(|market| handle_list_requests_command(market, args))?
            }
            ListCommands::Offers(args) => {
                with_market(|market| handle_list_offers_command(market, args))?
            }
        },
        Commands::Edit(args) => with_market(|market| {
            handle_edit_command(market, &args.id, args.title, args.description)
        })?,
        Commands::Toggle(args) => with_market(|market| handle_toggle_command(market, &args.id))?,
        Commands::Claim(args) => {
            with_market(|market| handle_claim_command(market, &args.id, &args.notes))?
        }
        Commands::Delete(args) => with_market(|market| handle_delete_command(market, &args.id))?,
        Commands::Seed(args) => with_market(|market| handle_seed_command(market, args.force))?,
        Commands::Language(args) => {
            with_market(|market| handle_language_command(market, args.code.as_deref()))?
        }
        Commands::Assistant { command } => match command {
            AssistantCommands::Login(args) => with_market(|market| {
                handle_assistant_login_command(market, args.api_key, args.url, args.model)
            })?,
            AssistantCommands::Ask(args) => {
                with_market(|market| handle_ask_command(market, args.purpose, &args.message))?
            }
            AssistantCommands::Chat(args) => {
                with_market(|market| handle_chat_command(market, args.purpose))?
            }
        },
    }

    Ok(())
}
