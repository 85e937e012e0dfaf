use std::path::PathBuf;

use clap::{Args, Subcommand};

use campus_circle::model::{ChatPurpose, Condition};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Initialize a board (.campus-circle)
    Init(InitArgs),

    /// Create a local profile and sign in
    Signup(SignupArgs),

    /// Sign in (mock local session, no credential verification)
    Login(LoginArgs),

    /// Sign out (clear the stored session)
    Logout,

    /// Show the signed-in profile
    Whoami(WhoamiArgs),

    /// Post a new request or offer
    Post {
        #[command(subcommand)]
        command: PostCommands,
    },

    /// Browse listings
    List {
        #[command(subcommand)]
        command: ListCommands,
    },

    /// Edit the title/description of one of your posts
    Edit(EditArgs),

    /// Flip a post between Open/Fulfilled or Available/Claimed
    Toggle(ToggleArgs),

    /// Record claim notes on one of your posts
    Claim(ClaimArgs),

    /// Delete one of your posts
    Delete(DeleteArgs),

    /// Install the sample listings
    Seed(SeedArgs),

    /// Show or set the interface language
    Language(LanguageArgs),

    /// Talk to the AI assistant
    Assistant {
        #[command(subcommand)]
        command: AssistantCommands,
    },
}

#[derive(Args)]
pub(crate) struct InitArgs {
    /// Re-initialize if .campus-circle already exists
    #[arg(long)]
    pub(crate) force: bool,
    /// Path to initialize (defaults to current directory)
    #[arg(long)]
    pub(crate) path: Option<PathBuf>,
}

#[derive(Args)]
pub(crate) struct SignupArgs {
    #[arg(long)]
    pub(crate) name: String,
    #[arg(long)]
    pub(crate) email: String,
    #[arg(long)]
    pub(crate) password: String,
    #[arg(long)]
    pub(crate) major: String,
    #[arg(long)]
    pub(crate) age: Option<u8>,
    #[arg(long)]
    pub(crate) gender: Option<String>,
}

#[derive(Args)]
pub(crate) struct LoginArgs {
    #[arg(long)]
    pub(crate) email: String,
    #[arg(long)]
    pub(crate) password: String,
}

#[derive(Args)]
pub(crate) struct WhoamiArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Subcommand)]
pub(crate) enum PostCommands {
    /// Post a request for an item you need
    Request(PostRequestArgs),
    /// Post an offer for an item you no longer need
    Offer(PostOfferArgs),
}

#[derive(Args)]
pub(crate) struct PostRequestArgs {
    #[arg(long)]
    pub(crate) title: String,
    #[arg(long)]
    pub(crate) description: String,
    /// Optional image URL (set at creation only)
    #[arg(long)]
    pub(crate) image_url: Option<String>,
}

#[derive(Args)]
pub(crate) struct PostOfferArgs {
    #[arg(long)]
    pub(crate) title: String,
    #[arg(long)]
    pub(crate) description: String,
    /// Item condition: "Like New", "Good" or "Used"
    #[arg(long)]
    pub(crate) condition: Condition,
    /// Optional image URL (set at creation only)
    #[arg(long)]
    pub(crate) image_url: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum ListCommands {
    /// Browse requests
    Requests(ListRequestsArgs),
    /// Browse offers
    Offers(ListOffersArgs),
}

#[derive(Args)]
pub(crate) struct ListRequestsArgs {
    /// Case-insensitive substring match against title or description
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Filter by status ("Open", "Fulfilled" or "all")
    #[arg(long)]
    pub(crate) status: Option<String>,
    /// Show only your own posts
    #[arg(long)]
    pub(crate) mine: bool,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct ListOffersArgs {
    /// Case-insensitive substring match against title or description
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Filter by status ("Available", "Claimed" or "all")
    #[arg(long)]
    pub(crate) status: Option<String>,
    /// Filter by condition ("Like New", "Good", "Used" or "all")
    #[arg(long)]
    pub(crate) condition: Option<String>,
    /// Show only your own posts
    #[arg(long)]
    pub(crate) mine: bool,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct EditArgs {
    pub(crate) id: String,
    #[arg(long)]
    pub(crate) title: Option<String>,
    #[arg(long)]
    pub(crate) description: Option<String>,
}

#[derive(Args)]
pub(crate) struct ToggleArgs {
    pub(crate) id: String,
}

#[derive(Args)]
pub(crate) struct ClaimArgs {
    pub(crate) id: String,
    /// Who the item went to, hand-over details, etc.
    #[arg(long)]
    pub(crate) notes: String,
}

#[derive(Args)]
pub(crate) struct DeleteArgs {
    pub(crate) id: String,
}

#[derive(Args)]
pub(crate) struct SeedArgs {
    /// Replace existing listings
    #[arg(long)]
    pub(crate) force: bool,
}

#[derive(Args)]
pub(crate) struct LanguageArgs {
    /// Two-letter code to switch to; omit to show the current language
    pub(crate) code: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum AssistantCommands {
    /// Configure the assistant endpoint and API key
    Login(AssistantLoginArgs),
    /// One question, one answer
    Ask(AskArgs),
    /// Interactive chat (transcript kept in memory for this session only)
    Chat(ChatArgs),
}

#[derive(Args)]
pub(crate) struct AssistantLoginArgs {
    #[arg(long)]
    pub(crate) api_key: String,
    /// Override the completion endpoint base URL
    #[arg(long)]
    pub(crate) url: Option<String>,
    /// Override the model name
    #[arg(long)]
    pub(crate) model: Option<String>,
}

#[derive(Args)]
pub(crate) struct AskArgs {
    /// student-support, recommendations, content-generation or smart-search
    #[arg(long)]
    pub(crate) purpose: ChatPurpose,
    pub(crate) message: String,
}

#[derive(Args)]
pub(crate) struct ChatArgs {
    /// student-support, recommendations, content-generation or smart-search
    #[arg(long)]
    pub(crate) purpose: ChatPurpose,
}
