mod chat;
mod config;
mod identity;
mod listing;

pub use self::chat::{ChatMessage, ChatPurpose, Role};
pub use self::config::{AssistantConfig, BoardConfig};
pub use self::identity::Identity;
pub use self::listing::{
    Condition, Listing, ListingKind, OfferStatus, RequestStatus, Variant, compute_listing_id,
};
