use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};

use crate::store::LocalStore;

mod capabilities;
mod listings;
mod root_lifecycle;
mod seed;
mod session;
mod settings;

pub use self::capabilities::{Clock, IdGen, SystemClock, SystemIdGen};
pub use self::listings::{OfferDraft, RequestDraft};
pub use self::session::NewIdentity;

/// The application state: one board root, its store, and the injected id and
/// clock capabilities. Constructed explicitly by callers (no module-level
/// globals); tests substitute deterministic `ids`/`clock` via `with_parts`.
pub struct Market<I = SystemIdGen, C = SystemClock> {
    pub root: PathBuf,
    pub store: LocalStore,
    ids: I,
    clock: C,
}
