use anyhow::{Context, Result};
use time::format_description::well_known::Rfc3339;

use crate::model::compute_listing_id;

/// Supplies ids for new listings. Injected so tests can use a deterministic
/// source.
pub trait IdGen {
    fn listing_id(&mut self, owner_email: &str, title: &str, timestamp: &str) -> Result<String>;
}

/// Supplies creation timestamps (RFC 3339).
pub trait Clock {
    fn now(&self) -> Result<String>;
}

pub struct SystemIdGen;

impl IdGen for SystemIdGen {
    fn listing_id(&mut self, owner_email: &str, title: &str, timestamp: &str) -> Result<String> {
        let mut nonce = [0u8; 16];
        getrandom::getrandom(&mut nonce).context("generate id nonce")?;
        Ok(compute_listing_id(owner_email, title, timestamp, &nonce))
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<String> {
        time::OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .context("format timestamp")
    }
}
