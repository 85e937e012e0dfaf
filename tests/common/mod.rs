use std::path::Path;

use anyhow::Result;

use campus_circle::market::{Clock, IdGen, Market};
use campus_circle::store::LocalStore;

pub const TEST_TIME: &str = "2024-04-15T09:30:00Z";

pub type TestMarket = Market<SeqIds, FixedClock>;

/// Deterministic id source: listing-0001, listing-0002, ...
pub struct SeqIds(u32);

impl IdGen for SeqIds {
    fn listing_id(&mut self, _owner_email: &str, _title: &str, _timestamp: &str) -> Result<String> {
        self.0 += 1;
        Ok(format!("listing-{:04}", self.0))
    }
}

pub struct FixedClock(&'static str);

impl Clock for FixedClock {
    fn now(&self) -> Result<String> {
        Ok(self.0.to_string())
    }
}

pub fn test_market(root: &Path) -> Result<TestMarket> {
    let store = LocalStore::init(root, false)?;
    Ok(Market::with_parts(
        root.to_path_buf(),
        store,
        SeqIds(0),
        FixedClock(TEST_TIME),
    ))
}

#[allow(dead_code)]
pub fn sign_in(market: &TestMarket, email: &str) -> Result<()> {
    market.login(email, "password")?;
    Ok(())
}
