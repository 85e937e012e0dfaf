mod common;

use anyhow::Result;
use tempfile::tempdir;

use campus_circle::error::MarketError;
use campus_circle::market::Market;
use campus_circle::model::{AssistantConfig, ListingKind};

use common::test_market;

#[test]
fn a_fresh_board_speaks_english_and_has_no_assistant() -> Result<()> {
    let dir = tempdir()?;
    let market = test_market(dir.path())?;
    assert_eq!(market.language()?, "en");
    assert!(market.assistant_config()?.is_none());
    Ok(())
}

#[test]
fn init_refuses_an_existing_board_without_force() -> Result<()> {
    let dir = tempdir()?;
    Market::init(dir.path(), false)?;

    assert!(Market::init(dir.path(), false).is_err());
    Market::init(dir.path(), true)?;
    Ok(())
}

#[test]
fn language_is_normalized_and_persisted() -> Result<()> {
    let dir = tempdir()?;
    let market = test_market(dir.path())?;

    market.set_language(" ZH ")?;
    assert_eq!(market.language()?, "zh");
    Ok(())
}

#[test]
fn language_must_be_a_two_letter_code() -> Result<()> {
    let dir = tempdir()?;
    let market = test_market(dir.path())?;

    for code in ["", "e", "eng", "z1"] {
        let err = market.set_language(code).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MarketError>(),
            Some(MarketError::InvalidInput(_))
        ));
    }
    assert_eq!(market.language()?, "en");
    Ok(())
}

#[test]
fn assistant_config_roundtrips() -> Result<()> {
    let dir = tempdir()?;
    let market = test_market(dir.path())?;

    market.set_assistant_config(AssistantConfig {
        api_key: Some("sk-test".to_string()),
        model: "deepseek-reasoner".to_string(),
        ..AssistantConfig::default()
    })?;

    let stored = market.assistant_config()?.unwrap();
    assert_eq!(stored.api_key.as_deref(), Some("sk-test"));
    assert_eq!(stored.model, "deepseek-reasoner");
    assert_eq!(stored.base_url, "https://api.deepseek.com/v1");
    assert_eq!(stored.max_tokens, 1000);

    // Setting the assistant leaves the language alone.
    assert_eq!(market.language()?, "en");
    Ok(())
}

#[test]
fn seed_installs_the_samples_once() -> Result<()> {
    let dir = tempdir()?;
    let market = test_market(dir.path())?;

    let (requests, offers) = market.seed_demo(false)?;
    assert_eq!((requests, offers), (4, 4));

    let stored = market.listings(ListingKind::Request)?;
    assert_eq!(stored.len(), 4);
    assert_eq!(stored[0].id, "req1");
    assert_eq!(stored[2].status_label(), "Fulfilled");

    let stored = market.listings(ListingKind::Offer)?;
    assert_eq!(stored[2].status_label(), "Claimed");

    let err = market.seed_demo(false).unwrap_err();
    assert!(err.to_string().contains("already has listings"));

    // --force replaces whatever is there.
    market.seed_demo(true)?;
    assert_eq!(market.listings(ListingKind::Offer)?.len(), 4);
    Ok(())
}
