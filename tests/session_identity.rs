mod common;

use anyhow::Result;
use tempfile::tempdir;

use campus_circle::error::MarketError;
use campus_circle::market::NewIdentity;

use common::test_market;

fn signup_form(email: &str) -> NewIdentity {
    NewIdentity {
        name: "Ada Lovelace".to_string(),
        email: email.to_string(),
        password: "s3cret".to_string(),
        major: "Mathematics".to_string(),
        age: Some(21),
        gender: None,
    }
}

#[test]
fn login_fabricates_an_identity_from_the_local_part() -> Result<()> {
    let dir = tempdir()?;
    let market = test_market(dir.path())?;

    let identity = market.login("john.doe@university.edu", "anything")?;

    assert_eq!(identity.name, "john.doe");
    assert_eq!(identity.email, "john.doe@university.edu");
    assert_eq!(identity.major, None);
    assert_eq!(market.current_identity()?, Some(identity));
    Ok(())
}

#[test]
fn login_requires_both_fields() -> Result<()> {
    let dir = tempdir()?;
    let market = test_market(dir.path())?;

    for (email, password) in [("", "pw"), ("  ", "pw"), ("a@u.edu", "")] {
        let err = market.login(email, password).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MarketError>(),
            Some(MarketError::InvalidInput(_))
        ));
    }
    assert_eq!(market.current_identity()?, None);
    Ok(())
}

#[test]
fn login_reuses_a_matching_stored_profile() -> Result<()> {
    let dir = tempdir()?;
    let market = test_market(dir.path())?;
    market.signup(signup_form("ada@u.edu"))?;

    // Same email: the richer signup profile survives the login.
    let identity = market.login("ada@u.edu", "whatever")?;
    assert_eq!(identity.name, "Ada Lovelace");
    assert_eq!(identity.major.as_deref(), Some("Mathematics"));

    // Different email: the slot is replaced with a fabricated profile.
    let identity = market.login("grace@u.edu", "whatever")?;
    assert_eq!(identity.name, "grace");
    assert_eq!(identity.major, None);
    assert_eq!(market.current_identity()?, Some(identity));
    Ok(())
}

#[test]
fn signup_fills_the_single_session_slot() -> Result<()> {
    let dir = tempdir()?;
    let market = test_market(dir.path())?;

    market.signup(signup_form("ada@u.edu"))?;
    market.signup(NewIdentity {
        name: "Grace Hopper".to_string(),
        ..signup_form("grace@u.edu")
    })?;

    let current = market.current_identity()?.unwrap();
    assert_eq!(current.email, "grace@u.edu");
    assert_eq!(current.name, "Grace Hopper");
    Ok(())
}

#[test]
fn signup_requires_the_core_fields() -> Result<()> {
    let dir = tempdir()?;
    let market = test_market(dir.path())?;

    let err = market
        .signup(NewIdentity {
            major: "  ".to_string(),
            ..signup_form("ada@u.edu")
        })
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<MarketError>(),
        Some(MarketError::InvalidInput(_))
    ));
    Ok(())
}

#[test]
fn logout_clears_the_session() -> Result<()> {
    let dir = tempdir()?;
    let market = test_market(dir.path())?;
    market.signup(signup_form("ada@u.edu"))?;

    market.logout()?;
    assert_eq!(market.current_identity()?, None);

    // After logout nothing is remembered: login fabricates afresh.
    let identity = market.login("ada@u.edu", "whatever")?;
    assert_eq!(identity.name, "ada");
    assert_eq!(identity.major, None);
    Ok(())
}
