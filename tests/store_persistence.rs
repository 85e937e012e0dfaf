use std::fs;

use anyhow::Result;
use tempfile::tempdir;

use campus_circle::model::{
    Condition, Identity, Listing, ListingKind, OfferStatus, RequestStatus, Variant,
};
use campus_circle::store::LocalStore;

fn request(id: &str, title: &str) -> Listing {
    Listing {
        id: id.to_string(),
        owner_email: "ada@u.edu".to_string(),
        owner_name: "Ada".to_string(),
        title: title.to_string(),
        description: "Need it for the spring term.".to_string(),
        timestamp: "2024-04-15T09:30:00Z".to_string(),
        image_url: None,
        claimed_by: None,
        claim_notes: None,
        variant: Variant::Request {
            status: RequestStatus::Open,
        },
    }
}

fn offer(id: &str, condition: Condition) -> Listing {
    Listing {
        id: id.to_string(),
        owner_email: "ada@u.edu".to_string(),
        owner_name: "Ada".to_string(),
        title: "Lab Coat".to_string(),
        description: "Washed and ready to use.".to_string(),
        timestamp: "2024-04-16T16:30:00Z".to_string(),
        image_url: Some("https://example.edu/coat.jpg".to_string()),
        claimed_by: None,
        claim_notes: None,
        variant: Variant::Offer {
            status: OfferStatus::Available,
            condition,
        },
    }
}

#[test]
fn listings_roundtrip_in_insertion_order() -> Result<()> {
    let dir = tempdir()?;
    let store = LocalStore::init(dir.path(), false)?;

    let items = vec![request("r1", "Calculus Textbook"), request("r2", "Lab Manual")];
    store.save_listings(ListingKind::Request, &items)?;

    assert_eq!(store.load_listings(ListingKind::Request)?, items);
    Ok(())
}

#[test]
fn missing_collection_reads_as_empty() -> Result<()> {
    let dir = tempdir()?;
    let store = LocalStore::init(dir.path(), false)?;
    assert!(store.load_listings(ListingKind::Offer)?.is_empty());
    Ok(())
}

#[test]
fn corrupt_collection_is_cleared_and_reads_as_empty() -> Result<()> {
    let dir = tempdir()?;
    let store = LocalStore::init(dir.path(), false)?;
    let path = dir.path().join(".campus-circle").join("requests.json");
    fs::write(&path, b"{ not json")?;

    assert!(store.load_listings(ListingKind::Request)?.is_empty());
    assert!(!path.exists());
    Ok(())
}

#[test]
fn corrupt_session_is_cleared_and_reads_as_absent() -> Result<()> {
    let dir = tempdir()?;
    let store = LocalStore::init(dir.path(), false)?;
    let path = dir.path().join(".campus-circle").join("session.json");
    fs::write(&path, b"][")?;

    assert_eq!(store.read_session()?, None);
    assert!(!path.exists());
    Ok(())
}

#[test]
fn session_roundtrips_and_clears() -> Result<()> {
    let dir = tempdir()?;
    let store = LocalStore::init(dir.path(), false)?;

    let identity = Identity {
        email: "ada@u.edu".to_string(),
        name: "Ada".to_string(),
        major: Some("Mathematics".to_string()),
        age: Some(21),
        gender: None,
    };
    store.write_session(&identity)?;
    assert_eq!(store.read_session()?, Some(identity));

    store.clear_session()?;
    assert_eq!(store.read_session()?, None);
    // Clearing an already empty slot is fine.
    store.clear_session()?;
    Ok(())
}

#[test]
fn init_refuses_an_existing_board_without_force() -> Result<()> {
    let dir = tempdir()?;
    LocalStore::init(dir.path(), false)?;

    let err = LocalStore::init(dir.path(), false).unwrap_err();
    assert!(err.to_string().contains("already exists"));

    LocalStore::init(dir.path(), true)?;
    Ok(())
}

#[test]
fn persisted_wire_shape_uses_the_tagged_union() -> Result<()> {
    let dir = tempdir()?;
    let store = LocalStore::init(dir.path(), false)?;
    store.save_listings(ListingKind::Offer, &[offer("o1", Condition::LikeNew)])?;

    let raw = fs::read(dir.path().join(".campus-circle").join("offers.json"))?;
    let v: serde_json::Value = serde_json::from_slice(&raw)?;

    assert_eq!(v[0]["kind"], "offer");
    assert_eq!(v[0]["status"], "Available");
    assert_eq!(v[0]["condition"], "Like New");
    assert_eq!(v[0]["image_url"], "https://example.edu/coat.jpg");
    assert!(v[0].get("claimed_by").is_none());
    Ok(())
}
