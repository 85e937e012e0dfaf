use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which of the two persisted collections a listing lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingKind {
    Request,
    Offer,
}

impl ListingKind {
    pub const ALL: [ListingKind; 2] = [ListingKind::Request, ListingKind::Offer];

    pub fn storage_file(self) -> &'static str {
        match self {
            ListingKind::Request => "requests.json",
            ListingKind::Offer => "offers.json",
        }
    }

}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Open,
    Fulfilled,
}

impl RequestStatus {
    pub fn toggled(self) -> Self {
        match self {
            RequestStatus::Open => RequestStatus::Fulfilled,
            RequestStatus::Fulfilled => RequestStatus::Open,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OfferStatus {
    Available,
    Claimed,
}

impl OfferStatus {
    pub fn toggled(self) -> Self {
        match self {
            OfferStatus::Available => OfferStatus::Claimed,
            OfferStatus::Claimed => OfferStatus::Available,
        }
    }
}

/// Physical condition of an offered item, fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    #[serde(rename = "Like New")]
    LikeNew,
    Good,
    Used,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Condition::LikeNew => "Like New",
            Condition::Good => "Good",
            Condition::Used => "Used",
        };
        f.write_str(s)
    }
}

impl FromStr for Condition {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', " ").as_str() {
            "like new" => Ok(Condition::LikeNew),
            "good" => Ok(Condition::Good),
            "used" => Ok(Condition::Used),
            other => Err(anyhow::anyhow!(
                "unknown condition {:?} (expected \"Like New\", \"Good\" or \"Used\")",
                other
            )),
        }
    }
}

/// The request/offer split, carried as a tagged union so a listing can never
/// hold a status that is illegal for its kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Variant {
    Request { status: RequestStatus },
    Offer { status: OfferStatus, condition: Condition },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub owner_email: String,
    pub owner_name: String,
    pub title: String,
    pub description: String,
    /// Creation time, RFC 3339. Immutable after creation.
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claimed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_notes: Option<String>,
    #[serde(flatten)]
    pub variant: Variant,
}

impl Listing {
    pub fn kind(&self) -> ListingKind {
        match self.variant {
            Variant::Request { .. } => ListingKind::Request,
            Variant::Offer { .. } => ListingKind::Offer,
        }
    }

    pub fn status_label(&self) -> &'static str {
        match &self.variant {
            Variant::Request { status } => match status {
                RequestStatus::Open => "Open",
                RequestStatus::Fulfilled => "Fulfilled",
            },
            Variant::Offer { status, .. } => match status {
                OfferStatus::Available => "Available",
                OfferStatus::Claimed => "Claimed",
            },
        }
    }

    /// Flips between the two legal status values for this listing's variant.
    pub fn toggle_status(&mut self) {
        match &mut self.variant {
            Variant::Request { status } => *status = status.toggled(),
            Variant::Offer { status, .. } => *status = status.toggled(),
        }
    }

    pub fn condition(&self) -> Option<Condition> {
        match self.variant {
            Variant::Request { .. } => None,
            Variant::Offer { condition, .. } => Some(condition),
        }
    }
}

/// Listing ids hash the creation fields plus a random nonce, truncated to
/// 16 hex chars.
pub fn compute_listing_id(owner_email: &str, title: &str, timestamp: &str, nonce: &[u8]) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(owner_email.as_bytes());
    hasher.update(b"\n");
    hasher.update(title.as_bytes());
    hasher.update(b"\n");
    hasher.update(timestamp.as_bytes());
    hasher.update(b"\n");
    hasher.update(nonce);
    let hex = hasher.finalize().to_hex();
    hex.as_str()[..16].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_tag_and_condition_wire_format() {
        let listing = Listing {
            id: "abc".into(),
            owner_email: "a@u.edu".into(),
            owner_name: "A".into(),
            title: "Lab coat".into(),
            description: "Washed and ready to use.".into(),
            timestamp: "2024-04-16T16:30:00Z".into(),
            image_url: None,
            claimed_by: None,
            claim_notes: None,
            variant: Variant::Offer {
                status: OfferStatus::Available,
                condition: Condition::LikeNew,
            },
        };
        let v: serde_json::Value = serde_json::to_value(&listing).unwrap();
        assert_eq!(v["kind"], "offer");
        assert_eq!(v["status"], "Available");
        assert_eq!(v["condition"], "Like New");
        assert!(v.get("image_url").is_none());
    }

    #[test]
    fn condition_parses_both_spellings() {
        assert_eq!("Like New".parse::<Condition>().unwrap(), Condition::LikeNew);
        assert_eq!("like-new".parse::<Condition>().unwrap(), Condition::LikeNew);
        assert!("mint".parse::<Condition>().is_err());
    }
}
