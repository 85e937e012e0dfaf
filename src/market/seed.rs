use super::*;

use crate::model::{Condition, Listing, ListingKind, OfferStatus, RequestStatus, Variant};

impl<I: IdGen, C: Clock> Market<I, C> {
    /// Installs the sample listings so a fresh board has something to browse.
    /// Refuses to overwrite existing collections unless `force` is set.
    pub fn seed_demo(&self, force: bool) -> Result<(usize, usize)> {
        if !force {
            let requests = self.store.load_listings(ListingKind::Request)?;
            let offers = self.store.load_listings(ListingKind::Offer)?;
            if !requests.is_empty() || !offers.is_empty() {
                return Err(anyhow!(
                    "board already has listings (use --force to replace them)"
                ));
            }
        }

        let requests = sample_requests();
        let offers = sample_offers();
        self.store.save_listings(ListingKind::Request, &requests)?;
        self.store.save_listings(ListingKind::Offer, &offers)?;
        Ok((requests.len(), offers.len()))
    }
}

fn request(
    id: &str,
    email: &str,
    name: &str,
    title: &str,
    description: &str,
    status: RequestStatus,
    timestamp: &str,
) -> Listing {
    Listing {
        id: id.to_string(),
        owner_email: email.to_string(),
        owner_name: name.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        timestamp: timestamp.to_string(),
        image_url: None,
        claimed_by: None,
        claim_notes: None,
        variant: Variant::Request { status },
    }
}

fn offer(
    id: &str,
    email: &str,
    name: &str,
    title: &str,
    description: &str,
    condition: Condition,
    status: OfferStatus,
    timestamp: &str,
) -> Listing {
    Listing {
        id: id.to_string(),
        owner_email: email.to_string(),
        owner_name: name.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        timestamp: timestamp.to_string(),
        image_url: None,
        claimed_by: None,
        claim_notes: None,
        variant: Variant::Offer { status, condition },
    }
}

fn sample_requests() -> Vec<Listing> {
    vec![
        request(
            "req1",
            "john.doe@university.edu",
            "John Doe",
            "Calculus II Textbook (Stewart, 8th Edition)",
            "I need this book for my upcoming Calculus II class. Would really appreciate \
             if someone has a copy they no longer need!",
            RequestStatus::Open,
            "2024-04-15T09:30:00Z",
        ),
        request(
            "req2",
            "jane.smith@university.edu",
            "Jane Smith",
            "Chemistry Lab Manual for CHEM 101",
            "Looking for the lab manual for Professor Wilson's CHEM 101 class. Mine got damaged.",
            RequestStatus::Open,
            "2024-04-16T14:45:00Z",
        ),
        request(
            "req3",
            "alex.johnson@university.edu",
            "Alex Johnson",
            "Psychology 202 Course Reader",
            "Need the course reader for Dr. Martinez's Psychology 202 class. Would be great \
             if someone from last semester has one!",
            RequestStatus::Fulfilled,
            "2024-04-14T11:20:00Z",
        ),
        request(
            "req4",
            "john.doe@university.edu",
            "John Doe",
            "TI-84 Plus Calculator",
            "Need a calculator for the semester. Will return it in excellent condition at \
             the end of the term.",
            RequestStatus::Open,
            "2024-04-17T10:00:00Z",
        ),
    ]
}

fn sample_offers() -> Vec<Listing> {
    vec![
        offer(
            "off1",
            "alex.johnson@university.edu",
            "Alex Johnson",
            "Introduction to Python Programming",
            "Slightly used Python textbook. Great condition, no highlights or notes.",
            Condition::LikeNew,
            OfferStatus::Available,
            "2024-04-15T08:15:00Z",
        ),
        offer(
            "off2",
            "jane.smith@university.edu",
            "Jane Smith",
            "Biology 101 Lab Coat",
            "Used for one semester only. Washed and ready to use.",
            Condition::Good,
            OfferStatus::Available,
            "2024-04-16T16:30:00Z",
        ),
        offer(
            "off3",
            "john.doe@university.edu",
            "John Doe",
            "Organic Chemistry Molecular Model Kit",
            "Complete kit, missing a few hydrogen atoms but otherwise great.",
            Condition::Used,
            OfferStatus::Claimed,
            "2024-04-14T13:45:00Z",
        ),
        offer(
            "off4",
            "alex.johnson@university.edu",
            "Alex Johnson",
            "Economics 201 Textbook",
            "Used but in good condition. Some highlighting on key concepts.",
            Condition::Good,
            OfferStatus::Available,
            "2024-04-17T09:20:00Z",
        ),
    ]
}
