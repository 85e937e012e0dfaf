use super::*;

use crate::error::MarketError;
use crate::model::{Condition, Identity, Listing, ListingKind, OfferStatus, RequestStatus, Variant};

pub struct RequestDraft {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
}

pub struct OfferDraft {
    pub title: String,
    pub description: String,
    pub condition: Condition,
    pub image_url: Option<String>,
}

impl<I: IdGen, C: Clock> Market<I, C> {
    /// Read-only snapshot of one collection, in insertion order.
    pub fn listings(&self, kind: ListingKind) -> Result<Vec<Listing>> {
        self.store.load_listings(kind)
    }

    pub fn post_request(&mut self, draft: RequestDraft) -> Result<Listing> {
        let owner = self.require_identity()?;
        let listing = self.new_listing(
            &owner,
            draft.title,
            draft.description,
            draft.image_url,
            Variant::Request {
                status: RequestStatus::Open,
            },
        )?;
        self.append(ListingKind::Request, listing)
    }

    pub fn post_offer(&mut self, draft: OfferDraft) -> Result<Listing> {
        let owner = self.require_identity()?;
        let listing = self.new_listing(
            &owner,
            draft.title,
            draft.description,
            draft.image_url,
            Variant::Offer {
                status: OfferStatus::Available,
                condition: draft.condition,
            },
        )?;
        self.append(ListingKind::Offer, listing)
    }

    /// Replaces title and/or description on one of the caller's posts.
    pub fn edit_listing(
        &self,
        id: &str,
        title: Option<String>,
        description: Option<String>,
    ) -> Result<Listing> {
        if title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(MarketError::invalid_input("title must not be empty").into());
        }
        if description.as_deref().is_some_and(|d| d.trim().is_empty()) {
            return Err(MarketError::invalid_input("description must not be empty").into());
        }
        let me = self.require_identity()?;
        self.mutate(&me, id, |listing| {
            if let Some(title) = title {
                listing.title = title;
            }
            if let Some(description) = description {
                listing.description = description;
            }
        })
    }

    /// Open<->Fulfilled / Available<->Claimed. Applying it twice restores the
    /// original status.
    pub fn toggle_status(&self, id: &str) -> Result<Listing> {
        let me = self.require_identity()?;
        self.mutate(&me, id, Listing::toggle_status)
    }

    /// Records claim notes and who the item went to. Deliberately leaves
    /// `status` alone: callers flip it separately with `toggle_status`, so a
    /// listing can carry claim notes while still Open/Available.
    pub fn annotate_claim(&self, id: &str, notes: &str) -> Result<Listing> {
        let me = self.require_identity()?;
        let claimed_by = me.name.clone();
        self.mutate(&me, id, |listing| {
            listing.claim_notes = Some(notes.to_string());
            listing.claimed_by = Some(claimed_by);
        })
    }

    pub fn remove_listing(&self, id: &str) -> Result<()> {
        let me = self.require_identity()?;
        for kind in ListingKind::ALL {
            let mut items = self.store.load_listings(kind)?;
            let Some(pos) = items.iter().position(|l| l.id == id) else {
                continue;
            };
            if items[pos].owner_email != me.email {
                return Err(MarketError::NotOwner(id.to_string()).into());
            }
            items.remove(pos);
            self.store.save_listings(kind, &items)?;
            return Ok(());
        }
        Err(MarketError::NotFound(id.to_string()).into())
    }

    fn new_listing(
        &mut self,
        owner: &Identity,
        title: String,
        description: String,
        image_url: Option<String>,
        variant: Variant,
    ) -> Result<Listing> {
        if title.trim().is_empty() {
            return Err(MarketError::invalid_input("title is required").into());
        }
        if description.trim().is_empty() {
            return Err(MarketError::invalid_input("description is required").into());
        }

        let timestamp = self.clock.now()?;
        let id = self.ids.listing_id(&owner.email, &title, &timestamp)?;
        Ok(Listing {
            id,
            owner_email: owner.email.clone(),
            owner_name: owner.name.clone(),
            title,
            description,
            timestamp,
            image_url,
            claimed_by: None,
            claim_notes: None,
            variant,
        })
    }

    fn append(&self, kind: ListingKind, listing: Listing) -> Result<Listing> {
        let mut items = self.store.load_listings(kind)?;
        items.push(listing.clone());
        self.store.save_listings(kind, &items)?;
        Ok(listing)
    }

    /// Re-reads the collection holding `id`, applies `apply` to the listing
    /// if `me` owns it, and writes the whole collection back.
    fn mutate<F>(&self, me: &Identity, id: &str, apply: F) -> Result<Listing>
    where
        F: FnOnce(&mut Listing),
    {
        for kind in ListingKind::ALL {
            let mut items = self.store.load_listings(kind)?;
            let Some(pos) = items.iter().position(|l| l.id == id) else {
                continue;
            };
            if items[pos].owner_email != me.email {
                return Err(MarketError::NotOwner(id.to_string()).into());
            }
            apply(&mut items[pos]);
            let updated = items[pos].clone();
            self.store.save_listings(kind, &items)?;
            return Ok(updated);
        }
        Err(MarketError::NotFound(id.to_string()).into())
    }
}
