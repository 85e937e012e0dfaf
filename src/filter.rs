use crate::model::{Condition, Listing};

/// View filter over one collection. `None` means "all" for the status and
/// condition predicates; an empty search string matches everything.
#[derive(Clone, Debug, Default)]
pub struct ListingFilter {
    pub search: String,
    pub status: Option<String>,
    pub condition: Option<Condition>,
}

impl ListingFilter {
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }
}

/// Pure view derivation: the visible subset of `listings` in their original
/// order. Search is a case-insensitive substring match against title or
/// description. A set condition filter only ever matches offers.
pub fn visible<'a>(listings: &'a [Listing], filter: &ListingFilter) -> Vec<&'a Listing> {
    let needle = filter.search.to_lowercase();
    listings
        .iter()
        .filter(|listing| {
            let matches_search = needle.is_empty()
                || listing.title.to_lowercase().contains(&needle)
                || listing.description.to_lowercase().contains(&needle);
            let matches_status = filter
                .status
                .as_deref()
                .is_none_or(|status| listing.status_label() == status);
            let matches_condition = filter
                .condition
                .is_none_or(|condition| listing.condition() == Some(condition));
            matches_search && matches_status && matches_condition
        })
        .collect()
}
