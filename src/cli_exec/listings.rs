use super::*;

use campus_circle::error::MarketError;
use campus_circle::filter::{self, ListingFilter};
use campus_circle::market::{OfferDraft, RequestDraft};
use campus_circle::model::{Condition, Listing, ListingKind};

use crate::cli_commands::{
    ListOffersArgs, ListRequestsArgs, PostOfferArgs, PostRequestArgs,
};

pub(super) fn handle_post_request_command(market: &mut Market, args: PostRequestArgs) -> Result<()> {
    check_post_form(&args.title, &args.description)?;
    let listing = market.post_request(RequestDraft {
        title: args.title.trim().to_string(),
        description: args.description.trim().to_string(),
        image_url: args.image_url,
    })?;
    println!("Posted request {}", listing.id);
    Ok(())
}

pub(super) fn handle_post_offer_command(market: &mut Market, args: PostOfferArgs) -> Result<()> {
    check_post_form(&args.title, &args.description)?;
    let listing = market.post_offer(OfferDraft {
        title: args.title.trim().to_string(),
        description: args.description.trim().to_string(),
        condition: args.condition,
        image_url: args.image_url,
    })?;
    println!("Posted offer {}", listing.id);
    Ok(())
}

pub(super) fn handle_list_requests_command(market: &Market, args: ListRequestsArgs) -> Result<()> {
    let mut filter = ListingFilter::default();
    if let Some(search) = args.search {
        filter = filter.search(search);
    }
    if let Some(status) = parse_status(args.status) {
        filter = filter.status(status);
    }
    print_listings(market, ListingKind::Request, filter, args.mine, args.json)
}

pub(super) fn handle_list_offers_command(market: &Market, args: ListOffersArgs) -> Result<()> {
    let mut filter = ListingFilter::default();
    if let Some(search) = args.search {
        filter = filter.search(search);
    }
    if let Some(status) = parse_status(args.status) {
        filter = filter.status(status);
    }
    if let Some(raw) = args.condition
        && !raw.eq_ignore_ascii_case("all")
    {
        filter = filter.condition(raw.parse::<Condition>()?);
    }
    print_listings(market, ListingKind::Offer, filter, args.mine, args.json)
}

pub(super) fn handle_edit_command(
    market: &Market,
    id: &str,
    title: Option<String>,
    description: Option<String>,
) -> Result<()> {
    if title.is_none() && description.is_none() {
        return Err(
            MarketError::invalid_input("nothing to change (pass --title or --description)").into(),
        );
    }
    let listing = market.edit_listing(id, title, description)?;
    println!("Updated {}", listing.id);
    Ok(())
}

pub(super) fn handle_toggle_command(market: &Market, id: &str) -> Result<()> {
    let listing = market.toggle_status(id)?;
    println!("{} is now {}", listing.id, listing.status_label());
    Ok(())
}

pub(super) fn handle_claim_command(market: &Market, id: &str, notes: &str) -> Result<()> {
    let listing = market.annotate_claim(id, notes)?;
    println!("Recorded claim notes on {}", listing.id);
    Ok(())
}

pub(super) fn handle_delete_command(market: &Market, id: &str) -> Result<()> {
    market.remove_listing(id)?;
    println!("Deleted {}", id);
    Ok(())
}

/// Form rules shared by both post commands. The core only insists on
/// non-empty fields; the CLI form is stricter, like the web form was.
fn check_post_form(title: &str, description: &str) -> Result<()> {
    if title.trim().len() < 3 {
        return Err(MarketError::invalid_input("title must be at least 3 characters").into());
    }
    if description.trim().len() < 10 {
        return Err(
            MarketError::invalid_input("description must be at least 10 characters").into(),
        );
    }
    Ok(())
}

/// `--status all` and an absent flag both mean "no status filter".
fn parse_status(status: Option<String>) -> Option<String> {
    status.filter(|s| !s.eq_ignore_ascii_case("all"))
}

fn print_listings(
    market: &Market,
    kind: ListingKind,
    filter: ListingFilter,
    mine: bool,
    json: bool,
) -> Result<()> {
    let listings = market.listings(kind)?;
    let mut visible = filter::visible(&listings, &filter);
    if mine {
        let me = market
            .current_identity()?
            .ok_or(MarketError::Unauthenticated)?;
        visible.retain(|listing| listing.owner_email == me.email);
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&visible).context("serialize listings json")?
        );
    } else {
        for listing in visible {
            print_listing_line(listing);
        }
    }
    Ok(())
}

fn print_listing_line(listing: &Listing) {
    let mut line = format!(
        "{}  {}  {}",
        listing.id,
        listing.status_label(),
        listing.timestamp
    );
    if let Some(condition) = listing.condition() {
        line.push_str(&format!("  [{}]", condition));
    }
    line.push_str(&format!("  {} ({})", listing.title, listing.owner_name));
    println!("{}", line);
}
