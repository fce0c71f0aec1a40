// src/domain/variant.rs

use chrono::{DateTime, Utc};

use crate::domain::listing::Listing;
use crate::formatting::{is_recent, recency_window};

/// How a card presents a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    OnSale { sale_price: u64 },
    NewRelease,
    Default,
}

/// Picks the card variant for a listing.
///
/// A listing can be both discounted and freshly released; the sale wins.
/// A sale price of zero is still a sale.
pub fn compute_variant(listing: &Listing, now: DateTime<Utc>) -> Variant {
    if let Some(sale_price) = listing.sale_price {
        return Variant::OnSale { sale_price };
    }
    if is_recent(listing.release_date, now, recency_window()) {
        return Variant::NewRelease;
    }
    Variant::Default
}
