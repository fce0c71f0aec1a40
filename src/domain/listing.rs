use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A single shoe as it appears in the catalog.
///
/// Prices are stored in cents. Keys are camelCase on the wire so catalogs
/// exported for the storefront load as-is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub slug: String,
    pub name: String,
    pub image_src: String,

    pub price: u64,
    #[serde(default)]
    pub sale_price: Option<u64>,

    pub release_date: DateTime<Utc>,
    pub num_of_colors: u32,
}

impl Listing {
    /// Path of the detail page this listing's card links to.
    pub fn href(&self) -> String {
        format!("/shoe/{}", self.slug)
    }

    /// Sale price must undercut the base price. Not enforced, only reported.
    pub fn has_sane_sale_price(&self) -> bool {
        self.sale_price.map_or(true, |sale| sale < self.price)
    }
}
