// src/catalog.rs

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::warn;
use thiserror::Error;

use crate::domain::Listing;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate slug in catalog: {0}")]
    DuplicateSlug(String),
}

/// Listings loaded once at startup and shared read-only by every worker.
#[derive(Debug, Default)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    pub fn new(listings: Vec<Listing>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for listing in &listings {
            if !seen.insert(listing.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(listing.slug.clone()));
            }
            if !listing.has_sane_sale_price() {
                warn!(
                    "listing {} has sale price {:?} not below price {}",
                    listing.slug, listing.sale_price, listing.price
                );
            }
        }
        Ok(Self { listings })
    }

    /// Load a JSON array of listings from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let listings: Vec<Listing> = serde_json::from_str(raw)?;
        Self::new(listings)
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn find(&self, slug: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.slug == slug)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
