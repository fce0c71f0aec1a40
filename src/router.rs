use crate::catalog::Catalog;
use crate::errors::ServerError;
use crate::responses::{html_response, ResultResp};
use crate::templates::{self, ShoeCardVm};
use astra::Request;
use chrono::{DateTime, Utc};
use log::{debug, warn};

pub fn handle(req: &Request, catalog: &Catalog, now: DateTime<Utc>) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    debug!("{method} {path}");

    match (method, path) {
        ("GET", "/") => {
            let cards: Vec<ShoeCardVm> = catalog
                .listings()
                .iter()
                .map(|listing| ShoeCardVm::new(listing, now))
                .collect();
            html_response(templates::pages::home_page(&cards))
        }
        ("GET", _) => match path.strip_prefix("/cards/") {
            Some(slug) => card_fragment(slug, catalog, now),
            None => Err(ServerError::NotFound),
        },
        _ => Err(ServerError::NotFound),
    }
}

/// A single card, without the page layout around it.
fn card_fragment(slug: &str, catalog: &Catalog, now: DateTime<Utc>) -> ResultResp {
    if slug.is_empty() || slug.contains('/') {
        return Err(ServerError::BadRequest(format!("Invalid shoe slug: {slug:?}")));
    }

    let listing = catalog.find(slug).ok_or_else(|| {
        warn!("no listing for slug {slug}");
        ServerError::NotFound
    })?;

    html_response(templates::shoe_card(&ShoeCardVm::new(listing, now)))
}
