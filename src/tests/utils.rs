use crate::catalog::Catalog;
use crate::domain::Listing;
use astra::{Body, Request, Response};
use chrono::{DateTime, Duration, TimeZone, Utc};
use http::Method;
use std::io::Read;

/// Fixed clock so recency checks are stable.
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

/// The "Air Zoom" listing used across scenarios.
pub fn air_zoom(sale_price: Option<u64>, age_days: i64) -> Listing {
    Listing {
        slug: "abc".into(),
        name: "Air Zoom".into(),
        image_src: "x.png".into(),
        price: 9000,
        sale_price,
        release_date: test_now() - Duration::days(age_days),
        num_of_colors: 2,
    }
}

/// One listing of each variant.
pub fn test_catalog() -> Catalog {
    let mut on_sale = air_zoom(Some(7200), 31);
    on_sale.slug = "pegasus".into();
    on_sale.name = "Pegasus".into();

    let mut fresh = air_zoom(None, 5);
    fresh.slug = "vaporfly".into();
    fresh.name = "Vaporfly".into();
    fresh.num_of_colors = 1;

    Catalog::new(vec![air_zoom(None, 31), on_sale, fresh]).unwrap()
}

pub fn request(method: Method, path: &str) -> Request {
    http::Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

pub fn read_body(mut resp: Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}
