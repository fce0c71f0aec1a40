// src/tests/router_tests/home_tests.rs

use crate::catalog::Catalog;
use crate::router::handle;
use crate::tests::utils::{read_body, request, test_catalog, test_now};
use http::Method;

#[test]
fn home_lists_every_card() {
    let catalog = test_catalog();

    let resp = handle(&request(Method::GET, "/"), &catalog, test_now()).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["Content-Type"],
        "text/html; charset=utf-8"
    );

    let body = read_body(resp);
    assert!(body.starts_with("<!DOCTYPE html>"));
    for name in ["Air Zoom", "Pegasus", "Vaporfly"] {
        assert!(body.contains(name), "home page is missing {name}");
    }
    assert!(body.contains(r#"href="/shoe/pegasus""#));
    assert_eq!(body.matches(r#"<a class="shoe-card""#).count(), 3);
    assert!(body.contains(">Sale<"));
    assert!(body.contains(">Just released!<"));
}

#[test]
fn home_with_empty_catalog_says_so() {
    let catalog = Catalog::default();

    let resp = handle(&request(Method::GET, "/"), &catalog, test_now()).unwrap();
    let body = read_body(resp);

    assert!(body.contains("No shoes in the catalog yet."));
    assert!(!body.contains("shoe-grid\""));
}

#[test]
fn unknown_path_is_not_found() {
    let catalog = test_catalog();
    let result = handle(&request(Method::GET, "/nope"), &catalog, test_now());
    assert!(matches!(result, Err(crate::errors::ServerError::NotFound)));
}

#[test]
fn post_is_not_routed() {
    let catalog = test_catalog();
    let result = handle(&request(Method::POST, "/"), &catalog, test_now());
    assert!(matches!(result, Err(crate::errors::ServerError::NotFound)));
}
