// src/tests/router_tests/card_tests.rs

use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{read_body, request, test_catalog, test_now};
use http::Method;

#[test]
fn card_fragment_has_no_layout() {
    let catalog = test_catalog();

    let resp = handle(&request(Method::GET, "/cards/pegasus"), &catalog, test_now()).unwrap();
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.starts_with(r#"<a class="shoe-card" href="/shoe/pegasus">"#));
    assert!(!body.contains("<html"));
    assert!(body.contains("$72.00"));
}

#[test]
fn unknown_slug_renders_404_page() {
    let catalog = test_catalog();

    let Err(err) = handle(&request(Method::GET, "/cards/missing"), &catalog, test_now()) else {
        panic!("unknown slug should not render");
    };
    assert!(matches!(err, ServerError::NotFound));

    let resp = error_to_response(err);
    assert_eq!(resp.status(), 404);
    assert!(read_body(resp).contains("Error 404"));
}

#[test]
fn malformed_slug_is_bad_request() {
    let catalog = test_catalog();

    for path in ["/cards/", "/cards/a/b"] {
        let Err(err) = handle(&request(Method::GET, path), &catalog, test_now()) else {
            panic!("{path} should not render");
        };
        assert!(matches!(err, ServerError::BadRequest(_)), "{path}");

        let resp = error_to_response(err);
        assert_eq!(resp.status(), 400);
    }
}
