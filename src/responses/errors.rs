use crate::errors::ServerError;
use crate::responses::html::html_with_status;
use crate::templates::error_page;
use astra::{Body, Response};
use log::error;

pub use crate::errors::ResultResp;

/// Convert a ServerError into a proper HTML response
pub fn error_to_response(err: ServerError) -> Response {
    let (status, message) = match &err {
        ServerError::NotFound => (404, "Not Found".to_string()),
        ServerError::BadRequest(msg) => (400, msg.clone()),
        ServerError::InternalError => (500, "Internal Server Error".to_string()),
    };

    html_with_status(status, error_page(status, &message)).unwrap_or_else(|e| {
        error!("failed to build error page for {err}: {e}");
        Response::new(Body::from("Internal Server Error"))
    })
}
