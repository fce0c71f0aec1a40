use crate::catalog::Catalog;
use crate::config::Config;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use chrono::Utc;
use log::{error, info, warn};
use std::sync::Arc;

mod catalog;
mod config;
mod domain;
mod errors;
mod formatting;
mod responses;
mod router;
mod templates;


fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1️⃣ Read configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Load the catalog once, shared read-only by every worker
    let catalog = match Catalog::load(&config.catalog_path) {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            error!(
                "Loading catalog from {} failed: {e}",
                config.catalog_path.display()
            );
            std::process::exit(1);
        }
    };
    if catalog.is_empty() {
        warn!("Catalog {} has no listings", config.catalog_path.display());
    }
    info!(
        "Loaded {} listings from {}",
        catalog.len(),
        config.catalog_path.display()
    );

    // 3️⃣ Start the server
    info!("Starting server at http://{}", config.addr);
    let server = Server::bind(&config.addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(&req, &catalog, Utc::now()) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
