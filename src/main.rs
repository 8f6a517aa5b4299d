//! docrepo entry point.
//!
//! Loads configuration, initialises logging, and verifies that the
//! configured store is reachable and the repositories can be built.

use docrepo::{bootstrap, init_logging, load_configuration};
use docrepo_core::traits::Repository;
use docrepo_core::types::Filter;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);
    tracing::info!("Starting docrepo v{}", env!("CARGO_PKG_VERSION"));

    let repositories = match bootstrap(&config).await {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Bootstrap failed: {}", e);
            std::process::exit(1);
        }
    };

    match repositories.users.count(&Filter::new(), None).await {
        Ok(users) => tracing::info!(users, "Store is ready"),
        Err(e) => {
            tracing::error!("Store check failed: {}", e);
            std::process::exit(1);
        }
    }
}
