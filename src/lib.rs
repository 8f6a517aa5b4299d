//! # docrepo
//!
//! Validated document repositories. This crate wires configuration,
//! logging, and the configured store into ready-to-use repositories.

pub mod bootstrap;
pub mod logging;

pub use bootstrap::{Repositories, bootstrap, load_configuration};
pub use logging::init_logging;

pub use docrepo_core::{AppError, AppResult};
pub use docrepo_core::config::AppConfig;
