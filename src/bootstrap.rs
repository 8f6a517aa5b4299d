//! Process-start construction of the store and repositories.

use docrepo_core::config::AppConfig;
use docrepo_core::error::AppError;
use docrepo_core::result::AppResult;
use docrepo_core::traits::Store;
use docrepo_entity::user::{UserRepository, user_repository};
use docrepo_store::StoreManager;

/// Every repository the application exposes, sharing one store.
#[derive(Debug)]
pub struct Repositories {
    /// The store all repositories read and write through.
    pub store: StoreManager,
    /// Users.
    pub users: UserRepository,
}

/// Load configuration for the environment named by `DOCREPO_ENV`
/// (default `development`).
pub fn load_configuration() -> AppResult<AppConfig> {
    let env = std::env::var("DOCREPO_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Connect the configured store and build every repository over it.
pub async fn bootstrap(config: &AppConfig) -> AppResult<Repositories> {
    tracing::info!(provider = %config.store.provider, "Bootstrapping repositories");

    let store = StoreManager::new(&config.store, &config.database).await?;
    if !store.health_check().await? {
        return Err(AppError::store("Store failed its health check"));
    }

    let users = user_repository(store.store(), &config.repository);

    tracing::info!(page_size = config.repository.page_size, "Repositories ready");
    Ok(Repositories { store, users })
}
