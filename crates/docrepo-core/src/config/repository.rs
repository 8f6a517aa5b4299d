//! Repository configuration.

use serde::{Deserialize, Serialize};

/// Default number of entities returned per page.
pub const DEFAULT_PAGE_SIZE: u64 = 50;

/// Settings shared by every store-backed repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Fixed page size used by `find_many` and `paginate`.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}
