//! Core relationship model for Masthead.
//! This crate is the single source of truth for author/magazine/article
//! invariants.

pub mod catalog;
pub mod logging;
pub mod model;
pub mod shared;

pub use catalog::views::{AuthorView, MagazineView, CONTRIBUTING_AUTHOR_THRESHOLD};
pub use catalog::{Catalog, CatalogResult};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig};
pub use model::article::Article;
pub use model::author::Author;
pub use model::ids::{ArticleId, AuthorId, MagazineId};
pub use model::magazine::Magazine;
pub use model::validation::ValidationError;
pub use shared::{global_catalog, reset_global_catalog, SharedCatalog};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
