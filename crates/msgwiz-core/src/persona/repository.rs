//! Catalog repository trait.

use super::catalog::PersonaCatalog;
use crate::error::Result;

/// Source of the static persona and option catalogs.
///
/// The catalog is read once at startup; implementations may load it from a
/// file, embed it, or fetch it remotely.
#[async_trait::async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Loads the full catalog.
    ///
    /// # Returns
    ///
    /// - `Ok(PersonaCatalog)`: The catalog
    /// - `Err(WizardError)`: Error if the source cannot be read or parsed
    async fn load(&self) -> Result<PersonaCatalog>;
}
