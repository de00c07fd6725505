//! Catalog repositories.
//!
//! `TomlCatalogRepository` reads a user-supplied catalog file;
//! `PresetCatalogRepository` serves the built-in catalog.

use std::path::PathBuf;

use msgwiz_core::error::Result;
use msgwiz_core::persona::{CatalogRepository, PersonaCatalog, get_default_catalog};

/// Loads a `PersonaCatalog` from a TOML file.
///
/// File layout:
///
/// ```toml
/// [[persona]]
/// id = "glow_hunter"
/// name = "Glow Hunter"
/// description = "..."
/// tone = "Playful"
///
/// [options]
/// tones = [{ id = "Neutral", label = "Neutral" }]
///
/// [persona_options.glow_hunter]
/// tones = ["Neutral"]
/// ```
pub struct TomlCatalogRepository {
    path: PathBuf,
}

impl TomlCatalogRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait::async_trait]
impl CatalogRepository for TomlCatalogRepository {
    async fn load(&self) -> Result<PersonaCatalog> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let catalog: PersonaCatalog = toml::from_str(&content)?;

        // Allow-lists pointing at unknown personas are kept but worth knowing about
        for persona_id in catalog.persona_options.keys() {
            if catalog.persona(persona_id).is_none() {
                tracing::warn!(
                    persona_id = %persona_id,
                    "[TomlCatalogRepository] option set registered for unknown persona"
                );
            }
        }

        tracing::info!(
            path = %self.path.display(),
            personas = catalog.personas.len(),
            "[TomlCatalogRepository] catalog loaded"
        );
        Ok(catalog)
    }
}

/// Serves the catalog compiled into the binary.
#[derive(Default)]
pub struct PresetCatalogRepository;

#[async_trait::async_trait]
impl CatalogRepository for PresetCatalogRepository {
    async fn load(&self) -> Result<PersonaCatalog> {
        Ok(get_default_catalog())
    }
}
