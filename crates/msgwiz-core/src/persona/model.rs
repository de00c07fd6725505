//! Persona domain model.
//!
//! Personas are predefined customer archetypes. Each one scopes which beauty
//! attribute options the wizard offers once it is selected.

use serde::{Deserialize, Serialize};

/// A customer archetype from the static persona catalog.
///
/// Personas are loaded once at startup and never mutated afterwards.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    /// Unique identifier (also used as the user id of generation requests)
    pub id: String,
    /// Display name of the persona
    pub name: String,
    /// Short description shown on the persona card
    #[serde(alias = "desc")]
    pub description: String,
    /// Tone label shown under the name
    pub tone: String,
    /// Representative hashtags
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Allow-lists of attribute ids that may be picked while a persona is active.
///
/// Lists keep catalog order so front ends can render them as-is.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct PersonaOptionSet {
    #[serde(default)]
    pub skin_types: Vec<String>,
    #[serde(default)]
    pub concerns: Vec<String>,
    #[serde(default, alias = "tone")]
    pub tones: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl PersonaOptionSet {
    pub fn allows_skin_type(&self, value: &str) -> bool {
        self.skin_types.iter().any(|v| v == value)
    }

    pub fn allows_concern(&self, value: &str) -> bool {
        self.concerns.iter().any(|v| v == value)
    }

    pub fn allows_tone(&self, value: &str) -> bool {
        self.tones.iter().any(|v| v == value)
    }

    pub fn allows_keyword(&self, value: &str) -> bool {
        self.keywords.iter().any(|v| v == value)
    }
}
