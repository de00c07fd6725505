//! CustomerProfile domain model.

use serde::{Deserialize, Serialize};

/// A stored customer whose beauty profile can seed the wizard.
///
/// Owned by an external customer service. Every profile field may be absent;
/// absent fields fall back to the simulation defaults when seeding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_type: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_concerns: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

impl CustomerProfile {
    /// Creates a customer with no profile fields set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            skin_type: None,
            skin_concerns: None,
            preferred_tone: None,
            keywords: None,
        }
    }

    pub fn with_skin_type(mut self, values: Vec<String>) -> Self {
        self.skin_type = Some(values);
        self
    }

    pub fn with_skin_concerns(mut self, values: Vec<String>) -> Self {
        self.skin_concerns = Some(values);
        self
    }

    pub fn with_preferred_tone(mut self, tone: impl Into<String>) -> Self {
        self.preferred_tone = Some(tone.into());
        self
    }

    pub fn with_keywords(mut self, values: Vec<String>) -> Self {
        self.keywords = Some(values);
        self
    }
}
