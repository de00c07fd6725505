//! Simulation data (the beauty profile being configured).

use serde::{Deserialize, Serialize};

use crate::customer::CustomerProfile;
use crate::error::{Result, WizardError};
use crate::persona::PersonaOptionSet;

/// Tone used whenever no tone has been chosen or seeded.
pub const DEFAULT_TONE: &str = "Neutral";

/// Work-in-progress beauty attributes of the message target.
///
/// Field names match the `beauty_profile` object of the generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationData {
    pub skin_type: Vec<String>,
    pub skin_concerns: Vec<String>,
    pub preferred_tone: String,
    pub keywords: Vec<String>,
}

impl Default for SimulationData {
    fn default() -> Self {
        Self {
            skin_type: Vec::new(),
            skin_concerns: Vec::new(),
            preferred_tone: DEFAULT_TONE.to_string(),
            keywords: Vec::new(),
        }
    }
}

impl SimulationData {
    /// Shallow merge: every field present in `patch` replaces the current one.
    pub fn apply(&mut self, patch: SimulationPatch) {
        if let Some(skin_type) = patch.skin_type {
            self.skin_type = skin_type;
        }
        if let Some(skin_concerns) = patch.skin_concerns {
            self.skin_concerns = skin_concerns;
        }
        if let Some(preferred_tone) = patch.preferred_tone {
            self.preferred_tone = preferred_tone;
        }
        if let Some(keywords) = patch.keywords {
            self.keywords = keywords;
        }
    }

    /// Values that fall outside `options`, as `(attribute, value)` pairs.
    pub fn disallowed_values(&self, options: &PersonaOptionSet) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        out.extend(
            self.skin_type
                .iter()
                .filter(|v| !options.allows_skin_type(v))
                .map(|v| ("skin_type", v.clone())),
        );
        out.extend(
            self.skin_concerns
                .iter()
                .filter(|v| !options.allows_concern(v))
                .map(|v| ("skin_concerns", v.clone())),
        );
        if !options.allows_tone(&self.preferred_tone) {
            out.push(("preferred_tone", self.preferred_tone.clone()));
        }
        out.extend(
            self.keywords
                .iter()
                .filter(|v| !options.allows_keyword(v))
                .map(|v| ("keywords", v.clone())),
        );
        out
    }
}

/// Typed partial update of [`SimulationData`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_type: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_concerns: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

impl SimulationPatch {
    pub fn skin_type(values: Vec<String>) -> Self {
        Self {
            skin_type: Some(values),
            ..Self::default()
        }
    }

    pub fn skin_concerns(values: Vec<String>) -> Self {
        Self {
            skin_concerns: Some(values),
            ..Self::default()
        }
    }

    pub fn preferred_tone(tone: impl Into<String>) -> Self {
        Self {
            preferred_tone: Some(tone.into()),
            ..Self::default()
        }
    }

    pub fn keywords(values: Vec<String>) -> Self {
        Self {
            keywords: Some(values),
            ..Self::default()
        }
    }

    /// Fails on the first value that is not in the matching allow-list.
    pub fn check(&self, options: &PersonaOptionSet) -> Result<()> {
        if let Some(bad) = first_disallowed(self.skin_type.as_ref(), |v| options.allows_skin_type(v)) {
            return Err(WizardError::option_not_allowed("skin_type", bad.clone()));
        }
        if let Some(bad) = first_disallowed(self.skin_concerns.as_ref(), |v| options.allows_concern(v)) {
            return Err(WizardError::option_not_allowed("skin_concerns", bad.clone()));
        }
        if let Some(tone) = &self.preferred_tone
            && !options.allows_tone(tone)
        {
            return Err(WizardError::option_not_allowed("preferred_tone", tone.clone()));
        }
        if let Some(bad) = first_disallowed(self.keywords.as_ref(), |v| options.allows_keyword(v)) {
            return Err(WizardError::option_not_allowed("keywords", bad.clone()));
        }
        Ok(())
    }
}

fn first_disallowed<'a>(
    values: Option<&'a Vec<String>>,
    allows: impl Fn(&str) -> bool,
) -> Option<&'a String> {
    values?.iter().find(|v| !allows(v.as_str()))
}

/// Derives fresh simulation data for a (possibly absent) selected customer.
///
/// Always starts from the defaults, so nothing from the previous selection
/// carries over. Seeded customer values are taken verbatim; absent fields
/// fall back to an empty list or [`DEFAULT_TONE`].
pub fn derive_simulation_data(customer: Option<&CustomerProfile>) -> SimulationData {
    let Some(customer) = customer else {
        return SimulationData::default();
    };

    SimulationData {
        skin_type: customer.skin_type.clone().unwrap_or_default(),
        skin_concerns: customer.skin_concerns.clone().unwrap_or_default(),
        preferred_tone: customer
            .preferred_tone
            .clone()
            .unwrap_or_else(|| DEFAULT_TONE.to_string()),
        keywords: customer.keywords.clone().unwrap_or_default(),
    }
}
