//! Generation request/response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wizard::{Channel, SimulationData, WizardState};

/// Body of a generate-message call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateMessageRequest {
    pub user_id: String,
    pub channel: Channel,
    pub intention: Option<String>,
    pub has_brand: bool,
    pub target_brand: Option<String>,
    pub beauty_profile: SimulationData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_prompt: Option<String>,
}

impl GenerateMessageRequest {
    /// Builds the request from a wizard snapshot.
    ///
    /// The selected persona id doubles as the user id. Returns `None` when no
    /// persona or no channel is selected. An empty target brand is sent as
    /// `null`.
    pub fn from_state(state: &WizardState) -> Option<Self> {
        let user_id = state.selected_persona_id.clone()?;
        let channel = state.selected_channel?;

        Some(Self {
            user_id,
            channel,
            intention: state.intention.clone(),
            has_brand: state.is_brand_targeting,
            target_brand: Some(state.target_brand.clone()).filter(|b| !b.is_empty()),
            beauty_profile: state.simulation_data.clone(),
            user_prompt: None,
        })
    }
}

/// Result of a generate-message call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateMessageResponse {
    pub content: String,
    pub channel: String,
    pub user_id: String,
    pub generated_at: DateTime<Utc>,
    #[serde(default)]
    pub compliance_log: Vec<String>,
}
