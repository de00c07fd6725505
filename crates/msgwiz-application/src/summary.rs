//! Sticky summary panel view model.

use serde::Serialize;

use msgwiz_core::wizard::{WizardProgress, WizardState};

pub const PERSONA_PLACEHOLDER: &str = "Select Persona";
pub const INTENTION_PLACEHOLDER: &str = "-";
pub const CHANNEL_PLACEHOLDER: &str = "Not Selected";

/// Generated message as shown on the result card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultCard {
    pub channel: String,
    pub content: String,
}

/// Everything the summary panel renders, derived from one state snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardSummary {
    pub persona: String,
    pub intention: String,
    /// Present only when brand targeting is on and a brand is entered.
    pub brand: Option<String>,
    pub channel: String,
    pub progress: WizardProgress,
    pub is_generating: bool,
    pub can_generate: bool,
    pub result: Option<ResultCard>,
}

impl WizardSummary {
    pub fn from_state(state: &WizardState) -> Self {
        let persona = match (&state.selected_persona_id, state.selected_persona()) {
            (_, Some(persona)) => persona.name.clone(),
            (Some(id), None) => id.clone(),
            (None, None) => PERSONA_PLACEHOLDER.to_string(),
        };
        let intention = state
            .intention
            .as_deref()
            .filter(|i| !i.is_empty())
            .unwrap_or(INTENTION_PLACEHOLDER)
            .to_string();
        let brand = (state.is_brand_targeting && !state.target_brand.is_empty())
            .then(|| state.target_brand.clone());
        let channel = state
            .selected_channel
            .map(|c| c.label().to_string())
            .unwrap_or_else(|| CHANNEL_PLACEHOLDER.to_string());

        let progress = WizardProgress::from_state(state);
        let can_generate = progress.is_ready() && !state.is_generating;

        let result = match (&state.generated_result, state.selected_channel) {
            (Some(content), Some(channel)) => Some(ResultCard {
                channel: channel.label().to_string(),
                content: content.clone(),
            }),
            _ => None,
        };

        Self {
            persona,
            intention,
            brand,
            channel,
            progress,
            is_generating: state.is_generating,
            can_generate,
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use msgwiz_core::persona::get_default_catalog;
    use msgwiz_core::wizard::Channel;

    fn initial() -> WizardState {
        WizardState::initial(&get_default_catalog())
    }

    #[test]
    fn test_placeholders() {
        let summary = WizardSummary::from_state(&initial());
        assert_eq!(summary.persona, "Select Persona");
        assert_eq!(summary.intention, "-");
        assert_eq!(summary.channel, "Not Selected");
        assert!(summary.brand.is_none());
        assert!(summary.result.is_none());
        assert!(!summary.can_generate);
        assert_eq!(summary.progress.percent, 0);
    }

    #[test]
    fn test_brand_line_needs_targeting_and_name() {
        let mut state = initial();
        state.target_brand = "Aurora".to_string();
        assert!(WizardSummary::from_state(&state).brand.is_none());

        state.is_brand_targeting = true;
        assert_eq!(WizardSummary::from_state(&state).brand.as_deref(), Some("Aurora"));

        state.target_brand.clear();
        assert!(WizardSummary::from_state(&state).brand.is_none());
    }

    #[test]
    fn test_can_generate() {
        let mut state = initial();
        state.selected_persona_id = Some("glow_hunter".to_string());
        state.selected_channel = Some(Channel::Email);
        assert!(!WizardSummary::from_state(&state).can_generate);

        state.intention = Some(String::new());
        let summary = WizardSummary::from_state(&state);
        assert!(summary.can_generate);
        assert_eq!(summary.persona, "Glow Hunter");
        assert_eq!(summary.intention, "-");

        state.is_generating = true;
        assert!(!WizardSummary::from_state(&state).can_generate);
    }

    #[test]
    fn test_result_card_needs_channel() {
        let mut state = initial();
        state.generated_result = Some("hello".to_string());
        assert!(WizardSummary::from_state(&state).result.is_none());

        state.selected_channel = Some(Channel::Sms);
        let card = WizardSummary::from_state(&state).result.unwrap();
        assert_eq!(card.content, "hello");
        assert_eq!(card.channel, "SMS");
    }
}
