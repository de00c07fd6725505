//! Wizard state aggregate.

use serde::Serialize;

use super::channel::Channel;
use super::simulation::SimulationData;
use crate::customer::CustomerProfile;
use crate::persona::{Persona, PersonaCatalog, PersonaOptionSet};

/// Every selection the wizard tracks.
///
/// Created once per session by [`super::WizardStore`] and only ever replaced
/// field by field; `reset_all` restores [`WizardState::initial`] except for
/// the persona list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardState {
    pub personas: Vec<Persona>,
    pub selected_persona_id: Option<String>,
    pub simulation_data: SimulationData,
    pub intention: Option<String>,
    pub is_brand_targeting: bool,
    pub target_brand: String,
    pub selected_channel: Option<Channel>,
    pub is_generating: bool,
    pub generated_result: Option<String>,
    pub active_options: PersonaOptionSet,
    pub customer_list: Vec<CustomerProfile>,
    pub selected_customer: Option<CustomerProfile>,
}

impl WizardState {
    /// The startup state for a catalog: every persona listed, nothing selected,
    /// default simulation data and the default (union) option set.
    pub fn initial(catalog: &PersonaCatalog) -> Self {
        Self {
            personas: catalog.personas.clone(),
            selected_persona_id: None,
            simulation_data: SimulationData::default(),
            intention: None,
            is_brand_targeting: false,
            target_brand: String::new(),
            selected_channel: None,
            is_generating: false,
            generated_result: None,
            active_options: catalog.default_option_set(),
            customer_list: Vec::new(),
            selected_customer: None,
        }
    }

    /// The currently selected persona, if it is in the persona list.
    pub fn selected_persona(&self) -> Option<&Persona> {
        let id = self.selected_persona_id.as_deref()?;
        self.personas.iter().find(|p| p.id == id)
    }
}
