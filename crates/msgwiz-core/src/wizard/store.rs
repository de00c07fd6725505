//! The wizard state store.

use std::sync::Arc;

use tokio::sync::watch;

use super::channel::Channel;
use super::model::WizardState;
use super::progress::WizardProgress;
use super::simulation::{SimulationPatch, derive_simulation_data};
use crate::customer::CustomerProfile;
use crate::error::Result;
use crate::persona::{Persona, PersonaCatalog};

/// Single authoritative holder of [`WizardState`].
///
/// The store is owned by whoever composes the application and is passed
/// explicitly (typically as [`SharedWizardStore`]). Every method is one
/// mutation: it updates the state and then publishes exactly one snapshot to
/// subscribers, so composite operations such as [`WizardStore::select_persona`]
/// are never observed half-applied.
pub struct WizardStore {
    catalog: Arc<PersonaCatalog>,
    state: WizardState,
    publisher: watch::Sender<WizardState>,
}

/// The store as shared between a front end and the generation use case.
pub type SharedWizardStore = Arc<tokio::sync::RwLock<WizardStore>>;

impl WizardStore {
    /// Creates a store in its initial state for `catalog`.
    pub fn new(catalog: Arc<PersonaCatalog>) -> Self {
        let state = WizardState::initial(&catalog);
        let (publisher, _) = watch::channel(state.clone());
        Self {
            catalog,
            state,
            publisher,
        }
    }

    /// Convenience for `Arc::new(RwLock::new(WizardStore::new(catalog)))`.
    pub fn shared(catalog: Arc<PersonaCatalog>) -> SharedWizardStore {
        Arc::new(tokio::sync::RwLock::new(Self::new(catalog)))
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn catalog(&self) -> &PersonaCatalog {
        &self.catalog
    }

    /// Receives a snapshot after every mutation.
    pub fn subscribe(&self) -> watch::Receiver<WizardState> {
        self.publisher.subscribe()
    }

    pub fn progress(&self) -> WizardProgress {
        WizardProgress::from_state(&self.state)
    }

    /// Intention, persona and channel are all set.
    pub fn is_ready(&self) -> bool {
        self.progress().is_ready()
    }

    fn publish(&self) {
        self.publisher.send_replace(self.state.clone());
    }

    // ============================================================================
    // Plain setters
    // ============================================================================

    pub fn set_personas(&mut self, personas: Vec<Persona>) {
        self.state.personas = personas;
        self.publish();
    }

    /// Assigns the persona id only; options and simulation data are left as
    /// they are. Use [`WizardStore::select_persona`] for a full selection.
    pub fn set_selected_persona_id(&mut self, id: Option<String>) {
        self.state.selected_persona_id = id;
        self.publish();
    }

    pub fn set_intention(&mut self, intention: Option<String>) {
        self.state.intention = intention;
        self.publish();
    }

    pub fn set_brand_targeting(&mut self, enabled: bool) {
        self.state.is_brand_targeting = enabled;
        self.publish();
    }

    pub fn set_target_brand(&mut self, brand: impl Into<String>) {
        self.state.target_brand = brand.into();
        self.publish();
    }

    pub fn set_selected_channel(&mut self, channel: Option<Channel>) {
        self.state.selected_channel = channel;
        self.publish();
    }

    pub fn set_is_generating(&mut self, generating: bool) {
        self.state.is_generating = generating;
        self.publish();
    }

    pub fn set_generated_result(&mut self, result: Option<String>) {
        self.state.generated_result = result;
        self.publish();
    }

    pub fn set_customer_list(&mut self, customers: Vec<CustomerProfile>) {
        self.state.customer_list = customers;
        self.publish();
    }

    /// Shallow-merges `patch` into the simulation data without checking the
    /// active allow-lists.
    pub fn set_simulation_data(&mut self, patch: SimulationPatch) {
        self.state.simulation_data.apply(patch);
        self.publish();
    }

    /// Like [`WizardStore::set_simulation_data`], but rejects the whole patch
    /// if any value is outside the active option set.
    pub fn apply_simulation_patch_checked(&mut self, patch: SimulationPatch) -> Result<()> {
        patch.check(&self.state.active_options)?;
        self.set_simulation_data(patch);
        Ok(())
    }

    // ============================================================================
    // Composite operations
    // ============================================================================

    /// Selects a persona (or clears the selection with `None`).
    ///
    /// Swaps the active option set, resets the simulation data and re-seeds it
    /// from the selected customer, if any. An empty id clears the selection.
    pub fn select_persona(&mut self, id: Option<&str>) {
        let id = id.filter(|id| !id.is_empty());
        let active_options = self.catalog.option_set_for(id);

        self.state.selected_persona_id = id.map(str::to_string);
        self.state.active_options = active_options;
        self.state.simulation_data = derive_simulation_data(self.state.selected_customer.as_ref());

        tracing::debug!(
            persona_id = ?self.state.selected_persona_id,
            reseeded = self.state.selected_customer.is_some(),
            "[WizardStore] persona selected"
        );
        self.warn_on_disallowed_values();
        self.publish();
    }

    /// Grid click behaviour: clicking the selected persona deselects it.
    pub fn toggle_persona(&mut self, id: &str) {
        if self.state.selected_persona_id.as_deref() == Some(id) {
            self.select_persona(None);
        } else {
            self.select_persona(Some(id));
        }
    }

    /// Selects a customer (or clears the selection with `None`) and derives
    /// the simulation data from its profile.
    pub fn set_selected_customer(&mut self, customer: Option<CustomerProfile>) {
        self.state.simulation_data = derive_simulation_data(customer.as_ref());
        self.state.selected_customer = customer;

        tracing::debug!(
            customer_id = ?self.state.selected_customer.as_ref().map(|c| c.id.as_str()),
            "[WizardStore] customer selected"
        );
        self.warn_on_disallowed_values();
        self.publish();
    }

    /// Claims the generation slot and clears the previous result.
    ///
    /// Returns `false` without touching the state if a generation is already
    /// in flight. Callers hold the write lock, so check and set are atomic.
    pub fn begin_generation(&mut self) -> bool {
        if self.state.is_generating {
            return false;
        }
        self.state.is_generating = true;
        self.state.generated_result = None;
        self.publish();
        true
    }

    /// Releases the generation slot, storing `result` if there is one.
    pub fn finish_generation(&mut self, result: Option<String>) {
        if result.is_some() {
            self.state.generated_result = result;
        }
        self.state.is_generating = false;
        self.publish();
    }

    /// Restores every field to its initial value in one update.
    ///
    /// The persona list is kept; the customer list is cleared.
    pub fn reset_all(&mut self) {
        let personas = std::mem::take(&mut self.state.personas);
        self.state = WizardState {
            personas,
            ..WizardState::initial(&self.catalog)
        };
        tracing::debug!("[WizardStore] reset to defaults");
        self.publish();
    }

    fn warn_on_disallowed_values(&self) {
        let disallowed = self
            .state
            .simulation_data
            .disallowed_values(&self.state.active_options);
        if !disallowed.is_empty() {
            tracing::warn!(
                ?disallowed,
                "[WizardStore] seeded customer values are outside the active option set"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::{CatalogOption, OptionCatalog, PersonaOptionSet};
    use std::collections::BTreeMap;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn catalog() -> Arc<PersonaCatalog> {
        let mut persona_options = BTreeMap::new();
        persona_options.insert(
            "p1".to_string(),
            PersonaOptionSet {
                skin_types: strings(&["Dry"]),
                concerns: strings(&["Acne"]),
                tones: strings(&["Neutral", "Playful"]),
                keywords: strings(&["sale"]),
            },
        );
        let persona = |id: &str| Persona {
            id: id.to_string(),
            name: format!("Persona {id}"),
            description: String::new(),
            tone: "Neutral".to_string(),
            keywords: Vec::new(),
        };
        Arc::new(PersonaCatalog {
            personas: vec![persona("p1"), persona("p2")],
            options: OptionCatalog {
                skin_types: vec![CatalogOption::new("Dry", "Dry"), CatalogOption::new("Oily", "Oily")],
                skin_concerns: vec![CatalogOption::new("Acne", "Acne")],
                tones: vec![
                    CatalogOption::new("Neutral", "Neutral"),
                    CatalogOption::new("Playful", "Playful"),
                    CatalogOption::new("Bold", "Bold"),
                ],
                keywords: vec![CatalogOption::new("sale", "#sale"), CatalogOption::new("gift", "#gift")],
            },
            persona_options,
        })
    }

    fn bold_customer() -> CustomerProfile {
        CustomerProfile::new("c-1", "Yuna")
            .with_skin_type(strings(&["Oily"]))
            .with_preferred_tone("Bold")
    }

    #[test]
    fn test_initial_state() {
        let catalog = catalog();
        let store = WizardStore::new(catalog.clone());
        let state = store.state();
        assert_eq!(state.personas.len(), 2);
        assert!(state.selected_persona_id.is_none());
        assert_eq!(state.simulation_data.preferred_tone, "Neutral");
        assert_eq!(state.active_options, catalog.default_option_set());
        assert!(!state.is_generating);
        assert!(state.generated_result.is_none());
        assert_eq!(state.target_brand, "");
    }

    #[test]
    fn test_select_persona_swaps_active_options() {
        let catalog = catalog();
        let mut store = WizardStore::new(catalog.clone());

        store.select_persona(Some("p1"));
        assert_eq!(store.state().active_options.tones, strings(&["Neutral", "Playful"]));
        assert_eq!(store.state().selected_persona_id.as_deref(), Some("p1"));

        // p2 has no registered restrictions
        store.select_persona(Some("p2"));
        assert_eq!(store.state().active_options, catalog.default_option_set());

        store.select_persona(Some("p1"));
        store.select_persona(None);
        assert!(store.state().selected_persona_id.is_none());
        assert_eq!(store.state().active_options, catalog.default_option_set());
    }

    #[test]
    fn test_select_persona_with_empty_id_clears_selection() {
        let mut store = WizardStore::new(catalog());
        store.select_persona(Some("p1"));
        store.select_persona(Some(""));
        assert!(store.state().selected_persona_id.is_none());
    }

    #[test]
    fn test_select_persona_resets_simulation_data() {
        let mut store = WizardStore::new(catalog());
        store.select_persona(Some("p1"));
        store.set_simulation_data(SimulationPatch::preferred_tone("Playful"));
        store.select_persona(Some("p2"));
        assert_eq!(store.state().simulation_data.preferred_tone, "Neutral");
    }

    #[test]
    fn test_select_persona_reseeds_from_customer() {
        let mut store = WizardStore::new(catalog());
        store.set_selected_customer(Some(bold_customer()));
        store.set_simulation_data(SimulationPatch::preferred_tone("Playful"));

        store.select_persona(Some("p1"));
        let first = store.state().simulation_data.clone();
        store.select_persona(Some("p1"));
        assert_eq!(store.state().simulation_data, first);
        assert_eq!(first.preferred_tone, "Bold");
        assert_eq!(first.skin_type, strings(&["Oily"]));
    }

    #[test]
    fn test_deselect_persona_reseeds_from_customer() {
        let mut store = WizardStore::new(catalog());
        store.select_persona(Some("p1"));
        store.set_selected_customer(Some(bold_customer()));
        store.select_persona(None);
        assert_eq!(store.state().simulation_data.preferred_tone, "Bold");
    }

    #[test]
    fn test_toggle_persona() {
        let mut store = WizardStore::new(catalog());
        store.toggle_persona("p1");
        assert_eq!(store.state().selected_persona_id.as_deref(), Some("p1"));
        store.toggle_persona("p2");
        assert_eq!(store.state().selected_persona_id.as_deref(), Some("p2"));
        store.toggle_persona("p2");
        assert!(store.state().selected_persona_id.is_none());
    }

    #[test]
    fn test_clearing_customer_resets_simulation_data() {
        let mut store = WizardStore::new(catalog());
        store.set_selected_customer(Some(bold_customer()));
        store.set_selected_customer(None);
        assert!(store.state().selected_customer.is_none());
        assert_eq!(store.state().simulation_data.preferred_tone, "Neutral");
        assert!(store.state().simulation_data.skin_type.is_empty());
    }

    #[test]
    fn test_set_selected_persona_id_is_plain_assignment() {
        let catalog = catalog();
        let mut store = WizardStore::new(catalog.clone());
        store.set_simulation_data(SimulationPatch::preferred_tone("Bold"));
        store.set_selected_persona_id(Some("p1".to_string()));
        assert_eq!(store.state().active_options, catalog.default_option_set());
        assert_eq!(store.state().simulation_data.preferred_tone, "Bold");
    }

    #[test]
    fn test_checked_patch_respects_active_options() {
        let mut store = WizardStore::new(catalog());
        store.select_persona(Some("p1"));

        let err = store
            .apply_simulation_patch_checked(SimulationPatch::preferred_tone("Bold"))
            .unwrap_err();
        assert!(err.is_option_not_allowed());
        assert_eq!(store.state().simulation_data.preferred_tone, "Neutral");

        store
            .apply_simulation_patch_checked(SimulationPatch::preferred_tone("Playful"))
            .unwrap();
        assert_eq!(store.state().simulation_data.preferred_tone, "Playful");
    }

    #[test]
    fn test_reset_all_restores_defaults() {
        let catalog = catalog();
        let mut store = WizardStore::new(catalog.clone());
        let initial = store.state().clone();

        store.set_customer_list(vec![bold_customer()]);
        store.set_selected_customer(Some(bold_customer()));
        store.select_persona(Some("p1"));
        store.set_intention(Some("Spring Sale".to_string()));
        store.set_brand_targeting(true);
        store.set_target_brand("Aurora");
        store.set_selected_channel(Some(Channel::Email));
        store.set_is_generating(true);
        store.set_generated_result(Some("hello".to_string()));

        store.reset_all();
        assert_eq!(store.state(), &initial);
    }

    #[test]
    fn test_reset_all_keeps_replaced_persona_list() {
        let mut store = WizardStore::new(catalog());
        store.set_personas(Vec::new());
        store.reset_all();
        assert!(store.state().personas.is_empty());
    }

    #[test]
    fn test_generation_slot() {
        let mut store = WizardStore::new(catalog());
        store.set_generated_result(Some("old".to_string()));

        assert!(store.begin_generation());
        assert!(store.state().is_generating);
        assert!(store.state().generated_result.is_none());
        assert!(!store.begin_generation());

        store.finish_generation(None);
        assert!(!store.state().is_generating);
        assert!(store.state().generated_result.is_none());

        assert!(store.begin_generation());
        store.finish_generation(Some("new".to_string()));
        assert_eq!(store.state().generated_result.as_deref(), Some("new"));
        assert!(!store.state().is_generating);
    }

    #[test]
    fn test_composite_operations_publish_once() {
        let mut store = WizardStore::new(catalog());
        let mut rx = store.subscribe();
        store.set_selected_customer(Some(bold_customer()));
        rx.borrow_and_update();

        store.select_persona(Some("p1"));
        assert!(rx.has_changed().unwrap());
        let seen = rx.borrow_and_update().clone();
        assert_eq!(seen.selected_persona_id.as_deref(), Some("p1"));
        assert_eq!(seen.simulation_data.preferred_tone, "Bold");
        assert!(!rx.has_changed().unwrap());
    }
}
