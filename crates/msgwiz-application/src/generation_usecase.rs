//! Message generation use case.
//!
//! Drives one generation: claim the in-flight slot, push the configured beauty
//! profile to the customer service, request the message, store the result
//! and release the slot. The store lock is only held for the two short state
//! updates, never while a collaborator is awaited.

use std::sync::Arc;

use tracing::Instrument;
use uuid::Uuid;

use msgwiz_core::customer::CustomerService;
use msgwiz_core::error::{Result, WizardError};
use msgwiz_core::generation::{GenerateMessageRequest, GenerationBackend};
use msgwiz_core::wizard::SharedWizardStore;

use crate::notifier::Notifier;

/// Text of the single user-facing failure alert.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Something went wrong while generating.\n(profile sync failed or API connection problem)";

/// Why a generation request was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoPersona,
    NoChannel,
    InFlight,
}

/// Branch taken by [`GenerateMessageUseCase::generate`].
#[derive(Debug, Clone)]
pub enum GenerationOutcome {
    /// Preconditions not met; nothing was called and nothing changed.
    Skipped(SkipReason),
    /// The generated content, also stored as `generated_result`.
    Completed(String),
    /// Sync or generation failed; the user has been alerted.
    Failed(WizardError),
}

impl GenerationOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, GenerationOutcome::Completed(_))
    }
}

pub struct GenerateMessageUseCase {
    store: SharedWizardStore,
    backend: Arc<dyn GenerationBackend>,
    customers: Arc<dyn CustomerService>,
    notifier: Arc<dyn Notifier>,
}

impl GenerateMessageUseCase {
    pub fn new(
        store: SharedWizardStore,
        backend: Arc<dyn GenerationBackend>,
        customers: Arc<dyn CustomerService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            backend,
            customers,
            notifier,
        }
    }

    /// Runs one generation for the current wizard state.
    pub async fn generate(&self) -> GenerationOutcome {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("generate_message", %request_id, backend = self.backend.name());
        self.run().instrument(span).await
    }

    async fn run(&self) -> GenerationOutcome {
        let request = match self.claim().await {
            Ok(request) => request,
            Err(reason) => {
                tracing::debug!(?reason, "[GenerateMessage] skipped");
                return GenerationOutcome::Skipped(reason);
            }
        };

        tracing::info!(
            user_id = %request.user_id,
            channel = %request.channel,
            "[GenerateMessage] started"
        );

        match self.call_collaborators(&request).await {
            Ok(content) => {
                self.store
                    .write()
                    .await
                    .finish_generation(Some(content.clone()));
                tracing::info!("[GenerateMessage] completed");
                GenerationOutcome::Completed(content)
            }
            Err(err) => {
                tracing::error!(error = %err, "[GenerateMessage] failed");
                self.notifier.alert(GENERATION_FAILED_MESSAGE).await;
                self.store.write().await.finish_generation(None);
                GenerationOutcome::Failed(err)
            }
        }
    }

    /// Checks the guard and claims the in-flight slot under one write lock.
    async fn claim(&self) -> std::result::Result<GenerateMessageRequest, SkipReason> {
        let mut store = self.store.write().await;
        let state = store.state();
        if state.selected_persona_id.is_none() {
            return Err(SkipReason::NoPersona);
        }
        if state.selected_channel.is_none() {
            return Err(SkipReason::NoChannel);
        }
        let request = GenerateMessageRequest::from_state(state).ok_or(SkipReason::NoPersona)?;
        if !store.begin_generation() {
            return Err(SkipReason::InFlight);
        }
        Ok(request)
    }

    async fn call_collaborators(&self, request: &GenerateMessageRequest) -> Result<String> {
        self.customers
            .update_customer_profile(&request.user_id, &request.beauty_profile)
            .await?;
        tracing::debug!("[GenerateMessage] profile synced");

        let response = self.backend.generate_message(request).await?;
        if !response.compliance_log.is_empty() {
            tracing::debug!(compliance_log = ?response.compliance_log, "[GenerateMessage] compliance");
        }
        Ok(response.content)
    }
}
