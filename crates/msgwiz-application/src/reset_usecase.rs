//! Confirmed wizard reset.

use msgwiz_core::wizard::SharedWizardStore;

use crate::notifier::Notifier;

pub const RESET_CONFIRM_MESSAGE: &str = "Reset every setting?";

/// Asks for confirmation, then resets the store. Returns whether it reset.
pub async fn confirm_and_reset(store: &SharedWizardStore, notifier: &dyn Notifier) -> bool {
    if !notifier.confirm(RESET_CONFIRM_MESSAGE).await {
        tracing::debug!("[Reset] declined");
        return false;
    }
    store.write().await.reset_all();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifier::TracingNotifier;
    use msgwiz_core::persona::get_default_catalog;
    use msgwiz_core::wizard::WizardStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_reset_requires_confirmation() {
        let store = WizardStore::shared(Arc::new(get_default_catalog()));
        store.write().await.set_intention(Some("Spring Sale".to_string()));

        assert!(!confirm_and_reset(&store, &TracingNotifier::new(false)).await);
        assert!(store.read().await.state().intention.is_some());

        assert!(confirm_and_reset(&store, &TracingNotifier::new(true)).await);
        assert!(store.read().await.state().intention.is_none());
    }
}
