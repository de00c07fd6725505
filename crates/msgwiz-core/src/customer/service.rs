//! Customer service trait.

use super::model::CustomerProfile;
use crate::error::Result;
use crate::wizard::SimulationData;

/// External collaborator that owns customer records.
///
/// The wizard only lists customers and pushes the beauty profile being
/// configured before each generation request. No response payload of the
/// profile update is consumed.
#[async_trait::async_trait]
pub trait CustomerService: Send + Sync {
    /// Returns every customer that can be picked in the wizard.
    async fn list_customers(&self) -> Result<Vec<CustomerProfile>>;

    /// Stores `profile` as the beauty profile of `customer_id`.
    ///
    /// # Arguments
    ///
    /// * `customer_id` - Persona or customer id the profile belongs to
    /// * `profile` - The simulation data currently configured in the wizard
    async fn update_customer_profile(
        &self,
        customer_id: &str,
        profile: &SimulationData,
    ) -> Result<()>;
}
