//! Message generation contract.
//!
//! - `model`: request/response wire types
//! - `backend`: the `GenerationBackend` capability

mod backend;
mod model;

pub use backend::GenerationBackend;
pub use model::{GenerateMessageRequest, GenerateMessageResponse};
