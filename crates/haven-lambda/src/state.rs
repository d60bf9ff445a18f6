use std::sync::Arc;

use haven_auth::jwt::TokenVerifier;
use haven_bedrock::interpret::Interpreter;
use haven_storage::store::WellnessStore;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn WellnessStore>,
    pub interpreter: Arc<Interpreter>,
    pub verifier: Arc<TokenVerifier>,
    /// Conditional profile writes attempted before giving up with 409.
    pub profile_update_attempts: u32,
}
