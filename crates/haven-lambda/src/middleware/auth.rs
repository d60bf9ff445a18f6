use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use haven_auth::jwt::bearer_token;

use crate::error::ApiError;
use crate::state::AppState;

/// JWT validation middleware.
///
/// Extracts the `Authorization: Bearer <token>` header and verifies it. On
/// success, inserts `AuthUser` into request extensions for handlers to use;
/// anything else is a 401 before the handler runs.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let claims = {
        let token = req
            .headers()
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(bearer_token)
            .ok_or(ApiError::Unauthorized)?;

        state.verifier.verify(token)?
    };

    req.extensions_mut().insert(AuthUser { sub: claims.sub });

    Ok(next.run(req).await)
}

/// Authenticated user extracted from JWT claims. `sub` is the user id.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub sub: String,
}
