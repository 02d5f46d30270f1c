use crate::constants::ADMIN_PASSWORD_HEADER;
use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use eventdeck_core::AppError;
use std::sync::Arc;
use subtle::ConstantTimeEq;

/// Constant-time string comparison. Lengths are not hidden.
pub fn secure_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Admin gate for mutating routes. Requires the admin secret in `x-admin-password`.
///
/// Only installed when `ADMIN_GATE_ENABLED=true`.
pub async fn admin_gate_middleware(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let verdict = request
        .headers()
        .get(ADMIN_PASSWORD_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|password| secure_compare(password, &state.admin.password));

    match verdict {
        Some(true) => next.run(request).await,
        Some(false) => {
            tracing::warn!(
                method = %request.method(),
                path = %request.uri().path(),
                "Admin gate rejected invalid password"
            );
            HttpAppError(AppError::Unauthorized("Invalid admin password".to_string()))
                .into_response()
        }
        None => HttpAppError(AppError::Unauthorized(format!(
            "Missing {} header",
            ADMIN_PASSWORD_HEADER
        )))
        .into_response(),
    }
}
