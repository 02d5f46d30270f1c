use crate::auth::secure_compare;
use crate::error::{HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use eventdeck_core::models::{LoginRequest, LoginResponse};
use std::sync::Arc;

/// Check the admin password. Stateless: no session or token is issued.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Password accepted", body = LoginResponse),
        (status = 400, description = "Password missing", body = LoginResponse),
        (status = 401, description = "Wrong password", body = LoginResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "login"))]
pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let password = match request.password.as_deref() {
        Some(password) if !password.is_empty() => password,
        _ => {
            return Ok((
                StatusCode::BAD_REQUEST,
                Json(LoginResponse::rejected("Password is required")),
            ));
        }
    };

    if secure_compare(password, &state.admin.password) {
        tracing::info!("Admin login accepted");
        Ok((StatusCode::OK, Json(LoginResponse::accepted())))
    } else {
        tracing::warn!("Admin login rejected");
        Ok((
            StatusCode::UNAUTHORIZED,
            Json(LoginResponse::rejected("Invalid password")),
        ))
    }
}
