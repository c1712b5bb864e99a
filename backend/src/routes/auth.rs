use crate::{
    error::AppResult,
    models::*,
    routes::{timesheets::AppState, ApiJson},
};
use axum::{extract::State, Json};

/// `POST /api/auth/login`: 데모 계정만 성공합니다. 그 외에는 401.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(credentials): ApiJson<LoginCredentials>,
) -> AppResult<Json<ApiResponse<AuthResponse>>> {
    let response = state.api.login(&credentials).await?;
    Ok(Json(response))
}

/// `POST /api/auth/logout`: 서버에 세션 상태가 없으므로 항상 성공합니다.
pub async fn logout(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Message>>> {
    Ok(Json(state.api.logout().await?))
}
