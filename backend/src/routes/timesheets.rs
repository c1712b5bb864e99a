//! # 타임시트 라우트 핸들러
//!
//! Mock API의 타임시트 CRUD를 HTTP로 노출합니다.
//!
//! ## 엔드포인트
//! | 메서드 | 경로 | 인증 | 핸들러 |
//! |--------|------|------|--------|
//! | GET    | /api/timesheets      | Bearer 헤더 | `list_timesheets` |
//! | POST   | /api/timesheets      | 없음        | `create_timesheet` |
//! | GET    | /api/timesheets/{id} | Bearer 헤더 | `get_timesheet` |
//! | PATCH  | /api/timesheets/{id} | Bearer 헤더 | `update_timesheet` |
//! | DELETE | /api/timesheets/{id} | Bearer 헤더 | `delete_timesheet` |
//!
//! 모든 성공 응답은 `{ success: true, message, data }` 봉투입니다.
//! 실패는 `ApiError` / `AuthError`가 `{ success: false, message }`로 바꿉니다.

use crate::{
    error::AppResult,
    middleware::auth::BearerToken,
    models::*,
    routes::ApiJson,
    services::MockApi,
};
use axum::{
    extract::{Path, State},
    Json,
};

/// 애플리케이션 공유 상태
///
/// 모든 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// `MockApi`는 내부적으로 `Arc`로 저장소를 공유하므로 clone해도 컬렉션은 하나입니다.
#[derive(Clone)]
pub struct AppState {
    pub api: MockApi,
}

/// `GET /api/timesheets`: 전체 목록. 헤더만 있으면 토큰 내용은 보지 않습니다.
pub async fn list_timesheets(
    State(state): State<AppState>,
    _token: BearerToken,
) -> AppResult<Json<ApiResponse<Vec<TimesheetEntry>>>> {
    Ok(Json(state.api.get_timesheets().await?))
}

/// `POST /api/timesheets`: 새 엔트리 생성. 상태는 항상 `incomplete`로 시작합니다.
///
/// 본문을 해석할 수 없으면 `ApiJson`이 500 `MalformedRequest`로 거부합니다.
pub async fn create_timesheet(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateTimesheetEntry>,
) -> AppResult<Json<ApiResponse<TimesheetEntry>>> {
    Ok(Json(state.api.create_timesheet(req).await?))
}

pub async fn get_timesheet(
    State(state): State<AppState>,
    _token: BearerToken,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<TimesheetEntry>>> {
    Ok(Json(state.api.get_timesheet(&id).await?))
}

/// `PATCH /api/timesheets/{id}`: 본문에 있는 필드만 바꾸고 `updatedAt`을 갱신합니다.
pub async fn update_timesheet(
    State(state): State<AppState>,
    _token: BearerToken,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<UpdateTimesheetEntry>,
) -> AppResult<Json<ApiResponse<TimesheetEntry>>> {
    Ok(Json(state.api.update_timesheet(&id, patch).await?))
}

pub async fn delete_timesheet(
    State(state): State<AppState>,
    _token: BearerToken,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Message>>> {
    Ok(Json(state.api.delete_timesheet(&id).await?))
}
