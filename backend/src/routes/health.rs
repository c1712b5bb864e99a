//! # 헬스체크(Health Check) 핸들러
//!
//! ## 엔드포인트
//! - `GET /api/health` → `{ "status": "ok", "entries": 5, "latencyMs": 500 }`
//!
//! 인위적 지연을 거치지 않고 저장소를 직접 세므로 항상 즉시 응답합니다.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::{error::AppResult, routes::timesheets::AppState};

/// `GET /api/health`: 서버 상태와 현재 컬렉션 크기를 확인합니다.
pub async fn health_check(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let entries = state.api.entry_count()?;
    Ok(Json(json!({
        "status": "ok",
        "entries": entries,
        "latencyMs": state.api.latency().duration().as_millis() as u64,
    })))
}
