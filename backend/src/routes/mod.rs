//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 Mock API 호출로 연결하는 핸들러와 라우터 조립 함수입니다.
//!
//! 각 하위 모듈:
//! - `auth`: 로그인, 로그아웃
//! - `timesheets`: 타임시트 CRUD와 공유 상태(`AppState`)
//! - `health`: 서버 상태 확인

pub mod auth;
pub mod health;
pub mod timesheets;

pub use health::*;
pub use timesheets::*;

use std::path::Path;

use axum::{
    extract::FromRequest,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::error::ApiError;

/// `axum::Json`과 같지만 거부(rejection)를 `ApiError::MalformedRequest`로 바꿉니다.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `/api` 아래에 붙는 라우트들
pub fn api_router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout));

    Router::new()
        .merge(auth_routes)
        .route("/timesheets", get(list_timesheets).post(create_timesheet))
        .route(
            "/timesheets/{id}",
            get(get_timesheet)
                .patch(update_timesheet)
                .delete(delete_timesheet),
        )
        .route("/health", get(health_check))
        .with_state(state)
}

/// 전체 애플리케이션 라우터.
///
/// `static_dir`가 주어지면 API에 매칭되지 않는 경로는 프론트엔드 빌드로 넘기고,
/// 없는 파일은 `index.html`로 돌려보냅니다(SPA 라우팅).
pub fn app(state: AppState, static_dir: Option<&Path>) -> Router {
    let router = Router::new().nest("/api", api_router(state));

    let router = match static_dir {
        Some(dir) => {
            let serve_dir = ServeDir::new(dir).not_found_service(ServeFile::new(dir.join("index.html")));
            router.fallback_service(serve_dir)
        }
        None => router,
    };

    // 개발용 설정: 모든 출처/메서드/헤더 허용
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router.layer(cors).layer(TraceLayer::new_for_http())
}
