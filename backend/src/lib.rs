//! # 타임시트 백엔드
//!
//! 주 단위 타임시트를 관리하는 Mock 백엔드입니다.
//!
//! - `models`: 사용자, 타임시트, 응답 봉투, 요일별 작업
//! - `db`: 저장소 트레이트와 인메모리 구현
//! - `services`: Mock API 클라이언트, 인위적 지연, 로그인 세션
//! - `routes` / `middleware`: axum HTTP 표면
//! - `config` / `error`: 설정과 에러 타입

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

pub use error::{ApiError, AppResult};
