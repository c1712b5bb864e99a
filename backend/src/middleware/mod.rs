//! # 미들웨어 / 요청 추출기
//!
//! - `auth`: `Authorization: Bearer ...` 헤더 존재 여부만 확인하는 추출기

pub mod auth;
