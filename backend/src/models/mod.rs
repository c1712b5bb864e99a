//! # 데이터 모델 모듈
//!
//! API 계층과 세션 저장소가 주고받는 데이터 구조체들을 정의합니다.
//! - `user`: 사용자, 로그인 자격증명, 로그인 응답
//! - `timesheet`: 주 단위 타임시트와 생성/수정 요청
//! - `response`: 성공 응답 봉투
//! - `daily_task`: 상세 화면의 요일별 작업 목록 (저장되지 않는 화면 상태)
//!
//! `crate::models::user::User` 대신 `crate::models::User`로 접근할 수 있도록
//! 하위 모듈의 항목을 재공개합니다.

use std::collections::BTreeMap;

pub mod daily_task;
pub mod response;
pub mod timesheet;
pub mod user;

pub use daily_task::*;
pub use response::*;
pub use timesheet::*;
pub use user::*;

/// 폼 검증 결과: 필드 이름 → 사용자에게 보여줄 메시지
pub type FieldErrors = BTreeMap<&'static str, &'static str>;
