//! # 서비스 계층
//!
//! 라우트 핸들러와 화면 쪽 코드가 호출하는 비즈니스 로직입니다.
//! - `latency`: 네트워크 지연을 흉내 내는 주입 가능한 지연 전략
//! - `api`: 원격 백엔드 대역(Mock API): 로그인, 타임시트 CRUD
//! - `session`: 로그인 세션 상태 머신과 세션 저장소

pub mod api;
pub mod latency;
pub mod session;

pub use api::*;
pub use latency::*;
pub use session::*;
