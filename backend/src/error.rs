//! # 에러 처리 모듈
//!
//! Mock API와 HTTP 라우트가 공유하는 에러 타입을 정의합니다.
//! 모든 에러는 HTTP 상태 코드와 사람이 읽을 메시지를 함께 가집니다.
//!
//! 이 모듈의 핵심:
//! - `ApiError` 열거형: 잘못된 자격증명, 미인증, 없음, 잘못된 요청, 그 외 실패
//! - `IntoResponse` 구현: 에러를 `{ "success": false, "message": ... }` 응답으로 변환
//! - `From<JsonRejection>`: JSON 본문 파싱 실패를 `MalformedRequest`로 통일

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// 이 크레이트의 공통 Result 별칭
pub type AppResult<T> = Result<T, ApiError>;

/// Mock API 호출과 HTTP 핸들러에서 발생할 수 있는 모든 에러 종류
///
/// 재시도 가능 여부는 타입으로 구분하지 않습니다.
/// 호출하는 쪽은 `status()`와 메시지만 보고 처리합니다.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 데모 계정이 아닌 이메일/비밀번호 (HTTP 401)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Bearer 헤더가 없거나 로그인 세션이 없음 (HTTP 401)
    #[error("Unauthorized")]
    Unauthorized,

    /// 요청한 타임시트가 컬렉션에 없음 (HTTP 404)
    #[error("Timesheet not found")]
    NotFound,

    /// 본문을 해석할 수 없거나 값이 허용 범위를 벗어남 (HTTP 500)
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// 그 밖의 모든 실패 (HTTP 500)
    #[error("Internal server error: {0}")]
    Unknown(String),
}

impl ApiError {
    /// HTTP 형태의 숫자 상태 코드
    pub fn status(&self) -> u16 {
        self.status_code().as_u16()
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidCredentials | ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MalformedRequest(_) | ApiError::Unknown(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    /// 실패 봉투(envelope)로 변환합니다.
    ///
    /// `Unknown`의 내부 내용은 로그에만 남기고 클라이언트에는 일반 메시지만 보냅니다.
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            ApiError::Unknown(ref detail) => {
                tracing::error!("Internal error: {}", detail);
                "Internal server error".to_string()
            }
            ApiError::MalformedRequest(ref detail) => {
                tracing::warn!("Malformed request: {}", detail);
                self.to_string()
            }
            _ => self.to_string(),
        };

        let body = Json(json!({
            "success": false,
            "message": message
        }));

        (status, body).into_response()
    }
}

// axum의 Json 추출기가 실패하면 기본적으로 400/415/422를 돌려주지만,
// 이 API는 잘못된 본문을 500으로 응답합니다.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedRequest(rejection.body_text())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(e: std::io::Error) -> Self {
        ApiError::Unknown(e.to_string())
    }
}
