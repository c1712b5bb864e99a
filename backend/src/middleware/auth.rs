use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// `Authorization: Bearer <token>` 헤더에서 꺼낸 토큰.
///
/// 토큰 내용은 검증하지 않습니다. Mock 토큰에는 서명이 없으므로
/// 헤더가 있고 `Bearer ` 접두사가 붙어 있는지만 봅니다.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::InvalidScheme)?;

        Ok(BearerToken(token.to_string()))
    }
}

#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidScheme,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let reason = match self {
            AuthError::MissingToken => "missing Authorization header",
            AuthError::InvalidScheme => "Authorization header is not a Bearer token",
        };
        tracing::debug!("Rejected request: {}", reason);

        let body = Json(json!({
            "success": false,
            "message": "Unauthorized"
        }));

        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(header: Option<&str>) -> Result<BearerToken, AuthError> {
        let mut builder = Request::builder().uri("/api/timesheets");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        BearerToken::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_bearer_token_is_extracted() {
        let token = extract(Some("Bearer dummy-jwt-token-1")).await.unwrap();
        assert_eq!(token.0, "dummy-jwt-token-1");
    }

    #[tokio::test]
    async fn test_missing_header_is_rejected() {
        assert!(matches!(extract(None).await, Err(AuthError::MissingToken)));
    }

    #[tokio::test]
    async fn test_other_scheme_is_rejected() {
        let result = extract(Some("Basic ZGVtbzpwYXNzd29yZA==")).await;
        assert!(matches!(result, Err(AuthError::InvalidScheme)));
        assert_eq!(
            result.unwrap_err().into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }
}
