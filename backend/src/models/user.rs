//! # 사용자 및 인증 모델
//!
//! 로그인 요청/응답과 세션에 저장되는 사용자 정보를 정의합니다.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::FieldErrors;

/// 로그인한 사용자. 로그인 시 만들어지고 이후로는 바뀌지 않습니다.
///
/// 세션 저장소의 `user-data` 키에 이 구조체의 JSON이 그대로 들어갑니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// `POST /api/auth/login` 요청 본문
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

// 브라우저 폼과 같은 느슨한 형식 검사: "무엇@무엇.무엇"
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("Invalid regex"));

const MIN_PASSWORD_LEN: usize = 6;

impl LoginCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// 로그인 폼 검증. API를 부르기 전에 필드별 메시지를 돌려줍니다.
    ///
    /// - email: 필수, 형식 검사
    /// - password: 필수, 6자 이상
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.email.is_empty() {
            errors.insert("email", "Email is required");
        } else if !EMAIL_RE.is_match(&self.email) {
            errors.insert("email", "Email is invalid");
        }

        if self.password.is_empty() {
            errors.insert("password", "Password is required");
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.insert("password", "Password must be at least 6 characters");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// 로그인 성공 시 봉투의 `data`에 담기는 값
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_demo_credentials() {
        let creds = LoginCredentials::new("demo@example.com", "password");
        assert!(creds.validate().is_ok());
    }

    #[test]
    fn test_validate_required_fields() {
        let errors = LoginCredentials::new("", "").validate().unwrap_err();
        assert_eq!(errors.get("email"), Some(&"Email is required"));
        assert_eq!(errors.get("password"), Some(&"Password is required"));
    }

    #[test]
    fn test_validate_email_format() {
        for email in ["demo", "demo@example", "@example.com", "demo@.com"] {
            let errors = LoginCredentials::new(email, "password")
                .validate()
                .unwrap_err();
            assert_eq!(errors.get("email"), Some(&"Email is invalid"), "{email}");
        }
    }

    #[test]
    fn test_validate_short_password() {
        let errors = LoginCredentials::new("demo@example.com", "12345")
            .validate()
            .unwrap_err();
        assert_eq!(
            errors.get("password"),
            Some(&"Password must be at least 6 characters")
        );
        assert!(!errors.contains_key("email"));
    }

    #[test]
    fn test_user_json_shape() {
        let user = User {
            id: "1".to_string(),
            email: "demo@example.com".to_string(),
            name: "John Doe".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "1", "email": "demo@example.com", "name": "John Doe" })
        );
    }
}
