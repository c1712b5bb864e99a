//! # 애플리케이션 설정(Configuration) 모듈
//!
//! `.env` 파일이나 시스템 환경변수에서 서버 설정값을 읽어옵니다.
//! 필수 항목은 없고 모두 기본값이 있습니다.
//!
//! 설정 항목:
//! - `HOST`: 서버 바인딩 주소 (기본값: "0.0.0.0")
//! - `PORT`: 서버 포트 번호 (기본값: 3000)
//! - `API_LATENCY_MS`: Mock API의 인위적 지연, 밀리초 (기본값: 500, 0이면 지연 없음)
//! - `DEMO_EMAIL` / `DEMO_PASSWORD` / `DEMO_NAME`: 로그인을 허용할 데모 계정
//! - `STATIC_DIR`: 프론트엔드 빌드 디렉토리 (기본값: "../frontend/dist")

use std::env;

use thiserror::Error;

use crate::services::{DemoAccount, Latency};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be a number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 한 번 읽은 뒤 `MockApi`와 라우터를 만드는 데 씁니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// 서버가 바인딩할 호스트 주소 (기본값: "0.0.0.0")
    pub host: String,
    /// 서버 포트 번호 (기본값: 3000)
    pub port: u16,
    /// Mock API가 매 호출마다 기다리는 시간, 밀리초 (기본값: 500, 0이면 지연 없음)
    pub api_latency_ms: u64,
    /// 로그인을 허용할 데모 계정 이메일 (기본값: "demo@example.com")
    pub demo_email: String,
    /// 데모 계정 비밀번호 (기본값: "password")
    pub demo_password: String,
    /// 로그인 응답에 실리는 사용자 이름 (기본값: "John Doe")
    pub demo_name: String,
    /// 프론트엔드 빌드 결과물 디렉토리. 없으면 API만 서빙합니다.
    pub static_dir: String,
}

impl Config {
    /// 환경변수에서 설정값을 읽습니다.
    ///
    /// # 에러
    /// `PORT`나 `API_LATENCY_MS`가 숫자로 해석되지 않으면 `ConfigError::InvalidNumber`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 조회 함수로 설정을 만듭니다. 테스트에서 환경변수를 건드리지 않기 위함입니다.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = DemoAccount::default();
        let or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            host: or("HOST", "0.0.0.0"),
            port: parse_number(&lookup, "PORT", 3000)?,
            api_latency_ms: parse_number(&lookup, "API_LATENCY_MS", 500)?,
            demo_email: or("DEMO_EMAIL", &defaults.email),
            demo_password: or("DEMO_PASSWORD", &defaults.password),
            demo_name: or("DEMO_NAME", &defaults.user.name),
            static_dir: or("STATIC_DIR", "../frontend/dist"),
        })
    }

    pub fn latency(&self) -> Latency {
        Latency::from_millis(self.api_latency_ms)
    }

    pub fn demo_account(&self) -> DemoAccount {
        DemoAccount::new(&self.demo_email, &self.demo_password, &self.demo_name)
    }
}

fn parse_number<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
    }
}
