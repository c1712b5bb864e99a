//! # Mock API 클라이언트
//!
//! 원격 백엔드를 대신하는 프로세스 내부 API입니다.
//! 타임시트 컬렉션은 `TimesheetStore` 뒤에 있고, 모든 작업은 주입된 `Latency`를
//! 먼저 기다린 다음 `{ success, message, data }` 봉투로 응답합니다.
//!
//! ## 작업 목록
//! | 작업 | 실패 |
//! |------|------|
//! | `login` | 데모 계정이 아니면 `InvalidCredentials` (401) |
//! | `logout` | 없음 |
//! | `get_timesheets` | 없음 |
//! | `get_timesheet` | `NotFound` (404) |
//! | `create_timesheet` | 없음 (항상 추가) |
//! | `update_timesheet` | `NotFound` (404) |
//! | `delete_timesheet` | `NotFound` |
//!
//! 토큰은 현재 시각으로 만든 문자열일 뿐이며 암호학적 의미는 없습니다.

use std::sync::Arc;

use chrono::Utc;

use super::latency::Latency;
use crate::db::{MemoryStore, TimesheetStore};
use crate::error::{ApiError, AppResult};
use crate::models::*;

/// 로그인을 허용하는 유일한 계정
#[derive(Debug, Clone)]
pub struct DemoAccount {
    pub email: String,
    pub password: String,
    pub user: User,
}

impl DemoAccount {
    pub fn new(email: impl Into<String>, password: impl Into<String>, name: impl Into<String>) -> Self {
        let email = email.into();
        Self {
            user: User {
                id: DEMO_USER_ID.to_string(),
                email: email.clone(),
                name: name.into(),
            },
            email,
            password: password.into(),
        }
    }

    fn matches(&self, credentials: &LoginCredentials) -> bool {
        credentials.email == self.email && credentials.password == self.password
    }
}

impl Default for DemoAccount {
    fn default() -> Self {
        Self::new("demo@example.com", "password", "John Doe")
    }
}

/// 모든 엔트리가 암묵적으로 속하는 데모 사용자의 ID
pub const DEMO_USER_ID: &str = "1";

/// Mock API 클라이언트. `Clone`은 같은 저장소를 공유하는 핸들을 만듭니다.
#[derive(Clone)]
pub struct MockApi {
    store: Arc<dyn TimesheetStore>,
    latency: Latency,
    account: Arc<DemoAccount>,
}

impl MockApi {
    pub fn new(store: Arc<dyn TimesheetStore>, latency: Latency, account: DemoAccount) -> Self {
        Self {
            store,
            latency,
            account: Arc::new(account),
        }
    }

    /// 데모 데이터로 채운 인메모리 저장소와 기본 데모 계정으로 만듭니다.
    pub fn in_memory(latency: Latency) -> Self {
        Self::new(Arc::new(MemoryStore::seeded()), latency, DemoAccount::default())
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }

    /// 지연 없이 현재 엔트리 개수를 셉니다. 헬스체크용입니다.
    pub fn entry_count(&self) -> AppResult<usize> {
        Ok(self.store.list()?.len())
    }

    pub async fn login(&self, credentials: &LoginCredentials) -> AppResult<ApiResponse<AuthResponse>> {
        self.latency.wait().await;

        if !self.account.matches(credentials) {
            tracing::warn!(email = %credentials.email, "Rejected login");
            return Err(ApiError::InvalidCredentials);
        }

        let token = format!("dummy-jwt-token-{}", Utc::now().timestamp_millis());
        tracing::info!(user_id = %self.account.user.id, "User logged in");

        Ok(ApiResponse::ok(
            "Login successful",
            AuthResponse {
                user: self.account.user.clone(),
                token,
            },
        ))
    }

    /// 서버 쪽에 지울 상태가 없으므로 항상 성공합니다.
    pub async fn logout(&self) -> AppResult<ApiResponse<Message>> {
        self.latency.wait().await;
        tracing::info!("User logged out");
        Ok(ApiResponse::ok("Success", Message::new("Logged out successfully")))
    }

    /// 필터링, 페이지네이션, 사용자별 구분 없이 전체 컬렉션을 돌려줍니다.
    pub async fn get_timesheets(&self) -> AppResult<ApiResponse<Vec<TimesheetEntry>>> {
        self.latency.wait().await;
        let entries = self.store.list()?;
        tracing::debug!(count = entries.len(), "Listed timesheets");
        Ok(ApiResponse::ok("Timesheets retrieved successfully", entries))
    }

    pub async fn get_timesheet(&self, id: &str) -> AppResult<ApiResponse<TimesheetEntry>> {
        self.latency.wait().await;
        let entry = self.store.get(id)?.ok_or(ApiError::NotFound)?;
        tracing::debug!(id, "Fetched timesheet");
        Ok(ApiResponse::ok("Timesheet retrieved successfully", entry))
    }

    pub async fn create_timesheet(
        &self,
        data: CreateTimesheetEntry,
    ) -> AppResult<ApiResponse<TimesheetEntry>> {
        self.latency.wait().await;
        let entry = self.store.create(data, DEMO_USER_ID, Utc::now())?;
        tracing::info!(id = %entry.id, week = entry.week_number, "Created timesheet");
        Ok(ApiResponse::ok("Timesheet created successfully", entry))
    }

    pub async fn update_timesheet(
        &self,
        id: &str,
        patch: UpdateTimesheetEntry,
    ) -> AppResult<ApiResponse<TimesheetEntry>> {
        self.latency.wait().await;
        let entry = self
            .store
            .update(id, patch, Utc::now())?
            .ok_or(ApiError::NotFound)?;
        tracing::info!(id, "Updated timesheet");
        Ok(ApiResponse::ok("Timesheet updated successfully", entry))
    }

    pub async fn delete_timesheet(&self, id: &str) -> AppResult<ApiResponse<Message>> {
        self.latency.wait().await;
        if !self.store.delete(id)? {
            return Err(ApiError::NotFound);
        }
        tracing::info!(id, "Deleted timesheet");
        Ok(ApiResponse::ok(
            "Timesheet deleted successfully",
            Message::new("Timesheet deleted successfully"),
        ))
    }
}
