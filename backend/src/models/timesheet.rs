//! # 타임시트 모델 정의
//!
//! 주 단위 타임시트 한 건(`TimesheetEntry`)과 생성/수정 요청 구조체를 정의합니다.
//! JSON 필드 이름은 프론트엔드와 맞추기 위해 camelCase를 사용합니다.
//!
//! ## 라이프사이클
//! ```text
//! create (status = incomplete) → update (부분 수정, updatedAt 갱신) → delete (물리 삭제)
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// 타임시트 상태. 닫힌 열거형이며 JSON에서는 소문자로 표현됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimesheetStatus {
    Completed,
    Incomplete,
    Missing,
}

/// 대시보드 표의 각 행에 표시되는 동작 버튼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusAction {
    /// 상세 화면을 읽기 용도로 엽니다.
    View,
    /// 상세 화면에서 작업을 채워 넣습니다.
    Update,
    /// 생성/수정 모달을 엽니다.
    Create,
}

impl StatusAction {
    pub fn label(self) -> &'static str {
        match self {
            StatusAction::View => "View",
            StatusAction::Update => "Update",
            StatusAction::Create => "Create",
        }
    }
}

impl TimesheetStatus {
    pub fn action(self) -> StatusAction {
        match self {
            TimesheetStatus::Completed => StatusAction::View,
            TimesheetStatus::Incomplete => StatusAction::Update,
            TimesheetStatus::Missing => StatusAction::Create,
        }
    }
}

/// 타임시트 엔티티: 인메모리 컬렉션의 원소 하나에 대응합니다.
///
/// 불변식: `updated_at >= created_at`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetEntry {
    /// 생성 시각(밀리초)에서 만든 문자열 ID
    pub id: String,
    pub week_number: u32,
    /// 주의 기준 날짜 ("2024-01-01")
    pub date: NaiveDate,
    pub status: TimesheetStatus,
    /// 그 주의 총 근무 시간
    pub hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 생성 요청: `POST /api/timesheets`의 요청 본문.
///
/// 상태와 사용자 ID는 서버가 정하므로 여기에는 없습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimesheetEntry {
    pub week_number: u32,
    pub date: NaiveDate,
    pub hours: f64,
    #[serde(default)]
    pub description: Option<String>,
}

/// 수정 요청: `PATCH /api/timesheets/{id}`의 요청 본문.
///
/// 모든 필드가 선택입니다. None = 변경 안 함.
/// 본문의 `id`는 받아들이되 무시합니다. 경로의 ID가 우선입니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTimesheetEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TimesheetStatus>,
}

impl TimesheetEntry {
    /// 얕은 병합(shallow merge). 패치에 있는 필드만 덮어쓰고 `updated_at`을 갱신합니다.
    ///
    /// 시계가 뒤로 가더라도 `updated_at`은 이전 값보다 작아지지 않습니다.
    pub fn apply(&mut self, patch: UpdateTimesheetEntry, now: DateTime<Utc>) {
        if let Some(week_number) = patch.week_number {
            self.week_number = week_number;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(hours) = patch.hours {
            self.hours = hours;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = now.max(self.updated_at);
    }
}
