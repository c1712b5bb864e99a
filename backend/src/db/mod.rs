//! # 저장소 계층 (Storage Layer)
//!
//! 타임시트 컬렉션에 대한 접근을 `TimesheetStore` 트레이트 뒤로 숨깁니다.
//! Mock API(services/api.rs)는 이 트레이트만 알고 있으므로,
//! 인메모리 구현을 실제 데이터베이스 구현으로 바꿔도 호출하는 쪽은 그대로입니다.
//!
//! 하위 모듈:
//! - `memory`: 프로세스 수명 동안 유지되는 인메모리 컬렉션

pub mod memory;

pub use memory::MemoryStore;

use chrono::{DateTime, Utc};

use crate::error::AppResult;
use crate::models::{CreateTimesheetEntry, TimesheetEntry, UpdateTimesheetEntry};

/// 타임시트 저장소 인터페이스
///
/// 각 메서드는 하나의 원자적인 변경입니다. 시각(`now`)은 호출하는 쪽이 넘겨주므로
/// 저장소는 시계를 직접 읽지 않습니다.
pub trait TimesheetStore: Send + Sync {
    /// 전체 컬렉션을 삽입 순서대로 돌려줍니다.
    fn list(&self) -> AppResult<Vec<TimesheetEntry>>;

    /// - `Ok(Some(entry))`: 찾은 경우
    /// - `Ok(None)`: 해당 ID가 없는 경우
    fn get(&self, id: &str) -> AppResult<Option<TimesheetEntry>>;

    /// 새 ID를 부여하고 `incomplete` 상태로 추가합니다.
    fn create(
        &self,
        data: CreateTimesheetEntry,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> AppResult<TimesheetEntry>;

    /// 얕은 병합 후 갱신된 엔트리를 돌려줍니다. 없으면 `Ok(None)`.
    fn update(
        &self,
        id: &str,
        patch: UpdateTimesheetEntry,
        now: DateTime<Utc>,
    ) -> AppResult<Option<TimesheetEntry>>;

    /// 삭제했으면 `true`, 해당 ID가 없었으면 `false`
    fn delete(&self, id: &str) -> AppResult<bool>;
}
