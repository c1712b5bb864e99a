//! # 인메모리 타임시트 저장소
//!
//! `Mutex<Vec<TimesheetEntry>>` 하나가 프로세스 전체의 정본(canonical) 컬렉션입니다.
//! 각 작업은 락을 잡은 채로 한 번의 변경만 수행하고, `.await` 너머로 락을 들고 가지 않습니다.

use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use super::TimesheetStore;
use crate::error::{ApiError, AppResult};
use crate::models::{
    CreateTimesheetEntry, TimesheetEntry, TimesheetStatus, UpdateTimesheetEntry,
};

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<Vec<TimesheetEntry>>,
}

impl MemoryStore {
    /// 빈 저장소
    pub fn new() -> Self {
        Self::default()
    }

    /// 데모 사용자의 2024년 1월 다섯 주 데이터로 채운 저장소
    pub fn seeded() -> Self {
        Self::with_entries(demo_entries())
    }

    pub fn with_entries(entries: Vec<TimesheetEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, Vec<TimesheetEntry>>> {
        self.entries
            .lock()
            .map_err(|_| ApiError::Unknown("timesheet store lock poisoned".to_string()))
    }
}

/// 생성 시각(밀리초)을 ID 후보로 쓰고, 같은 밀리초에 이미 쓰인 ID면 1씩 올립니다.
fn next_id(entries: &[TimesheetEntry], now: DateTime<Utc>) -> String {
    let mut candidate = now.timestamp_millis();
    loop {
        let id = candidate.to_string();
        if !entries.iter().any(|e| e.id == id) {
            return id;
        }
        candidate += 1;
    }
}

impl TimesheetStore for MemoryStore {
    fn list(&self) -> AppResult<Vec<TimesheetEntry>> {
        Ok(self.lock()?.clone())
    }

    fn get(&self, id: &str) -> AppResult<Option<TimesheetEntry>> {
        Ok(self.lock()?.iter().find(|e| e.id == id).cloned())
    }

    fn create(
        &self,
        data: CreateTimesheetEntry,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> AppResult<TimesheetEntry> {
        let mut entries = self.lock()?;
        let entry = TimesheetEntry {
            id: next_id(&entries, now),
            week_number: data.week_number,
            date: data.date,
            status: TimesheetStatus::Incomplete,
            hours: data.hours,
            description: data.description,
            user_id: user_id.to_string(),
            created_at: now,
            updated_at: now,
        };
        entries.push(entry.clone());
        Ok(entry)
    }

    fn update(
        &self,
        id: &str,
        patch: UpdateTimesheetEntry,
        now: DateTime<Utc>,
    ) -> AppResult<Option<TimesheetEntry>> {
        let mut entries = self.lock()?;
        let Some(entry) = entries.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };
        entry.apply(patch, now);
        Ok(Some(entry.clone()))
    }

    fn delete(&self, id: &str) -> AppResult<bool> {
        let mut entries = self.lock()?;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        Ok(entries.len() != before)
    }
}

fn demo_entry(
    id: &str,
    week_number: u32,
    (year, month, day): (i32, u32, u32),
    status: TimesheetStatus,
    hours: f64,
    description: &str,
) -> Option<TimesheetEntry> {
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let stamp = Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single()?;
    Some(TimesheetEntry {
        id: id.to_string(),
        week_number,
        date,
        status,
        hours,
        description: Some(description.to_string()),
        user_id: "1".to_string(),
        created_at: stamp,
        updated_at: stamp,
    })
}

fn demo_entries() -> Vec<TimesheetEntry> {
    use TimesheetStatus::*;

    [
        demo_entry("1", 1, (2024, 1, 1), Completed, 40.0, "Week 1 timesheet"),
        demo_entry("2", 2, (2024, 1, 8), Completed, 38.0, "Week 2 timesheet"),
        demo_entry("3", 3, (2024, 1, 15), Incomplete, 42.0, "Week 3 timesheet"),
        demo_entry("4", 4, (2024, 1, 22), Completed, 40.0, "Week 4 timesheet"),
        demo_entry("5", 5, (2024, 1, 28), Missing, 0.0, ""),
    ]
    .into_iter()
    .flatten()
    .collect()
}
