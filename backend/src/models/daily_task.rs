//! # 요일별 작업(Daily Task) 모델
//!
//! 타임시트 상세 화면이 들고 있는 "요일 → 작업 목록" 상태입니다.
//! 이 데이터는 API를 거치지 않고 저장되지도 않습니다. 화면을 열 때마다
//! `WeekTasks::sample()`로 초기화되며, `TimesheetEntry::hours`와 맞춰보지도 않습니다.

use serde::{Deserialize, Serialize};

use super::FieldErrors;

/// 주간 목표 시간. 완료율 계산의 분모입니다.
pub const WEEKLY_TARGET_HOURS: f64 = 40.0;

const DEFAULT_PROJECT: &str = "Project Name";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTask {
    pub id: String,
    pub description: String,
    pub hours: f64,
    pub project: String,
}

/// 작업 추가/수정 모달의 입력값
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub project: String,
    pub work_type: String,
    pub description: String,
    pub hours: f64,
}

impl TaskDraft {
    /// 모달 폼 검증. 프로젝트, 작업 유형, 설명은 필수이고 시간은 (0, 24] 범위여야 합니다.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.project.is_empty() {
            errors.insert("project", "Project is required");
        }
        if self.work_type.is_empty() {
            errors.insert("workType", "Type of work is required");
        }
        if self.description.is_empty() {
            errors.insert("description", "Task description is required");
        }
        if !(self.hours > 0.0 && self.hours <= 24.0) {
            errors.insert("hours", "Hours must be between 1 and 24");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn project_or_default(&self) -> String {
        if self.project.is_empty() {
            DEFAULT_PROJECT.to_string()
        } else {
            self.project.clone()
        }
    }

    fn hours_or_zero(&self) -> f64 {
        if self.hours.is_finite() && self.hours > 0.0 {
            self.hours
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayTasks {
    /// 화면에 표시되는 요일 라벨 (예: "Jan 21")
    pub day: String,
    pub tasks: Vec<DailyTask>,
}

/// 한 주의 작업 목록. 요일 순서는 삽입 순서를 따릅니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekTasks {
    pub days: Vec<DayTasks>,
}

impl WeekTasks {
    /// 상세 화면이 열릴 때 채워지는 고정 샘플: 닷새 동안 4시간짜리 작업 두 개씩
    pub fn sample() -> Self {
        let mut next_id = 0;
        let days = ["Jan 21", "Jan 22", "Jan 23", "Jan 24", "Jan 25"]
            .into_iter()
            .map(|day| {
                let tasks = (0..2)
                    .map(|_| {
                        next_id += 1;
                        DailyTask {
                            id: next_id.to_string(),
                            description: "Homepage Development".to_string(),
                            hours: 4.0,
                            project: DEFAULT_PROJECT.to_string(),
                        }
                    })
                    .collect();
                DayTasks {
                    day: day.to_string(),
                    tasks,
                }
            })
            .collect();
        Self { days }
    }

    pub fn tasks(&self, day: &str) -> &[DailyTask] {
        self.days
            .iter()
            .find(|d| d.day == day)
            .map(|d| d.tasks.as_slice())
            .unwrap_or_default()
    }

    /// 작업을 추가합니다. 없는 요일이면 새로 만듭니다.
    pub fn add_task(&mut self, day: &str, draft: &TaskDraft) -> &DailyTask {
        let task = DailyTask {
            id: self.next_id(),
            description: draft.description.clone(),
            hours: draft.hours_or_zero(),
            project: draft.project_or_default(),
        };

        let index = match self.days.iter().position(|d| d.day == day) {
            Some(index) => index,
            None => {
                self.days.push(DayTasks {
                    day: day.to_string(),
                    tasks: Vec::new(),
                });
                self.days.len() - 1
            }
        };
        let tasks = &mut self.days[index].tasks;
        tasks.push(task);
        &tasks[tasks.len() - 1]
    }

    /// 기존 작업의 설명/시간/프로젝트를 모달 입력값으로 바꿉니다.
    pub fn update_task(&mut self, day: &str, id: &str, draft: &TaskDraft) -> Option<&DailyTask> {
        let task = self.task_mut(day, id)?;
        task.description = draft.description.clone();
        task.hours = draft.hours_or_zero();
        task.project = draft.project_or_default();
        Some(task)
    }

    pub fn remove_task(&mut self, day: &str, id: &str) -> Option<DailyTask> {
        let tasks = &mut self.days.iter_mut().find(|d| d.day == day)?.tasks;
        let index = tasks.iter().position(|t| t.id == id)?;
        Some(tasks.remove(index))
    }

    pub fn total_hours(&self) -> f64 {
        self.days
            .iter()
            .flat_map(|d| d.tasks.iter())
            .map(|t| t.hours)
            .sum()
    }

    /// 주간 목표 대비 진행률(%). 100을 넘지 않습니다.
    pub fn completion_percentage(&self) -> f64 {
        (self.total_hours() / WEEKLY_TARGET_HOURS * 100.0).min(100.0)
    }

    fn task_mut(&mut self, day: &str, id: &str) -> Option<&mut DailyTask> {
        self.days
            .iter_mut()
            .find(|d| d.day == day)?
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
    }

    // 숫자 ID 중 가장 큰 값 + 1
    fn next_id(&self) -> String {
        let max = self
            .days
            .iter()
            .flat_map(|d| d.tasks.iter())
            .filter_map(|t| t.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        (max + 1).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(description: &str, hours: f64) -> TaskDraft {
        TaskDraft {
            project: "Website".to_string(),
            work_type: "Development".to_string(),
            description: description.to_string(),
            hours,
        }
    }

    #[test]
    fn test_sample_week_is_full() {
        let week = WeekTasks::sample();
        assert_eq!(week.days.len(), 5);
        assert_eq!(week.tasks("Jan 23").len(), 2);
        assert_eq!(week.total_hours(), 40.0);
        assert_eq!(week.completion_percentage(), 100.0);
    }

    #[test]
    fn test_add_task_to_new_day() {
        let mut week = WeekTasks::sample();
        let task = week.add_task("Jan 26", &draft("Code review", 3.0)).clone();

        assert_eq!(task.id, "11");
        assert_eq!(task.project, "Website");
        assert_eq!(week.tasks("Jan 26"), &[task]);
        assert_eq!(week.total_hours(), 43.0);
        assert_eq!(week.completion_percentage(), 100.0);
    }

    #[test]
    fn test_add_task_fills_defaults() {
        let mut week = WeekTasks::default();
        let task = week.add_task("Mon", &TaskDraft::default());
        assert_eq!(task.id, "1");
        assert_eq!(task.description, "");
        assert_eq!(task.hours, 0.0);
        assert_eq!(task.project, "Project Name");
    }

    #[test]
    fn test_update_and_remove_task() {
        let mut week = WeekTasks::sample();

        let updated = week.update_task("Jan 21", "2", &draft("Bug fixing", 2.0)).cloned();
        assert_eq!(updated.map(|t| t.hours), Some(2.0));
        assert_eq!(week.total_hours(), 38.0);
        assert_eq!(week.completion_percentage(), 95.0);

        let removed = week.remove_task("Jan 21", "1");
        assert_eq!(removed.map(|t| t.id), Some("1".to_string()));
        assert_eq!(week.tasks("Jan 21").len(), 1);

        assert!(week.remove_task("Jan 21", "1").is_none());
        assert!(week.update_task("Jan 30", "3", &draft("x", 1.0)).is_none());
    }

    #[test]
    fn test_draft_validation() {
        assert!(draft("Homepage", 8.0).validate().is_ok());

        let errors = TaskDraft::default().validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get("workType"), Some(&"Type of work is required"));

        let errors = draft("Homepage", 25.0).validate().unwrap_err();
        assert_eq!(errors.get("hours"), Some(&"Hours must be between 1 and 24"));
    }

    #[test]
    fn test_draft_accepts_fractional_hours() {
        assert!(draft("Homepage", 0.5).validate().is_ok());
        assert!(draft("Homepage", 24.0).validate().is_ok());

        let errors = draft("Homepage", 0.0).validate().unwrap_err();
        assert!(errors.contains_key("hours"));
    }
}
