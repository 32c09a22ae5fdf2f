use chrono::NaiveDate;
use serde_derive::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type TaskId = String;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!(
                "Invalid priority '{}'. Expected 'low', 'medium' or 'high'.",
                other
            )),
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub completed: bool,
    /// Name of the user owning this task, taken from the configuration
    pub owner: Option<String>,
    pub created_at: u64,
    pub updated_at: u64,
}

/// Partial update of a [`Task`]: unset fields keep their current value,
/// double options distinguish "keep" from "clear".
#[derive(Default, Debug, Deserialize, PartialEq, Clone)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub due_date: Option<Option<NaiveDate>>,
    pub priority: Option<Priority>,
    pub completed: Option<bool>,
    pub updated_at: Option<u64>,
}

impl TaskUpdate {
    pub fn set_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn set_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn set_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn set_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn set_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    pub fn set_updated_at(mut self, updated_at: u64) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// True when no user-facing field is set (the timestamp stamp alone does
    /// not count as a change).
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.due_date.is_none()
            && self.priority.is_none()
            && self.completed.is_none()
    }

    /// Build the minimal update turning `left` into `right`.
    pub fn from_task_diff(left: &Task, right: &Task) -> eyre::Result<TaskUpdate> {
        if left.id != right.id {
            return Err(eyre::eyre!("diff between tasks with different id"));
        }

        let mut res = TaskUpdate::default();

        if left.title != right.title {
            res = res.set_title(right.title.clone());
        }

        if left.description != right.description {
            res = res.set_description(right.description.clone());
        }

        if left.due_date != right.due_date {
            res = res.set_due_date(right.due_date);
        }

        if left.priority != right.priority {
            res = res.set_priority(right.priority);
        }

        if left.completed != right.completed {
            res = res.set_completed(right.completed);
        }

        Ok(res)
    }

    pub fn merge_with_task(self, task: &Task) -> Task {
        Task {
            id: task.id.clone(),
            title: self.title.unwrap_or(task.title.clone()),
            description: self.description.unwrap_or(task.description.clone()),
            due_date: self.due_date.unwrap_or(task.due_date),
            priority: self.priority.unwrap_or(task.priority),
            completed: self.completed.unwrap_or(task.completed),
            owner: task.owner.clone(),
            created_at: task.created_at,
            updated_at: self.updated_at.unwrap_or(task.updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        Task {
            id: "01ARZ3NDEKTSV4RRFFQ69G5FAV".to_string(),
            title: "Buy milk".to_string(),
            description: Some("Two bottles".to_string()),
            due_date: NaiveDate::from_ymd_opt(2026, 9, 1),
            priority: Priority::Low,
            completed: false,
            owner: Some("alice".to_string()),
            created_at: 1000,
            updated_at: 1000,
        }
    }

    #[test]
    fn test_parse_priority() {
        assert_eq!("low".parse::<Priority>().unwrap(), Priority::Low);
        assert_eq!("MEDIUM".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!("High".parse::<Priority>().unwrap(), Priority::High);
        assert!("urgent".parse::<Priority>().is_err());
        assert!("".parse::<Priority>().is_err());
    }

    #[test]
    fn test_priority_display_round_trips() {
        for priority in [Priority::Low, Priority::Medium, Priority::High] {
            assert_eq!(priority.to_string().parse::<Priority>().unwrap(), priority);
        }
    }

    #[test]
    fn test_priority_default_is_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn test_diff_only_contains_changed_fields() {
        let left = sample_task();
        let mut right = left.clone();
        right.title = "Buy oat milk".to_string();
        right.completed = true;

        let update = TaskUpdate::from_task_diff(&left, &right).unwrap();
        assert_eq!(update.title, Some("Buy oat milk".to_string()));
        assert_eq!(update.completed, Some(true));
        assert_eq!(update.description, None);
        assert_eq!(update.due_date, None);
        assert_eq!(update.priority, None);
    }

    #[test]
    fn test_diff_of_identical_tasks_is_empty() {
        let task = sample_task();
        let update = TaskUpdate::from_task_diff(&task, &task.clone()).unwrap();
        assert!(update.is_empty());
    }

    #[test]
    fn test_diff_rejects_mismatched_ids() {
        let left = sample_task();
        let mut right = left.clone();
        right.id = "01BX5ZZKBKACTAV9WEVGEMMVRY".to_string();
        assert!(TaskUpdate::from_task_diff(&left, &right).is_err());
    }

    #[test]
    fn test_merge_applies_partial_update() {
        let task = sample_task();
        let merged = TaskUpdate::default()
            .set_completed(true)
            .set_description(None)
            .set_updated_at(2000)
            .merge_with_task(&task);

        assert!(merged.completed);
        assert_eq!(merged.description, None);
        assert_eq!(merged.updated_at, 2000);
        // untouched fields keep their value
        assert_eq!(merged.title, task.title);
        assert_eq!(merged.due_date, task.due_date);
        assert_eq!(merged.created_at, task.created_at);
        assert_eq!(merged.owner, task.owner);
    }

    #[test]
    fn test_diff_then_merge_reconstructs_target() {
        let left = sample_task();
        let mut right = left.clone();
        right.title = "Walk the dog".to_string();
        right.description = None;
        right.due_date = None;
        right.priority = Priority::High;

        let update = TaskUpdate::from_task_diff(&left, &right).unwrap();
        assert_eq!(update.merge_with_task(&left), right);
    }
}
