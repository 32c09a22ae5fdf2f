use crate::task::Task;

/// Record query passed to [`crate::Storage::list_tasks`]. Unset fields do not
/// filter; results are always ordered by creation time, newest first.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TaskQuery {
    pub completed: Option<bool>,
    /// Restrict results to tasks stamped with this owner. The built-in
    /// client reloads unscoped and filters in its own store; this field is
    /// part of the backend contract for callers that query directly.
    pub owner: Option<String>,
}

impl TaskQuery {
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(completed) = self.completed {
            if task.completed != completed {
                return false;
            }
        }

        if let Some(owner) = &self.owner {
            if task.owner.as_deref() != Some(owner.as_str()) {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Priority;

    fn task(completed: bool, owner: Option<&str>) -> Task {
        Task {
            id: "01ARZ3NDEKTSV4RRFFQ69G5FAV".to_string(),
            title: "Buy milk".to_string(),
            description: None,
            due_date: None,
            priority: Priority::default(),
            completed,
            owner: owner.map(str::to_string),
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let query = TaskQuery::default();
        assert!(query.matches(&task(false, None)));
        assert!(query.matches(&task(true, Some("alice"))));
    }

    #[test]
    fn test_completed_filter() {
        let query = TaskQuery {
            completed: Some(true),
            ..Default::default()
        };
        assert!(query.matches(&task(true, None)));
        assert!(!query.matches(&task(false, None)));
    }

    #[test]
    fn test_owner_filter() {
        let query = TaskQuery {
            owner: Some("alice".to_string()),
            ..Default::default()
        };
        assert!(query.matches(&task(false, Some("alice"))));
        assert!(!query.matches(&task(false, Some("bob"))));
        assert!(!query.matches(&task(false, None)));
    }
}
