use serde_derive::Serialize;
use std::fmt;
use std::str::FromStr;
use taskflow_storage_core::Task;

/// View predicate over the task list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => write!(f, "all"),
            Filter::Active => write!(f, "active"),
            Filter::Completed => write!(f, "completed"),
        }
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" => Ok(Filter::Completed),
            other => Err(format!(
                "Invalid filter '{}'. Expected 'all', 'active' or 'completed'.",
                other
            )),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TaskCounts {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

/// Result of resolving a user-supplied id prefix against the store.
#[derive(Debug, Clone, PartialEq)]
pub enum PrefixMatch {
    Single(Task),
    Many(Vec<Task>),
    NotFound,
}

/// In-memory task list for the current session, with derived filtered views
/// and counts. Kept in sync by full reloads from the storage backend.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    pub fn filtered(&self, filter: Filter) -> Vec<&Task> {
        self.tasks.iter().filter(|task| filter.matches(task)).collect()
    }

    pub fn counts(&self) -> TaskCounts {
        let completed = self.tasks.iter().filter(|task| task.completed).count();
        TaskCounts {
            total: self.tasks.len(),
            pending: self.tasks.len() - completed,
            completed,
        }
    }

    pub fn append(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn replace_by_id(&mut self, task_id: &str, task: Task) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == task_id) {
            Some(slot) => {
                *slot = task;
                true
            }
            None => false,
        }
    }

    pub fn remove_by_id(&mut self, task_id: &str) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == task_id)?;
        Some(self.tasks.remove(index))
    }

    /// Swap in a freshly loaded list, newest first.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    }

    /// Resolve an id or unique id prefix. An exact id match wins over other
    /// tasks sharing the prefix.
    pub fn search_prefix(&self, prefix: &str) -> PrefixMatch {
        if prefix.is_empty() {
            return PrefixMatch::NotFound;
        }

        let matches: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|task| {
                task.id
                    .get(..prefix.len())
                    .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
            })
            .collect();

        if let Some(exact) = matches.iter().find(|t| t.id.eq_ignore_ascii_case(prefix)) {
            return PrefixMatch::Single((*exact).clone());
        }

        match matches.as_slice() {
            [] => PrefixMatch::NotFound,
            [single] => PrefixMatch::Single((*single).clone()),
            many => PrefixMatch::Many(many.iter().map(|t| (*t).clone()).collect()),
        }
    }
}
