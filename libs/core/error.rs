use taskflow_storage_core::TaskId;

pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Raised before any write when a submitted title is empty or whitespace
    #[error("task title cannot be empty")]
    EmptyTitle,

    #[error("task '{0}' was not found")]
    TaskNotFound(TaskId),

    #[error(transparent)]
    Storage(eyre::Report),
}

impl CoreError {
    /// Backend failures are logged here so every call site gets a diagnostic
    /// trace without repeating itself.
    pub(crate) fn storage(report: eyre::Report) -> Self {
        tracing::error!("storage operation failed: {report}");
        Self::Storage(report)
    }
}
