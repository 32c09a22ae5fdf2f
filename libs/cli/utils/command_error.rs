use taskflow_core::CoreError;

use crate::utils::exit_code::ExitCode;

pub enum Error {
    ExitWithError(ExitCode, eyre::Report),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<eyre::Report> for Error {
    #[track_caller]
    fn from(report: eyre::Report) -> Self {
        tracing::warn!("command failed: {report:#}");
        Self::ExitWithError(ExitCode::Error, report)
    }
}

/// Validation, lookup and backend failures each map to their sysexits code
impl From<CoreError> for Error {
    fn from(error: CoreError) -> Self {
        let code = match &error {
            CoreError::EmptyTitle => ExitCode::DataError,
            CoreError::TaskNotFound(_) => ExitCode::NoInput,
            CoreError::Storage(_) => ExitCode::Unavailable,
        };
        Self::ExitWithError(code, eyre::Report::new(error))
    }
}
