use chrono::{Duration, Local, NaiveDate, TimeZone, Utc};

use crate::utils::{command_error, exit_code::ExitCode};

/// Parse a due date argument. Accepts an ISO date or the keywords
/// `today` and `tomorrow`. A malformed value is user input error and
/// maps to the data-error exit code.
pub fn parse_due_string(value: &str) -> command_error::Result<NaiveDate> {
    let today = Local::now().date_naive();

    match value.to_lowercase().as_str() {
        "today" => Ok(today),
        "tomorrow" => Ok(today + Duration::days(1)),
        other => NaiveDate::parse_from_str(other, "%Y-%m-%d").map_err(|_| {
            command_error::Error::ExitWithError(
                ExitCode::DataError,
                eyre::eyre!(
                    "Invalid due date '{other}', expected YYYY-MM-DD, 'today' or 'tomorrow'."
                ),
            )
        }),
    }
}

/// Render a unix millisecond timestamp as a local calendar date.
pub fn format_created(timestamp_ms: u64) -> String {
    match Utc.timestamp_millis_opt(timestamp_ms as i64).single() {
        Some(datetime) => datetime
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        None => "-".to_owned(),
    }
}
