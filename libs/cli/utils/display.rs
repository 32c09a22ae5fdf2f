use colored::*;
use std::fmt::Display;

/// Defines the type of notice to determine the icon and color scheme.
pub enum LogType {
    Success,
    Info,
    /// For the dashboard.
    Status,
}

/// A builder for the transient notices printed after each operation, the CLI
/// stand-in for toast notifications.
pub struct LogBuilder<'a> {
    log_type: LogType,
    message: String,
    details: Vec<(&'a str, Box<dyn Display>)>,
}

impl<'a> LogBuilder<'a> {
    pub fn new(log_type: LogType, message: impl Display) -> Self {
        Self {
            log_type,
            message: message.to_string(),
            details: Vec::new(),
        }
    }

    /// Adds a detail line (a "branch") to the notice. Can be chained.
    pub fn with_branch(mut self, label: &'a str, value: impl Display + 'static) -> Self {
        self.details.push((label, Box::new(value)));
        self
    }

    /// Conditionally adds a branch if the `value` is `Some`.
    pub fn with_optional_branch<T: Display + 'static>(
        self,
        label: &'a str,
        value: Option<T>,
    ) -> Self {
        if let Some(val) = value {
            self.with_branch(label, val)
        } else {
            self
        }
    }

    /// Consumes the builder and prints the formatted notice to the console.
    pub fn print(self) {
        let (symbol, color) = match self.log_type {
            LogType::Success => ("✔", "green"),
            LogType::Info => ("ℹ", "blue"),
            LogType::Status => ("❯", "blue"),
        };

        println!(
            "\n{} {}",
            symbol.color(color).bold(),
            self.message.color(color).bold()
        );

        let count = self.details.len();
        if count == 0 {
            return;
        }

        for (i, (label, value)) in self.details.iter().enumerate() {
            let prefix = if i == count - 1 { "  ╰─" } else { "  ├─" };
            let padded_label = format!("{label}:");
            // Pad to 10 to align with "Completed:" from the dashboard
            println!("{} {:<10} {}", prefix.dimmed(), padded_label.bold(), value);
        }
    }
}
