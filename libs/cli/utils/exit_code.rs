use core::fmt::Debug;
use std::process::Termination;

/// Standard Unix exit codes as defined in `<sysexits.h>`, restricted to the
/// ones this binary actually emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// A generic or unspecified error occurred.
    Error = 1,

    /// The input data was incorrect in some way, e.g. a task submitted with
    /// an empty title. (EX_DATAERR)
    DataError = 65,

    /// A referenced task did not exist. (EX_NOINPUT)
    NoInput = 66,

    /// The storage backend failed or is unreachable. (EX_UNAVAILABLE)
    Unavailable = 69,

    /// A configuration error was detected. (EX_CONFIG)
    ConfigError = 78,
}

impl ExitCode {
    /// Terminates the current process with the corresponding exit code.
    pub fn exit(self) -> ! {
        std::process::exit(self as i32)
    }

    /// Returns the integer value of the exit code.
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Allows `ExitCode` to be returned from `main`.
impl Termination for ExitCode {
    fn report(self) -> std::process::ExitCode {
        self.code().into()
    }
}
