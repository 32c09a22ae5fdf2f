pub mod command_error;
pub mod display;
pub mod exit_code;
pub mod task_ref;
pub mod time;
