//! Utility functions

pub mod time;
pub mod validation;

pub use time::{elapsed_minutes, format_duration, now_utc};
pub use validation::{validate_schedule, validate_task_label, validate_task_list};
