//! Input validation utilities

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::constants::MAX_TASK_LABEL_LENGTH;

/// Validate a contest-local task label
pub fn validate_task_label(label: &str) -> Result<(), &'static str> {
    if label.trim().is_empty() {
        return Err("Task label must not be empty");
    }
    if label.chars().count() > MAX_TASK_LABEL_LENGTH {
        return Err("Task label must be at most 16 characters");
    }
    if label.chars().any(char::is_whitespace) {
        return Err("Task label must not contain whitespace");
    }
    Ok(())
}

/// Validate the contest schedule
pub fn validate_schedule(
    start: DateTime<Utc>,
    finish: DateTime<Utc>,
    checkpoint: Option<DateTime<Utc>>,
) -> Result<(), &'static str> {
    if finish <= start {
        return Err("Finish time must be after start time");
    }
    if let Some(checkpoint) = checkpoint {
        if checkpoint < start || checkpoint > finish {
            return Err("Checkpoint time must lie within the contest");
        }
    }
    Ok(())
}

/// Validate a contest task list given as (task id, label) pairs
pub fn validate_task_list<'a>(
    tasks: impl IntoIterator<Item = (Uuid, &'a str)>,
) -> Result<(), &'static str> {
    let mut ids = HashSet::new();
    let mut labels = HashSet::new();

    for (task_id, label) in tasks {
        validate_task_label(label)?;
        if !ids.insert(task_id) {
            return Err("A task can be added to a contest only once");
        }
        if !labels.insert(label) {
            return Err("Task labels must be unique within a contest");
        }
    }
    Ok(())
}
