//! Contest request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::MAX_CONTEST_NAME_LENGTH,
    error::{AppError, AppResult},
    models::RuleSystem,
    services::task_sync::TaskAssignment,
    utils::{validate_schedule, validate_task_list},
};

/// Create or update contest request; the task list is the full new list
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EditContestRequest {
    #[validate(length(min = 1, max = MAX_CONTEST_NAME_LENGTH))]
    pub name: String,

    pub start_time: DateTime<Utc>,

    pub finish_time: DateTime<Utc>,

    /// Changes how later runs are credited under CheckPoint rules
    pub checkpoint_time: Option<DateTime<Utc>>,

    #[serde(default)]
    pub one_language_per_task: bool,

    #[serde(default)]
    pub is_opened: bool,

    /// Rule system: acm, points, checkpoint
    pub rules: RuleSystem,

    #[serde(default)]
    pub tasks: Vec<TaskAssignment>,
}

impl EditContestRequest {
    /// Cross-field checks the derive cannot express
    pub fn check_consistency(&self) -> AppResult<()> {
        validate_schedule(self.start_time, self.finish_time, self.checkpoint_time)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        validate_task_list(self.tasks.iter().map(|t| (t.task_id, t.label.as_str())))
            .map_err(|e| AppError::Validation(e.to_string()))?;
        Ok(())
    }
}

/// List contests query parameters
#[derive(Debug, Deserialize)]
pub struct ListContestsQuery {
    pub skip: Option<u32>,
    pub take: Option<u32>,
}

/// Get contest query parameters
#[derive(Debug, Deserialize)]
pub struct ContestQuery {
    /// Mark the tasks this user has solved
    pub user_id: Option<Uuid>,
}
