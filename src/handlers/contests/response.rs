//! Contest response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    models::{ContestSummary, RuleSystem},
    services::task_sync::TaskAssignment,
};

/// Contest list response
#[derive(Debug, Serialize)]
pub struct ContestsListResponse {
    pub items: Vec<ContestSummary>,
    pub total_count: i64,
}

/// Contest task as shown to a contestant
#[derive(Debug, Serialize)]
pub struct ContestTaskResponse {
    pub task_id: Uuid,
    pub name: String,
    pub label: String,
    pub solved: bool,
}

/// Contest details response
#[derive(Debug, Serialize)]
pub struct ContestDetailsResponse {
    #[serde(flatten)]
    pub contest: ContestSummary,
    /// Rule tag as stored
    pub rules: String,
    pub one_language_per_task: bool,
    /// Empty until the contest starts
    pub tasks: Vec<ContestTaskResponse>,
}

/// Stored contest definition, as returned by an edit
#[derive(Debug, Serialize)]
pub struct ContestDefinitionResponse {
    pub id: Uuid,
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub finish_time: DateTime<Utc>,
    pub checkpoint_time: Option<DateTime<Utc>>,
    pub one_language_per_task: bool,
    pub is_opened: bool,
    pub rules: RuleSystem,
    pub tasks: Vec<TaskAssignment>,
}
