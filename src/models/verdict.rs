//! Submission verdict model

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Judged outcome of one submission, as read by the scoring engine
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct SubmissionVerdict {
    pub submission_id: Uuid,
    pub contest_id: Uuid,
    pub task_id: Uuid,
    pub user_id: Uuid,
    pub passed: bool,
    pub submitted_at: DateTime<Utc>,
    /// Score awarded by the judge, absent when the task is pass/fail only
    pub score: Option<i32>,
}

impl SubmissionVerdict {
    /// Score this verdict is worth before any rule-specific adjustment
    pub fn awarded_score(&self, default_points: i64) -> i64 {
        match self.score {
            Some(score) => i64::from(score),
            None if self.passed => default_points,
            None => 0,
        }
    }
}
