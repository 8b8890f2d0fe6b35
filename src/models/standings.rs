//! Standings output model

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::{Contest, ContestRecord, ContestStatus, RuleSystem};

/// One (user, task) cell of the standings table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingsCell {
    pub task_id: Uuid,
    pub label: String,
    /// False if the user never submitted this task
    pub attempted: bool,
    pub solved: bool,
    /// Counted attempts; what counts depends on the rule system
    pub attempts: u32,
    /// Minutes from contest start to the first accepted run (ACM)
    pub solved_at_minutes: Option<i64>,
    pub score: i64,
}

impl StandingsCell {
    pub fn unattempted(task_id: Uuid, label: &str) -> Self {
        Self {
            task_id,
            label: label.to_string(),
            attempted: false,
            solved: false,
            attempts: 0,
            solved_at_minutes: None,
            score: 0,
        }
    }
}

/// One user's ranked row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingsRow {
    /// Competition rank; equal rule keys share a rank
    pub rank: u32,
    pub user_id: Uuid,
    pub user_name: String,
    pub solved: u32,
    /// Total penalty minutes (ACM only, zero otherwise)
    pub penalty_minutes: i64,
    /// Total score (Points and CheckPoint)
    pub score: i64,
    pub cells: Vec<StandingsCell>,
}

/// Contest summary shown in lists and result headers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContestSummary {
    pub id: Uuid,
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub duration_minutes: i64,
    pub status: ContestStatus,
}

impl ContestSummary {
    pub fn of(contest: &Contest, now: DateTime<Utc>) -> Self {
        Self {
            id: contest.id,
            name: contest.name.clone(),
            start_date: contest.start_time,
            duration_minutes: contest.duration().num_minutes(),
            status: contest.status_at(now),
        }
    }

    /// Summary of a stored contest, usable even when its rule tag is unknown
    pub fn of_record(record: &ContestRecord, now: DateTime<Utc>) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            start_date: record.start_time,
            duration_minutes: (record.finish_time - record.start_time).num_minutes(),
            status: record.status_at(now),
        }
    }
}

/// Externally visible standings of a contest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContestResult {
    #[serde(flatten)]
    pub contest: ContestSummary,
    pub rules: RuleSystem,
    pub users: Vec<StandingsRow>,
}
