//! Contest model

use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::{
    constants::rule_systems,
    error::{AppError, AppResult},
};

/// Contest database row
#[derive(Debug, Clone, FromRow)]
pub struct ContestRecord {
    pub id: Uuid,
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub finish_time: DateTime<Utc>,
    pub checkpoint_time: Option<DateTime<Utc>>,
    pub one_language_per_task: bool,
    pub is_opened: bool,
    pub rules: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Read-only contest snapshot handed to the scoring engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contest {
    pub id: Uuid,
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub finish_time: DateTime<Utc>,
    pub checkpoint_time: Option<DateTime<Utc>>,
    pub one_language_per_task: bool,
    pub is_opened: bool,
    pub rules: RuleSystem,
}

impl Contest {
    /// Status of the contest at `now`
    pub fn status_at(&self, now: DateTime<Utc>) -> ContestStatus {
        ContestStatus::classify(self, now)
    }

    pub fn duration(&self) -> Duration {
        self.finish_time - self.start_time
    }
}

impl ContestRecord {
    /// Status of the stored schedule at `now`; the rule tag is not read
    pub fn status_at(&self, now: DateTime<Utc>) -> ContestStatus {
        ContestStatus::within(self.start_time, self.finish_time, now)
    }
}

impl TryFrom<ContestRecord> for Contest {
    type Error = AppError;

    fn try_from(record: ContestRecord) -> AppResult<Self> {
        let rules = record.rules.parse::<RuleSystem>().map_err(|e| {
            AppError::Configuration(format!("contest {}: {}", record.id, e))
        })?;

        Ok(Self {
            id: record.id,
            name: record.name,
            start_time: record.start_time,
            finish_time: record.finish_time,
            checkpoint_time: record.checkpoint_time,
            one_language_per_task: record.one_language_per_task,
            is_opened: record.is_opened,
            rules,
        })
    }
}

/// Scoring rule family a contest is configured with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSystem {
    Acm,
    Points,
    CheckPoint,
}

impl RuleSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Acm => rule_systems::ACM,
            Self::Points => rule_systems::POINTS,
            Self::CheckPoint => rule_systems::CHECKPOINT,
        }
    }
}

impl std::fmt::Display for RuleSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rule-system tag outside the supported set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule system '{0}'")]
pub struct UnknownRuleSystem(pub String);

impl FromStr for RuleSystem {
    type Err = UnknownRuleSystem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            rule_systems::ACM => Ok(Self::Acm),
            rule_systems::POINTS => Ok(Self::Points),
            rule_systems::CHECKPOINT => Ok(Self::CheckPoint),
            other => Err(UnknownRuleSystem(other.to_string())),
        }
    }
}

/// Temporal state of a contest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContestStatus {
    Planned,
    Running,
    Completed,
}

impl ContestStatus {
    /// Classify `contest` at the instant `now`.
    ///
    /// The start instant already counts as running and the finish instant
    /// as completed. Never cache the result: `now` moves on its own.
    pub fn classify(contest: &Contest, now: DateTime<Utc>) -> Self {
        Self::within(contest.start_time, contest.finish_time, now)
    }

    /// Same as [`ContestStatus::classify`], for a bare schedule
    pub fn within(start: DateTime<Utc>, finish: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if now < start {
            Self::Planned
        } else if now < finish {
            Self::Running
        } else {
            Self::Completed
        }
    }
}

impl std::fmt::Display for ContestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Planned => write!(f, "planned"),
            Self::Running => write!(f, "running"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// Task attached to a contest under a contest-local label
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ContestTask {
    pub contest_id: Uuid,
    pub task_id: Uuid,
    pub label: String,
    pub task_name: String,
}
