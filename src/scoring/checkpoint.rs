//! CheckPoint rules: like Points, but credit depends on the checkpoint time.
//!
//! A run submitted strictly before the contest checkpoint earns its score
//! plus the configured bonus percent; a run at or after the checkpoint earns
//! only the configured share of its score. Without a checkpoint every run is
//! credited at face value. The best credited run per task counts.

use chrono::{DateTime, Utc};

use super::{ScoringInput, StandingsConverter, points::rank_by_best_score};
use crate::{
    config::ScoringConfig,
    models::{StandingsRow, SubmissionVerdict},
};

/// Time-gated points converter
#[derive(Debug, Clone)]
pub struct CheckPointConverter {
    default_points: i64,
    bonus_percent: i64,
    post_checkpoint_percent: i64,
}

impl CheckPointConverter {
    pub fn new(default_points: i64, bonus_percent: i64, post_checkpoint_percent: i64) -> Self {
        Self {
            default_points,
            bonus_percent,
            post_checkpoint_percent,
        }
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        Self::new(
            config.default_task_points,
            config.checkpoint_bonus_percent,
            config.post_checkpoint_percent,
        )
    }

    fn credit(&self, checkpoint: Option<DateTime<Utc>>, verdict: &SubmissionVerdict) -> i64 {
        let score = verdict.awarded_score(self.default_points);
        match checkpoint {
            None => score,
            Some(at) if verdict.submitted_at < at => {
                score.saturating_mul(self.bonus_percent.saturating_add(100)) / 100
            }
            Some(_) => score.saturating_mul(self.post_checkpoint_percent) / 100,
        }
    }
}

impl StandingsConverter for CheckPointConverter {
    fn convert(&self, input: &ScoringInput<'_>) -> Vec<StandingsRow> {
        let checkpoint = input.contest.checkpoint_time;
        rank_by_best_score(input, |verdict| self.credit(checkpoint, verdict))
    }
}
