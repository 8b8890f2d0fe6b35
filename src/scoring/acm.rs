//! ACM rules: solved count first, then total penalty time.

use std::cmp::Reverse;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{ScoringInput, StandingsConverter};
use crate::{
    config::ScoringConfig,
    models::{ContestTask, StandingsCell, StandingsRow, SubmissionVerdict},
    utils::time::elapsed_minutes,
};

/// ACM-style converter
#[derive(Debug, Clone)]
pub struct AcmConverter {
    penalty_minutes: i64,
}

/// Position of a run in submission order: time first, then submission id
type RunKey = (DateTime<Utc>, Uuid);

fn run_key(verdict: &SubmissionVerdict) -> RunKey {
    (verdict.submitted_at, verdict.submission_id)
}

/// What is known about one (user, task) pair
#[derive(Debug, Default)]
struct AcmTally {
    first_pass: Option<RunKey>,
    failures: Vec<RunKey>,
}

impl AcmTally {
    fn add(&mut self, verdict: &SubmissionVerdict) {
        let key = run_key(verdict);
        if verdict.passed {
            if self.first_pass.is_none_or(|first| key < first) {
                self.first_pass = Some(key);
            }
        } else {
            self.failures.push(key);
        }
    }

    /// Failures submitted before the first pass; later ones are ignored
    fn counted_failures(&self) -> u32 {
        match self.first_pass {
            Some(first) => self.failures.iter().filter(|&&key| key < first).count() as u32,
            None => self.failures.len() as u32,
        }
    }
}

impl AcmConverter {
    pub fn new(penalty_minutes: i64) -> Self {
        Self { penalty_minutes }
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        Self::new(config.acm_penalty_minutes)
    }

    fn cell(&self, input: &ScoringInput<'_>, task: &ContestTask, tally: &AcmTally) -> StandingsCell {
        let failures = tally.counted_failures();
        let solved_at = tally
            .first_pass
            .map(|(t, _)| elapsed_minutes(input.contest.start_time, t));

        StandingsCell {
            task_id: task.task_id,
            label: task.label.clone(),
            attempted: true,
            solved: solved_at.is_some(),
            attempts: failures + u32::from(solved_at.is_some()),
            solved_at_minutes: solved_at,
            score: 0,
        }
    }

    /// Penalty a cell contributes; unsolved tasks contribute nothing
    fn penalty(&self, cell: &StandingsCell) -> i64 {
        match cell.solved_at_minutes {
            Some(minutes) if cell.solved => {
                i64::from(cell.attempts.saturating_sub(1))
                    .saturating_mul(self.penalty_minutes)
                    .saturating_add(minutes)
            }
            _ => 0,
        }
    }
}

impl StandingsConverter for AcmConverter {
    fn convert(&self, input: &ScoringInput<'_>) -> Vec<StandingsRow> {
        let evidence = input.reduce(AcmTally::add);

        let mut rows = input.rows(&evidence, |task, tally| self.cell(input, task, tally));
        for row in &mut rows {
            row.penalty_minutes = row
                .cells
                .iter()
                .map(|c| self.penalty(c))
                .fold(0, i64::saturating_add);
        }

        input.rank_by(rows, |row| (Reverse(row.solved), row.penalty_minutes))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        models::RuleSystem,
        scoring::fixtures::{contest, tasks, user_id, users, verdict},
    };

    fn convert(verdicts: &[SubmissionVerdict], task_count: u128, user_count: u128) -> Vec<StandingsRow> {
        let contest = contest(RuleSystem::Acm);
        let tasks = tasks(task_count);
        let users = users(user_count);
        let input = ScoringInput::new(&contest, &tasks, verdicts, &users);
        AcmConverter::new(20).convert(&input)
    }

    #[test]
    fn test_more_solved_beats_lower_penalty() {
        let verdicts = vec![
            // user 1: A after one failure at 10m, B at 30m
            verdict(1, 1, 4, false, None),
            verdict(1, 1, 10, true, None),
            verdict(1, 2, 30, true, None),
            // user 2: only A, clean, at 5m
            verdict(2, 1, 5, true, None),
        ];

        let rows = convert(&verdicts, 2, 2);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].user_id, user_id(1));
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].solved, 2);
        assert_eq!(rows[0].penalty_minutes, 20 + 10 + 30);
        assert_eq!(rows[1].user_id, user_id(2));
        assert_eq!(rows[1].rank, 2);
        assert_eq!(rows[1].penalty_minutes, 5);
    }

    #[test]
    fn test_equal_solved_ranked_by_penalty() {
        let verdicts = vec![
            verdict(1, 1, 50, true, None),
            verdict(2, 1, 10, false, None),
            verdict(2, 1, 20, true, None), // 20 + 20 = 40
        ];

        let rows = convert(&verdicts, 1, 2);

        assert_eq!(rows[0].user_id, user_id(2));
        assert_eq!(rows[0].penalty_minutes, 40);
        assert_eq!(rows[1].penalty_minutes, 50);
    }

    #[test]
    fn test_unsolved_failures_count_attempts_but_no_penalty() {
        let verdicts = vec![
            verdict(1, 1, 10, false, None),
            verdict(1, 1, 15, false, None),
            verdict(1, 2, 40, true, None),
        ];

        let rows = convert(&verdicts, 2, 1);
        let cells = &rows[0].cells;

        assert_eq!(rows[0].penalty_minutes, 40);
        assert_eq!(cells[0].attempts, 2);
        assert!(cells[0].attempted);
        assert!(!cells[0].solved);
        assert_eq!(cells[0].solved_at_minutes, None);
    }

    #[test]
    fn test_runs_after_first_pass_are_ignored() {
        let verdicts = vec![
            verdict(1, 1, 30, false, None),
            verdict(1, 1, 12, true, None),
            verdict(1, 1, 25, true, None),
            verdict(1, 1, 3, false, None),
        ];

        let rows = convert(&verdicts, 1, 1);
        let cell = &rows[0].cells[0];

        assert_eq!(cell.attempts, 2);
        assert_eq!(cell.solved_at_minutes, Some(12));
        assert_eq!(rows[0].penalty_minutes, 20 + 12);
    }

    #[test]
    fn test_unattempted_cell_is_distinct_from_failed() {
        let verdicts = vec![verdict(1, 2, 10, false, None)];

        let rows = convert(&verdicts, 3, 1);
        let cells = &rows[0].cells;

        assert_eq!(cells.len(), 3);
        assert_eq!(
            cells.iter().map(|c| c.label.as_str()).collect::<Vec<_>>(),
            vec!["A", "B", "C"]
        );
        assert!(!cells[0].attempted);
        assert!(cells[1].attempted);
        assert!(!cells[2].attempted);
    }

    #[test]
    fn test_users_without_verdicts_are_excluded() {
        let verdicts = vec![verdict(2, 1, 10, true, None)];

        let rows = convert(&verdicts, 1, 5);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].user_id, user_id(2));
    }

    #[test]
    fn test_same_instant_runs_follow_submission_order() {
        let mut early_failure = verdict(1, 1, 15, false, None);
        early_failure.submission_id = Uuid::from_u128(1);
        let mut pass = verdict(1, 1, 15, true, None);
        pass.submission_id = Uuid::from_u128(2);
        let mut late_failure = verdict(1, 1, 15, false, None);
        late_failure.submission_id = Uuid::from_u128(3);

        let rows = convert(&[late_failure, pass, early_failure], 1, 1);
        let cell = &rows[0].cells[0];

        assert_eq!(cell.attempts, 2);
        assert_eq!(cell.solved_at_minutes, Some(15));
        assert_eq!(rows[0].penalty_minutes, 20 + 15);
    }

    #[test]
    fn test_huge_penalty_saturates_instead_of_overflowing() {
        let contest = contest(RuleSystem::Acm);
        let tasks = tasks(2);
        let users = users(1);
        let verdicts = vec![
            verdict(1, 1, 1, false, None),
            verdict(1, 1, 2, false, None),
            verdict(1, 1, 3, false, None),
            verdict(1, 1, 4, true, None),
            verdict(1, 2, 5, false, None),
            verdict(1, 2, 6, true, None),
        ];
        let input = ScoringInput::new(&contest, &tasks, &verdicts, &users);

        let rows = AcmConverter::new(i64::MAX / 2).convert(&input);

        assert_eq!(rows[0].solved, 2);
        assert_eq!(rows[0].penalty_minutes, i64::MAX);
    }

    #[test]
    fn test_conversion_is_idempotent() {
        let verdicts = vec![
            verdict(3, 1, 10, true, None),
            verdict(1, 1, 10, true, None),
            verdict(2, 2, 7, false, None),
            verdict(2, 1, 10, true, None),
        ];

        let first = convert(&verdicts, 2, 3);
        let second = convert(&verdicts, 2, 3);

        assert_eq!(first, second);
        // a three-way tie: registration order decides
        assert_eq!(first[0].user_id, user_id(1));
        assert_eq!(first[1].user_id, user_id(2));
        assert_eq!(first[2].user_id, user_id(3));
        assert_eq!(first.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 1, 1]);
    }
}
