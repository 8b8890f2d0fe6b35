//! Points rules: best score per task, ranked by total score.

use std::cmp::Reverse;

use super::{Evidence, ScoringInput, StandingsConverter};
use crate::{
    config::ScoringConfig,
    models::{ContestTask, StandingsCell, StandingsRow, SubmissionVerdict},
};

/// Cumulative-points converter
#[derive(Debug, Clone)]
pub struct PointsConverter {
    default_points: i64,
}

/// Best credited score seen for one (user, task) pair
#[derive(Debug, Default)]
pub(super) struct BestScore {
    best: i64,
    attempts: u32,
    solved: bool,
}

impl BestScore {
    pub(super) fn add(&mut self, verdict: &SubmissionVerdict, credited: i64) {
        self.attempts += 1;
        self.solved |= verdict.passed;
        // Later, worse runs never lower what was already earned
        self.best = self.best.max(credited);
    }

    pub(super) fn cell(&self, task: &ContestTask) -> StandingsCell {
        StandingsCell {
            task_id: task.task_id,
            label: task.label.clone(),
            attempted: true,
            solved: self.solved,
            attempts: self.attempts,
            solved_at_minutes: None,
            score: self.best,
        }
    }
}

/// Rows for score-ranked rule systems, given how a verdict is credited
pub(super) fn rank_by_best_score<F>(input: &ScoringInput<'_>, credit: F) -> Vec<StandingsRow>
where
    F: Fn(&SubmissionVerdict) -> i64,
{
    let evidence: Evidence<BestScore> =
        input.reduce(|acc: &mut BestScore, verdict| acc.add(verdict, credit(verdict)));
    let rows = input.rows(&evidence, |task, best| best.cell(task));
    input.rank_by(rows, |row| Reverse(row.score))
}

impl PointsConverter {
    pub fn new(default_points: i64) -> Self {
        Self { default_points }
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        Self::new(config.default_task_points)
    }
}

impl StandingsConverter for PointsConverter {
    fn convert(&self, input: &ScoringInput<'_>) -> Vec<StandingsRow> {
        rank_by_best_score(input, |verdict| verdict.awarded_score(self.default_points))
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
        let contest = contest(RuleSystem::Points);
        let tasks = tasks(task_count);
        let users = users(user_count);
        let input = ScoringInput::new(&contest, &tasks, verdicts, &users);
        PointsConverter::new(100).convert(&input)
    }

    #[test]
    fn test_best_attempt_is_credited() {
        let verdicts = vec![
            verdict(1, 1, 10, false, Some(40)),
            verdict(1, 1, 20, false, Some(70)),
            verdict(1, 1, 30, false, Some(55)),
        ];

        let rows = convert(&verdicts, 1, 1);

        assert_eq!(rows[0].cells[0].score, 70);
        assert_eq!(rows[0].cells[0].attempts, 3);
        assert_eq!(rows[0].score, 70);
    }

    #[test]
    fn test_ranked_by_total_score() {
        let verdicts = vec![
            verdict(1, 1, 10, true, Some(100)),
            verdict(2, 1, 10, false, Some(60)),
            verdict(2, 2, 20, false, Some(60)),
            verdict(3, 2, 5, false, Some(30)),
        ];

        let rows = convert(&verdicts, 2, 3);

        let summary: Vec<_> = rows.iter().map(|r| (r.user_id, r.rank, r.score)).collect();
        assert_eq!(
            summary,
            vec![(user_id(2), 1, 120), (user_id(1), 2, 100), (user_id(3), 3, 30)]
        );
        assert_eq!(rows[1].solved, 1);
        assert!(!rows[1].cells[1].attempted);
    }

    #[test]
    fn test_passing_verdict_without_score_uses_default_points() {
        let verdicts = vec![verdict(1, 1, 10, true, None), verdict(1, 2, 10, false, None)];

        let rows = convert(&verdicts, 2, 1);

        assert_eq!(rows[0].cells[0].score, 100);
        assert_eq!(rows[0].cells[1].score, 0);
        assert!(rows[0].cells[1].attempted);
        assert_eq!(rows[0].score, 100);
    }

    #[test]
    fn test_equal_scores_share_rank() {
        let verdicts = vec![
            verdict(2, 1, 10, false, Some(50)),
            verdict(1, 1, 40, false, Some(50)),
        ];

        let first = convert(&verdicts, 1, 2);
        let second = convert(&verdicts, 1, 2);

        assert_eq!(first, second);
        assert_eq!(first[0].user_id, user_id(1));
        assert_eq!(first[0].rank, 1);
        assert_eq!(first[1].rank, 1);
    }
}
