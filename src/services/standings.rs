//! Standings aggregation
//!
//! Picks the converter for the contest's rule system and attaches contest
//! metadata. Adding a rule system must extend the match in [`build_result`].

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    config::ScoringConfig,
    models::{
        Contest, ContestResult, ContestStatus, ContestSummary, ContestTask, RuleSystem,
        StandingsRow, SubmissionVerdict, UserProfile,
    },
    scoring::{
        AcmConverter, CheckPointConverter, PointsConverter, ScoringInput, StandingsConverter,
    },
};

/// Rows for `input` under `rules`
pub fn convert_standings(
    rules: RuleSystem,
    scoring: &ScoringConfig,
    input: &ScoringInput<'_>,
) -> Vec<StandingsRow> {
    match rules {
        RuleSystem::Acm => AcmConverter::from_config(scoring).convert(input),
        RuleSystem::Points => PointsConverter::from_config(scoring).convert(input),
        RuleSystem::CheckPoint => CheckPointConverter::from_config(scoring).convert(input),
    }
}

/// Build the visible standings of `contest` at `now`.
///
/// A planned contest shows no rows.
pub fn build_result(
    contest: &Contest,
    tasks: &[ContestTask],
    verdicts: &[SubmissionVerdict],
    users: &HashMap<Uuid, UserProfile>,
    scoring: &ScoringConfig,
    now: DateTime<Utc>,
) -> ContestResult {
    let summary = ContestSummary::of(contest, now);

    let users = if summary.status == ContestStatus::Planned {
        Vec::new()
    } else {
        let mut ordered = tasks.to_vec();
        ordered.sort_by(|a, b| a.label.cmp(&b.label));
        let input = ScoringInput::new(contest, &ordered, verdicts, users);
        convert_standings(contest.rules, scoring, &input)
    };

    ContestResult {
        contest: summary,
        rules: contest.rules,
        users,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::scoring::fixtures::{contest, start, tasks, user_id, users, verdict};

    fn running() -> DateTime<Utc> {
        start() + Duration::hours(1)
    }

    #[test]
    fn test_dispatches_on_rule_system() {
        let tasks = tasks(1);
        let users = users(2);
        // user 1: one clean pass at 50m; user 2: two failures, scored 90 once
        let verdicts = vec![
            verdict(1, 1, 50, true, Some(10)),
            verdict(2, 1, 5, false, Some(90)),
            verdict(2, 1, 6, false, Some(0)),
        ];
        let scoring = ScoringConfig::default();

        let acm = build_result(&contest(RuleSystem::Acm), &tasks, &verdicts, &users, &scoring, running());
        let points = build_result(
            &contest(RuleSystem::Points),
            &tasks,
            &verdicts,
            &users,
            &scoring,
            running(),
        );

        assert_eq!(acm.rules, RuleSystem::Acm);
        assert_eq!(acm.users[0].user_id, user_id(1));
        assert_eq!(points.rules, RuleSystem::Points);
        assert_eq!(points.users[0].user_id, user_id(2));
    }

    #[test]
    fn test_summary_carries_status_and_schedule() {
        let contest = contest(RuleSystem::Acm);
        let result = build_result(
            &contest,
            &tasks(1),
            &[],
            &users(1),
            &ScoringConfig::default(),
            contest.finish_time,
        );

        assert_eq!(result.contest.status, ContestStatus::Completed);
        assert_eq!(result.contest.start_date, contest.start_time);
        assert_eq!(result.contest.duration_minutes, 300);
        assert!(result.users.is_empty());
    }

    #[test]
    fn test_planned_contest_hides_rows() {
        let contest = contest(RuleSystem::Points);
        let verdicts = vec![verdict(1, 1, 0, true, None)];

        let result = build_result(
            &contest,
            &tasks(1),
            &verdicts,
            &users(1),
            &ScoringConfig::default(),
            contest.start_time - Duration::seconds(1),
        );

        assert_eq!(result.contest.status, ContestStatus::Planned);
        assert!(result.users.is_empty());
    }

    #[test]
    fn test_cells_follow_label_order() {
        let mut shuffled = tasks(3);
        shuffled.reverse();
        let verdicts = vec![verdict(1, 3, 10, true, None)];

        let result = build_result(
            &contest(RuleSystem::Acm),
            &shuffled,
            &verdicts,
            &users(1),
            &ScoringConfig::default(),
            running(),
        );

        let labels: Vec<&str> = result.users[0].cells.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "C"]);
        assert!(result.users[0].cells[2].solved);
    }

    #[test]
    fn test_repeated_builds_are_identical() {
        let contest = contest(RuleSystem::CheckPoint);
        let tasks = tasks(2);
        let users = users(3);
        let verdicts = vec![
            verdict(3, 2, 70, true, Some(60)),
            verdict(1, 1, 10, false, Some(30)),
            verdict(2, 1, 15, true, None),
            verdict(1, 2, 80, true, Some(60)),
        ];
        let scoring = ScoringConfig::default();

        let first = build_result(&contest, &tasks, &verdicts, &users, &scoring, running());
        let second = build_result(&contest, &tasks, &verdicts, &users, &scoring, running());

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
