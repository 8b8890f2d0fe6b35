//! Standings computation
//!
//! Every rule system is a [`StandingsConverter`]: a pure function from a
//! snapshot of contest data to ranked rows. Converters never mutate their
//! input and never do I/O, so they can be called concurrently and repeatedly.
//!
//! Shared mechanics live here:
//! - orphaned evidence (another contest, unknown task, unknown user) is skipped
//! - verdicts are folded once into a per-(user, task) accumulator
//! - rows get one cell per contest task, in task order
//! - ranking ties fall back to registration order, then user id

pub mod acm;
pub mod checkpoint;
pub mod points;

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::models::{Contest, ContestTask, StandingsCell, StandingsRow, SubmissionVerdict, UserProfile};

pub use acm::AcmConverter;
pub use checkpoint::CheckPointConverter;
pub use points::PointsConverter;

/// Read-only data one standings computation works on
#[derive(Debug, Clone, Copy)]
pub struct ScoringInput<'a> {
    pub contest: &'a Contest,
    /// Contest tasks, already in label order
    pub tasks: &'a [ContestTask],
    pub verdicts: &'a [SubmissionVerdict],
    pub users: &'a HashMap<Uuid, UserProfile>,
}

/// Accumulators keyed by user, then by task
pub type Evidence<A> = HashMap<Uuid, HashMap<Uuid, A>>;

/// Capability shared by all rule systems
pub trait StandingsConverter {
    /// Build the ranked rows. Users without evidence get no row.
    fn convert(&self, input: &ScoringInput<'_>) -> Vec<StandingsRow>;
}

impl<'a> ScoringInput<'a> {
    pub fn new(
        contest: &'a Contest,
        tasks: &'a [ContestTask],
        verdicts: &'a [SubmissionVerdict],
        users: &'a HashMap<Uuid, UserProfile>,
    ) -> Self {
        Self {
            contest,
            tasks,
            verdicts,
            users,
        }
    }

    fn task_ids(&self) -> HashSet<Uuid> {
        self.tasks.iter().map(|t| t.task_id).collect()
    }

    fn is_relevant(&self, task_ids: &HashSet<Uuid>, verdict: &SubmissionVerdict) -> bool {
        verdict.contest_id == self.contest.id
            && task_ids.contains(&verdict.task_id)
            && self.users.contains_key(&verdict.user_id)
    }

    /// Number of verdicts that will be ignored as inconsistent
    pub fn count_orphans(&self) -> usize {
        let task_ids = self.task_ids();
        self.verdicts
            .iter()
            .filter(|v| !self.is_relevant(&task_ids, v))
            .count()
    }

    /// Fold every relevant verdict into its (user, task) accumulator in one pass.
    pub fn reduce<A, F>(&self, mut fold: F) -> Evidence<A>
    where
        A: Default,
        F: FnMut(&mut A, &SubmissionVerdict),
    {
        let task_ids = self.task_ids();
        let mut evidence: Evidence<A> = HashMap::new();

        for verdict in self.verdicts {
            if !self.is_relevant(&task_ids, verdict) {
                continue;
            }
            let acc = evidence
                .entry(verdict.user_id)
                .or_default()
                .entry(verdict.task_id)
                .or_default();
            fold(acc, verdict);
        }

        evidence
    }

    /// Turn per-user evidence into unranked rows with one cell per task.
    ///
    /// `solved` and `score` are summed over the cells, saturating; penalty is
    /// left at zero.
    pub fn rows<A, F>(&self, evidence: &Evidence<A>, to_cell: F) -> Vec<StandingsRow>
    where
        F: Fn(&ContestTask, &A) -> StandingsCell,
    {
        evidence
            .iter()
            .filter_map(|(user_id, per_task)| {
                let user = self.users.get(user_id)?;
                let cells: Vec<StandingsCell> = self
                    .tasks
                    .iter()
                    .map(|task| match per_task.get(&task.task_id) {
                        Some(acc) => to_cell(task, acc),
                        None => StandingsCell::unattempted(task.task_id, &task.label),
                    })
                    .collect();

                Some(StandingsRow {
                    rank: 0,
                    user_id: *user_id,
                    user_name: user.name().to_string(),
                    solved: cells.iter().filter(|c| c.solved).count() as u32,
                    penalty_minutes: 0,
                    score: cells.iter().map(|c| c.score).fold(0, i64::saturating_add),
                    cells,
                })
            })
            .collect()
    }

    /// Order rows by `key` (smaller is better) and assign competition ranks.
    ///
    /// Rows with equal keys share a rank and are listed by registration
    /// instant, then user id, so the order is total.
    pub fn rank_by<K, F>(&self, mut rows: Vec<StandingsRow>, key: F) -> Vec<StandingsRow>
    where
        K: Ord,
        F: Fn(&StandingsRow) -> K,
    {
        rows.sort_by(|a, b| {
            key(a)
                .cmp(&key(b))
                .then_with(|| self.registration(a).cmp(&self.registration(b)))
                .then_with(|| a.user_id.cmp(&b.user_id))
        });

        let mut rank = 0;
        for i in 0..rows.len() {
            if i == 0 || key(&rows[i - 1]) != key(&rows[i]) {
                rank = i as u32 + 1;
            }
            rows[i].rank = rank;
        }

        rows
    }

    fn registration(&self, row: &StandingsRow) -> Option<chrono::DateTime<chrono::Utc>> {
        self.users.get(&row.user_id).map(|u| u.registered_at)
    }
}
