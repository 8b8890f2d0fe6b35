//! Verdict repository
//!
//! Reads judged submissions. Unjudged submissions have no `submit_results`
//! row and are never returned.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::SubmissionVerdict};

/// Repository for judged submission results
pub struct VerdictRepository;

impl VerdictRepository {
    /// All judged verdicts of a contest
    pub async fn for_contest(pool: &PgPool, contest_id: &Uuid) -> AppResult<Vec<SubmissionVerdict>> {
        let verdicts = sqlx::query_as::<_, SubmissionVerdict>(
            r#"
            SELECT
                s.id AS submission_id,
                s.contest_id,
                s.task_id,
                s.user_id,
                r.passed,
                s.submitted_at,
                r.score
            FROM submissions s
            JOIN submit_results r ON r.submission_id = s.id
            WHERE s.contest_id = $1
            ORDER BY s.submitted_at, s.id
            "#,
        )
        .bind(contest_id)
        .fetch_all(pool)
        .await?;

        Ok(verdicts)
    }

    /// Tasks of a contest the user has at least one passing verdict for
    pub async fn solved_task_ids(
        pool: &PgPool,
        contest_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<Vec<Uuid>> {
        let ids: Vec<Uuid> = sqlx::query_scalar(
            r#"
            SELECT DISTINCT s.task_id
            FROM submissions s
            JOIN submit_results r ON r.submission_id = s.id
            WHERE s.contest_id = $1 AND s.user_id = $2 AND r.passed
            "#,
        )
        .bind(contest_id)
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(ids)
    }
}
