//! Contest repository

use sqlx::{PgConnection, PgExecutor, PgPool};
use uuid::Uuid;

use crate::{
    error::AppResult,
    handlers::contests::request::EditContestRequest,
    models::{ContestRecord, ContestTask},
};

/// Repository for contest database operations
pub struct ContestRepository;

impl ContestRepository {
    /// Create a new contest
    pub async fn create(
        conn: &mut PgConnection,
        payload: &EditContestRequest,
    ) -> AppResult<ContestRecord> {
        let contest = sqlx::query_as::<_, ContestRecord>(
            r#"
            INSERT INTO contests (
                name, start_time, finish_time, checkpoint_time,
                one_language_per_task, is_opened, rules
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&payload.name)
        .bind(payload.start_time)
        .bind(payload.finish_time)
        .bind(payload.checkpoint_time)
        .bind(payload.one_language_per_task)
        .bind(payload.is_opened)
        .bind(payload.rules.as_str())
        .fetch_one(conn)
        .await?;

        Ok(contest)
    }

    /// Overwrite the editable fields of a contest
    pub async fn update(
        conn: &mut PgConnection,
        id: &Uuid,
        payload: &EditContestRequest,
    ) -> AppResult<Option<ContestRecord>> {
        let contest = sqlx::query_as::<_, ContestRecord>(
            r#"
            UPDATE contests
            SET
                name = $2,
                start_time = $3,
                finish_time = $4,
                checkpoint_time = $5,
                one_language_per_task = $6,
                is_opened = $7,
                rules = $8,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&payload.name)
        .bind(payload.start_time)
        .bind(payload.finish_time)
        .bind(payload.checkpoint_time)
        .bind(payload.one_language_per_task)
        .bind(payload.is_opened)
        .bind(payload.rules.as_str())
        .fetch_optional(conn)
        .await?;

        Ok(contest)
    }

    /// Find contest by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<ContestRecord>> {
        let contest =
            sqlx::query_as::<_, ContestRecord>(r#"SELECT * FROM contests WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(contest)
    }

    /// List contests with pagination, newest first
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<ContestRecord>, i64)> {
        let contests = sqlx::query_as::<_, ContestRecord>(
            r#"
            SELECT * FROM contests
            ORDER BY start_time DESC, id
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM contests"#)
            .fetch_one(pool)
            .await?;

        Ok((contests, count))
    }

    /// Tasks of a contest in label order
    pub async fn tasks<'e, E>(executor: E, contest_id: &Uuid) -> AppResult<Vec<ContestTask>>
    where
        E: PgExecutor<'e>,
    {
        let tasks = sqlx::query_as::<_, ContestTask>(
            r#"
            SELECT ct.contest_id, ct.task_id, ct.label, t.name AS task_name
            FROM contest_tasks ct
            JOIN tasks t ON t.id = ct.task_id
            WHERE ct.contest_id = $1
            ORDER BY ct.label
            "#,
        )
        .bind(contest_id)
        .fetch_all(executor)
        .await?;

        Ok(tasks)
    }

    /// Attach a task to a contest
    pub async fn add_task(
        conn: &mut PgConnection,
        contest_id: &Uuid,
        task_id: &Uuid,
        label: &str,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO contest_tasks (contest_id, task_id, label)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(contest_id)
        .bind(task_id)
        .bind(label)
        .execute(conn)
        .await?;

        Ok(())
    }

    /// Change the label of an attached task
    pub async fn relabel_task(
        conn: &mut PgConnection,
        contest_id: &Uuid,
        task_id: &Uuid,
        label: &str,
    ) -> AppResult<()> {
        sqlx::query(
            r#"UPDATE contest_tasks SET label = $3 WHERE contest_id = $1 AND task_id = $2"#,
        )
        .bind(contest_id)
        .bind(task_id)
        .bind(label)
        .execute(conn)
        .await?;

        Ok(())
    }

    /// Detach a task from a contest
    pub async fn remove_task(
        conn: &mut PgConnection,
        contest_id: &Uuid,
        task_id: &Uuid,
    ) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM contest_tasks WHERE contest_id = $1 AND task_id = $2"#)
            .bind(contest_id)
            .bind(task_id)
            .execute(conn)
            .await?;

        Ok(())
    }
}
