//! Contest service

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    config::ScoringConfig,
    db::repositories::{ContestRepository, UserRepository, VerdictRepository},
    error::{AppError, AppResult},
    handlers::contests::{
        request::EditContestRequest,
        response::{
            ContestDefinitionResponse, ContestDetailsResponse, ContestTaskResponse,
            ContestsListResponse,
        },
    },
    models::{Contest, ContestRecord, ContestResult, ContestStatus, ContestSummary, UserProfile},
    scoring::ScoringInput,
    services::{
        standings::build_result,
        task_sync::{TaskAssignment, TaskChanges},
    },
    utils::format_duration,
};

/// Contest service for business logic
pub struct ContestService;

impl ContestService {
    /// List contests with pagination
    pub async fn search_contests(
        pool: &PgPool,
        skip: u32,
        take: u32,
        now: DateTime<Utc>,
    ) -> AppResult<ContestsListResponse> {
        let (records, total_count) =
            ContestRepository::list(pool, i64::from(skip), i64::from(take)).await?;

        Ok(ContestsListResponse {
            items: Self::summaries(&records, now),
            total_count,
        })
    }

    /// Get a contest with its tasks, marking those `user_id` has solved
    pub async fn get_contest(
        pool: &PgPool,
        id: &Uuid,
        user_id: Option<&Uuid>,
        now: DateTime<Utc>,
    ) -> AppResult<ContestDetailsResponse> {
        let record = ContestRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))?;
        let summary = ContestSummary::of_record(&record, now);

        let tasks = if summary.status == ContestStatus::Planned {
            Vec::new()
        } else {
            let tasks = ContestRepository::tasks(pool, id).await?;
            let solved: HashSet<Uuid> = match user_id {
                Some(user_id) => VerdictRepository::solved_task_ids(pool, id, user_id)
                    .await?
                    .into_iter()
                    .collect(),
                None => HashSet::new(),
            };

            tasks
                .into_iter()
                .map(|t| ContestTaskResponse {
                    solved: solved.contains(&t.task_id),
                    task_id: t.task_id,
                    name: t.task_name,
                    label: t.label,
                })
                .collect()
        };

        Ok(ContestDetailsResponse {
            contest: summary,
            rules: record.rules,
            one_language_per_task: record.one_language_per_task,
            tasks,
        })
    }

    /// Compute the standings of a contest from a fresh snapshot
    pub async fn get_result(
        pool: &PgPool,
        id: &Uuid,
        scoring: &ScoringConfig,
        now: DateTime<Utc>,
    ) -> AppResult<ContestResult> {
        let contest = Self::load(pool, id).await?;

        let (tasks, verdicts) = futures::try_join!(
            ContestRepository::tasks(pool, id),
            VerdictRepository::for_contest(pool, id),
        )?;

        let mut user_ids: Vec<Uuid> = verdicts.iter().map(|v| v.user_id).collect();
        user_ids.sort_unstable();
        user_ids.dedup();
        let users: HashMap<Uuid, UserProfile> = UserRepository::find_many(pool, &user_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let orphans = ScoringInput::new(&contest, &tasks, &verdicts, &users).count_orphans();
        if orphans > 0 {
            tracing::debug!(
                contest_id = %id,
                orphans,
                "Skipping verdicts that reference unknown tasks or users"
            );
        }

        let result = build_result(&contest, &tasks, &verdicts, &users, scoring, now);

        tracing::info!(
            contest_id = %id,
            rules = %contest.rules,
            status = %result.contest.status,
            duration = %format_duration(contest.duration()),
            rows = result.users.len(),
            "Standings computed"
        );

        Ok(result)
    }

    /// Create (`id == None`) or update a contest, syncing its task list
    pub async fn save_contest(
        pool: &PgPool,
        id: Option<&Uuid>,
        payload: EditContestRequest,
    ) -> AppResult<ContestDefinitionResponse> {
        payload.check_consistency()?;

        let mut tx = pool.begin().await?;

        let (record, existing) = match id {
            Some(id) => {
                let record = ContestRepository::update(&mut tx, id, &payload)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))?;
                let existing = ContestRepository::tasks(&mut *tx, id).await?;
                (record, existing)
            }
            None => (ContestRepository::create(&mut tx, &payload).await?, Vec::new()),
        };

        let changes = TaskChanges::plan(&existing, &payload.tasks);
        for task_id in &changes.removed {
            ContestRepository::remove_task(&mut tx, &record.id, task_id).await?;
        }
        for TaskAssignment { task_id, label } in &changes.relabeled {
            ContestRepository::relabel_task(&mut tx, &record.id, task_id, label).await?;
        }
        for TaskAssignment { task_id, label } in &changes.added {
            ContestRepository::add_task(&mut tx, &record.id, task_id, label).await?;
        }

        tx.commit().await?;

        tracing::info!(
            contest_id = %record.id,
            created = id.is_none(),
            added = changes.added.len(),
            removed = changes.removed.len(),
            relabeled = changes.relabeled.len(),
            "Contest saved"
        );

        Ok(ContestDefinitionResponse {
            id: record.id,
            name: record.name,
            start_time: record.start_time,
            finish_time: record.finish_time,
            checkpoint_time: record.checkpoint_time,
            one_language_per_task: record.one_language_per_task,
            is_opened: record.is_opened,
            rules: payload.rules,
            tasks: payload.tasks,
        })
    }

    /// List summaries never read the rule tag, so one bad row cannot hide the rest
    fn summaries(records: &[ContestRecord], now: DateTime<Utc>) -> Vec<ContestSummary> {
        records
            .iter()
            .map(|record| ContestSummary::of_record(record, now))
            .collect()
    }

    async fn load(pool: &PgPool, id: &Uuid) -> AppResult<Contest> {
        let record = ContestRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))?;

        Contest::try_from(record)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::RuleSystem;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()
    }

    fn record(n: u128, rules: &str) -> ContestRecord {
        ContestRecord {
            id: Uuid::from_u128(n),
            name: format!("Round {}", n),
            start_time: start(),
            finish_time: start() + Duration::hours(2),
            checkpoint_time: None,
            one_language_per_task: false,
            is_opened: true,
            rules: rules.to_string(),
            created_at: start(),
            updated_at: start(),
        }
    }

    fn assign(task_id: Uuid, label: &str) -> TaskAssignment {
        TaskAssignment {
            task_id,
            label: label.to_string(),
        }
    }

    fn payload(tasks: Vec<TaskAssignment>) -> EditContestRequest {
        EditContestRequest {
            name: "Spring Cup".to_string(),
            start_time: start(),
            finish_time: start() + Duration::hours(5),
            checkpoint_time: None,
            one_language_per_task: false,
            is_opened: true,
            rules: RuleSystem::Acm,
            tasks,
        }
    }

    async fn seed_task(pool: &PgPool, name: &str) -> Uuid {
        sqlx::query_scalar("INSERT INTO tasks (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    async fn contest_count(pool: &PgPool) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM contests")
            .fetch_one(pool)
            .await
            .unwrap()
    }

    async fn labels(pool: &PgPool, contest_id: &Uuid) -> Vec<(Uuid, String)> {
        ContestRepository::tasks(pool, contest_id)
            .await
            .unwrap()
            .into_iter()
            .map(|t| (t.task_id, t.label))
            .collect()
    }

    #[test]
    fn test_unknown_rule_tag_does_not_hide_other_summaries() {
        let records = vec![record(1, "acm"), record(2, "codeforces"), record(3, "points")];

        let items = ContestService::summaries(&records, start() + Duration::hours(1));

        assert_eq!(
            items.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![Uuid::from_u128(1), Uuid::from_u128(2), Uuid::from_u128(3)]
        );
        assert!(items.iter().all(|s| s.status == ContestStatus::Running));
        assert_eq!(items[1].duration_minutes, 120);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs a Postgres instance in DATABASE_URL"]
    async fn test_save_contest_swaps_labels_in_one_edit(pool: PgPool) {
        let first = seed_task(&pool, "Sum").await;
        let second = seed_task(&pool, "Product").await;

        let created = ContestService::save_contest(
            &pool,
            None,
            payload(vec![assign(first, "A"), assign(second, "B")]),
        )
        .await
        .unwrap();

        ContestService::save_contest(
            &pool,
            Some(&created.id),
            payload(vec![assign(first, "B"), assign(second, "A")]),
        )
        .await
        .unwrap();

        assert_eq!(
            labels(&pool, &created.id).await,
            vec![(second, "A".to_string()), (first, "B".to_string())]
        );
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs a Postgres instance in DATABASE_URL"]
    async fn test_save_contest_replaces_only_the_dropped_task(pool: PgPool) {
        let a = seed_task(&pool, "Sum").await;
        let b = seed_task(&pool, "Product").await;
        let c = seed_task(&pool, "Gcd").await;

        let created =
            ContestService::save_contest(&pool, None, payload(vec![assign(a, "1"), assign(b, "2")]))
                .await
                .unwrap();
        ContestService::save_contest(
            &pool,
            Some(&created.id),
            payload(vec![assign(a, "1"), assign(c, "3")]),
        )
        .await
        .unwrap();

        assert_eq!(
            labels(&pool, &created.id).await,
            vec![(a, "1".to_string()), (c, "3".to_string())]
        );
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs a Postgres instance in DATABASE_URL"]
    async fn test_save_contest_unknown_id_is_not_found(pool: PgPool) {
        let task = seed_task(&pool, "Sum").await;

        let result = ContestService::save_contest(
            &pool,
            Some(&Uuid::from_u128(404)),
            payload(vec![assign(task, "A")]),
        )
        .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(contest_count(&pool).await, 0);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs a Postgres instance in DATABASE_URL"]
    async fn test_failed_task_insert_rolls_back_the_new_contest(pool: PgPool) {
        let task = seed_task(&pool, "Sum").await;

        let result = ContestService::save_contest(
            &pool,
            None,
            payload(vec![assign(task, "A"), assign(Uuid::from_u128(404), "B")]),
        )
        .await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
        assert_eq!(contest_count(&pool).await, 0);
    }
}
