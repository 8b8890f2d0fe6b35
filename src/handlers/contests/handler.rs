//! Contest handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::AppResult,
    models::ContestResult,
    services::ContestService,
    state::AppState,
    utils::now_utc,
};

use super::{
    request::{ContestQuery, EditContestRequest, ListContestsQuery},
    response::{ContestDefinitionResponse, ContestDetailsResponse, ContestsListResponse},
};

/// List contests
pub async fn list_contests(
    State(state): State<AppState>,
    Query(query): Query<ListContestsQuery>,
) -> AppResult<Json<ContestsListResponse>> {
    let skip = query.skip.unwrap_or(0);
    let take = query.take.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);

    let contests = ContestService::search_contests(state.db(), skip, take, now_utc()).await?;
    Ok(Json(contests))
}

/// Create a new contest
pub async fn create_contest(
    State(state): State<AppState>,
    Json(payload): Json<EditContestRequest>,
) -> AppResult<(StatusCode, Json<ContestDefinitionResponse>)> {
    payload.validate()?;

    let contest = ContestService::save_contest(state.db(), None, payload).await?;
    Ok((StatusCode::CREATED, Json(contest)))
}

/// Get a specific contest
pub async fn get_contest(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ContestQuery>,
) -> AppResult<Json<ContestDetailsResponse>> {
    let contest =
        ContestService::get_contest(state.db(), &id, query.user_id.as_ref(), now_utc()).await?;
    Ok(Json(contest))
}

/// Update a contest and its task list
pub async fn update_contest(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<EditContestRequest>,
) -> AppResult<Json<ContestDefinitionResponse>> {
    payload.validate()?;

    let contest = ContestService::save_contest(state.db(), Some(&id), payload).await?;
    Ok(Json(contest))
}

/// Get contest standings
pub async fn get_results(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ContestResult>> {
    let result =
        ContestService::get_result(state.db(), &id, &state.config().scoring, now_utc()).await?;
    Ok(Json(result))
}
