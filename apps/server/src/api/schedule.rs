use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use trainlog_core::schedule::{
    NewScheduledWorkout, ScheduledWorkout, ScheduledWorkoutUpdate, StartedWorkout,
};

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

pub async fn list_scheduled(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> ApiResult<Json<Vec<ScheduledWorkout>>> {
    let scheduled = state.schedule_service.list_scheduled(&user.id)?;
    Ok(Json(scheduled))
}

pub async fn get_scheduled(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> ApiResult<Json<ScheduledWorkout>> {
    let scheduled = state.schedule_service.get_scheduled(&user.id, &id)?;
    Ok(Json(scheduled))
}

pub async fn create_scheduled(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Json(payload): Json<NewScheduledWorkout>,
) -> ApiResult<(StatusCode, Json<ScheduledWorkout>)> {
    let created = state
        .schedule_service
        .create_scheduled(&user.id, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_scheduled(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Json(payload): Json<ScheduledWorkoutUpdate>,
) -> ApiResult<Json<ScheduledWorkout>> {
    let updated = state
        .schedule_service
        .update_scheduled(&user.id, &id, payload)
        .await?;
    Ok(Json(updated))
}

pub async fn delete_scheduled(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> ApiResult<StatusCode> {
    state
        .schedule_service
        .delete_scheduled(&user.id, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn start_scheduled(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> ApiResult<(StatusCode, Json<StartedWorkout>)> {
    let started = state
        .schedule_service
        .start_scheduled(&user.id, &id)
        .await?;
    Ok((StatusCode::CREATED, Json(started)))
}

pub async fn complete_scheduled(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> ApiResult<Json<ScheduledWorkout>> {
    let completed = state
        .schedule_service
        .complete_scheduled(&user.id, &id)
        .await?;
    Ok(Json(completed))
}
