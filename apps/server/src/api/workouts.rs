use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use trainlog_core::workouts::{NewWorkout, WorkoutDetail, WorkoutSummary, WorkoutUpdate};

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

pub async fn list_workouts(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> ApiResult<Json<Vec<WorkoutSummary>>> {
    let workouts = state.workout_service.list_workouts(&user.id)?;
    Ok(Json(workouts))
}

pub async fn get_workout(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> ApiResult<Json<WorkoutDetail>> {
    let detail = state.workout_service.get_workout(&user.id, &id)?;
    Ok(Json(detail))
}

pub async fn create_workout(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Json(payload): Json<NewWorkout>,
) -> ApiResult<(StatusCode, Json<WorkoutSummary>)> {
    let created = state
        .workout_service
        .create_workout(&user.id, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_workout(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Json(payload): Json<WorkoutUpdate>,
) -> ApiResult<Json<WorkoutSummary>> {
    let updated = state
        .workout_service
        .update_workout(&user.id, &id, payload)
        .await?;
    Ok(Json(updated))
}

pub async fn finish_workout(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> ApiResult<Json<WorkoutDetail>> {
    let detail = state.workout_service.finish_workout(&user.id, &id).await?;
    Ok(Json(detail))
}

pub async fn delete_workout(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> ApiResult<StatusCode> {
    state.workout_service.delete_workout(&user.id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
