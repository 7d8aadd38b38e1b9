use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use trainlog_core::sets::{NewWorkoutSet, WorkoutSet, WorkoutSetUpdate};

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

pub async fn list_sets(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> ApiResult<Json<Vec<WorkoutSet>>> {
    let sets = state.set_service.list_sets(&user.id)?;
    Ok(Json(sets))
}

pub async fn get_set(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> ApiResult<Json<WorkoutSet>> {
    let set = state.set_service.get_set(&user.id, &id)?;
    Ok(Json(set))
}

pub async fn create_set(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Json(payload): Json<NewWorkoutSet>,
) -> ApiResult<(StatusCode, Json<WorkoutSet>)> {
    let created = state.set_service.create_set(&user.id, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_set(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Json(payload): Json<WorkoutSetUpdate>,
) -> ApiResult<Json<WorkoutSet>> {
    let updated = state.set_service.update_set(&user.id, &id, payload).await?;
    Ok(Json(updated))
}

pub async fn delete_set(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> ApiResult<StatusCode> {
    state.set_service.delete_set(&user.id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
