use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use trainlog_core::exercises::{Exercise, ExerciseUpdate, NewExercise};

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

pub async fn list_exercises(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> ApiResult<Json<Vec<Exercise>>> {
    let exercises = state.exercise_service.list_exercises(&user.id)?;
    Ok(Json(exercises))
}

pub async fn get_exercise(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> ApiResult<Json<Exercise>> {
    let exercise = state.exercise_service.get_exercise(&user.id, &id)?;
    Ok(Json(exercise))
}

pub async fn create_exercise(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Json(payload): Json<NewExercise>,
) -> ApiResult<(StatusCode, Json<Exercise>)> {
    let created = state
        .exercise_service
        .create_exercise(&user.id, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_exercise(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Json(payload): Json<ExerciseUpdate>,
) -> ApiResult<Json<Exercise>> {
    let updated = state
        .exercise_service
        .update_exercise(&user.id, &id, payload)
        .await?;
    Ok(Json(updated))
}

pub async fn delete_exercise(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> ApiResult<StatusCode> {
    state.exercise_service.delete_exercise(&user.id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
