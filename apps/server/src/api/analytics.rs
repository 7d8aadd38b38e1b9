use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use trainlog_core::analytics::{
    MaxWeightPoint, PersonalRecord, VolumePoint, DEFAULT_MAX_WEIGHT_DAYS, DEFAULT_VOLUME_DAYS,
};
use trainlog_core::errors::{Error, ValidationError};

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
pub struct VolumeQuery {
    pub days: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxWeightQuery {
    pub exercise_id: Option<String>,
    pub days: Option<i64>,
}

pub async fn volume_by_day(
    Query(query): Query<VolumeQuery>,
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> ApiResult<Json<Vec<VolumePoint>>> {
    let days = query.days.unwrap_or(DEFAULT_VOLUME_DAYS);
    let points = state.analytics_service.volume_by_day(&user.id, days)?;
    Ok(Json(points))
}

pub async fn max_weight_by_day(
    Query(query): Query<MaxWeightQuery>,
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> ApiResult<Json<Vec<MaxWeightPoint>>> {
    let exercise_id = query.exercise_id.ok_or_else(|| {
        Error::Validation(ValidationError::MissingField("exercise_id".to_string()))
    })?;
    let days = query.days.unwrap_or(DEFAULT_MAX_WEIGHT_DAYS);
    let points = state
        .analytics_service
        .max_weight_by_day(&user.id, &exercise_id, days)?;
    Ok(Json(points))
}

pub async fn personal_records(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> ApiResult<Json<Vec<PersonalRecord>>> {
    let records = state.analytics_service.personal_records(&user.id)?;
    Ok(Json(records))
}
