use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use trainlog_core::analytics::CalendarDay;
use trainlog_core::schedule::ScheduledWorkout;

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
pub struct CalendarQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

pub async fn get_calendar(
    Query(query): Query<CalendarQuery>,
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> ApiResult<Json<Vec<CalendarDay>>> {
    let days = state.analytics_service.calendar(
        &user.id,
        query.start,
        query.end,
        Utc::now().date_naive(),
    )?;
    Ok(Json(days))
}

pub async fn upcoming(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> ApiResult<Json<Vec<ScheduledWorkout>>> {
    let items = state.schedule_service.upcoming(&user.id, Utc::now())?;
    Ok(Json(items))
}
