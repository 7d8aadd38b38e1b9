use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    auth::{self, require_auth},
    config::Config,
    main_lib::AppState,
};

mod analytics;
mod calendar;
mod exercises;
mod schedule;
mod sets;
mod workouts;

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn readyz() -> &'static str {
    "ok"
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    let public = Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/auth/register", post(auth::register))
        .route("/auth/token", post(auth::obtain_token))
        .route("/auth/token/refresh", post(auth::refresh_token));

    let protected = Router::new()
        .route(
            "/exercises",
            get(exercises::list_exercises).post(exercises::create_exercise),
        )
        .route(
            "/exercises/{id}",
            get(exercises::get_exercise)
                .put(exercises::update_exercise)
                .delete(exercises::delete_exercise),
        )
        .route(
            "/workouts",
            get(workouts::list_workouts).post(workouts::create_workout),
        )
        .route(
            "/workouts/{id}",
            get(workouts::get_workout)
                .put(workouts::update_workout)
                .delete(workouts::delete_workout),
        )
        .route("/workouts/{id}/finish", post(workouts::finish_workout))
        .route("/sets", get(sets::list_sets).post(sets::create_set))
        .route(
            "/sets/{id}",
            get(sets::get_set).put(sets::update_set).delete(sets::delete_set),
        )
        .route(
            "/schedule",
            get(schedule::list_scheduled).post(schedule::create_scheduled),
        )
        .route(
            "/schedule/{id}",
            get(schedule::get_scheduled)
                .put(schedule::update_scheduled)
                .delete(schedule::delete_scheduled),
        )
        .route("/schedule/{id}/start", post(schedule::start_scheduled))
        .route(
            "/schedule/{id}/complete",
            post(schedule::complete_scheduled),
        )
        .route("/calendar", get(calendar::get_calendar))
        .route("/notifications/upcoming", get(calendar::upcoming))
        .route("/analytics/volume", get(analytics::volume_by_day))
        .route("/analytics/max", get(analytics::max_weight_by_day))
        .route("/analytics/records", get(analytics::personal_records))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ));

    Router::new()
        .nest("/api", public.merge(protected))
        .with_state(state)
        .layer(cors)
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
