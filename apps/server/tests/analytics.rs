use axum::http::Method;

mod common;
use common::{
    body_json, build_test_router, create_exercise, create_set, create_workout, register_user, send,
};

#[tokio::test]
async fn volume_by_day_sums_tonnage_per_date() {
    let (app, _tmp) = build_test_router();
    let token = register_user(&app, "alice").await;
    let bench = create_exercise(&app, &token, "Bench Press", "CHEST").await;
    let workout_id = create_workout(&app, &token).await;
    create_set(&app, &token, &workout_id, &bench, 80.0, 10).await;
    create_set(&app, &token, &workout_id, &bench, 100.0, 5).await;

    let response = send(&app, Method::GET, "/api/analytics/volume", Some(&token), None).await;
    assert_eq!(response.status(), 200);
    let json = body_json(response).await;
    let points = json.as_array().unwrap();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0]["volume"], 1300.0);
}

#[tokio::test]
async fn max_weight_requires_an_exercise_id() {
    let (app, _tmp) = build_test_router();
    let token = register_user(&app, "bob").await;

    let response = send(&app, Method::GET, "/api/analytics/max", Some(&token), None).await;
    assert_eq!(response.status(), 400);
    let json = body_json(response).await;
    assert_eq!(json["error"], "exercise_id is required");
}

#[tokio::test]
async fn max_weight_by_day_picks_the_daily_maximum() {
    let (app, _tmp) = build_test_router();
    let token = register_user(&app, "carol").await;
    let squat = create_exercise(&app, &token, "Squat", "QUADS").await;
    let workout_id = create_workout(&app, &token).await;
    create_set(&app, &token, &workout_id, &squat, 80.0, 5).await;
    create_set(&app, &token, &workout_id, &squat, 100.0, 3).await;

    let response = send(
        &app,
        Method::GET,
        &format!("/api/analytics/max?exerciseId={squat}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(response.status(), 200);
    let json = body_json(response).await;
    let points = json.as_array().unwrap();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0]["maxWeight"], 100.0);
}

#[tokio::test]
async fn personal_records_cover_every_logged_exercise() {
    let (app, _tmp) = build_test_router();
    let token = register_user(&app, "dave").await;
    let bench = create_exercise(&app, &token, "Bench Press", "CHEST").await;
    let squat = create_exercise(&app, &token, "Squat", "QUADS").await;
    let workout_id = create_workout(&app, &token).await;
    create_set(&app, &token, &workout_id, &squat, 140.0, 1).await;
    create_set(&app, &token, &workout_id, &bench, 90.0, 2).await;
    create_set(&app, &token, &workout_id, &bench, 100.0, 1).await;

    let response = send(
        &app,
        Method::GET,
        "/api/analytics/records",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(response.status(), 200);
    let json = body_json(response).await;
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 2);
    // Ordered by exercise name.
    assert_eq!(records[0]["exerciseName"], "Bench Press");
    assert_eq!(records[0]["maxWeight"], 100.0);
    assert_eq!(records[1]["exerciseName"], "Squat");
    assert_eq!(records[1]["maxWeight"], 140.0);
}

#[tokio::test]
async fn calendar_materializes_every_day_of_the_range() {
    let (app, _tmp) = build_test_router();
    let token = register_user(&app, "erin").await;

    let response = send(
        &app,
        Method::GET,
        "/api/calendar?start=2026-02-01&end=2026-02-28",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(response.status(), 200);
    let json = body_json(response).await;
    let days = json.as_array().unwrap();
    assert_eq!(days.len(), 28);
    assert_eq!(days[0]["date"], "2026-02-01");
    assert_eq!(days[27]["date"], "2026-02-28");
    assert_eq!(days[0]["hasWorkout"], false);
    assert_eq!(days[0]["hasScheduled"], false);
}

#[tokio::test]
async fn calendar_flags_days_with_activity() {
    let (app, _tmp) = build_test_router();
    let token = register_user(&app, "frank").await;
    let bench = create_exercise(&app, &token, "Bench Press", "CHEST").await;
    let workout_id = create_workout(&app, &token).await;
    create_set(&app, &token, &workout_id, &bench, 60.0, 10).await;

    let today = chrono::Utc::now().date_naive();
    let response = send(
        &app,
        Method::GET,
        &format!("/api/calendar?start={today}&end={today}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(response.status(), 200);
    let json = body_json(response).await;
    let days = json.as_array().unwrap();
    assert_eq!(days.len(), 1);
    assert_eq!(days[0]["hasWorkout"], true);
    let workouts = days[0]["completedWorkouts"].as_array().unwrap();
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0]["totalVolume"], 600.0);
}
