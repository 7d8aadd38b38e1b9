use axum::http::Method;

mod common;
use common::{
    body_json, build_test_router, create_exercise, create_set, create_workout, register_user, send,
};

#[tokio::test]
async fn workout_lifecycle_create_log_finish() {
    let (app, _tmp) = build_test_router();
    let token = register_user(&app, "alice").await;

    let bench = create_exercise(&app, &token, "Bench Press", "CHEST").await;
    let squat = create_exercise(&app, &token, "Squat", "QUADS").await;

    let workout_id = create_workout(&app, &token).await;

    // Interleaved sets: grouping is by first appearance, not contiguity.
    create_set(&app, &token, &workout_id, &bench, 80.0, 10).await;
    create_set(&app, &token, &workout_id, &squat, 100.0, 5).await;
    create_set(&app, &token, &workout_id, &bench, 85.0, 8).await;

    let response = send(&app, Method::GET, "/api/workouts", Some(&token), None).await;
    assert_eq!(response.status(), 200);
    let list = body_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["status"], "STARTED");
    assert_eq!(list[0]["totalSets"], 3);
    // 80*10 + 100*5 + 85*8 = 1980
    assert_eq!(list[0]["totalVolume"], 1980.0);

    let response = send(
        &app,
        Method::GET,
        &format!("/api/workouts/{workout_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(response.status(), 200);
    let detail = body_json(response).await;
    let groups = detail["exercises"].as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["exerciseName"], "Bench Press");
    assert_eq!(groups[0]["sets"].as_array().unwrap().len(), 2);
    assert_eq!(groups[1]["exerciseName"], "Squat");
    assert!(detail["durationMinutes"].is_null());

    let response = send(
        &app,
        Method::POST,
        &format!("/api/workouts/{workout_id}/finish"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(response.status(), 200);
    let finished = body_json(response).await;
    assert_eq!(finished["status"], "FINISHED");
    assert!(finished["endTime"].is_string());
    assert!(finished["durationMinutes"].is_number());
}

#[tokio::test]
async fn workout_note_update_and_delete() {
    let (app, _tmp) = build_test_router();
    let token = register_user(&app, "bob").await;
    let workout_id = create_workout(&app, &token).await;

    let response = send(
        &app,
        Method::PUT,
        &format!("/api/workouts/{workout_id}"),
        Some(&token),
        Some(serde_json::json!({ "note": "leg day" })),
    )
    .await;
    assert_eq!(response.status(), 200);
    let updated = body_json(response).await;
    assert_eq!(updated["note"], "leg day");

    let response = send(
        &app,
        Method::DELETE,
        &format!("/api/workouts/{workout_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(response.status(), 204);

    let response = send(
        &app,
        Method::GET,
        &format!("/api/workouts/{workout_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn workouts_are_invisible_across_users() {
    let (app, _tmp) = build_test_router();
    let alice = register_user(&app, "alice").await;
    let mallory = register_user(&app, "mallory").await;

    let workout_id = create_workout(&app, &alice).await;

    let response = send(
        &app,
        Method::GET,
        &format!("/api/workouts/{workout_id}"),
        Some(&mallory),
        None,
    )
    .await;
    assert_eq!(response.status(), 404);

    let response = send(
        &app,
        Method::DELETE,
        &format!("/api/workouts/{workout_id}"),
        Some(&mallory),
        None,
    )
    .await;
    assert_eq!(response.status(), 404);

    // Still intact for its owner.
    let response = send(
        &app,
        Method::GET,
        &format!("/api/workouts/{workout_id}"),
        Some(&alice),
        None,
    )
    .await;
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn sets_validate_measurements_and_parent_ownership() {
    let (app, _tmp) = build_test_router();
    let alice = register_user(&app, "alice").await;
    let mallory = register_user(&app, "mallory").await;

    let bench = create_exercise(&app, &alice, "Bench Press", "CHEST").await;
    let workout_id = create_workout(&app, &alice).await;

    // Negative weight is rejected.
    let response = send(
        &app,
        Method::POST,
        "/api/sets",
        Some(&alice),
        Some(serde_json::json!({
            "workoutId": workout_id,
            "exerciseId": bench,
            "weight": -5.0,
            "reps": 10,
            "rir": null,
        })),
    )
    .await;
    assert_eq!(response.status(), 400);

    // Logging into someone else's workout reads as not-found.
    let response = send(
        &app,
        Method::POST,
        "/api/sets",
        Some(&mallory),
        Some(serde_json::json!({
            "workoutId": workout_id,
            "exerciseId": bench,
            "weight": 60.0,
            "reps": 10,
            "rir": null,
        })),
    )
    .await;
    assert_eq!(response.status(), 404);

    // Bodyweight (zero) sets are fine.
    let set_id = create_set(&app, &alice, &workout_id, &bench, 0.0, 15).await;

    let response = send(
        &app,
        Method::PUT,
        &format!("/api/sets/{set_id}"),
        Some(&alice),
        Some(serde_json::json!({
            "exerciseId": bench,
            "weight": 62.5,
            "reps": 12,
            "rir": 2,
        })),
    )
    .await;
    assert_eq!(response.status(), 200);
    let updated = body_json(response).await;
    assert_eq!(updated["weight"], 62.5);
    assert_eq!(updated["exerciseName"], "Bench Press");

    let response = send(
        &app,
        Method::DELETE,
        &format!("/api/sets/{set_id}"),
        Some(&mallory),
        None,
    )
    .await;
    assert_eq!(response.status(), 404);

    let response = send(
        &app,
        Method::DELETE,
        &format!("/api/sets/{set_id}"),
        Some(&alice),
        None,
    )
    .await;
    assert_eq!(response.status(), 204);
}
