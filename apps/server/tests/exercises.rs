use axum::http::Method;

mod common;
use common::{body_json, build_test_router, create_exercise, register_user, send};

#[tokio::test]
async fn created_exercises_are_custom_and_owned() {
    let (app, _tmp) = build_test_router();
    let token = register_user(&app, "alice").await;

    let response = send(
        &app,
        Method::POST,
        "/api/exercises",
        Some(&token),
        Some(serde_json::json!({
            "name": "Incline Press",
            "muscleGroup": "CHEST",
            // Client-supplied ownership fields are ignored.
            "isCustom": false,
            "ownerId": "someone-else",
        })),
    )
    .await;
    assert_eq!(response.status(), 201);
    let json = body_json(response).await;
    assert_eq!(json["isCustom"], true);
    assert_ne!(json["ownerId"], "someone-else");
}

#[tokio::test]
async fn custom_exercises_are_private_to_their_owner() {
    let (app, _tmp) = build_test_router();
    let alice = register_user(&app, "alice").await;
    let bob = register_user(&app, "bob").await;

    let curl = create_exercise(&app, &alice, "Hammer Curl", "BICEPS").await;

    let response = send(&app, Method::GET, "/api/exercises", Some(&alice), None).await;
    let alice_list = body_json(response).await;
    assert_eq!(alice_list.as_array().unwrap().len(), 1);

    let response = send(&app, Method::GET, "/api/exercises", Some(&bob), None).await;
    let bob_list = body_json(response).await;
    assert!(bob_list.as_array().unwrap().is_empty());

    // A foreign custom exercise is indistinguishable from a missing one.
    let response = send(
        &app,
        Method::GET,
        &format!("/api/exercises/{curl}"),
        Some(&bob),
        None,
    )
    .await;
    assert_eq!(response.status(), 404);

    let response = send(
        &app,
        Method::DELETE,
        &format!("/api/exercises/{curl}"),
        Some(&bob),
        None,
    )
    .await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn invalid_muscle_group_is_a_client_error() {
    let (app, _tmp) = build_test_router();
    let token = register_user(&app, "carol").await;

    let response = send(
        &app,
        Method::POST,
        "/api/exercises",
        Some(&token),
        Some(serde_json::json!({ "name": "Mystery Lift", "muscleGroup": "EARS" })),
    )
    .await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn exercise_update_round_trips() {
    let (app, _tmp) = build_test_router();
    let token = register_user(&app, "dana").await;
    let row = create_exercise(&app, &token, "Row", "BACK").await;

    let response = send(
        &app,
        Method::PUT,
        &format!("/api/exercises/{row}"),
        Some(&token),
        Some(serde_json::json!({
            "name": "Pendlay Row",
            "muscleGroup": "BACK",
            "description": "strict, from the floor",
        })),
    )
    .await;
    assert_eq!(response.status(), 200);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Pendlay Row");
    assert_eq!(json["description"], "strict, from the floor");
}
