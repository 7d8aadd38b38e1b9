use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, Response},
    Router,
};
use tempfile::TempDir;
use tower::ServiceExt;
use trainlog_server::{api::app_router, build_state, config::Config};

/// Builds a router backed by a fresh SQLite file. The TempDir must stay
/// alive for the duration of the test.
pub fn build_test_router() -> (Router, TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: tmp.path().join("test.db").to_string_lossy().into_owned(),
        jwt_secret: "trainlog-test-secret".into(),
        cors_allow: vec!["*".into()],
        request_timeout: Duration::from_secs(5),
    };
    let state = build_state(&config).unwrap();
    (app_router(state, &config), tmp)
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Registers a user and returns their access token.
pub async fn register_user(app: &Router, username: &str) -> String {
    let response = send(
        app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(serde_json::json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "password": "hunter22",
        })),
    )
    .await;
    assert_eq!(response.status(), 201);
    let json = body_json(response).await;
    json["tokens"]["access"].as_str().unwrap().to_string()
}

/// Creates an exercise and returns its id.
pub async fn create_exercise(app: &Router, token: &str, name: &str, group: &str) -> String {
    let response = send(
        app,
        Method::POST,
        "/api/exercises",
        Some(token),
        Some(serde_json::json!({ "name": name, "muscleGroup": group })),
    )
    .await;
    assert_eq!(response.status(), 201);
    let json = body_json(response).await;
    json["id"].as_str().unwrap().to_string()
}

/// Creates a workout and returns its id.
pub async fn create_workout(app: &Router, token: &str) -> String {
    let response = send(
        app,
        Method::POST,
        "/api/workouts",
        Some(token),
        Some(serde_json::json!({})),
    )
    .await;
    assert_eq!(response.status(), 201);
    let json = body_json(response).await;
    json["id"].as_str().unwrap().to_string()
}

/// Logs a set and returns its id.
pub async fn create_set(
    app: &Router,
    token: &str,
    workout_id: &str,
    exercise_id: &str,
    weight: f64,
    reps: i32,
) -> String {
    let response = send(
        app,
        Method::POST,
        "/api/sets",
        Some(token),
        Some(serde_json::json!({
            "workoutId": workout_id,
            "exerciseId": exercise_id,
            "weight": weight,
            "reps": reps,
            "rir": null,
        })),
    )
    .await;
    assert_eq!(response.status(), 201);
    let json = body_json(response).await;
    json["id"].as_str().unwrap().to_string()
}
