use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::{api, state::AppState};

fn setup_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new());
    let app = api::routes().with_state(state.clone());
    (app, state)
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse json")
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn default_route_crosses_the_empty_grid() {
    let (app, _state) = setup_app();

    let response = app.oneshot(post_json("/v1/route", json!({}))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["status"], "success");

    let route = body["route"].as_array().expect("route array");
    assert_eq!(route.len(), 29);
    assert_eq!(route[0], json!({"x": 0, "y": 0}));
    assert_eq!(route[28], json!({"x": 14, "y": 14}));

    let grid = body["grid"].as_array().expect("grid rows");
    assert_eq!(grid.len(), 15);
    assert!(grid.iter().all(|row| row.as_array().unwrap().len() == 15));
}

#[tokio::test]
async fn unknown_mode_is_rejected() {
    let (app, _state) = setup_app();

    let response = app
        .oneshot(post_json("/v1/route", json!({"mode": "scenic"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json(response).await;
    assert_eq!(body["field"], "mode");
}

#[tokio::test]
async fn replanning_starts_from_the_current_position() {
    let (app, _state) = setup_app();

    let response = app
        .oneshot(post_json(
            "/v1/route",
            json!({"mode": "shortest", "current": {"x": 7, "y": 7}}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["route"][0], json!({"x": 7, "y": 7}));
}

#[tokio::test]
async fn out_of_bounds_start_is_rejected() {
    let (app, _state) = setup_app();

    for current in [json!({"x": -1, "y": 0}), json!({"x": 99, "y": 0})] {
        let response = app
            .clone()
            .oneshot(post_json("/v1/route", json!({"current": current})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["field"], "current");
    }
}

#[tokio::test]
async fn toggling_a_wall_fails_the_route_and_untoggling_restores_it() {
    let (app, _state) = setup_app();

    for y in 0..15 {
        let response = app
            .clone()
            .oneshot(post_json("/v1/grid/toggle", json!({"x": 7, "y": y})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.clone().oneshot(post_json("/v1/route", json!({}))).await.unwrap();
    let body = read_json(response).await;
    assert_eq!(body["status"], "failed");
    assert!(body.get("route").is_none());
    assert_eq!(body["grid"][7][0], 1);

    let response = app
        .clone()
        .oneshot(post_json("/v1/grid/toggle", json!({"x": 7, "y": 7})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(post_json("/v1/route", json!({}))).await.unwrap();
    let body = read_json(response).await;
    assert_eq!(body["status"], "success");
}

#[tokio::test]
async fn toggle_leaves_entry_and_exit_free() {
    let (app, _state) = setup_app();

    for (x, y) in [(0usize, 0usize), (14, 14)] {
        let response = app
            .clone()
            .oneshot(post_json("/v1/grid/toggle", json!({"x": x, "y": y})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["grid"][x][y], 0);
    }
}

#[tokio::test]
async fn toggle_rejects_out_of_bounds_coordinates() {
    let (app, _state) = setup_app();

    for body in [json!({"x": -1, "y": 3}), json!({"x": 3, "y": 15})] {
        let response = app
            .clone()
            .oneshot(post_json("/v1/grid/toggle", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn dense_scenario_matches_its_formula() {
    let (app, _state) = setup_app();

    let response = app
        .oneshot(post_json("/v1/grid/scenario", json!({"name": "dense"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    let grid = body["grid"].as_array().unwrap();
    for (x, row) in grid.iter().enumerate() {
        for (y, value) in row.as_array().unwrap().iter().enumerate() {
            let interior = (1..14).contains(&x) && (1..14).contains(&y);
            let expected = if interior && (x + y) % 3 == 0 { 1 } else { 0 };
            assert_eq!(value, &json!(expected), "cell ({x}, {y})");
        }
    }
}

#[tokio::test]
async fn scenario_replaces_earlier_obstacles() {
    let (app, _state) = setup_app();

    let response = app
        .clone()
        .oneshot(post_json("/v1/grid/toggle", json!({"x": 2, "y": 2})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(post_json("/v1/grid/scenario", json!({"name": "open"})))
        .await
        .unwrap();
    let body = read_json(response).await;
    assert_eq!(body["grid"][2][2], 0);
}

#[tokio::test]
async fn unknown_scenario_is_rejected() {
    let (app, state) = setup_app();
    state.toggle(2, 2).unwrap();

    let response = app
        .oneshot(post_json("/v1/grid/scenario", json!({"name": "maze"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json(response).await;
    assert_eq!(body["field"], "name");
    // Strict validation: a typo'd name must not quietly wipe the grid.
    assert_eq!(
        state.snapshot().get(2, 2).unwrap(),
        gridroute_core::CellState::Blocked
    );
}

#[tokio::test]
async fn grid_endpoint_returns_the_current_snapshot() {
    let (app, state) = setup_app();
    state.toggle(3, 4).unwrap();

    let request = Request::builder()
        .method("GET")
        .uri("/v1/grid")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["grid"][3][4], 1);
    assert_eq!(body["grid"][0][0], 0);
}

#[tokio::test]
async fn current_position_alias_is_accepted() {
    let (app, _state) = setup_app();

    let response = app
        .oneshot(post_json(
            "/v1/route",
            json!({"currentPosition": {"x": 2, "y": 3}}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["route"][0], json!({"x": 2, "y": 3}));
}
