use animarr::config::Config;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn spawn_app() -> Router {
    let mut config = Config::default();
    config.database.url = "sqlite::memory:".to_string();

    let state = animarr::api::create_app_state_from_config(config)
        .await
        .expect("Failed to create app state");
    animarr::api::router(state)
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

async fn body_text(response: Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn test_create_then_list() {
    let app = spawn_app().await;

    let payload = json!({
        "name": "Test Show",
        "startYear": 2020,
        "endYear": 2021,
        "volumeCount": 10,
        "comments": "x"
    });

    let response = app
        .clone()
        .oneshot(json_request("POST", "/animes", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let created = body_json(response).await;
    assert!(created["id"].is_i64());
    assert_eq!(created["name"], "Test Show");
    assert_eq!(created["startYear"], 2020);
    assert_eq!(created["endYear"], 2021);
    assert_eq!(created["volumeCount"], 10);
    assert_eq!(created["comments"], "x");

    let response = app.oneshot(get_request("/animes")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let listed = body_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0], created);
}

#[tokio::test]
async fn test_list_orders_newest_first() {
    let app = spawn_app().await;

    for name in ["first", "second", "third"] {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/animes", &json!({ "name": name })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.oneshot(get_request("/animes")).await.unwrap();
    let listed = body_json(response).await;
    let listed = listed.as_array().unwrap();

    assert_eq!(listed.len(), 3);
    assert_eq!(listed[0]["name"], "third");
    assert_eq!(listed[2]["name"], "first");

    let ids: Vec<i64> = listed.iter().map(|a| a["id"].as_i64().unwrap()).collect();
    assert!(ids[0] > ids[1]);
    assert!(ids[1] > ids[2]);
}

#[tokio::test]
async fn test_update_overwrites_all_fields() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/animes",
            &json!({
                "name": "Original",
                "startYear": 2001,
                "endYear": 2004,
                "volumeCount": 52,
                "comments": "before"
            }),
        ))
        .await
        .unwrap();
    let id = body_json(response).await["id"].as_i64().unwrap();

    // Omitted fields become null, not "unchanged".
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/animes/{id}"),
            &json!({ "name": "Renamed" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "message": "Actualizado" }));

    let response = app.oneshot(get_request("/animes")).await.unwrap();
    let listed = body_json(response).await;

    assert_eq!(listed[0]["id"].as_i64(), Some(id));
    assert_eq!(listed[0]["name"], "Renamed");
    assert_eq!(listed[0]["startYear"], Value::Null);
    assert_eq!(listed[0]["endYear"], Value::Null);
    assert_eq!(listed[0]["volumeCount"], Value::Null);
    assert_eq!(listed[0]["comments"], Value::Null);
}

#[tokio::test]
async fn test_update_unknown_id_still_acknowledges() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/animes/424242",
            &json!({ "name": "Ghost" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "message": "Actualizado" }));

    let response = app.oneshot(get_request("/animes")).await.unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_delete_removes_the_row() {
    let app = spawn_app().await;

    for name in ["keep", "drop"] {
        app.clone()
            .oneshot(json_request("POST", "/animes", &json!({ "name": name })))
            .await
            .unwrap();
    }

    let response = app.clone().oneshot(get_request("/animes")).await.unwrap();
    let listed = body_json(response).await;
    let dropped_id = listed[0]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/animes/{dropped_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "message": "Eliminado" }));

    let response = app.oneshot(get_request("/animes")).await.unwrap();
    let listed = body_json(response).await;
    let listed = listed.as_array().unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["name"], "keep");
}

#[tokio::test]
async fn test_delete_unknown_id_still_acknowledges() {
    let app = spawn_app().await;

    app.clone()
        .oneshot(json_request("POST", "/animes", &json!({ "name": "only" })))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/animes/424242")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "message": "Eliminado" }));

    let response = app.oneshot(get_request("/animes")).await.unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_seed_loads_twelve_samples() {
    let app = spawn_app().await;

    let response = app.clone().oneshot(get_request("/semilla")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));
    assert!(body_text(response).await.contains("12"));

    let response = app.clone().oneshot(get_request("/animes")).await.unwrap();
    let listed = body_json(response).await;
    let listed = listed.as_array().unwrap();

    assert_eq!(listed.len(), 12);

    let one_piece = listed
        .iter()
        .find(|a| a["name"] == "One Piece")
        .expect("seed should contain One Piece");
    assert_eq!(one_piece["startYear"], 1999);
    assert_eq!(one_piece["endYear"], Value::Null);
    assert_eq!(one_piece["volumeCount"], 1100);

    // Seeding again duplicates the batch; there is no uniqueness constraint.
    let response = app.clone().oneshot(get_request("/semilla")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get_request("/animes")).await.unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 24);
}

#[tokio::test]
async fn test_create_accepts_empty_body() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(json_request("POST", "/animes", &json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let created = body_json(response).await;
    assert!(created["id"].is_i64());
    assert_eq!(created["name"], Value::Null);
    assert_eq!(created["startYear"], Value::Null);
    assert_eq!(created["endYear"], Value::Null);
    assert_eq!(created["volumeCount"], Value::Null);
    assert_eq!(created["comments"], Value::Null);
}

#[tokio::test]
async fn test_store_failure_returns_plain_text_detail() {
    use sea_orm::ConnectionTrait;

    let mut config = Config::default();
    config.database.url = "sqlite::memory:".to_string();

    let state = animarr::api::create_app_state_from_config(config)
        .await
        .expect("Failed to create app state");

    state
        .store()
        .conn
        .execute_unprepared("DROP TABLE animes")
        .await
        .expect("Failed to drop table");

    let app = animarr::api::router(state);

    let response = app.oneshot(get_request("/animes")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // The body is the raw store error text, not a JSON envelope.
    let text = body_text(response).await;
    assert!(!text.is_empty());
    assert!(serde_json::from_str::<Value>(&text).is_err());
}
