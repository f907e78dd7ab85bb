use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use rxcheck_api::{create_router, AppState};
use rxcheck_rules::{ensure_schema, reference_rules, InteractionService};
use sea_orm::Database;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

struct TestApp {
    router: Router,
    _history_dir: TempDir,
}

async fn create_test_app() -> TestApp {
    create_test_app_with_origins(&["http://localhost:5500".to_string()]).await
}

async fn create_test_app_with_origins(origins: &[String]) -> TestApp {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");
    ensure_schema(&db).await.expect("Failed to create schema");

    let history_dir = tempfile::tempdir().unwrap();
    let service = Arc::new(InteractionService::open(
        Arc::new(db),
        history_dir.path().join("history.jsonl"),
    ));
    service.store().seed(reference_rules()).await.unwrap();

    TestApp {
        router: create_router(AppState::new(service), origins),
        _history_dir: history_dir,
    }
}

async fn send(app: &TestApp, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };

    let response = app
        .router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app().await;

    let (status, json) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_check_known_interaction() {
    let app = create_test_app().await;

    let (status, json) = send(
        &app,
        Method::POST,
        "/check",
        Some(json!({"drug_a": "ibuprofen", "drug_b": "aspirin"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["found"], true);
    assert_eq!(json["severity"], "major");
    assert!(!json["description"].as_str().unwrap().is_empty());
    assert!(json.get("suggest_add").is_none());
}

#[tokio::test]
async fn test_check_unknown_interaction() {
    let app = create_test_app().await;

    let (status, json) = send(
        &app,
        Method::POST,
        "/check",
        Some(json!({"drug_a": "medY_not_real", "drug_b": " medX_not_real"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["found"], false);
    assert!(json.get("severity").is_none());
    assert!(json.get("description").is_none());
    assert_eq!(json["suggest_add"], true);
    assert_eq!(json["message"], "No known interaction in local DB.");
    assert_eq!(json["how_to_add"]["endpoint"], "POST /rules");
    assert_eq!(json["how_to_add"]["body_example"]["a"], "medx_not_real");
    assert_eq!(json["how_to_add"]["body_example"]["b"], "medy_not_real");
}

#[tokio::test]
async fn test_check_blank_name_is_not_found() {
    let app = create_test_app().await;

    let (status, json) = send(
        &app,
        Method::POST,
        "/check",
        Some(json!({"drug_a": "   ", "drug_b": "aspirin"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["found"], false);
    assert_eq!(json["suggest_add"], true);
    assert_eq!(json["how_to_add"]["body_example"]["a"], "");
    assert_eq!(json["how_to_add"]["body_example"]["b"], "aspirin");

    let (_, json) = send(&app, Method::GET, "/history", None).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_check_with_invalid_json() {
    let app = create_test_app().await;

    let request = Request::builder()
        .uri("/check")
        .method(Method::POST)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("invalid json"))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_history_records_checks_with_limit() {
    let app = create_test_app().await;

    let (_, json) = send(&app, Method::GET, "/history", None).await;
    assert_eq!(json, json!([]));

    for (a, b) in [("Ibuprofen", "Aspirin"), ("c", "d")] {
        send(&app, Method::POST, "/check", Some(json!({"drug_a": a, "drug_b": b}))).await;
    }

    let (status, json) = send(&app, Method::GET, "/history?limit=1", None).await;
    assert_eq!(status, StatusCode::OK);
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["drug_a"], "c");
    assert_eq!(entries[0]["drug_b"], "d");
    assert_eq!(entries[0]["found"], false);

    let (_, json) = send(&app, Method::GET, "/history?limit=0", None).await;
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["drug_a"], "aspirin");
    assert_eq!(entries[0]["severity"], "major");
    assert!(entries[0]["ts"].is_string());
}

#[tokio::test]
async fn test_history_defaults_to_last_50() {
    let app = create_test_app().await;

    for i in 1..=55 {
        let drug = format!("drug{:02}", i);
        send(&app, Method::POST, "/check", Some(json!({"drug_a": drug, "drug_b": "zz"}))).await;
    }

    let (status, json) = send(&app, Method::GET, "/history", None).await;
    assert_eq!(status, StatusCode::OK);
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 50);
    assert_eq!(entries[0]["drug_a"], "drug06");
    assert_eq!(entries[49]["drug_a"], "drug55");

    let (_, json) = send(&app, Method::GET, "/history?limit=-1", None).await;
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 55);
    assert_eq!(entries[0]["drug_a"], "drug01");
}

#[tokio::test]
async fn test_list_rules_non_empty() {
    let app = create_test_app().await;

    let (status, json) = send(&app, Method::GET, "/rules", None).await;
    assert_eq!(status, StatusCode::OK);

    let rules = json.as_array().unwrap();
    assert_eq!(rules.len(), reference_rules().len());
    for key in ["id", "a", "b", "severity", "description"] {
        assert!(rules[0].get(key).is_some());
    }

    let ids: Vec<&str> = rules.iter().map(|r| r["id"].as_str().unwrap()).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

#[tokio::test]
async fn test_get_rule_by_id_and_404_for_missing() {
    let app = create_test_app().await;

    let (status, json) = send(&app, Method::GET, "/rules/ibuprofen_aspirin", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], "ibuprofen_aspirin");
    assert_eq!(json["a"], "aspirin");

    let (status, json) = send(&app, Method::GET, "/rules/__non_existing_rule__", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Rule not found");
    assert_eq!(json["status"], 404);
}

#[tokio::test]
async fn test_create_update_delete_rule_lifecycle() {
    let app = create_test_app().await;

    let (status, json) = send(
        &app,
        Method::POST,
        "/rules",
        Some(json!({
            "id": "test_rule_xyz",
            "a": "testdruga",
            "b": "testdrugb",
            "severity": "moderate",
            "description": "Test interaction for CI",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ok"], true);
    assert_eq!(json["id"], "test_rule_xyz");

    let (status, json) = send(
        &app,
        Method::PUT,
        "/rules/test_rule_xyz?severity=minor&description=Updated%20description",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ok"], true);

    let (_, json) = send(&app, Method::GET, "/rules/test_rule_xyz", None).await;
    assert_eq!(json["severity"], "minor");
    assert_eq!(json["description"], "Updated description");

    let (status, json) = send(&app, Method::DELETE, "/rules/test_rule_xyz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ok"], true);

    let (status, _) = send(&app, Method::DELETE, "/rules/test_rule_xyz", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_rule_defaults_id_to_normalized_pair() {
    let app = create_test_app().await;

    let (status, json) = send(
        &app,
        Method::POST,
        "/rules",
        Some(json!({
            "a": " Warfarin",
            "b": "Fluconazole ",
            "severity": "contraindicated",
            "description": "Bleeding risk",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], "fluconazole_warfarin");
}

#[tokio::test]
async fn test_create_rule_rejects_duplicate_pair() {
    let app = create_test_app().await;

    let (status, json) = send(
        &app,
        Method::POST,
        "/rules",
        Some(json!({
            "id": "dup",
            "a": "ASPIRIN",
            "b": "ibuprofen",
            "severity": "minor",
            "description": "Duplicate in reverse order",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"], "Pair already exists (order-independent)");
}

#[tokio::test]
async fn test_create_rule_rejects_invalid_severity() {
    let app = create_test_app().await;

    let (status, json) = send(
        &app,
        Method::POST,
        "/rules",
        Some(json!({
            "id": "bad_rule_1",
            "a": "badA",
            "b": "badB",
            "severity": "not_a_real_level",
            "description": "Should fail",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid severity");
}

#[tokio::test]
async fn test_update_rule_rejects_invalid_severity() {
    let app = create_test_app().await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/rules/some_id?severity=wrong&description=whatever",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_missing_rule() {
    let app = create_test_app().await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/rules/some_id?severity=major&description=whatever",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let app = create_test_app().await;

    let request = Request::builder()
        .uri("/rules")
        .method(Method::GET)
        .header(header::ORIGIN, "http://localhost:5500")
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:5500"
    );
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}

#[tokio::test]
async fn test_cors_disabled_without_origins() {
    let app = create_test_app_with_origins(&[]).await;

    let request = Request::builder()
        .uri("/rules")
        .method(Method::GET)
        .header(header::ORIGIN, "http://localhost:5500")
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
