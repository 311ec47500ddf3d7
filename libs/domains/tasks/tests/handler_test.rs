//! Handler tests for the Tasks domain
//!
//! These tests drive the task router over the in-memory repository and verify:
//! - Request deserialization (JSON and query strings → Rust structs)
//! - Response serialization and HTTP status codes
//! - The structured error body and its messages
//!
//! The router is nested at `/Tarefa` the same way the API mounts it, so the
//! `Location` header is checked against the real prefix.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use domain_tasks::error::messages;
use domain_tasks::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use test_utils::TestDataBuilder;
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    let service = TaskService::new(InMemoryTaskRepository::new());
    Router::new().nest(entity::URL, router(service))
}

async fn json_body<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn send_json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn create(app: &Router, body: Value) -> Task {
    let response = app
        .clone()
        .oneshot(send_json("POST", "/Tarefa", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response).await
}

#[tokio::test]
async fn test_create_task_returns_201_with_location() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("handler_create_201");

    let response = app
        .oneshot(send_json(
            "POST",
            "/Tarefa",
            json!({
                "titulo": builder.title("create"),
                "descricao": "Comprar pão",
                "data": "2024-01-01",
                "status": "pendente"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers()[header::LOCATION].to_str().unwrap().to_string();

    let task: Task = json_body(response).await;
    assert_eq!(location, format!("/Tarefa/{}", task.id));
    assert_eq!(task.title, builder.title("create"));
    assert_eq!(task.description.as_deref(), Some("Comprar pão"));
    assert_eq!(task.date.to_string(), "2024-01-01 00:00:00");
    assert_eq!(task.status, TaskStatus::Pending);
}

#[tokio::test]
async fn test_create_task_accepts_status_ordinal() {
    let app = app();

    let task = create(
        &app,
        json!({ "titulo": "ordinal", "data": "2024-01-01T10:30:00", "status": 2 }),
    )
    .await;

    assert_eq!(task.status, TaskStatus::Done);
}

#[tokio::test]
async fn test_create_task_accepts_utc_timestamp() {
    let app = app();

    let task = create(&app, json!({ "titulo": "utc", "data": "2024-01-01T00:00:00Z" })).await;
    assert_eq!(task.date.to_string(), "2024-01-01 00:00:00");

    let task = create(&app, json!({ "titulo": "offset", "data": "2024-01-01T15:00:00+02:00" })).await;
    assert_eq!(task.date.to_string(), "2024-01-01 13:00:00");

    let response = app
        .oneshot(get("/Tarefa/ObterPorData?data=2024-01-01T12:00:00Z"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let tasks: Vec<Task> = json_body(response).await;
    assert_eq!(tasks.len(), 2);
}

#[tokio::test]
async fn test_create_task_without_date_returns_400() {
    let app = app();

    let response = app
        .oneshot(send_json("POST", "/Tarefa", json!({ "titulo": "sem data" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response).await;
    assert_eq!(body["message"], messages::EMPTY_DATE);
}

#[tokio::test]
async fn test_create_task_with_unset_date_returns_400() {
    let app = app();

    let response = app
        .oneshot(send_json(
            "POST",
            "/Tarefa",
            json!({ "titulo": "sentinela", "data": "0001-01-01T00:00:00" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response).await;
    assert_eq!(body["message"], messages::EMPTY_DATE);
}

#[tokio::test]
async fn test_create_task_with_invalid_status_returns_400() {
    let app = app();

    let response = app
        .oneshot(send_json(
            "POST",
            "/Tarefa",
            json!({ "titulo": "x", "data": "2024-01-01", "status": "arquivado" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response).await;
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains(messages::INVALID_TASK_STATUS)
    );
}

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let app = app();

    let request = Request::builder()
        .method("POST")
        .uri("/Tarefa")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response).await;
    assert_eq!(body["error"], "JSON_EXTRACTION");
}

#[tokio::test]
async fn test_list_all_returns_tasks_in_id_order() {
    let app = app();
    let first = create(&app, json!({ "titulo": "a", "data": "2024-01-01" })).await;
    let second = create(&app, json!({ "titulo": "b", "data": "2024-01-02" })).await;

    let response = app.oneshot(get("/Tarefa/ObterTodos")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let tasks: Vec<Task> = json_body(response).await;
    let ids: Vec<i32> = tasks.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[tokio::test]
async fn test_list_all_empty_returns_200() {
    let response = app().oneshot(get("/Tarefa/ObterTodos")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let tasks: Vec<Task> = json_body(response).await;
    assert!(tasks.is_empty());
}

#[tokio::test]
async fn test_get_task_by_id() {
    let app = app();
    let created = create(&app, json!({ "titulo": "ler", "data": "2024-03-01" })).await;

    let response = app
        .oneshot(get(&format!("/Tarefa/{}", created.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let task: Task = json_body(response).await;
    assert_eq!(task, created);
}

#[tokio::test]
async fn test_get_unknown_task_returns_404() {
    let response = app().oneshot(get("/Tarefa/999")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response).await;
    assert_eq!(body["message"], messages::TASK_NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_non_integer_id_returns_400() {
    let response = app().oneshot(get("/Tarefa/abc")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response).await;
    assert_eq!(body["error"], "INVALID_PATH_PARAMETER");
}

#[tokio::test]
async fn test_list_by_title_matches_substring() {
    let app = app();
    create(&app, json!({ "titulo": "Comprar leite", "data": "2024-01-01" })).await;
    create(&app, json!({ "titulo": "Lavar carro", "data": "2024-01-01" })).await;

    let response = app
        .clone()
        .oneshot(get("/Tarefa/ObterPorTitulo?titulo=leite"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let tasks: Vec<Task> = json_body(response).await;
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Comprar leite");

    // No parameter matches everything
    let response = app.oneshot(get("/Tarefa/ObterPorTitulo")).await.unwrap();
    let tasks: Vec<Task> = json_body(response).await;
    assert_eq!(tasks.len(), 2);
}

#[tokio::test]
async fn test_list_by_date_ignores_time_of_day() {
    let app = app();
    create(&app, json!({ "titulo": "manhã", "data": "2024-05-10T08:00:00" })).await;
    create(&app, json!({ "titulo": "noite", "data": "2024-05-10T23:59:59" })).await;
    create(&app, json!({ "titulo": "outro dia", "data": "2024-05-11T00:00:00" })).await;

    let response = app
        .oneshot(get("/Tarefa/ObterPorData?data=2024-05-10"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let tasks: Vec<Task> = json_body(response).await;
    let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["manhã", "noite"]);
}

#[tokio::test]
async fn test_list_by_date_with_bad_date_returns_400() {
    let response = app()
        .oneshot(get("/Tarefa/ObterPorData?data=ontem"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response).await;
    assert_eq!(body["message"], messages::INVALID_DATE);
}

#[tokio::test]
async fn test_list_by_date_without_date_returns_400() {
    let response = app().oneshot(get("/Tarefa/ObterPorData")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_by_status_accepts_label_and_ordinal() {
    let app = app();
    create(
        &app,
        json!({ "titulo": "feita", "data": "2024-01-01", "status": "finalizado" }),
    )
    .await;
    create(&app, json!({ "titulo": "aberta", "data": "2024-01-01" })).await;

    for query in ["finalizado", "2"] {
        let response = app
            .clone()
            .oneshot(get(&format!("/Tarefa/ObterPorStatus?status={}", query)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let tasks: Vec<Task> = json_body(response).await;
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "feita");
    }
}

#[tokio::test]
async fn test_list_by_status_without_matches_returns_404() {
    let app = app();
    create(&app, json!({ "titulo": "aberta", "data": "2024-01-01" })).await;

    let response = app
        .oneshot(get("/Tarefa/ObterPorStatus?status=em_andamento"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response).await;
    assert_eq!(body["message"], messages::NO_TASKS_WITH_STATUS);
}

#[tokio::test]
async fn test_list_by_invalid_status_returns_400() {
    let response = app()
        .oneshot(get("/Tarefa/ObterPorStatus?status=7"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response).await;
    assert_eq!(body["message"], messages::INVALID_STATUS);
}

#[tokio::test]
async fn test_update_task_replaces_fields() {
    let app = app();
    let created = create(
        &app,
        json!({ "titulo": "antes", "descricao": "velha", "data": "2024-01-01" }),
    )
    .await;

    let response = app
        .clone()
        .oneshot(send_json(
            "PUT",
            &format!("/Tarefa/{}", created.id),
            json!({ "id": 999, "titulo": "depois", "data": "2024-02-02T14:00:00", "status": 1 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated: Task = json_body(response).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "depois");
    assert_eq!(updated.description, None);
    assert_eq!(updated.status, TaskStatus::InProgress);

    let response = app
        .oneshot(get(&format!("/Tarefa/{}", created.id)))
        .await
        .unwrap();
    let stored: Task = json_body(response).await;
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn test_update_unknown_task_returns_404_before_date_check() {
    let response = app()
        .oneshot(send_json("PUT", "/Tarefa/42", json!({ "titulo": "sem data" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response).await;
    assert_eq!(body["message"], messages::TASK_NOT_FOUND);
}

#[tokio::test]
async fn test_update_without_date_returns_400() {
    let app = app();
    let created = create(&app, json!({ "titulo": "x", "data": "2024-01-01" })).await;

    let response = app
        .oneshot(send_json(
            "PUT",
            &format!("/Tarefa/{}", created.id),
            json!({ "titulo": "x" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response).await;
    assert_eq!(body["message"], messages::EMPTY_DATE);
}

#[tokio::test]
async fn test_delete_task_returns_204_then_404() {
    let app = app();
    let created = create(&app, json!({ "titulo": "apagar", "data": "2024-01-01" })).await;
    let uri = format!("/Tarefa/{}", created.id);

    let delete = || {
        Request::builder()
            .method("DELETE")
            .uri(&uri)
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(delete()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.clone().oneshot(get(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(delete()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_full_task_lifecycle() {
    let app = app();

    let created = create(
        &app,
        json!({ "titulo": "Buy milk", "data": "2024-01-01", "status": "pendente" }),
    )
    .await;
    assert_eq!(created.id, 1);

    let uri = format!("/Tarefa/{}", created.id);
    let response = app.clone().oneshot(get(&uri)).await.unwrap();
    let fetched: Task = json_body(response).await;
    assert_eq!(fetched, created);

    // A rejected update leaves the stored task untouched
    let response = app
        .clone()
        .oneshot(send_json(
            "PUT",
            &uri,
            json!({ "titulo": "Buy bread", "data": "0001-01-01T00:00:00" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let response = app.clone().oneshot(get(&uri)).await.unwrap();
    let unchanged: Task = json_body(response).await;
    assert_eq!(unchanged, created);

    let response = app
        .clone()
        .oneshot(send_json(
            "PUT",
            &uri,
            json!({ "titulo": "Buy bread", "data": "2024-01-02", "status": "finalizado" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Task = json_body(response).await;
    assert_eq!(updated.title, "Buy bread");
    assert_eq!(updated.date.to_string(), "2024-01-02 00:00:00");
    assert_eq!(updated.status, TaskStatus::Done);

    let request = Request::builder()
        .method("DELETE")
        .uri(&uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
