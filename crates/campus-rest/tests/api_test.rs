//! HTTP-level tests over the in-memory store.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use campus_config::{ApiConfig, ServerConfig};
use campus_repository::InMemoryStore;
use campus_rest::{create_router, AppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app_with(api: &ApiConfig) -> Router {
    let store = Arc::new(InMemoryStore::new());
    let state = AppState::from_store(store, api).unwrap();
    create_router(state, &ServerConfig::default())
}

fn app() -> Router {
    app_with(&ApiConfig::default())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::HOST, "localhost:8080");

    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_student(app: &Router, nome: &str) -> i64 {
    let body = json!({
        "nome": nome,
        "email": format!("{}@x.com", nome.to_lowercase()),
        "sexo": "FEMININO"
    });
    let (status, value) = send_json(app, Method::POST, "/alunos", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "{value}");
    value["id"].as_i64().unwrap()
}

async fn create_course(app: &Router, nome: &str, professor: Option<i64>) -> (StatusCode, Value) {
    let mut body = json!({
        "nome": nome,
        "descricao": format!("Curso de {}", nome),
        "cargaHoraria": 2400
    });
    if let Some(id) = professor {
        body["professor"] = json!({ "id": id });
    }
    send_json(app, Method::POST, "/cursos", Some(body)).await
}

#[tokio::test]
async fn test_enrollment_scenario() {
    let app = app();
    let ana = create_student(&app, "Ana").await;
    let (_, calc) = create_course(&app, "Calc", None).await;
    let calc = calc["id"].as_i64().unwrap();

    let (status, student) =
        send_json(&app, Method::POST, &format!("/alunos/{ana}/cursos/{calc}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(student["cursos"][0]["nome"], "Calc");
    assert_eq!(
        student["cursos"][0]["_link"],
        format!("http://localhost:8080/cursos/{calc}")
    );

    let (status, course) = send_json(&app, Method::GET, &format!("/cursos/{calc}/alunos"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(course["alunos"][0]["nome"], "Ana");
    assert_eq!(course["alunos"][0]["sexo"], "FEMININO");

    let (status, error) =
        send_json(&app, Method::POST, &format!("/cursos/{calc}/alunos/{ana}"), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["code"], "CONFLICT");

    let (status, _) = send(&app, Method::DELETE, &format!("/alunos/{ana}/cursos/{calc}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, error) =
        send_json(&app, Method::DELETE, &format!("/cursos/{calc}/alunos/{ana}"), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "NOT_ENROLLED");

    let (_, student) = send_json(&app, Method::GET, &format!("/alunos/{ana}/cursos"), None).await;
    assert_eq!(student["cursos"], json!([]));
}

#[tokio::test]
async fn test_missing_ids_on_plain_gets_have_empty_body() {
    let app = app();

    for uri in ["/alunos/999", "/alunos/999/cursos", "/cursos/999/alunos", "/professores/abc"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert!(body.is_empty(), "{uri}");
    }
}

#[tokio::test]
async fn test_missing_ids_on_mutations_carry_error_body() {
    let app = app();
    let ana = create_student(&app, "Ana").await;

    let (status, error) = send_json(&app, Method::POST, &format!("/alunos/{ana}/cursos/42"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "NOT_FOUND");

    let (status, error) = send_json(&app, Method::DELETE, "/disciplinas/7", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_validation_errors_list_fields() {
    let app = app();
    let body = json!({ "nome": "C", "descricao": "Curso", "cargaHoraria": 100 });

    let (status, error) = send_json(&app, Method::POST, "/cursos", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    let messages: Vec<&str> = error["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|detail| detail["message"].as_str().unwrap())
        .collect();
    assert!(messages.contains(&"A quantidade mínima de carga horária é 2400 horas"));
    assert!(messages.contains(&"O nome deve ter entre 2 a 100 letras"));
}

#[tokio::test]
async fn test_unreadable_body_is_bad_request() {
    let app = app();
    let body = json!({ "nome": "Ana", "email": "ana@x.com", "sexo": "OUTRO" });

    let (status, error) = send_json(&app, Method::POST, "/alunos", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_JSON");
}

#[tokio::test]
async fn test_search_page_and_links() {
    let app = app();
    for nome in ["Ana", "Bruna", "Carla", "Pedro"] {
        create_student(&app, nome).await;
    }

    let (status, page) =
        send_json(&app, Method::GET, "/alunos/search?q=a&sort=nome&size=2&page=0", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["pagination"], json!({ "page": 1, "size": 2, "totalElements": 3, "totalPages": 2 }));
    assert_eq!(page["alunos"][0]["nome"], "Ana");
    assert_eq!(page["alunos"][1]["nome"], "Bruna");

    let links = &page["_links"];
    assert_eq!(
        links["self"],
        "http://localhost:8080/alunos/search?q=a&sort=nome&direction=asc&size=2&page=1"
    );
    assert_eq!(
        links["next"],
        "http://localhost:8080/alunos/search?q=a&sort=nome&direction=asc&size=2&page=2"
    );
    assert!(links.get("prev").is_none());
    assert_eq!(links["alunos"], "http://localhost:8080/alunos");
}

#[tokio::test]
async fn test_malformed_query_values_are_normalized() {
    let app = app();
    create_student(&app, "Ana").await;

    let (status, page) = send_json(
        &app,
        Method::GET,
        "/alunos/search?sort=senha&direction=sideways&page=x&size=-4",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["pagination"]["page"], 1);
    assert_eq!(page["pagination"]["size"], 1);
    assert!(page["_links"]["self"].as_str().unwrap().contains("sort=id"));
}

#[tokio::test]
async fn test_list_returns_plain_array() {
    let app = app();
    create_student(&app, "Ana").await;
    create_student(&app, "Bia").await;

    let (status, list) = send_json(&app, Method::GET, "/alunos", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 2);
    assert_eq!(list[0]["_links"]["all"], "http://localhost:8080/alunos");
}

#[tokio::test]
async fn test_professor_lifecycle_with_course() {
    let app = app();
    let (status, rita) = send_json(
        &app,
        Method::POST,
        "/professores",
        Some(json!({ "nome": "Rita", "email": "rita@x.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let rita = rita["id"].as_i64().unwrap();

    let (status, calc) = create_course(&app, "Calc", Some(rita)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(calc["professor"]["email"], "rita@x.com");

    let (status, _) = create_course(&app, "Física", Some(rita)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = create_course(&app, "Química", Some(999)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, &format!("/professores/{rita}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let calc = calc["id"].as_i64().unwrap();
    let (_, course) = send_json(&app, Method::GET, &format!("/cursos/{calc}"), None).await;
    assert!(course["professor"].is_null());
}

#[tokio::test]
async fn test_update_replaces_fields() {
    let app = app();
    let body = json!({ "nome": "Álgebra", "descricao": "Linear", "cargaHoraria": 60 });
    let (_, subject) = send_json(&app, Method::POST, "/disciplinas", Some(body)).await;
    let id = subject["id"].as_i64().unwrap();

    let body = json!({ "nome": "Álgebra II", "descricao": "Linear", "cargaHoraria": 80 });
    let (status, updated) = send_json(&app, Method::PUT, &format!("/disciplinas/{id}"), Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id);
    assert_eq!(updated["nome"], "Álgebra II");
    assert_eq!(updated["cargaHoraria"], 80);
}

#[tokio::test]
async fn test_configured_public_base_is_used_for_links() {
    let api = ApiConfig {
        public_base_url: Some("https://campus.example.com/".to_string()),
        ..ApiConfig::default()
    };
    let app = app_with(&api);
    let ana = create_student(&app, "Ana").await;

    let (_, student) = send_json(&app, Method::GET, &format!("/alunos/{ana}"), None).await;
    assert_eq!(
        student["_links"]["self"],
        format!("https://campus.example.com/alunos/{ana}")
    );
}

#[tokio::test]
async fn test_spoofed_host_cannot_redirect_links() {
    let app = app();
    create_student(&app, "Ana").await;

    for host in ["x@evil.com", "evil.com/p"] {
        let request = Request::builder()
            .uri("/alunos")
            .header(header::HOST, host)
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "host {host}");
    }
}

#[tokio::test]
async fn test_search_size_above_total_keeps_requested_size() {
    let app = app();
    for nome in ["Ana", "Bia", "Carla"] {
        create_student(&app, nome).await;
    }

    let (status, page) = send_json(&app, Method::GET, "/alunos/search?size=150", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["pagination"]["size"], 150);
    assert_eq!(page["pagination"]["totalPages"], 1);
    assert!(page["_links"].get("next").is_none());
    assert!(page["_links"]["self"].as_str().unwrap().contains("size=150"));
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = app();

    let (status, ready) = send_json(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ready["storage"], "memory");

    let (status, _) = send(&app, Method::GET, "/live", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, health) = send_json(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = app();
    let (status, doc) = send_json(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/alunos/search"].is_object());
}
