use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{any, delete, get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use uuid::Uuid;

use rostergate::backends::{BackendError, EmployeeBackend, HttpEmployeeBackend};
use rostergate::models::CreateEmployeeRequest;

/// Records the JSON bodies the client sends, so tests can assert the wire
/// shape of write calls.
#[derive(Clone, Default)]
struct RecordedBodies(Arc<Mutex<Vec<Value>>>);

async fn spawn_backend(app: Router) -> (String, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give server time to start
    tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

    (base_url, handle)
}

fn client(base_url: &str) -> HttpEmployeeBackend {
    HttpEmployeeBackend::with_client(reqwest::Client::new(), base_url)
}

fn wire_employee(name: &str, salary: i64) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "employee_name": name,
        "employee_salary": salary,
        "employee_age": 30,
        "employee_title": "Engineer",
        "employee_email": format!("{name}@company.com"),
    })
}

#[tokio::test]
async fn test_list_decodes_bare_array() {
    let app = Router::new().route(
        "/",
        get(|| async { Json(json!([wire_employee("a", 10000), wire_employee("b", 20000)])) }),
    );
    let (base_url, _handle) = spawn_backend(app).await;

    let employees = client(&base_url).list_employees().await.expect("list");
    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0].name, "a");
    assert_eq!(employees[1].salary, 20000);
}

#[tokio::test]
async fn test_list_non_success_is_unavailable() {
    let app = Router::new().route("/", any(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
    let (base_url, _handle) = spawn_backend(app).await;

    let err = client(&base_url).list_employees().await.expect_err("500");
    match err {
        BackendError::Unavailable { status } => assert_eq!(status, 500),
        other => panic!("expected Unavailable, got {other:?}"),
    }
    // The observed status code is part of the message surfaced in logs.
    assert_eq!(
        err.to_string(),
        "V1 employee API didn't return successful response, status code : 500"
    );
}

#[tokio::test]
async fn test_get_unwraps_envelope() {
    let id = Uuid::new_v4();
    let app = Router::new().route(
        "/{id}",
        get(move || async move {
            Json(json!({
                "data": {
                    "id": id,
                    "employee_name": "Garrett Winters",
                    "employee_salary": 170750,
                    "employee_age": 63,
                    "employee_title": "Accountant",
                },
                "status": "Successfully processed request.",
            }))
        }),
    );
    let (base_url, _handle) = spawn_backend(app).await;

    let employee = client(&base_url).get_employee(id).await.expect("get");
    assert_eq!(employee.id, id);
    assert_eq!(employee.name, "Garrett Winters");
    assert_eq!(employee.email, None);
}

#[tokio::test]
async fn test_get_classifies_404_as_not_found() {
    let app = Router::new().route("/{id}", get(|| async { StatusCode::NOT_FOUND }));
    let (base_url, _handle) = spawn_backend(app).await;

    let err = client(&base_url)
        .get_employee(Uuid::new_v4())
        .await
        .expect_err("404");
    assert!(matches!(err, BackendError::NotFound { status: 404 }));
}

#[tokio::test]
async fn test_get_rejects_success_envelope_without_data() {
    let app = Router::new().route(
        "/{id}",
        get(|| async { Json(json!({"status": "Failed to process request."})) }),
    );
    let (base_url, _handle) = spawn_backend(app).await;

    let err = client(&base_url)
        .get_employee(Uuid::new_v4())
        .await
        .expect_err("missing data");
    assert!(matches!(err, BackendError::Envelope(_)));
}

#[tokio::test]
async fn test_create_posts_bare_field_names() {
    let recorded = RecordedBodies::default();
    let app = Router::new()
        .route(
            "/",
            post(
                |State(recorded): State<RecordedBodies>, Json(body): Json<Value>| async move {
                    recorded.0.lock().unwrap().push(body.clone());
                    let employee = json!({
                        "id": Uuid::new_v4(),
                        "employee_name": body["name"],
                        "employee_salary": body["salary"],
                        "employee_age": body["age"],
                        "employee_title": body["title"],
                    });
                    Json(json!({"data": employee, "status": "Successfully processed request."}))
                },
            ),
        )
        .with_state(recorded.clone());
    let (base_url, _handle) = spawn_backend(app).await;

    let request = CreateEmployeeRequest {
        name: "Airi Satou".to_string(),
        salary: 162700,
        age: 33,
        title: "Accountant".to_string(),
    };
    let created = client(&base_url)
        .create_employee(&request)
        .await
        .expect("create");
    assert_eq!(created.name, "Airi Satou");

    let bodies = recorded.0.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(
        bodies[0],
        json!({"name": "Airi Satou", "salary": 162700, "age": 33, "title": "Accountant"})
    );
}

#[tokio::test]
async fn test_create_non_success_is_unavailable() {
    let app = Router::new().route("/", post(|| async { StatusCode::SERVICE_UNAVAILABLE }));
    let (base_url, _handle) = spawn_backend(app).await;

    let request = CreateEmployeeRequest {
        name: "Angelica Ramos".to_string(),
        salary: 1200000,
        age: 47,
        title: "Chief Executive Officer".to_string(),
    };
    let err = client(&base_url)
        .create_employee(&request)
        .await
        .expect_err("503");
    assert!(matches!(err, BackendError::Unavailable { status: 503 }));
}

#[tokio::test]
async fn test_delete_sends_name_body_and_returns_flag() {
    let recorded = RecordedBodies::default();
    let app = Router::new()
        .route(
            "/",
            delete(
                |State(recorded): State<RecordedBodies>, Json(body): Json<Value>| async move {
                    recorded.0.lock().unwrap().push(body);
                    Json(json!({"data": false, "status": "Successfully processed request."}))
                },
            ),
        )
        .with_state(recorded.clone());
    let (base_url, _handle) = spawn_backend(app).await;

    // A false flag is an idempotent no-op, reported as plain success.
    let deleted = client(&base_url)
        .delete_employee("Bradley Greer")
        .await
        .expect("delete");
    assert!(!deleted);

    let bodies = recorded.0.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0], json!({"name": "Bradley Greer"}));
}

#[tokio::test]
async fn test_delete_non_success_is_unavailable() {
    let app = Router::new().route("/", delete(|| async { StatusCode::BAD_GATEWAY }));
    let (base_url, _handle) = spawn_backend(app).await;

    let err = client(&base_url)
        .delete_employee("anyone")
        .await
        .expect_err("502");
    assert!(matches!(err, BackendError::Unavailable { status: 502 }));
}

#[tokio::test]
async fn test_trailing_slash_in_base_url_is_tolerated() {
    let app = Router::new().route(
        "/",
        get(|| async { Json(json!([wire_employee("solo", 1000)])) }),
    );
    let (base_url, _handle) = spawn_backend(app).await;

    let employees = client(&format!("{base_url}/"))
        .list_employees()
        .await
        .expect("list");
    assert_eq!(employees.len(), 1);
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind then drop a listener so the port is free but unserved.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{}", addr))
        .list_employees()
        .await
        .expect_err("refused");
    assert!(matches!(err, BackendError::Transport(_)));
}
