//! Shared utilities for integration testing.
//!
//! Two flavors of mock upstream:
//! - a scripted raw-TCP backend that answers with whatever status/body the
//!   test's closure decides, counting calls (for retry-policy tests)
//! - a stateful axum mock that speaks the real envelope API over an
//!   in-memory store (for end-to-end facade tests)

use std::future::Future;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use uuid::Uuid;

use employee_gateway::model::{DeleteEmployeeInput, Employee, EmployeeInput};

/// Start a scripted mock upstream on an ephemeral port.
///
/// The closure receives the zero-based call index and returns the status and
/// body for that call. Returns the bound address and the call counter.
#[allow(dead_code)]
pub async fn start_scripted_upstream<F, Fut>(f: F) -> (SocketAddr, Arc<AtomicU32>)
where
    F: Fn(u32) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let calls = Arc::new(AtomicU32::new(0));
    let counter = calls.clone();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    let calls = calls.clone();
                    tokio::spawn(async move {
                        // Drain the request head (and body, within reason)
                        // before answering so the client sees a clean close.
                        let mut buf = [0u8; 4096];
                        let _ = socket.read(&mut buf).await;

                        let call = calls.fetch_add(1, Ordering::SeqCst);
                        let (status, body) = f(call).await;
                        let status_text = match status {
                            200 => "200 OK",
                            400 => "400 Bad Request",
                            404 => "404 Not Found",
                            429 => "429 Too Many Requests",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, counter)
}

/// Wrap a payload in the upstream's success envelope.
#[allow(dead_code)]
pub fn envelope(data: Value) -> String {
    json!({ "data": data, "status": "Successfully processed request." }).to_string()
}

/// The upstream's rate-limit error body.
#[allow(dead_code)]
pub fn rate_limit_body() -> String {
    json!({ "status": "error", "errorMessage": "too many requests" }).to_string()
}

/// In-memory employee store backing the stateful mock upstream.
#[derive(Clone, Default)]
pub struct MockStore {
    employees: Arc<Mutex<Vec<Employee>>>,
}

#[allow(dead_code)]
impl MockStore {
    pub fn with_employees(employees: Vec<Employee>) -> Self {
        Self {
            employees: Arc::new(Mutex::new(employees)),
        }
    }

    pub fn snapshot(&self) -> Vec<Employee> {
        self.employees.lock().unwrap().clone()
    }
}

/// Build an employee record the way the upstream would.
#[allow(dead_code)]
pub fn seeded_employee(name: &str, salary: u32) -> Employee {
    Employee {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        salary,
        age: 35,
        title: "Engineer".to_string(),
        email: None,
    }
}

/// Start a stateful mock upstream speaking the envelope API at
/// `/api/v1/employee`, on an ephemeral port.
#[allow(dead_code)]
pub async fn start_mock_upstream(store: MockStore) -> SocketAddr {
    let api = Router::new()
        .route("/", get(list_employees).post(create_employee).delete(delete_employee))
        .route("/{id}", get(get_employee))
        .with_state(store);
    let app = Router::new().nest("/api/v1/employee", api);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn list_employees(State(store): State<MockStore>) -> Json<Value> {
    Json(json!({ "data": store.snapshot(), "status": "ok" }))
}

async fn get_employee(State(store): State<MockStore>, Path(id): Path<String>) -> Response {
    match store.snapshot().into_iter().find(|e| e.id == id) {
        Some(employee) => Json(json!({ "data": employee, "status": "ok" })).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "status": "error", "errorMessage": "employee not found" })),
        )
            .into_response(),
    }
}

async fn create_employee(
    State(store): State<MockStore>,
    Json(input): Json<EmployeeInput>,
) -> Response {
    if input.name.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "status": "error", "errorMessage": "name must not be blank" })),
        )
            .into_response();
    }

    let employee = Employee {
        id: Uuid::new_v4().to_string(),
        name: input.name,
        salary: input.salary,
        age: input.age,
        title: input.title,
        email: None,
    };
    store.employees.lock().unwrap().push(employee.clone());
    Json(json!({ "data": employee, "status": "ok" })).into_response()
}

async fn delete_employee(
    State(store): State<MockStore>,
    Json(input): Json<DeleteEmployeeInput>,
) -> Json<Value> {
    let mut employees = store.employees.lock().unwrap();
    let before = employees.len();
    employees.retain(|e| e.name != input.name);
    let removed_exactly_one = before - employees.len() == 1;
    Json(json!({ "data": removed_exactly_one, "status": "ok" }))
}
