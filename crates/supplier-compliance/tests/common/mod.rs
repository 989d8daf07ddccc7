#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use supplier_compliance::ComplianceApiClient;

/// Recorded traffic for the in-process compliance API.
#[derive(Default)]
pub struct MockState {
    pub list_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
    pub insights_calls: AtomicUsize,
    pub submissions: Mutex<Vec<Value>>,
}

impl MockState {
    pub fn insights_calls(&self) -> usize {
        self.insights_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }
}

pub fn suppliers() -> Value {
    json!([
        { "id": 3, "name": "Zenith Textiles", "country": "IN", "compliance_score": 64, "last_audit": "2023-11-02" },
        { "id": 1, "name": "Acme", "country": "US", "compliance_score": 82, "last_audit": "2024-01-10" },
        { "id": 2, "name": "Borealis Metals", "country": "CA", "compliance_score": null, "last_audit": null }
    ])
}

pub fn supplier_detail(id: i64) -> Option<Value> {
    match id {
        1 => Some(json!({
            "id": 1,
            "name": "Acme",
            "country": "US",
            "compliance_score": 82,
            "last_audit": "2024-01-10",
            "compliance_records": [
                { "id": 9, "metric": "CO2", "result": "pass", "date_recorded": "2024-01-09", "status": "ok" }
            ]
        })),
        2 => Some(json!({
            "id": 2,
            "name": "Borealis Metals",
            "country": "CA",
            "compliance_score": 71,
            "last_audit": "2023-12-01",
            "compliance_records": [
                { "id": 14, "metric": "Water usage", "result": 40.5, "date_recorded": "2023-11-30", "status": "Analyzed" },
                { "id": 11, "metric": "Labor audit", "result": "fail", "date_recorded": "2023-10-15", "status": "Pending Analysis" }
            ]
        })),
        // Slow supplier used to race navigation.
        5 => Some(json!({
            "id": 5,
            "name": "Slowpoke Logistics",
            "country": "DE",
            "compliance_score": 50,
            "last_audit": "2023-06-01",
            "compliance_records": []
        })),
        _ => None,
    }
}

async fn list_handler(State(state): State<Arc<MockState>>) -> Json<Value> {
    state.list_calls.fetch_add(1, Ordering::SeqCst);
    Json(suppliers())
}

async fn detail_handler(State(state): State<Arc<MockState>>, Path(id): Path<i64>) -> Response {
    state.detail_calls.fetch_add(1, Ordering::SeqCst);
    if id == 5 {
        tokio::time::sleep(Duration::from_millis(300)).await;
    }
    match supplier_detail(id) {
        Some(body) => Json(body).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": "Supplier not found" })),
        )
            .into_response(),
    }
}

async fn insights_handler(State(state): State<Arc<MockState>>, Path(id): Path<i64>) -> Response {
    let call = state.insights_calls.fetch_add(1, Ordering::SeqCst) + 1;
    match supplier_detail(id) {
        Some(detail) => Json(json!({
            "supplier_id": id,
            "supplier_name": detail["name"],
            "insights": format!("Assessment #{call} for supplier {id}\nRisk: low"),
        }))
        .into_response(),
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": "404: Supplier not found" })),
        )
            .into_response(),
    }
}

async fn check_compliance_handler(
    State(state): State<Arc<MockState>>,
    Json(payload): Json<Value>,
) -> Json<Value> {
    state
        .submissions
        .lock()
        .expect("submissions mutex poisoned")
        .push(payload.clone());
    Json(json!({ "message": "Compliance data analyzed", "insights": "{\"risk_level\": \"low\"}" }))
}

pub fn mock_router(state: Arc<MockState>) -> Router {
    Router::new()
        .route("/suppliers", get(list_handler))
        .route("/suppliers/check-compliance", post(check_compliance_handler))
        .route("/suppliers/insights/:id", get(insights_handler))
        .route("/suppliers/:id", get(detail_handler))
        .with_state(state)
}

/// Serve `router` on an ephemeral port and return its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("listener addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock api serves");
    });
    format!("http://{addr}")
}

pub async fn mock_api() -> (ComplianceApiClient, Arc<MockState>) {
    let state = Arc::new(MockState::default());
    let base_url = serve(mock_router(Arc::clone(&state))).await;
    (
        ComplianceApiClient::with_http_client(reqwest::Client::new(), &base_url),
        state,
    )
}
