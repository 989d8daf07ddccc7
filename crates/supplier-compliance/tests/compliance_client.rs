mod common;

use axum::routing::get;
use axum::Router;
use chrono::NaiveDate;
use common::{mock_api, mock_router, serve, MockState};
use serde_json::{json, Value};
use std::sync::Arc;
use supplier_compliance::{
    ApiError, ComplianceApiClient, ComplianceSubmission, MetricResult, SupplierId,
};

#[tokio::test]
async fn list_suppliers_preserves_server_order() {
    let (client, state) = mock_api().await;

    let suppliers = client.list_suppliers().await.expect("suppliers load");

    let ids: Vec<i64> = suppliers.iter().map(|supplier| supplier.id.0).collect();
    assert_eq!(ids, vec![3, 1, 2], "no client-side sorting");
    assert_eq!(suppliers[2].compliance_score, None);
    assert_eq!(
        state.list_calls.load(std::sync::atomic::Ordering::SeqCst),
        1
    );
}

#[tokio::test]
async fn get_supplier_returns_requested_id_with_records() {
    let (client, _state) = mock_api().await;

    for id in [1, 2] {
        let supplier = client
            .get_supplier(SupplierId(id))
            .await
            .expect("supplier loads");
        assert_eq!(supplier.id, SupplierId(id));
    }

    let supplier = client.get_supplier(SupplierId(2)).await.expect("supplier loads");
    let metrics: Vec<&str> = supplier
        .compliance_records
        .iter()
        .map(|record| record.metric.as_str())
        .collect();
    assert_eq!(metrics, vec!["Water usage", "Labor audit"]);
    assert_eq!(
        supplier.compliance_records[0].result,
        MetricResult::Number(40.5)
    );
}

#[tokio::test]
async fn non_success_status_rejects_with_http_error() {
    let (client, _state) = mock_api().await;

    let err = client
        .get_supplier(SupplierId(404))
        .await
        .expect_err("unknown supplier");
    match err {
        ApiError::Http { status, body, url } => {
            assert_eq!(status, 404);
            assert!(body.contains("Supplier not found"));
            assert!(url.ends_with("/suppliers/404"));
        }
        other => panic!("expected http error, got {other:?}"),
    }

    let err = client
        .get_insights(SupplierId(404))
        .await
        .expect_err("insights fail upstream");
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn insights_are_fetched_fresh_every_time() {
    let (client, state) = mock_api().await;

    let first = client.get_insights(SupplierId(1)).await.expect("insights");
    let second = client.get_insights(SupplierId(1)).await.expect("insights");

    assert_eq!(state.insights_calls(), 2);
    assert_ne!(first.insights, second.insights);
    assert_eq!(first.supplier_id, Some(SupplierId(1)));
    assert_eq!(first.supplier_name.as_deref(), Some("Acme"));
}

#[tokio::test]
async fn submit_compliance_posts_payload_and_returns_raw_response() {
    let (client, state) = mock_api().await;
    let submission = ComplianceSubmission {
        supplier_id: SupplierId(1),
        metric: "CO2".to_string(),
        result: 12.5,
        date_recorded: NaiveDate::from_ymd_opt(2024, 1, 9).expect("valid date"),
    };

    let response = client
        .submit_compliance(&submission)
        .await
        .expect("submission accepted");

    assert_eq!(response["message"], "Compliance data analyzed");
    let submissions = state.submissions.lock().expect("submissions mutex poisoned");
    assert_eq!(
        submissions.as_slice(),
        &[json!({
            "supplier_id": 1,
            "metric": "CO2",
            "result": 12.5,
            "date_recorded": "2024-01-09"
        })]
    );
}

#[tokio::test]
async fn submit_compliance_keeps_non_json_and_empty_bodies() {
    let router = Router::new()
        .route(
            "/text/suppliers/check-compliance",
            axum::routing::post(|| async { "queued for analysis" }),
        )
        .route(
            "/empty/suppliers/check-compliance",
            axum::routing::post(|| async { "" }),
        );
    let base_url = serve(router).await;

    let text_client =
        ComplianceApiClient::with_http_client(reqwest::Client::new(), &format!("{base_url}/text"));
    let response = text_client
        .submit_compliance(&json!({ "supplier_id": 1 }))
        .await
        .expect("text response");
    assert_eq!(response, Value::String("queued for analysis".to_string()));

    let empty_client =
        ComplianceApiClient::with_http_client(reqwest::Client::new(), &format!("{base_url}/empty"));
    let response = empty_client
        .submit_compliance(&json!({ "supplier_id": 1 }))
        .await
        .expect("empty response");
    assert_eq!(response, Value::Null);
}

#[tokio::test]
async fn base_url_path_prefix_is_kept() {
    let state = Arc::new(MockState::default());
    let base_url = serve(Router::new().nest("/api", mock_router(state))).await;
    let client =
        ComplianceApiClient::with_http_client(reqwest::Client::new(), &format!("{base_url}/api/"));

    let supplier = client.get_supplier(SupplierId(1)).await.expect("prefixed lookup");
    assert_eq!(supplier.name, "Acme");
}

#[tokio::test]
async fn undecodable_success_body_is_unknown_error() {
    let router = Router::new().route("/suppliers", get(|| async { "<html>maintenance</html>" }));
    let base_url = serve(router).await;
    let client = ComplianceApiClient::with_http_client(reqwest::Client::new(), &base_url);

    let err = client.list_suppliers().await.expect_err("html is not a supplier list");
    assert!(matches!(err, ApiError::Unknown { .. }), "got {err:?}");
}

#[tokio::test]
async fn concurrent_calls_are_independent() {
    let (client, state) = mock_api().await;

    let (list, detail, insights) = tokio::join!(
        client.list_suppliers(),
        client.get_supplier(SupplierId(2)),
        client.get_insights(SupplierId(2)),
    );

    assert_eq!(list.expect("list").len(), 3);
    assert_eq!(detail.expect("detail").id, SupplierId(2));
    assert!(insights.expect("insights").insights.contains("supplier 2"));
    assert_eq!(state.detail_calls(), 1);
}
