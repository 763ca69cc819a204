//! End-to-end behavior of the receipt service through its public facade and HTTP router.

use std::collections::HashSet;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use receipt_points::receipts::{
    calculate_points, receipt_router, validate, InMemoryReceiptStore, PointsRule,
    ReceiptRepository, ReceiptService, ReceiptSubmission,
};

fn corner_market_payload() -> Value {
    json!({
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" }
        ],
        "total": "9.00"
    })
}

async fn send(router: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("route executes");
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    (status, serde_json::from_slice(&body).expect("json body"))
}

fn post_process(payload: &Value) -> Request<Body> {
    Request::post("/receipts/process")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

fn get(uri: String) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request builds")
}

#[tokio::test]
async fn process_then_lookup_round_trip() {
    let store = Arc::new(InMemoryReceiptStore::new());
    let router = receipt_router(Arc::new(ReceiptService::new(store.clone())));

    let (status, body) = send(&router, post_process(&corner_market_payload())).await;
    assert_eq!(status, StatusCode::OK);
    let id = body["id"].as_str().expect("id present").to_string();

    let (status, body) = send(&router, get(format!("/receipts/{id}/points"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "points": 109 }));

    let (status, body) = send(&router, get("/receipts/list".to_string())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[id.as_str()]["points"], json!(109));
    assert_eq!(store.list().expect("store lists").len(), 1);
}

#[tokio::test]
async fn concurrent_submissions_get_unique_ids() {
    let store = Arc::new(InMemoryReceiptStore::new());
    let router = receipt_router(Arc::new(ReceiptService::new(store.clone())));

    let mut tasks = Vec::new();
    for _ in 0..16 {
        let router = router.clone();
        tasks.push(tokio::spawn(async move {
            send(&router, post_process(&corner_market_payload())).await
        }));
    }

    let mut ids = HashSet::new();
    for task in tasks {
        let (status, body) = task.await.expect("task joins");
        assert_eq!(status, StatusCode::OK);
        ids.insert(body["id"].as_str().expect("id").to_string());
    }

    assert_eq!(ids.len(), 16);
    assert_eq!(store.len(), 16);
}

#[tokio::test]
async fn rejected_payloads_leave_store_untouched() {
    let store = Arc::new(InMemoryReceiptStore::new());
    let router = receipt_router(Arc::new(ReceiptService::new(store.clone())));

    let mut bad_date = corner_market_payload();
    bad_date["purchaseDate"] = json!("2022/03/20");
    let (status, body) = send(&router, post_process(&bad_date)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap_or_default().contains("purchaseDate"));

    let mut no_items = corner_market_payload();
    no_items["items"] = json!([]);
    let (status, _) = send(&router, post_process(&no_items)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(store.is_empty());
}

#[test]
fn library_scoring_matches_service_scoring() {
    let submission: ReceiptSubmission =
        serde_json::from_value(corner_market_payload()).expect("payload decodes");
    let receipt = validate(submission).expect("payload validates");
    let breakdown = calculate_points(&receipt).expect("payload scores");

    assert_eq!(breakdown.total, 109);
    assert_eq!(breakdown.points_for(PointsRule::RetailerName), 14);
    assert_eq!(breakdown.points_for(PointsRule::ItemPairs), 10);
}
