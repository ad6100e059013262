use crate::shared::infrastructure::key_value_store::KeyValueStore;
use crate::shell::http::router;
use crate::tests::fixtures::state::make_test_state;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

fn json_request(method: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri("/api/events")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn manages_events_and_publishes_them_as_a_feed() {
    let (_, state) = make_test_state();
    let app = router(state);

    for (date, title) in [
        ("2024-09-14", "Saisonfinale"),
        ("2024-03-02", "Heimspiel"),
        ("2024-06-20", "Pokal"),
    ] {
        let (status, _) = send(
            &app,
            json_request("POST", &format!(r#"{{"date":"{date}","title":"{title}"}}"#)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(
        &app,
        Request::get("/api/events").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let dates: Vec<_> = json["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["date"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(dates, vec!["2024-03-02", "2024-06-20", "2024-09-14"]);

    let (status, _) = send(&app, json_request("DELETE", r#"{"date":"2024-06-20"}"#)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Request::get("/calendar").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    let feed = String::from_utf8(body).unwrap();
    let uids: Vec<_> = feed.lines().filter(|l| l.starts_with("UID:")).collect();
    assert_eq!(
        uids,
        vec![
            "UID:2024-03-02@vfl-bockum-tickets",
            "UID:2024-09-14@vfl-bockum-tickets"
        ]
    );
    assert_eq!(feed.matches("BEGIN:VEVENT").count(), 2);
    assert_eq!(feed.matches("STATUS:CONFIRMED").count(), 2);
}

#[tokio::test]
async fn rejects_an_invalid_date_without_persisting_anything() {
    let (kv, state) = make_test_state();
    let app = router(state);

    let (status, body) = send(&app, json_request("POST", r#"{"date":"2024-5-1"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "Invalid date format, expected YYYY-MM-DD");
    assert_eq!(kv.get("events").await.unwrap(), None);
}
