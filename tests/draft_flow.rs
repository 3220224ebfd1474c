//! End-to-end checks through the public API: extraction feeding composition,
//! and the full router with its middleware stack.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use chrono::NaiveDate;
use tower::ServiceExt;

use notice_reply::{compose, create_router, extract, AppState, Config, UploadedDocument};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
}

#[test]
fn test_draft_round_trips_through_plain_text_extraction() {
    let notice = "Demand of Rs.10000 raised under Section 73 for FY 2019-20";
    let draft = compose(notice, "", "", &[], date());

    let reread = extract(&UploadedDocument::new(draft.into_bytes(), Some("text/plain"))).unwrap();
    assert!(reread.contains(notice));
    assert!(reread.contains("submitted on 31-01-2025"));
}

#[test]
fn test_spec_example_ordering() {
    let draft = compose(
        "Demand of Rs.10000 raised",
        "",
        "We have paid via DRC-03",
        &["Reconciliation statement".to_string()],
        date(),
    );

    let facts = draft.find("Demand of Rs.10000 raised").unwrap();
    let working = draft.find("1. Working Paper 1:").unwrap();
    let statement = draft.find("Reconciliation statement").unwrap();
    let opinion = draft.find("We have paid via DRC-03").unwrap();
    let references = draft.find("- Notice reply timelines:").unwrap();
    let last_reference = draft.find("- Mismatch and reconciliation:").unwrap();

    assert!(facts < working);
    assert!(working < statement);
    assert!(statement < opinion);
    assert!(opinion < references);
    assert!(references < last_reference);
}

#[tokio::test]
async fn test_full_router_generates_and_downloads() {
    let app = create_router(AppState::new(Config::default()));

    let boundary = "flow-boundary";
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"notice\"; filename=\"notice.txt\"\r\nContent-Type: text/plain\r\n\r\nITC mismatch observed\r\n\
         --{b}\r\nContent-Disposition: form-data; name=\"sample_reply\"\r\n\r\nOur sample format\r\n\
         --{b}--\r\n",
        b = boundary
    );
    let request = Request::post("/api/draft/text")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let draft = String::from_utf8(bytes.to_vec()).unwrap();

    assert!(draft.starts_with("Sample reply format provided (for reference):\nOur sample format\n\n---\n\n"));
    assert!(draft.contains("ITC mismatch observed"));

    let download = Request::post("/api/draft/download")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("reply=Thanking+you"))
        .unwrap();
    let response = app.oneshot(download).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .contains("gst_notice_reply.txt"));
}

#[tokio::test]
async fn test_health_through_full_router() {
    let app = create_router(AppState::new(Config::default()));
    let response = app
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
