mod common;

use axum::http::StatusCode;
use common::{body_string, TestApp};

async fn count(app: &TestApp, table: &str) -> i64 {
    let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(&app.db)
        .await
        .unwrap();
    count
}

#[tokio::test]
async fn seed_endpoint_loads_sample_memes() {
    let app = TestApp::new().await;

    let resp = app.get("/api/seed-memes", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(body["inserted"], 6);

    assert_eq!(count(&app, "memes").await, 6);
    assert_eq!(count(&app, "tags").await, 15);
    assert_eq!(count(&app, "meme_tags").await, 18);
}

#[tokio::test]
async fn seeding_twice_duplicates_memes_but_not_tags() {
    let app = TestApp::new().await;

    app.get("/api/seed-memes", None).await;
    app.get("/api/seed-memes", None).await;

    assert_eq!(count(&app, "memes").await, 12);
    // Tag resolution converges on the existing rows.
    assert_eq!(count(&app, "tags").await, 15);
    assert_eq!(count(&app, "meme_tags").await, 36);
}

#[tokio::test]
async fn seeded_memes_share_tag_rows() {
    let app = TestApp::new().await;
    app.get("/api/seed-memes", None).await;

    let (rows,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tags WHERE name = '리액션'")
        .fetch_one(&app.db)
        .await
        .unwrap();
    assert_eq!(rows, 1);

    // Three seed memes carry that tag.
    let (links,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM meme_tags mt JOIN tags t ON t.id = mt.tag_id WHERE t.name = '리액션'",
    )
    .fetch_one(&app.db)
    .await
    .unwrap();
    assert_eq!(links, 3);
}

#[tokio::test]
async fn test_db_reports_success_and_bounded_count() {
    let app = TestApp::new().await;
    app.create_meme("One", 1).await;
    app.create_meme("Two", 2).await;

    let resp = app.get("/api/test-db", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 2);
}

#[tokio::test]
async fn test_db_count_is_capped_at_three() {
    let app = TestApp::new().await;
    app.get("/api/seed-memes", None).await;

    let resp = app.get("/api/test-db", None).await;
    let body: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(body["count"], 3);
}
