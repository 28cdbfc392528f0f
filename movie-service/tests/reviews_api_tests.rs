mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

async fn save(app: &TestApp, token: &str, payload: serde_json::Value) -> reqwest::Response {
    app.post_authenticated("/reviews", token)
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request")
}

async fn movie_reviews(app: &TestApp, movie_id: i64) -> Vec<serde_json::Value> {
    let response = app
        .get(&format!("/reviews/movie/{}", movie_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    body.as_array().unwrap().clone()
}

#[tokio::test]
async fn test_save_review_upserts_in_place() {
    let app = TestApp::spawn().await;
    let token = app.register("alice", "alice@x.com", "p4ss").await;

    let response = save(
        &app,
        &token,
        json!({ "movieId": 550, "rating": 4, "comment": "  Great  " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let first: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(first["movieId"], 550);
    assert_eq!(first["rating"], 4);
    assert_eq!(first["comment"], "Great");
    assert_eq!(first["username"], "alice");
    assert!(first["userId"].is_string());
    assert!(first["createdAt"].is_string());

    let response = save(&app, &token, json!({ "movieId": 550, "rating": 2 })).await;
    assert_eq!(response.status(), StatusCode::OK);
    let second: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(second["id"], first["id"]);
    assert_eq!(second["createdAt"], first["createdAt"]);
    assert_eq!(second["rating"], 2);
    assert!(second["comment"].is_null());

    let reviews = movie_reviews(&app, 550).await;
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["rating"], 2);
}

#[tokio::test]
async fn test_movie_reviews_are_public() {
    let app = TestApp::spawn().await;
    let alice = app.register("alice", "alice@x.com", "p4ss").await;
    let bob = app.register("bob", "bob@x.com", "p4ss").await;

    save(&app, &alice, json!({ "movieId": 13, "rating": 5 })).await;
    save(&app, &bob, json!({ "movieId": 13, "rating": 1, "comment": "meh" })).await;
    save(&app, &bob, json!({ "movieId": 14, "rating": 3 })).await;

    let reviews = movie_reviews(&app, 13).await;
    assert_eq!(reviews.len(), 2);
    let mut authors: Vec<&str> = reviews
        .iter()
        .map(|r| r["username"].as_str().unwrap())
        .collect();
    authors.sort();
    assert_eq!(authors, vec!["alice", "bob"]);

    assert!(movie_reviews(&app, 999).await.is_empty());
}

#[tokio::test]
async fn test_user_reviews_lists_only_own() {
    let app = TestApp::spawn().await;
    let alice = app.register("alice", "alice@x.com", "p4ss").await;
    let bob = app.register("bob", "bob@x.com", "p4ss").await;

    save(&app, &alice, json!({ "movieId": 1, "rating": 5 })).await;
    save(&app, &alice, json!({ "movieId": 2, "rating": 4 })).await;
    save(&app, &bob, json!({ "movieId": 1, "rating": 1 })).await;

    let response = app
        .get_authenticated("/reviews/user", &alice)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let reviews = body.as_array().unwrap();
    assert_eq!(reviews.len(), 2);
    assert!(reviews.iter().all(|r| r["username"] == "alice"));

    let response = app
        .get("/reviews/user")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_delete_review_checks_ownership() {
    let app = TestApp::spawn().await;
    let alice = app.register("alice", "alice@x.com", "p4ss").await;
    let bob = app.register("bob", "bob@x.com", "p4ss").await;

    let response = save(&app, &alice, json!({ "movieId": 550, "rating": 4 })).await;
    let review: serde_json::Value = response.json().await.expect("Failed to parse response");
    let path = format!("/reviews/{}", review["id"].as_str().unwrap());

    let response = app
        .delete_authenticated(&path, &bob)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Not authorized to delete this review");
    assert_eq!(movie_reviews(&app, 550).await.len(), 1);

    let response = app
        .delete_authenticated(&path, &alice)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Review deleted successfully");
    assert!(movie_reviews(&app, 550).await.is_empty());

    let response = app
        .delete_authenticated(&path, &alice)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_or_malformed_review_id() {
    let app = TestApp::spawn().await;
    let token = app.register("alice", "alice@x.com", "p4ss").await;

    let response = app
        .delete_authenticated(&format!("/reviews/{}", uuid::Uuid::new_v4()), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Review not found");

    let response = app
        .delete_authenticated("/reviews/not-a-uuid", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_save_review_validation() {
    let app = TestApp::spawn().await;
    let token = app.register("alice", "alice@x.com", "p4ss").await;

    let cases = [
        json!({ "movieId": 550, "rating": 0 }),
        json!({ "movieId": 550, "rating": 6 }),
        json!({ "movieId": 0, "rating": 3 }),
        json!({ "movieId": 550, "rating": 3, "comment": "x".repeat(2001) }),
        json!({ "movieId": 550 }),
    ];

    for payload in cases {
        let response = save(&app, &token, payload.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", payload);
    }

    assert!(movie_reviews(&app, 550).await.is_empty());

    let response = save(
        &app,
        &token,
        json!({ "movieId": 550, "rating": 3, "comment": "x".repeat(2000) }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_movie_reviews_rejects_invalid_movie_id() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/reviews/movie/abc")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
