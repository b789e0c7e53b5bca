#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Tests for the feed, user, subscription, newsletter, search and health
//! endpoints against the built-in seed.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use newsdesk_test_utils::assert;
use serde_json::json;

mod common;
use common::{TestApp, response_json};

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_reports_loaded_articles() {
    let app = TestApp::new();

    let response = app.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["articles"], app.state.news().len());
}

// =============================================================================
// Feed and categories
// =============================================================================

#[tokio::test]
async fn feed_defaults_to_general() {
    let app = TestApp::new();

    let default = response_json(app.get("/api/v1/feed").await).await;
    let general = response_json(app.get("/api/v1/feed?category=general").await).await;
    assert_eq!(default, general);
    assert_eq!(default["feed"][0]["type"], "__section_header__");
}

#[tokio::test]
async fn feed_is_paginated() {
    let app = TestApp::new();

    let full = response_json(app.get("/api/v1/feed?category=sports&limit=100").await).await;
    let total = full["totalCount"].as_u64().unwrap() as usize;
    assert_eq!(full["feed"].as_array().unwrap().len(), total);

    let page = response_json(app.get("/api/v1/feed?category=sports&limit=2&offset=1").await).await;
    assert_eq!(page["totalCount"], total);
    assert_eq!(page["feed"].as_array().unwrap().len(), 2.min(total - 1));
    assert_eq!(page["feed"][0], full["feed"][1]);
}

#[tokio::test]
async fn feed_rejects_unknown_category() {
    let app = TestApp::new();

    let response = app.get("/api/v1/feed?category=weather").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn categories_list_every_feed() {
    let app = TestApp::new();

    let body = response_json(app.get("/api/v1/categories").await).await;
    assert_eq!(
        body["categories"],
        json!([
            "business",
            "entertainment",
            "general",
            "health",
            "science",
            "sports",
            "technology"
        ])
    );
}

// =============================================================================
// Users and subscriptions
// =============================================================================

#[tokio::test]
async fn current_user_requires_identity() {
    let app = TestApp::new();

    let response = app.get("/api/v1/users/me").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn current_user_without_subscription() {
    let app = TestApp::new();

    let body = response_json(app.get_as("/api/v1/users/me", "reader").await).await;
    assert_eq!(body["user"], json!({ "id": "reader", "subscription": "none" }));
}

#[tokio::test]
async fn subscriptions_catalog() {
    let app = TestApp::new();

    let body = response_json(app.get("/api/v1/subscriptions").await).await;
    let plans = body["subscriptions"].as_array().unwrap();
    assert_eq!(plans.len(), 3);
    for plan in plans {
        assert::has_key(plan, "id");
        assert::has_key(&plan["cost"], "monthly");
        assert::has_key(&plan["cost"], "annual");
        assert::has_key(plan, "benefits");
    }
}

#[tokio::test]
async fn create_subscription_updates_user() {
    let app = TestApp::new();
    let plus = app.plan_id("plus");

    let response = app
        .post(&format!("/api/v1/subscriptions?subscriptionId={plus}"), Some("reader"))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(app.get_as("/api/v1/users/me", "reader").await).await;
    assert_eq!(body["user"]["subscription"], "plus");
}

#[tokio::test]
async fn unknown_subscription_id_changes_nothing() {
    let app = TestApp::new();
    let basic = app.plan_id("basic");
    app.state.subscriptions().create("reader", &basic);

    let response = app
        .post("/api/v1/subscriptions?subscriptionId=nope", Some("reader"))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(app.get_as("/api/v1/users/me", "reader").await).await;
    assert_eq!(body["user"]["subscription"], "basic");
}

#[tokio::test]
async fn create_subscription_bad_requests() {
    let app = TestApp::new();
    let basic = app.plan_id("basic");

    let anonymous = app
        .post(&format!("/api/v1/subscriptions?subscriptionId={basic}"), None)
        .await;
    assert_eq!(anonymous.status(), StatusCode::BAD_REQUEST);

    let missing_id = app.post("/api/v1/subscriptions", Some("reader")).await;
    assert_eq!(missing_id.status(), StatusCode::BAD_REQUEST);
    let body = response_json(missing_id).await;
    assert_eq!(body["error"], "bad request: subscriptionId is required");
}

#[tokio::test]
async fn subscribing_unlocks_seeded_premium_article() {
    let app = TestApp::new();
    let premium_id = app
        .state
        .news()
        .categories()
        .into_iter()
        .flat_map(|c| app.state.news().feed(c, 100, 0).feed)
        .filter_map(|b| b.as_post().cloned())
        .find(|p| p.is_premium)
        .map(|p| p.id)
        .unwrap();
    let uri = format!("/api/v1/articles/{premium_id}");

    let before = response_json(app.get_as(&uri, "reader").await).await;
    assert_eq!(before["isPreview"], true);

    let premium = app.plan_id("premium");
    app.post(&format!("/api/v1/subscriptions?subscriptionId={premium}"), Some("reader"))
        .await;

    let after = response_json(app.get_as(&uri, "reader").await).await;
    assert_eq!(after["isPreview"], false);
    assert!(after["totalCount"].as_u64() > before["totalCount"].as_u64());
}

// =============================================================================
// Newsletter
// =============================================================================

#[tokio::test]
async fn newsletter_signup() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/v1/newsletter/subscription",
            &json!({ "email": "reader@example.com" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(app.state.newsletter().is_subscribed("reader@example.com"));
}

#[tokio::test]
async fn newsletter_rejects_bad_email() {
    let app = TestApp::new();

    for body in [json!({}), json!({ "email": "not-an-email" })] {
        let response = app
            .post_json("/api/v1/newsletter/subscription", &body)
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
    }
    assert!(app.state.newsletter().is_empty());
}

#[tokio::test]
async fn newsletter_without_json_content_type_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .request(
            Request::post("/api/v1/newsletter/subscription")
                .body(Body::from(r#"{"email":"reader@example.com"}"#))
                .unwrap(),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert::has_key(&response_json(response).await, "error");
    assert!(app.state.newsletter().is_empty());
}

#[tokio::test]
async fn newsletter_malformed_json_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .request(
            Request::post("/api/v1/newsletter/subscription")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"email\":"))
                .unwrap(),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert::has_key(&response_json(response).await, "error");
}

// =============================================================================
// Malformed query parameters
// =============================================================================

#[tokio::test]
async fn malformed_query_parameters_get_json_errors() {
    let app = TestApp::new();
    for uri in [
        "/api/v1/articles/x?limit=abc",
        "/api/v1/articles/x/related?offset=ten",
        "/api/v1/feed?offset=ten",
        "/api/v1/articles/x?preview=maybe",
    ] {
        let response = app.get(uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let content_type = response.headers()[header::CONTENT_TYPE].clone();
        assert_eq!(content_type, "application/json", "{uri}");
        assert::has_key(&response_json(response).await, "error");
    }
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn popular_search() {
    let app = TestApp::new();

    let body = response_json(app.get("/api/v1/search/popular").await).await;
    assert!(!body["articles"].as_array().unwrap().is_empty());
    assert!(!body["topics"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn relevant_search_matches_titles_and_topics() {
    let app = TestApp::new();

    let body = response_json(app.get("/api/v1/search/relevant?q=freight").await).await;
    let articles = body["articles"].as_array().unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0]["type"], "__post_small__");
    assert!(
        articles[0]["title"]
            .as_str()
            .unwrap()
            .to_lowercase()
            .contains("freight")
    );

    let body = response_json(app.get("/api/v1/search/relevant?q=SHIP").await).await;
    assert_eq!(body["topics"], json!(["Shipping"]));
}

#[tokio::test]
async fn relevant_search_requires_term() {
    let app = TestApp::new();

    let response = app.get("/api/v1/search/relevant").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
