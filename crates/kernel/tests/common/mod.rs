#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common test utilities for integration tests.
//!
//! This module provides test infrastructure that uses the REAL kernel
//! router and state, not mock implementations. Each test builds its own
//! [`TestApp`]; state is in memory, so apps are cheap and isolated.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, header};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use newsdesk_kernel::content::{NewsStore, seed};
use newsdesk_kernel::models::NewsItem;
use newsdesk_kernel::{AppState, routes};

/// Test application wrapper using the REAL kernel routes and state.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    /// App over the built-in seed data.
    pub fn new() -> Self {
        Self::with_store(NewsStore::from_seed(seed::builtin()))
    }

    /// App over exactly `items`.
    pub fn with_items(items: Vec<NewsItem>) -> Self {
        Self::with_store(newsdesk_test_utils::store_with(items))
    }

    pub fn with_store(store: NewsStore) -> Self {
        let state = AppState::with_store(store);
        let router = routes::router(state.clone());
        Self { router, state }
    }

    /// Send a request to the test application.
    pub async fn request(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request")
    }

    /// GET as an anonymous caller.
    pub async fn get(&self, uri: &str) -> Response {
        self.request(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    /// GET with `Authorization: Bearer <user_id>`.
    pub async fn get_as(&self, uri: &str, user_id: &str) -> Response {
        self.request(
            Request::get(uri)
                .header(header::AUTHORIZATION, format!("Bearer {user_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// POST with no body, optionally as a known user.
    pub async fn post(&self, uri: &str, user_id: Option<&str>) -> Response {
        let mut builder = Request::post(uri);
        if let Some(id) = user_id {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {id}"));
        }
        self.request(builder.body(Body::empty()).unwrap()).await
    }

    /// POST a JSON body.
    pub async fn post_json(&self, uri: &str, body: &Value) -> Response {
        self.request(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Id of a catalog plan with the given tier name.
    pub fn plan_id(&self, tier: &str) -> String {
        self.state
            .subscriptions()
            .catalog()
            .iter()
            .find(|s| s.name.as_str() == tier)
            .map(|s| s.id.clone())
            .expect("plan exists")
    }
}

/// Read a response body as JSON.
pub async fn response_json(response: Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap_or_else(|_| {
        let text = String::from_utf8_lossy(&body);
        panic!("Failed to parse JSON: {text}");
    })
}
