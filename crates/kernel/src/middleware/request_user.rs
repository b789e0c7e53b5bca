//! Request identity middleware.
//!
//! Reads `Authorization: Bearer <user id>` and stores the resulting
//! [`RequestUser`] in request extensions. The bearer value is taken as the
//! user id as-is; requests without one are anonymous.

use axum::{body::Body, http::Request, http::header, middleware::Next, response::Response};
use tracing::debug;

use crate::models::RequestUser;

/// Resolve the caller's identity from the request headers.
pub fn identify(request: &Request<Body>) -> RequestUser {
    let bearer = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    RequestUser::from_id(bearer)
}

/// Middleware that attaches a [`RequestUser`] to every request.
pub async fn resolve_request_user(mut request: Request<Body>, next: Next) -> Response {
    let user = identify(&request);
    if let Some(id) = user.id() {
        debug!(user_id = %id, "request identified");
    }
    request.extensions_mut().insert(user);
    next.run(request).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn request(auth: Option<&str>) -> Request<Body> {
        let mut builder = Request::get("/");
        if let Some(auth) = auth {
            builder = builder.header(header::AUTHORIZATION, auth);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn bearer_token_is_user_id() {
        let user = identify(&request(Some("Bearer user-42")));
        assert_eq!(user, RequestUser::Known("user-42".to_string()));
    }

    #[test]
    fn missing_header_is_anonymous() {
        assert!(identify(&request(None)).is_anonymous());
    }

    #[test]
    fn other_schemes_are_anonymous() {
        assert!(identify(&request(Some("Basic dXNlcjpwYXNz"))).is_anonymous());
        assert!(identify(&request(Some("Bearer "))).is_anonymous());
    }
}
