//! HTTP middleware components.

pub mod request_user;

pub use request_user::resolve_request_user;
