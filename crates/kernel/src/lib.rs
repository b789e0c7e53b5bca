//! Newsdesk Kernel Library
//!
//! News content API: the block model, the in-memory content repository,
//! access control and subscriptions, and the axum routes that serve them.
//! The main entry point for running the server is the `newsdesk` binary.

pub mod access;
pub mod config;
pub mod content;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
