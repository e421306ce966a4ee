//! HTTP layer for the Parley relay.
//!
//! Axum-based API with permissive CORS for the browser frontend and
//! request tracing.

pub mod error;
pub mod handlers;
pub mod router;
