//! HTTP API layer for folio.
//!
//! - **Endpoints**: public submission routes and the admin surface
//! - **Extractors**: admin session authentication
//! - **Middleware**: application state and the admin auth layer
//! - **Response**: the `{ success, data }` envelope
//!
//! Built on Axum 0.8 with Tower middleware stack.

pub mod endpoints;
pub mod extractors;
pub mod middleware;
pub mod response;

pub use endpoints::router;
pub use middleware::AppState;
