//! HTTP API layer

mod routes;
mod handlers;

pub use routes::{create_router, ApiDoc, AppState};
pub use handlers::{ErrorResponse, HealthResponse};
