//! HTTP adapter for service info and health endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{HealthResponse, ServiceInfoResponse};
pub use handlers::SystemHandlers;
pub use routes::system_routes;
