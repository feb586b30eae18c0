//! HTTP adapter for the inbound messaging webhook.

mod dto;
mod handlers;
mod routes;

pub use dto::{InboundMessageForm, MessagingResponse};
pub use handlers::WebhookHandlers;
pub use routes::webhook_routes;
