//! HTTP handler for the messaging webhook.

use std::sync::Arc;

use axum::{extract::State, Form};
use tracing::{debug, warn};

use crate::application::handlers::conversation::{
    HandleInboundMessageCommand, HandleInboundMessageHandler,
};
use crate::domain::foundation::ContactId;

use super::dto::{InboundMessageForm, MessagingResponse};

#[derive(Clone)]
pub struct WebhookHandlers {
    message_handler: Arc<HandleInboundMessageHandler>,
}

impl WebhookHandlers {
    pub fn new(message_handler: Arc<HandleInboundMessageHandler>) -> Self {
        Self { message_handler }
    }
}

/// POST /webhook/whatsapp - Advance the sender's review dialogue
pub async fn receive_message(
    State(handlers): State<WebhookHandlers>,
    Form(form): Form<InboundMessageForm>,
) -> MessagingResponse {
    let contact = match ContactId::new(form.from) {
        Ok(contact) => contact,
        Err(e) => {
            warn!(error = %e, "Webhook message without sender");
            return MessagingResponse::bad_request("Missing sender");
        }
    };

    debug!(contact = %contact, "Inbound message");

    let outcome = handlers
        .message_handler
        .handle(HandleInboundMessageCommand::new(contact, form.body))
        .await;

    MessagingResponse::ok(outcome.reply)
}
