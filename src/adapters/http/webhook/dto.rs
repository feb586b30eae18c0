//! Wire types for the messaging webhook.
//!
//! Inbound messages arrive form-encoded with the provider's capitalised
//! field names; replies go back as a TwiML-style XML document.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

/// Form body posted by the messaging provider.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundMessageForm {
    /// Sender address, e.g. `whatsapp:+14155550100`.
    #[serde(rename = "From", default)]
    pub from: String,
    /// Message text.
    #[serde(rename = "Body", default)]
    pub body: String,
}

/// XML reply envelope carrying a single message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagingResponse {
    status: StatusCode,
    message: String,
}

impl MessagingResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn to_xml(&self) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Response><Message>{}</Message></Response>",
            html_escape::encode_text(&self.message)
        )
    }
}

impl IntoResponse for MessagingResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/xml")],
            self.to_xml(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_wraps_message() {
        let xml = MessagingResponse::ok("What's your name?").to_xml();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Response><Message>What's your name?</Message></Response>"
        );
    }

    #[test]
    fn markup_in_message_is_escaped() {
        let xml = MessagingResponse::ok("Thanks <b>Tom & Jerry</b>").to_xml();
        assert!(xml.contains("Thanks &lt;b&gt;Tom &amp; Jerry&lt;/b&gt;"));
    }

    #[test]
    fn response_carries_xml_content_type() {
        let response = MessagingResponse::ok("hi").into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/xml"
        );
    }

    #[test]
    fn form_uses_provider_field_names() {
        let form: InboundMessageForm =
            serde_json::from_str(r#"{"From":"whatsapp:+1555","Body":"Hi"}"#).unwrap();
        assert_eq!(form.from, "whatsapp:+1555");
        assert_eq!(form.body, "Hi");
    }
}
