//! Outbound messaging stubs. Narrator text is forwarded verbatim; delivery
//! is a trait seam so routes and tests can run without a telco integration.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageChannel {
    Sms,
    WhatsApp,
}

impl MessageChannel {
    pub const fn label(self) -> &'static str {
        match self {
            MessageChannel::Sms => "SMS",
            MessageChannel::WhatsApp => "WhatsApp",
        }
    }
}

/// One message queued for delivery to a farmer's phone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub channel: MessageChannel,
    pub phone: String,
    pub body: String,
    pub farmer_id: Option<String>,
}

/// Delivery hook for outbound channels (Twilio or similar in production).
pub trait MessageSink: Send + Sync {
    fn deliver(&self, message: OutboundMessage) -> Result<(), MessageError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error("message transport unavailable: {0}")]
    Transport(String),
}

/// Demo sink: logs the outbound message and reports success.
#[derive(Debug, Default, Clone)]
pub struct LoggingMessageSink;

impl MessageSink for LoggingMessageSink {
    fn deliver(&self, message: OutboundMessage) -> Result<(), MessageError> {
        tracing::info!(
            channel = message.channel.label(),
            phone = %message.phone,
            farmer_id = ?message.farmer_id,
            body = %message.body,
            "outbound message"
        );
        Ok(())
    }
}

/// Router builder exposing the SMS and WhatsApp forwarding endpoints.
pub fn message_router<S>(sink: Arc<S>) -> Router
where
    S: MessageSink + 'static,
{
    Router::new()
        .route("/api/v1/messages/sms", post(sms_handler::<S>))
        .route("/api/v1/messages/whatsapp", post(whatsapp_handler::<S>))
        .with_state(sink)
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageRequest {
    pub phone: String,
    pub message: String,
    #[serde(default, alias = "farmerId")]
    pub farmer_id: Option<String>,
}

pub(crate) async fn sms_handler<S>(
    State(sink): State<Arc<S>>,
    Json(request): Json<MessageRequest>,
) -> Response
where
    S: MessageSink + 'static,
{
    forward(&*sink, MessageChannel::Sms, request)
}

pub(crate) async fn whatsapp_handler<S>(
    State(sink): State<Arc<S>>,
    Json(request): Json<MessageRequest>,
) -> Response
where
    S: MessageSink + 'static,
{
    forward(&*sink, MessageChannel::WhatsApp, request)
}

fn forward(sink: &dyn MessageSink, channel: MessageChannel, request: MessageRequest) -> Response {
    let message = OutboundMessage {
        channel,
        phone: request.phone.clone(),
        body: request.message,
        farmer_id: request.farmer_id,
    };

    match sink.deliver(message) {
        Ok(()) => {
            let payload = json!({
                "status": "sent",
                "channel": channel.label(),
                "phone": request.phone,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_GATEWAY, Json(payload)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        messages: Mutex<Vec<OutboundMessage>>,
    }

    impl MessageSink for RecordingSink {
        fn deliver(&self, message: OutboundMessage) -> Result<(), MessageError> {
            self.messages
                .lock()
                .expect("sink mutex poisoned")
                .push(message);
            Ok(())
        }
    }

    struct OfflineSink;

    impl MessageSink for OfflineSink {
        fn deliver(&self, _message: OutboundMessage) -> Result<(), MessageError> {
            Err(MessageError::Transport("gateway offline".to_string()))
        }
    }

    #[tokio::test]
    async fn sms_handler_forwards_body_verbatim() {
        let sink = Arc::new(RecordingSink::default());
        let request = MessageRequest {
            phone: "0712345678".to_string(),
            message: "Your Shamba Score is 85.3.".to_string(),
            farmer_id: Some("FM0001".to_string()),
        };

        let response = sms_handler(State(sink.clone()), Json(request)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let delivered = sink.messages.lock().expect("sink mutex poisoned");
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].channel, MessageChannel::Sms);
        assert_eq!(delivered[0].body, "Your Shamba Score is 85.3.");
    }

    #[tokio::test]
    async fn whatsapp_handler_reports_transport_failures() {
        let request = MessageRequest {
            phone: "0712345678".to_string(),
            message: "hello".to_string(),
            farmer_id: None,
        };

        let response = whatsapp_handler(State(Arc::new(OfflineSink)), Json(request)).await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
