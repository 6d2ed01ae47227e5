//! HTTP handlers for the chat endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::chat::ProcessChatEventHandler;
use crate::domain::foundation::ChatId;

use super::dto::{ChatMessageRequest, ChatReplyResponse};

/// Shared state for the chat routes.
#[derive(Clone)]
pub struct ChatHandlers {
    process: Arc<ProcessChatEventHandler>,
}

impl ChatHandlers {
    pub fn new(process: Arc<ProcessChatEventHandler>) -> Self {
        Self { process }
    }
}

/// POST /api/chat/messages - process one inbound chat event
pub async fn post_message(
    State(handlers): State<ChatHandlers>,
    Json(request): Json<ChatMessageRequest>,
) -> Response {
    let event = match request.event.into_event() {
        Ok(event) => event,
        Err(message) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(message)),
            )
                .into_response()
        }
    };

    match handlers
        .process
        .handle(ChatId::new(request.chat_id), event)
        .await
    {
        Ok(reply) => (StatusCode::OK, Json(ChatReplyResponse::from(reply))).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal(e.to_string())),
        )
            .into_response(),
    }
}
