//! Wire types for the chat endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::conversation::{Command, EngineReply, InboundEvent, Selection};

/// Body of `POST /api/chat/messages`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessageRequest {
    pub chat_id: String,
    pub event: ChatEventDto,
}

/// One inbound chat event on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatEventDto {
    /// A slash command, e.g. `{"type":"command","name":"hotels"}`.
    Command { name: String },
    /// Free text typed by the guest.
    Text { text: String },
    /// A pressed option, echoing its callback token.
    Selection { data: String },
}

impl ChatEventDto {
    /// Decodes the wire event, rejecting unknown commands and tokens.
    pub fn into_event(self) -> Result<InboundEvent, String> {
        match self {
            ChatEventDto::Command { name } => Command::parse(&name)
                .map(InboundEvent::Command)
                .ok_or_else(|| format!("unknown command: {name}")),
            ChatEventDto::Text { text } => Ok(InboundEvent::Text(text)),
            ChatEventDto::Selection { data } => Selection::parse(&data)
                .map(InboundEvent::Selection)
                .ok_or_else(|| format!("unknown selection token: {data}")),
        }
    }
}

/// Option row as rendered to the dispatch layer.
#[derive(Debug, Clone, Serialize)]
pub struct ReplyOptionDto {
    pub data: String,
    pub label: String,
}

/// Reply body of the chat endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatReplyResponse {
    pub text: String,
    pub options: Vec<ReplyOptionDto>,
}

impl From<EngineReply> for ChatReplyResponse {
    fn from(reply: EngineReply) -> Self {
        Self {
            text: reply.text,
            options: reply
                .options
                .into_iter()
                .map(|o| ReplyOptionDto {
                    data: o.data,
                    label: o.label,
                })
                .collect(),
        }
    }
}
