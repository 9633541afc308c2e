//! The six public operations, sequenced from the resolvers and composers.
//! Domain absences come back as `{error}` payloads; transport and GraphQL
//! failures propagate as `Err` to the boundary.

pub mod comments;
pub mod issues;
pub mod teams;

use serde::Serialize;

/// Payload handed back to the tool caller: either the operation's value or
/// a structured `{"error": "..."}` object.
#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum ToolReply<T> {
    Success(T),
    Error { error: String },
}

impl<T> ToolReply<T> {
    pub fn error(message: impl Into<String>) -> Self {
        ToolReply::Error {
            error: message.into(),
        }
    }

    pub fn as_error(&self) -> Option<&str> {
        match self {
            ToolReply::Error { error } => Some(error),
            ToolReply::Success(_) => None,
        }
    }
}
