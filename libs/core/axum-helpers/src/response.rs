//! Uniform response envelope.
//!
//! Every endpoint (success and failure alike) answers with the same JSON
//! shape: `{ success, data?, message?, error?, count? }`. Optional fields are
//! omitted from the payload entirely rather than serialized as null.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success envelope carrying a payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> ApiResponse<T> {
    /// Envelope with a payload and nothing else.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            count: None,
        }
    }

    /// Envelope with a payload and a human-readable message.
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            count: None,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Envelope for list endpoints; `count` mirrors the list length.
    pub fn list(data: Vec<T>) -> Self {
        let count = data.len();
        Self {
            success: true,
            data: Some(data),
            message: None,
            count: Some(count),
        }
    }
}

/// Message-only envelope, used where no payload is returned
/// (soft delete, restore, 404 fallback).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiMessage {
    pub success: bool,
    pub message: String,
}

impl ApiMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
