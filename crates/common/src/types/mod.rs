use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Single-key body used by the health check and by every error response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Body returned after a successful delete.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletedBody {
    pub deleted: Uuid,
}
