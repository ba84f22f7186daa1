mod health_check;
mod submissions;

pub use health_check::*;
pub use submissions::*;

use crate::service::SubmissionError;
use rocket::response::Responder;
use rocket::serde::json::Json;
use rocket::Request;

/// The `{"message": ...}` body used for health checks, confirmations and errors.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl<'r> Responder<'r, 'static> for SubmissionError {
    fn respond_to(self, request: &'r Request<'_>) -> rocket::response::Result<'static> {
        match &self {
            SubmissionError::Storage(_) => tracing::error!("SubmissionError: {:?}", self),
            _ => tracing::warn!("SubmissionError: {:?}", self),
        }
        (self.status(), Json(MessageBody::new(self.client_message()))).respond_to(request)
    }
}
