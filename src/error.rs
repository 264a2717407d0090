//! Order endpoint failures and their HTTP responses.
//!
//! Every failure in the pipeline ends up here. Client-facing messages are
//! Italian whatever the request locale; server-side details are logged.

use crate::attachment::AttachmentError;
use crate::email::DeliveryError;
use crate::order::ValidationError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

pub const MSG_MALFORMED_BODY: &str = "Impossibile leggere i dati del modulo. Riprova.";
pub const MSG_MISSING_FIELDS: &str = "Nome, email e tipo di abbigliamento sono obbligatori.";
pub const MSG_INVALID_EMAIL: &str = "Formato email non valido.";
pub const MSG_IMAGE_TOO_LARGE: &str = "L'immagine supera il limite di 5MB.";
pub const MSG_IMAGE_TYPE: &str = "Tipo di immagine non valido. Consentiti: JPEG, PNG, GIF, WebP.";
pub const MSG_CONFIGURATION: &str = "Errore di configurazione del server.";
pub const MSG_DELIVERY_FAILED: &str = "Invio email fallito. Riprova più tardi.";
pub const MSG_UNEXPECTED: &str = "Si è verificato un errore durante l'elaborazione dell'ordine.";
pub const MSG_ORDER_SENT: &str = "Ordine inviato con successo!";

/// JSON body for every non-success response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("rate limit exceeded, retry in {retry_after_minutes} minute(s)")]
    RateLimited { retry_after_minutes: i64 },

    #[error("unreadable form body: {details}")]
    MalformedBody { details: String },

    #[error("validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("attachment rejected: {0}")]
    AttachmentRejected(#[from] AttachmentError),

    #[error("email delivery is not configured")]
    ConfigurationError,

    #[error("provider rejected order email ({name}): {message}")]
    DeliveryFailed { name: String, message: String },

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl From<DeliveryError> for OrderError {
    fn from(err: DeliveryError) -> Self {
        match err {
            DeliveryError::NotConfigured => OrderError::ConfigurationError,
            DeliveryError::Provider { name, message } => OrderError::DeliveryFailed { name, message },
            other => OrderError::Unexpected(anyhow::Error::new(other)),
        }
    }
}

impl OrderError {
    pub fn status(&self) -> StatusCode {
        match self {
            OrderError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            OrderError::MalformedBody { .. }
            | OrderError::ValidationFailed(_)
            | OrderError::AttachmentRejected(_) => StatusCode::BAD_REQUEST,
            OrderError::ConfigurationError
            | OrderError::DeliveryFailed { .. }
            | OrderError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing body for this failure.
    pub fn body(&self) -> ErrorBody {
        let (error, details) = match self {
            OrderError::RateLimited {
                retry_after_minutes,
            } => (rate_limit_message(*retry_after_minutes), None),
            OrderError::MalformedBody { details } => {
                (MSG_MALFORMED_BODY.to_string(), Some(details.clone()))
            }
            OrderError::ValidationFailed(ValidationError::MissingRequiredFields) => {
                (MSG_MISSING_FIELDS.to_string(), None)
            }
            OrderError::ValidationFailed(ValidationError::InvalidEmail) => {
                (MSG_INVALID_EMAIL.to_string(), None)
            }
            OrderError::AttachmentRejected(AttachmentError::TooLarge) => {
                (MSG_IMAGE_TOO_LARGE.to_string(), None)
            }
            OrderError::AttachmentRejected(AttachmentError::UnsupportedType) => {
                (MSG_IMAGE_TYPE.to_string(), None)
            }
            OrderError::ConfigurationError => (MSG_CONFIGURATION.to_string(), None),
            OrderError::DeliveryFailed { name, message } => {
                let error = if message.is_empty() {
                    MSG_DELIVERY_FAILED.to_string()
                } else {
                    message.clone()
                };
                (error, Some(name.clone()))
            }
            OrderError::Unexpected(_) => (MSG_UNEXPECTED.to_string(), None),
        };

        ErrorBody { error, details }
    }
}

/// Rate-limit rejection text with the minutes left in the client's window.
pub fn rate_limit_message(retry_after_minutes: i64) -> String {
    format!(
        "Hai effettuato troppi ordini. Riprova tra {} minuto/i.",
        retry_after_minutes
    )
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = ?self, "Order processing failed");
        } else {
            warn!(error = %self, "Order rejected");
        }

        (status, Json(self.body())).into_response()
    }
}

/// Body returned for a delivered order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuccessBody {
    pub success: bool,
    pub message: String,
}

impl SuccessBody {
    pub fn order_sent() -> Self {
        Self {
            success: true,
            message: MSG_ORDER_SENT.to_string(),
        }
    }
}
