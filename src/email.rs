use crate::attachment::EncodedAttachment;
use crate::config::Config;
use crate::order::OrderSubmission;
use crate::sanitize::sanitize;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Placeholder shown when the customer left the custom text blank.
const NO_CUSTOM_TEXT: &str = "Nessuno";

/// Sender identity and the single shop-owner recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailSettings {
    pub from: String,
    pub to: String,
}

impl MailSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            from: config.order_sender.clone(),
            to: config.order_recipient.clone(),
        }
    }
}

/// Outbound order notification, shaped like the Resend `POST /emails` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationMessage {
    pub from: String,
    pub to: Vec<String>,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
}

/// Provider acknowledgement for an accepted message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeliveryReceipt {
    pub id: String,
}

#[derive(Debug, Error)]
pub enum DeliveryError {
    /// No API credential configured; nothing was sent.
    #[error("email delivery is not configured")]
    NotConfigured,

    /// The provider answered and refused the message.
    #[error("provider rejected message ({name}): {message}")]
    Provider { name: String, message: String },

    #[error("failed to reach email provider: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected provider response: {0}")]
    InvalidResponse(String),
}

/// Delivery capability for order notifications.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, message: &NotificationMessage) -> Result<DeliveryReceipt, DeliveryError>;
}

/// Build the shop-owner notification for a validated order.
///
/// Text fields are sanitized again here, along with the header-derived
/// client identifier, before they are interpolated into HTML.
pub fn compose(
    submission: &OrderSubmission,
    attachment: Option<&EncodedAttachment>,
    client_id: &str,
    settings: &MailSettings,
) -> NotificationMessage {
    let name = sanitize(&submission.name);
    let email = sanitize(&submission.email);
    let clothing_type = sanitize(&submission.clothing_type);
    let client_id = sanitize(client_id);
    let custom_text = sanitize(&submission.custom_text);
    let custom_text = if custom_text.is_empty() {
        NO_CUSTOM_TEXT.to_string()
    } else {
        custom_text
    };

    let mut html = format!(
        "<h2>Nuovo ordine dal sito Snaphalagulus</h2>\n\
         <p><strong>Nome:</strong> {}</p>\n\
         <p><strong>Email:</strong> {}</p>\n\
         <p><strong>Capo:</strong> {}</p>\n\
         <p><strong>Testo personalizzato:</strong> {}</p>\n\
         <p><strong>IP:</strong> {}</p>\n",
        name, email, clothing_type, custom_text, client_id
    );

    if let Some(image) = attachment {
        html.push_str(&format!(
            "<img src=\"{}\" style=\"max-width:300px; height:auto; border: 2px solid #000; margin-top: 20px;\" alt=\"Customer uploaded image\" />\n",
            image.data_uri()
        ));
    }

    NotificationMessage {
        from: settings.from.clone(),
        to: vec![settings.to.clone()],
        reply_to: email,
        subject: format!("Nuovo ordine Snaphalagulus da {}", name),
        html,
    }
}

/// Error body returned by Resend on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ResendErrorBody {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// [`EmailSender`] backed by the Resend REST API.
#[derive(Debug, Clone)]
pub struct ResendClient {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl ResendClient {
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.resend_api_key.clone(), config.resend_api_url.clone())
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl EmailSender for ResendClient {
    async fn send(&self, message: &NotificationMessage) -> Result<DeliveryReceipt, DeliveryError> {
        let api_key = self.api_key.as_deref().ok_or(DeliveryError::NotConfigured)?;
        let url = format!("{}/emails", self.base_url);

        debug!(subject = %message.subject, "Sending order notification via Resend");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(message)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let parsed: Option<ResendErrorBody> = serde_json::from_str(&body).ok();
            let name = parsed
                .as_ref()
                .and_then(|b| b.name.clone())
                .unwrap_or_else(|| format!("http_{}", status.as_u16()));
            let message = parsed
                .and_then(|b| b.message)
                .unwrap_or_else(|| body.clone());
            return Err(DeliveryError::Provider { name, message });
        }

        let receipt: DeliveryReceipt = serde_json::from_str(&body)
            .map_err(|e| DeliveryError::InvalidResponse(format!("{} (body: {})", e, body)))?;

        info!(email_id = %receipt.id, "Order notification accepted by Resend");
        Ok(receipt)
    }
}
