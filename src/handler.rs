//! HTTP surface: router wiring, the order endpoint and the translation table.

use crate::attachment::{self, ImageUpload};
use crate::client_ip::resolve_client_identifier;
use crate::email::{compose, EmailSender, MailSettings};
use crate::error::{ErrorBody, OrderError, SuccessBody, MSG_UNEXPECTED};
use crate::i18n::Language;
use crate::order::{OrderSubmission, RawOrderFields};
use crate::rate_limit::{RateLimitDecision, RateLimiter};
use axum::extract::multipart::{Multipart, MultipartError, MultipartRejection};
use axum::extract::{DefaultBodyLimit, Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub limiter: Arc<RateLimiter>,
    pub mailer: Arc<dyn EmailSender>,
    pub mail: MailSettings,
    /// Transport cap for request bodies; the image cap is enforced separately.
    pub max_body_bytes: usize,
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.max_body_bytes);

    Router::new()
        .route("/api/order", post(submit_order))
        .route("/api/translations/:locale", get(get_translations))
        .route("/health", get(health))
        .layer(body_limit)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `POST /api/order`
pub async fn submit_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    match process_order(&state, &headers, multipart).await {
        Ok(()) => (StatusCode::OK, Json(SuccessBody::order_sent())).into_response(),
        Err(err) => err.into_response(),
    }
}

async fn process_order(
    state: &AppState,
    headers: &HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(), OrderError> {
    let client_id = resolve_client_identifier(headers);

    if let RateLimitDecision::Denied {
        retry_after_minutes,
    } = state.limiter.check_and_record(&client_id, Utc::now())
    {
        warn!(client = %client_id, retry_after_minutes, "Order rate limited");
        return Err(OrderError::RateLimited {
            retry_after_minutes,
        });
    }

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");
    let malformed = |reason: String| OrderError::MalformedBody {
        details: format!("Content-Type: {}, Error: {}", content_type, reason),
    };

    let multipart = multipart.map_err(|rejection| malformed(rejection.body_text()))?;
    let (fields, image) = read_order_form(multipart)
        .await
        .map_err(|err| malformed(err.body_text()))?;

    let submission = OrderSubmission::from_fields(&fields);
    submission.validate()?;

    let encoded = attachment::handle(image.as_ref())?;

    let message = compose(&submission, encoded.as_ref(), &client_id, &state.mail);
    let receipt = state.mailer.send(&message).await?;

    info!(
        client = %client_id,
        clothing_type = %submission.clothing_type,
        has_image = encoded.is_some(),
        email_id = %receipt.id,
        "Order delivered"
    );
    Ok(())
}

/// Drain the multipart body into the known order fields.
///
/// Unknown parts are skipped. For repeated parts the first one wins. An
/// `image` part without a filename is a plain value, not an upload, and
/// leaves the order without an attachment.
async fn read_order_form(
    mut multipart: Multipart,
) -> Result<(RawOrderFields, Option<ImageUpload>), MultipartError> {
    let mut fields = RawOrderFields::default();
    let mut image: Option<ImageUpload> = None;
    let mut image_seen = false;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        let slot = match name.as_str() {
            "name" => &mut fields.name,
            "email" => &mut fields.email,
            "clothingType" => &mut fields.clothing_type,
            "customText" => &mut fields.custom_text,
            "image" => {
                let is_file = field.file_name().is_some();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;
                if !image_seen && is_file {
                    image = Some(ImageUpload {
                        content_type,
                        bytes: bytes.to_vec(),
                    });
                } else if !is_file {
                    debug!("Ignoring non-file image part");
                }
                image_seen = true;
                continue;
            }
            _ => continue,
        };

        let text = field.text().await?;
        if slot.is_none() {
            *slot = Some(text);
        }
    }

    Ok((fields, image))
}

/// `GET /api/translations/:locale`
pub async fn get_translations(Path(locale): Path<String>) -> Response {
    match Language::from_code(&locale) {
        Ok(language) => {
            debug!(locale = language.code(), "Serving translations");
            Json(language.strings()).into_response()
        }
        Err(err) => {
            warn!(locale = %locale, error = %err, "Unknown translation locale");
            let body = ErrorBody {
                error: format!("Unsupported locale: {}", locale),
                details: None,
            };
            (StatusCode::NOT_FOUND, Json(body)).into_response()
        }
    }
}

/// `GET /health`
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = %detail, "Order handler panicked");

    let body = ErrorBody {
        error: MSG_UNEXPECTED.to_string(),
        details: None,
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
