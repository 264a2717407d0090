use anyhow::{Context, Result};
use std::sync::Arc;
use storefront_orders::config::Config;
use storefront_orders::email::{MailSettings, ResendClient};
use storefront_orders::handler::{build_router, AppState};
use storefront_orders::rate_limit::RateLimiter;
use storefront_orders::scheduler;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("storefront_orders=info".parse()?),
        )
        .init();

    info!("Starting storefront order service");

    // Load configuration from environment
    let config = Config::from_env()?;

    let mailer = ResendClient::from_config(&config);
    if !mailer.is_configured() {
        warn!("RESEND_API_KEY is not set, every order will fail with a configuration error");
    }

    let limiter = Arc::new(RateLimiter::new(
        chrono::Duration::minutes(config.rate_limit_window_minutes),
        config.rate_limit_max_requests,
    ));
    info!(
        "Rate limit: {} order(s) per {} minute(s) per client",
        config.rate_limit_max_requests, config.rate_limit_window_minutes
    );

    // Keep the scheduler alive for the lifetime of the server
    let _scheduler =
        scheduler::start_purge_job(Arc::clone(&limiter), &config.rate_limit_purge_schedule).await?;

    let state = AppState {
        limiter,
        mailer: Arc::new(mailer),
        mail: MailSettings::from_config(&config),
        max_body_bytes: config.max_body_bytes,
    };
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("✓ Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
