use anyhow::{bail, Context, Result};

/// Default Resend REST endpoint.
pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";

/// Sender identity used when `ORDER_SENDER` is not set.
pub const DEFAULT_ORDER_SENDER: &str = "Snaphalagulus Ordini <onboarding@resend.dev>";

/// Shop owner mailbox used when `ORDER_RECIPIENT` is not set.
pub const DEFAULT_ORDER_RECIPIENT: &str = "snaphalagus@gmail.com";

#[derive(Debug, Clone)]
pub struct Config {
    // Resend
    pub resend_api_key: Option<String>,
    pub resend_api_url: String,

    // Order notification
    pub order_sender: String,
    pub order_recipient: String,

    // Server
    pub port: u16,
    pub max_body_bytes: usize,

    // Rate limiting
    pub rate_limit_window_minutes: i64,
    pub rate_limit_max_requests: u32,
    pub rate_limit_purge_schedule: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let config = Self {
            // Resend - a missing key is reported per order, not at startup
            resend_api_key: std::env::var("RESEND_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            resend_api_url: std::env::var("RESEND_API_URL")
                .unwrap_or_else(|_| DEFAULT_RESEND_API_URL.to_string()),

            // Order notification
            order_sender: std::env::var("ORDER_SENDER")
                .unwrap_or_else(|_| DEFAULT_ORDER_SENDER.to_string()),
            order_recipient: std::env::var("ORDER_RECIPIENT")
                .unwrap_or_else(|_| DEFAULT_ORDER_RECIPIENT.to_string()),

            // Server
            port: parse_var("PORT", 8080)?,
            max_body_bytes: parse_var("MAX_BODY_BYTES", 10 * 1024 * 1024)?,

            // Rate limiting
            rate_limit_window_minutes: parse_var("RATE_LIMIT_WINDOW_MINUTES", 15)?,
            rate_limit_max_requests: parse_var("RATE_LIMIT_MAX_REQUESTS", 1)?,
            rate_limit_purge_schedule: std::env::var("RATE_LIMIT_PURGE_SCHEDULE")
                .unwrap_or_else(|_| "0 */15 * * * *".to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.rate_limit_window_minutes <= 0 {
            bail!(
                "RATE_LIMIT_WINDOW_MINUTES must be positive, got {}",
                self.rate_limit_window_minutes
            );
        }
        if self.rate_limit_max_requests == 0 {
            bail!("RATE_LIMIT_MAX_REQUESTS must be at least 1");
        }
        Ok(())
    }
}

/// Read an optional environment variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: '{}'", name, raw)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "RESEND_API_KEY",
        "RESEND_API_URL",
        "ORDER_SENDER",
        "ORDER_RECIPIENT",
        "PORT",
        "MAX_BODY_BYTES",
        "RATE_LIMIT_WINDOW_MINUTES",
        "RATE_LIMIT_MAX_REQUESTS",
        "RATE_LIMIT_PURGE_SCHEDULE",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        clear_env();

        let config = Config::from_env().expect("defaults should load");
        assert!(config.resend_api_key.is_none());
        assert_eq!(config.resend_api_url, DEFAULT_RESEND_API_URL);
        assert_eq!(config.order_sender, DEFAULT_ORDER_SENDER);
        assert_eq!(config.order_recipient, DEFAULT_ORDER_RECIPIENT);
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_body_bytes, 10 * 1024 * 1024);
        assert_eq!(config.rate_limit_window_minutes, 15);
        assert_eq!(config.rate_limit_max_requests, 1);
        assert_eq!(config.rate_limit_purge_schedule, "0 */15 * * * *");
    }

    #[test]
    #[serial]
    fn test_overrides_from_env() {
        clear_env();
        std::env::set_var("RESEND_API_KEY", "re_test");
        std::env::set_var("ORDER_RECIPIENT", "owner@example.com");
        std::env::set_var("PORT", "3000");
        std::env::set_var("RATE_LIMIT_MAX_REQUESTS", "3");

        let config = Config::from_env().expect("overrides should load");
        assert_eq!(config.resend_api_key.as_deref(), Some("re_test"));
        assert_eq!(config.order_recipient, "owner@example.com");
        assert_eq!(config.port, 3000);
        assert_eq!(config.rate_limit_max_requests, 3);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_api_key_is_treated_as_missing() {
        clear_env();
        std::env::set_var("RESEND_API_KEY", "   ");

        let config = Config::from_env().expect("should load");
        assert!(config.resend_api_key.is_none());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_rejected() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("PORT"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_zero_rate_limit_is_rejected() {
        clear_env();
        std::env::set_var("RATE_LIMIT_MAX_REQUESTS", "0");
        assert!(Config::from_env().is_err());

        std::env::set_var("RATE_LIMIT_MAX_REQUESTS", "1");
        std::env::set_var("RATE_LIMIT_WINDOW_MINUTES", "0");
        assert!(Config::from_env().is_err());

        clear_env();
    }
}
