pub mod attachment;
pub mod client_ip;
pub mod config;
pub mod email;
pub mod error;
pub mod handler;
pub mod i18n;
pub mod order;
pub mod rate_limit;
pub mod sanitize;
pub mod scheduler;
