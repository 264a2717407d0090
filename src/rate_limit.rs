//! Fixed-window, per-client order rate limiting.
//!
//! Each client identifier gets a counter and a window end. Requests inside the
//! window are admitted until the counter reaches the configured maximum; the
//! first request after the window ends starts a fresh one. Requests that
//! straddle a window boundary can be admitted back to back.
//!
//! State is process-local. Several instances behind a load balancer each
//! enforce their own limit.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Counter for one client identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitRecord {
    pub count: u32,
    pub window_reset_at: DateTime<Utc>,
}

/// Outcome of a rate-limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitDecision {
    Allowed,
    /// Whole minutes (rounded up) until the client's window ends.
    Denied { retry_after_minutes: i64 },
}

/// In-memory rate limiter shared by all request handlers.
#[derive(Debug)]
pub struct RateLimiter {
    window: Duration,
    max_requests: u32,
    records: Mutex<HashMap<String, RateLimitRecord>>,
}

impl RateLimiter {
    /// Create a limiter admitting `max_requests` per `window` for each identifier.
    pub fn new(window: Duration, max_requests: u32) -> Self {
        Self {
            window,
            max_requests,
            records: Mutex::new(HashMap::new()),
        }
    }

    /// One order per 15 minutes.
    pub fn storefront_default() -> Self {
        Self::new(Duration::minutes(15), 1)
    }

    /// Check whether `identifier` may proceed at `now`, recording the attempt if so.
    ///
    /// The lookup, comparison and increment happen under a single lock, so two
    /// concurrent requests from the same client cannot both observe a free slot.
    pub fn check_and_record(&self, identifier: &str, now: DateTime<Utc>) -> RateLimitDecision {
        let mut records = self.lock();

        match records.get_mut(identifier) {
            Some(record) if now < record.window_reset_at => {
                if record.count >= self.max_requests {
                    let retry_after_minutes = minutes_until(now, record.window_reset_at);
                    debug!(
                        client = %identifier,
                        count = record.count,
                        retry_after_minutes,
                        "Rate limit window still open"
                    );
                    return RateLimitDecision::Denied { retry_after_minutes };
                }
                record.count += 1;
            }
            Some(record) => {
                *record = self.fresh_record(now);
            }
            None => {
                records.insert(identifier.to_string(), self.fresh_record(now));
            }
        }

        RateLimitDecision::Allowed
    }

    /// Drop every record whose window has ended, returning how many were removed.
    ///
    /// An expired record would be reset on its next use anyway, so purging
    /// never changes an admission decision.
    pub fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let mut records = self.lock();
        let before = records.len();
        records.retain(|_, record| now < record.window_reset_at);
        before - records.len()
    }

    /// Snapshot of the record for `identifier`, if any.
    pub fn record(&self, identifier: &str) -> Option<RateLimitRecord> {
        self.lock().get(identifier).copied()
    }

    /// Number of identifiers currently tracked.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn fresh_record(&self, now: DateTime<Utc>) -> RateLimitRecord {
        RateLimitRecord {
            count: 1,
            window_reset_at: now + self.window,
        }
    }

    // Counters stay consistent even if a previous holder panicked.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, RateLimitRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::storefront_default()
    }
}

// Exact ceiling: any remainder, down to a nanosecond, counts as a minute.
fn minutes_until(now: DateTime<Utc>, reset_at: DateTime<Utc>) -> i64 {
    let remaining = reset_at - now;
    if remaining <= Duration::zero() {
        return 0;
    }
    let whole = remaining.num_minutes();
    if remaining > Duration::minutes(whole) {
        whole + 1
    } else {
        whole
    }
}
