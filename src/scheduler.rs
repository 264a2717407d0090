use crate::rate_limit::RateLimiter;
use anyhow::{Context, Result};
use chrono::Utc;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{debug, info};

/// Start the job that drops expired rate-limit records.
///
/// `schedule` is a six-field cron expression (seconds first), e.g.
/// `0 */15 * * * *` for every fifteen minutes.
pub async fn start_purge_job(limiter: Arc<RateLimiter>, schedule: &str) -> Result<JobScheduler> {
    let scheduler = JobScheduler::new().await?;

    info!("Scheduling rate-limit purge (cron: {})", schedule);

    let job = Job::new_async(schedule, move |_uuid, _l| {
        let limiter = Arc::clone(&limiter);

        Box::pin(async move {
            let removed = purge_once(&limiter);
            debug!(removed, remaining = limiter.len(), "Rate-limit purge finished");
        })
    })
    .with_context(|| format!("Invalid RATE_LIMIT_PURGE_SCHEDULE: '{}'", schedule))?;

    scheduler.add(job).await?;
    scheduler.start().await?;
    info!("✓ Purge scheduler started");

    Ok(scheduler)
}

/// Run one purge pass against the current time.
pub fn purge_once(limiter: &RateLimiter) -> usize {
    let removed = limiter.purge_expired(Utc::now());
    if removed > 0 {
        info!("Purged {} expired rate-limit record(s)", removed);
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_purge_once_removes_expired_records() {
        let limiter = RateLimiter::new(Duration::minutes(15), 1);
        limiter.check_and_record("stale", Utc::now() - Duration::hours(1));
        limiter.check_and_record("fresh", Utc::now());

        assert_eq!(purge_once(&limiter), 1);
        assert!(limiter.record("stale").is_none());
        assert!(limiter.record("fresh").is_some());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_invalid_schedule_is_rejected() {
        let limiter = Arc::new(RateLimiter::default());
        let result = start_purge_job(limiter, "every fifteen minutes").await;
        assert!(result.is_err());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_valid_schedule_starts() {
        let limiter = Arc::new(RateLimiter::default());
        let mut scheduler = start_purge_job(limiter, "0 */15 * * * *")
            .await
            .expect("scheduler should start");
        scheduler.shutdown().await.expect("shutdown");
    }
}
