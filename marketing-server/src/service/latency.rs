use rand::Rng;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use shared::error::{AppError, AppResult};

/// `base` plus a uniform random extra in `0..=jitter`
pub fn jittered(base: Duration, jitter: Duration) -> Duration {
    if jitter.is_zero() {
        return base;
    }
    let extra = rand::thread_rng().gen_range(0..=jitter.as_millis() as u64);
    base + Duration::from_millis(extra)
}

/// Sleep for the simulated latency unless `cancel` fires first
///
/// A token that is already cancelled fails even when the delay is zero.
pub async fn simulate(delay: Duration, cancel: &CancellationToken) -> AppResult<()> {
    if cancel.is_cancelled() {
        return Err(AppError::cancelled());
    }
    if delay.is_zero() {
        return Ok(());
    }
    tokio::select! {
        _ = cancel.cancelled() => Err(AppError::cancelled()),
        _ = tokio::time::sleep(delay) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn jitter_stays_in_range() {
        let base = Duration::from_millis(100);
        assert_eq!(jittered(base, Duration::ZERO), base);
        for _ in 0..50 {
            let d = jittered(base, Duration::from_millis(20));
            assert!(d >= base && d <= base + Duration::from_millis(20));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn sleeps_for_the_delay() {
        let token = CancellationToken::new();
        let start = tokio::time::Instant::now();
        simulate(Duration::from_millis(500), &token).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_interrupts_the_delay() {
        let token = CancellationToken::new();
        let trigger = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            trigger.cancel();
        });
        let err = simulate(Duration::from_secs(60), &token).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::RequestCancelled);
    }

    #[tokio::test]
    async fn cancelled_token_fails_without_delay() {
        let token = CancellationToken::new();
        token.cancel();
        assert!(simulate(Duration::ZERO, &token).await.is_err());
    }
}
