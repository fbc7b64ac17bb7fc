use backon::{ConstantBuilder, Retryable};
use std::future::Future;
use std::time::Duration;

/// Fixed-interval, bounded polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl PollPolicy {
    pub fn new(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts,
            interval,
        }
    }
}

/// Value came back but `ready` rejected it.
#[derive(Debug)]
struct NotReady;

/// Calls `op` until `ready` accepts its value, at most `policy.max_attempts`
/// times. Sleeps `policy.interval` between attempts but not after the last one.
///
/// `op` receives the 1-based attempt number. Returns `None` once every
/// attempt has been used.
pub async fn poll_until<T, F, Fut, P>(policy: &PollPolicy, mut op: F, ready: P) -> Option<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = T>,
    P: Fn(&T) -> bool,
{
    if policy.max_attempts == 0 {
        return None;
    }

    let backoff = ConstantBuilder::default()
        .with_delay(policy.interval)
        .with_max_times((policy.max_attempts - 1) as usize);

    let ready = &ready;
    let mut attempt = 0;
    let poll = || {
        attempt += 1;
        let pending = op(attempt);
        async move {
            let value = pending.await;
            if ready(&value) {
                Ok(value)
            } else {
                Err(NotReady)
            }
        }
    };

    poll.retry(backoff)
        .sleep(tokio::time::sleep)
        .when(|e: &NotReady| matches!(e, NotReady))
        .notify(|_: &NotReady, delay: Duration| {
            tracing::debug!("Not ready, retrying in {:?}", delay);
        })
        .await
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn instant_policy(max_attempts: u32) -> PollPolicy {
        PollPolicy::new(max_attempts, Duration::ZERO)
    }

    #[tokio::test]
    async fn test_stops_on_first_ready_attempt() {
        let calls = AtomicU32::new(0);
        let result = poll_until(
            &instant_policy(15),
            |attempt| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move { attempt }
            },
            |attempt| *attempt == 3,
        )
        .await;

        assert_eq!(result, Some(3));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_attempts() {
        let calls = AtomicU32::new(0);
        let result = poll_until(
            &instant_policy(15),
            |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { false }
            },
            |ready| *ready,
        )
        .await;

        assert_eq!(result, None);
        assert_eq!(calls.load(Ordering::SeqCst), 15);
    }

    #[tokio::test]
    async fn test_zero_attempts_never_calls() {
        let calls = AtomicU32::new(0);
        let result = poll_until(
            &instant_policy(0),
            |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { true }
            },
            |ready| *ready,
        )
        .await;

        assert_eq!(result, None);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_interval_between_attempts() {
        let policy = PollPolicy::new(3, Duration::from_secs(20));
        let started = tokio::time::Instant::now();

        let result = poll_until(&policy, |_| async { 0 }, |_| false).await;

        assert_eq!(result, None);
        // two sleeps for three attempts
        assert_eq!(started.elapsed(), Duration::from_secs(40));
    }
}
