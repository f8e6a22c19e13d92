//! Sliding-window rate limiter keyed by client identifier.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::config::{
    RATE_LIMIT_DAILY_REQUESTS, RATE_LIMIT_HOURLY_REQUESTS, RATE_LIMIT_SWEEP_THRESHOLD,
    SECONDS_PER_DAY, SECONDS_PER_HOUR,
};

/// At most `max_requests` within any `window`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateWindow {
    pub max_requests: u64,
    pub window: Duration,
}

impl RateWindow {
    pub fn new(max_requests: u64, window: Duration) -> Self {
        Self {
            max_requests,
            window,
        }
    }
}

/// Outcome of one rate limit check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateDecision {
    pub allowed: bool,
    /// Ceiling of the window closest to exhaustion
    pub limit: u64,
    /// Requests left in that window after this one
    pub remaining: u64,
    /// When denied, how long until the blocking window frees a slot
    pub retry_after: Duration,
}

/// Every window must have room for a request to pass. Rejected requests
/// are not recorded.
///
/// Clients whose requests have all aged out of the longest window are
/// forgotten, either on their next check or by a periodic sweep.
pub struct RateLimiter {
    windows: Vec<RateWindow>,
    hits: Mutex<HitLog>,
}

#[derive(Default)]
struct HitLog {
    clients: HashMap<String, VecDeque<Instant>>,
    last_sweep: Option<Instant>,
    /// Map size after the last sweep
    swept_len: usize,
}

impl HitLog {
    fn sweep_due(&self, now: Instant, interval: Duration) -> bool {
        match self.last_sweep {
            None => true,
            Some(last) => {
                now.saturating_duration_since(last) >= interval
                    || self.clients.len() >= self.swept_len + RATE_LIMIT_SWEEP_THRESHOLD
            }
        }
    }

    fn sweep(&mut self, now: Instant, longest: Duration) {
        if let Some(cutoff) = now.checked_sub(longest) {
            self.clients
                .retain(|_, log| log.back().is_some_and(|last| *last > cutoff));
        }
        self.last_sweep = Some(now);
        self.swept_len = self.clients.len();
    }
}

impl Default for RateLimiter {
    /// 50 per hour and 200 per day
    fn default() -> Self {
        Self::new(vec![
            RateWindow::new(RATE_LIMIT_HOURLY_REQUESTS, Duration::from_secs(SECONDS_PER_HOUR)),
            RateWindow::new(RATE_LIMIT_DAILY_REQUESTS, Duration::from_secs(SECONDS_PER_DAY)),
        ])
    }
}

impl RateLimiter {
    pub fn new(windows: Vec<RateWindow>) -> Self {
        Self {
            windows,
            hits: Mutex::new(HitLog::default()),
        }
    }

    pub fn windows(&self) -> &[RateWindow] {
        &self.windows
    }

    /// Record a request from `client` now, if allowed.
    pub fn check(&self, client: &str) -> RateDecision {
        self.check_at(client, Instant::now())
    }

    /// Number of clients currently holding request history.
    pub fn tracked_clients(&self) -> usize {
        self.hits.lock().clients.len()
    }

    pub fn check_at(&self, client: &str, now: Instant) -> RateDecision {
        let longest = self
            .windows
            .iter()
            .map(|w| w.window)
            .max()
            .unwrap_or_default();
        let shortest = self
            .windows
            .iter()
            .map(|w| w.window)
            .min()
            .unwrap_or_default();

        let mut hits = self.hits.lock();
        if hits.sweep_due(now, shortest) {
            hits.sweep(now, longest);
        }
        let log = hits.clients.entry(client.to_string()).or_default();

        if let Some(cutoff) = now.checked_sub(longest) {
            while log.front().is_some_and(|t| *t <= cutoff) {
                log.pop_front();
            }
        }

        let mut decision = RateDecision {
            allowed: true,
            limit: 0,
            remaining: u64::MAX,
            retry_after: Duration::ZERO,
        };

        for window in &self.windows {
            let in_window: Vec<&Instant> = match now.checked_sub(window.window) {
                Some(cutoff) => log.iter().filter(|t| **t > cutoff).collect(),
                None => log.iter().collect(),
            };
            let count = in_window.len() as u64;

            if count >= window.max_requests {
                let wait = in_window
                    .first()
                    .map(|oldest| (**oldest + window.window).saturating_duration_since(now))
                    .unwrap_or(window.window);
                decision.allowed = false;
                decision.retry_after = decision.retry_after.max(wait);
                decision.limit = window.max_requests;
                decision.remaining = 0;
                continue;
            }

            let remaining = window.max_requests - count - 1;
            if decision.allowed && remaining < decision.remaining {
                decision.remaining = remaining;
                decision.limit = window.max_requests;
            }
        }

        if decision.allowed {
            log.push_back(now);
        } else if log.is_empty() {
            hits.clients.remove(client);
        }

        if decision.remaining == u64::MAX {
            decision.remaining = 0;
        }
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_up_to_limit_then_denies() {
        let limiter = RateLimiter::new(vec![RateWindow::new(3, Duration::from_secs(60))]);
        let start = Instant::now();

        for expected_remaining in [2, 1, 0] {
            let decision = limiter.check_at("1.2.3.4", start);
            assert!(decision.allowed);
            assert_eq!(decision.remaining, expected_remaining);
            assert_eq!(decision.limit, 3);
        }

        let denied = limiter.check_at("1.2.3.4", start + Duration::from_secs(10));
        assert!(!denied.allowed);
        assert_eq!(denied.retry_after, Duration::from_secs(50));
    }

    #[test]
    fn test_window_slides() {
        let limiter = RateLimiter::new(vec![RateWindow::new(1, Duration::from_secs(60))]);
        let start = Instant::now();

        assert!(limiter.check_at("client", start).allowed);
        assert!(!limiter.check_at("client", start + Duration::from_secs(30)).allowed);
        assert!(limiter.check_at("client", start + Duration::from_secs(61)).allowed);
    }

    #[test]
    fn test_clients_are_independent() {
        let limiter = RateLimiter::new(vec![RateWindow::new(1, Duration::from_secs(60))]);
        let now = Instant::now();

        assert!(limiter.check_at("a", now).allowed);
        assert!(limiter.check_at("b", now).allowed);
        assert!(!limiter.check_at("a", now).allowed);
    }

    #[test]
    fn test_tightest_window_wins() {
        let limiter = RateLimiter::new(vec![
            RateWindow::new(2, Duration::from_secs(60)),
            RateWindow::new(10, Duration::from_secs(SECONDS_PER_HOUR)),
        ]);
        let now = Instant::now();

        let first = limiter.check_at("c", now);
        assert_eq!(first.limit, 2);
        assert_eq!(first.remaining, 1);

        limiter.check_at("c", now);
        let denied = limiter.check_at("c", now);
        assert!(!denied.allowed);
        assert_eq!(denied.limit, 2);
    }

    #[test]
    fn test_default_policy() {
        let limiter = RateLimiter::default();
        assert_eq!(limiter.windows().len(), 2);
        assert_eq!(limiter.windows()[0].max_requests, 50);
        assert_eq!(limiter.windows()[1].max_requests, 200);
    }

    #[test]
    fn test_idle_clients_are_swept() {
        let limiter = RateLimiter::default();
        let start = Instant::now();

        for i in 0..10_000 {
            limiter.check_at(&format!("10.0.{}.{}", i / 256, i % 256), start);
        }
        assert_eq!(limiter.tracked_clients(), 10_000);

        let later = start + Duration::from_secs(2 * SECONDS_PER_DAY);
        assert!(limiter.check_at("192.0.2.1", later).allowed);
        assert_eq!(limiter.tracked_clients(), 1);
    }

    #[test]
    fn test_active_clients_survive_sweep() {
        let limiter = RateLimiter::new(vec![RateWindow::new(5, Duration::from_secs(60))]);
        let start = Instant::now();

        limiter.check_at("stale", start);
        limiter.check_at("active", start + Duration::from_secs(50));
        limiter.check_at("newcomer", start + Duration::from_secs(70));

        assert_eq!(limiter.tracked_clients(), 2);
        let decision = limiter.check_at("active", start + Duration::from_secs(71));
        assert_eq!(decision.remaining, 3);
    }
}
