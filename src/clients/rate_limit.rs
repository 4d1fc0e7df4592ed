//! Client-side view of the ClickUp rate limit window.
//!
//! ClickUp reports the remaining request budget and the window reset time on
//! every response. The dispatcher keeps the most recent values in a
//! [`RateLimitState`] and consults it before each logical request.

use std::time::Duration;

use crate::clients::http_response::RateLimitInfo;

/// The most recently observed rate limit window.
///
/// This is best-effort throttling: the state reflects the last response
/// received, not a reservation. Concurrent callers may all pass the check at
/// once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RateLimitState {
    /// Requests remaining in the current window.
    pub remaining: u32,
    /// Window reset time in epoch seconds.
    pub reset: f64,
}

impl RateLimitState {
    /// Remaining budget at or below which requests are held back until reset.
    pub const LOW_WATER_MARK: u32 = 5;

    /// Assumed budget before the first response is seen.
    pub const INITIAL_REMAINING: u32 = 100;

    /// Creates the initial state, with the window resetting at `now`.
    #[must_use]
    pub const fn new(now: f64) -> Self {
        Self {
            remaining: Self::INITIAL_REMAINING,
            reset: now,
        }
    }

    /// Returns how long to wait before sending, if at all.
    ///
    /// The wait is `reset - now + buffer`, only when `remaining` is at or
    /// below [`Self::LOW_WATER_MARK`] and the result is positive.
    #[must_use]
    pub fn throttle_delay(&self, now: f64, buffer: Duration) -> Option<Duration> {
        if self.remaining > Self::LOW_WATER_MARK {
            return None;
        }
        let wait = self.reset - now + buffer.as_secs_f64();
        if wait.is_nan() || wait <= 0.0 {
            return None;
        }
        Some(Duration::try_from_secs_f64(wait).unwrap_or(Duration::MAX))
    }

    /// Applies the values parsed from a response. Missing values keep the prior ones.
    pub fn update(&mut self, info: &RateLimitInfo) {
        if let Some(remaining) = info.remaining {
            self.remaining = remaining;
        }
        if let Some(reset) = info.reset {
            self.reset = reset;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: f64 = 1_700_000_000.0;

    #[test]
    fn test_initial_state() {
        let state = RateLimitState::new(NOW);
        assert_eq!(state.remaining, 100);
        assert!((state.reset - NOW).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_delay_above_low_water_mark() {
        let state = RateLimitState {
            remaining: 6,
            reset: NOW + 60.0,
        };
        assert!(state
            .throttle_delay(NOW, Duration::from_secs(5))
            .is_none());
    }

    #[test]
    fn test_delay_at_low_water_mark_includes_buffer() {
        let state = RateLimitState {
            remaining: 5,
            reset: NOW + 10.0,
        };
        let delay = state.throttle_delay(NOW, Duration::from_secs(5)).unwrap();
        assert_eq!(delay, Duration::from_secs(15));
    }

    #[test]
    fn test_no_delay_when_reset_has_passed() {
        let state = RateLimitState {
            remaining: 0,
            reset: NOW - 30.0,
        };
        assert!(state
            .throttle_delay(NOW, Duration::from_secs(5))
            .is_none());
    }

    #[test]
    fn test_far_future_reset_saturates_instead_of_panicking() {
        let state = RateLimitState {
            remaining: 0,
            reset: 1e30,
        };
        assert_eq!(
            state.throttle_delay(NOW, Duration::from_secs(5)),
            Some(Duration::MAX)
        );
    }

    #[test]
    fn test_update_keeps_prior_values_when_missing() {
        let mut state = RateLimitState::new(NOW);
        state.update(&RateLimitInfo {
            remaining: Some(3),
            reset: None,
        });
        assert_eq!(state.remaining, 3);
        assert!((state.reset - NOW).abs() < f64::EPSILON);

        state.update(&RateLimitInfo::default());
        assert_eq!(state.remaining, 3);

        state.update(&RateLimitInfo {
            remaining: None,
            reset: Some(NOW + 42.0),
        });
        assert_eq!(state.remaining, 3);
        assert!((state.reset - (NOW + 42.0)).abs() < f64::EPSILON);
    }
}
