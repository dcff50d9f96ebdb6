use std::{collections::HashMap, sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use embassy_shared_contracts::{rate_limit::RateLimitService, time::TimeService};
use embassy_utils::trace_instrument;
use tokio::sync::Mutex;
use tracing::debug;

/// Process-local rate limit store for single-instance deployments.
#[derive(Debug, Clone)]
pub struct MemoryRateLimitServiceImpl<Time> {
    time: Time,
    config: RateLimitServiceConfig,
    state: Arc<Mutex<State>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitServiceConfig {
    pub window: Duration,
    pub max_requests: u64,
}

#[derive(Debug, Default)]
struct State {
    entries: HashMap<String, RateLimitEntry>,
    next_sweep: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RateLimitEntry {
    count: u64,
    reset_at: DateTime<Utc>,
}

impl<Time> MemoryRateLimitServiceImpl<Time> {
    pub fn new(time: Time, config: RateLimitServiceConfig) -> Self {
        Self {
            time,
            config,
            state: Default::default(),
        }
    }
}

impl<Time> RateLimitService for MemoryRateLimitServiceImpl<Time>
where
    Time: TimeService,
{
    #[trace_instrument(skip(self))]
    async fn check(&self, key: &str) -> anyhow::Result<bool> {
        let now = self.time.now();

        let mut state = self.state.lock().await;
        state.evict_expired(now, self.config.window);

        match state.entries.get_mut(key) {
            Some(entry) if now <= entry.reset_at => {
                if entry.count >= self.config.max_requests {
                    return Ok(false);
                }
                entry.count += 1;
            }
            _ => {
                state.entries.insert(
                    key.into(),
                    RateLimitEntry {
                        count: 1,
                        reset_at: now + self.config.window,
                    },
                );
            }
        }

        Ok(true)
    }
}

impl State {
    /// Drops entries of expired windows, at most once per window length.
    fn evict_expired(&mut self, now: DateTime<Utc>, window: Duration) {
        if self.next_sweep.is_some_and(|next_sweep| now < next_sweep) {
            return;
        }

        let before = self.entries.len();
        self.entries.retain(|_, entry| now <= entry.reset_at);
        let evicted = before - self.entries.len();
        if evicted > 0 {
            debug!(evicted, "evicted expired rate limit entries");
        }

        self.next_sweep = Some(now + window);
    }
}
