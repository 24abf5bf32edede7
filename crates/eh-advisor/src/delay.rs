use eh_core::config::AdvisorConfig;
use rand::Rng;
use std::time::Duration;

/// Simulated thinking time: `base` plus a uniform jitter in `[0, jitter]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThinkingDelay {
    pub base: Duration,
    pub jitter: Duration,
}

impl Default for ThinkingDelay {
    fn default() -> Self {
        Self::from_config(&AdvisorConfig::default())
    }
}

impl ThinkingDelay {
    pub fn new(base: Duration, jitter: Duration) -> Self {
        Self { base, jitter }
    }

    pub fn from_config(config: &AdvisorConfig) -> Self {
        Self::new(Duration::from_millis(config.base_delay_ms), Duration::from_millis(config.jitter_ms))
    }

    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub fn max(&self) -> Duration {
        self.base + self.jitter
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let jitter_ms = u64::try_from(self.jitter.as_millis()).unwrap_or(u64::MAX);
        self.base + Duration::from_millis(rng.gen_range(0..=jitter_ms))
    }
}
