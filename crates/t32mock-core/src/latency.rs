//! # Latency
//!
//! Simulated hardware-probe latency.
//!
//! A real `VERSION.HARDWARE` round trip goes through the debug probe and
//! takes a variable amount of time. The mock reproduces that by blocking the
//! calling thread for a whole number of seconds drawn uniformly from an
//! inclusive range. Callers must tolerate the variance; only the bounds are
//! part of the contract.

use std::thread;
use std::time::Duration;

use rand::Rng;
use tracing::debug;

use crate::constants::{MAX_DELAY_SECS, MIN_DELAY_SECS};

/// Inclusive range of whole seconds a probe request may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyRange
{
    min_secs: u64,
    max_secs: u64,
}

impl LatencyRange
{
    /// `[MIN_DELAY_SECS, MAX_DELAY_SECS]`, what `t32rem` uses.
    pub const DEFAULT: Self = Self {
        min_secs: MIN_DELAY_SECS,
        max_secs: MAX_DELAY_SECS,
    };

    /// Build a range, or `None` when `min_secs > max_secs`.
    #[must_use]
    pub const fn new(min_secs: u64, max_secs: u64) -> Option<Self>
    {
        if min_secs > max_secs {
            None
        } else {
            Some(Self { min_secs, max_secs })
        }
    }

    /// A range that always yields `secs`.
    #[must_use]
    pub const fn fixed(secs: u64) -> Self
    {
        Self {
            min_secs: secs,
            max_secs: secs,
        }
    }

    /// Shortest possible delay.
    #[must_use]
    pub const fn min(&self) -> Duration
    {
        Duration::from_secs(self.min_secs)
    }

    /// Longest possible delay.
    #[must_use]
    pub const fn max(&self) -> Duration
    {
        Duration::from_secs(self.max_secs)
    }

    /// Whether `delay` lies within the range.
    #[must_use]
    pub fn contains(&self, delay: Duration) -> bool
    {
        (self.min()..=self.max()).contains(&delay)
    }

    /// Draw a delay uniformly from the range.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration
    {
        Duration::from_secs(rng.gen_range(self.min_secs..=self.max_secs))
    }

    /// Block the calling thread for a freshly drawn delay and return it.
    ///
    /// Draws from the OS-seeded thread-local generator, so consecutive runs
    /// see different delays. The sleep always runs to completion.
    pub fn simulate(&self) -> Duration
    {
        let delay = self.sample(&mut rand::thread_rng());
        debug!(delay_secs = delay.as_secs(), "Simulating probe latency");
        thread::sleep(delay);
        delay
    }
}

impl Default for LatencyRange
{
    fn default() -> Self
    {
        Self::DEFAULT
    }
}
