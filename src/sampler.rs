// CPU utilization from two tick samples taken an interval apart

use crate::counter_source::CounterSource;
use crate::models::CounterSample;
use crate::normalize::busy_percent;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Default pause between the two CPU samples.
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_millis(200);

/// Source of the single pause between samples. Tests substitute a clock that
/// returns immediately.
pub trait Clock {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Wall-clock pause on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}

/// Busy percent between two samples of the same counter pair.
///
/// Utilization is a rate over the window between `first` and `second`; a
/// window with no tick advance (or a counter that went backwards) yields 0.
pub fn utilization(first: CounterSample, second: CounterSample) -> f64 {
    if second.total_ticks <= first.total_ticks {
        return 0.0;
    }
    let total_delta = second.total_ticks - first.total_ticks;
    let idle_delta = second.idle_ticks.saturating_sub(first.idle_ticks);
    busy_percent(idle_delta, total_delta)
}

pub struct DeltaSampler<'a, S, C> {
    source: &'a S,
    clock: &'a C,
}

impl<'a, S: CounterSource, C: Clock> DeltaSampler<'a, S, C> {
    pub fn new(source: &'a S, clock: &'a C) -> Self {
        Self { source, clock }
    }

    /// Samples, pauses for `interval`, samples again and returns busy percent.
    pub async fn sample(&self, interval: Duration) -> f64 {
        let first = self.read_sample();
        self.clock.sleep(interval).await;
        let second = self.read_sample();
        utilization(first, second)
    }

    /// A failed read counts as an all-zero sample.
    fn read_sample(&self) -> CounterSample {
        self.source.read_cpu_tick_sample().unwrap_or_else(|e| {
            warn!(error = %e, "cpu tick sample unavailable");
            CounterSample::default()
        })
    }
}
