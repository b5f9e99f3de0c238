// TimingStatistics impl
// Accumulates elapsed time over many short calls.

use std::fmt::{self, Display, Formatter};
use std::time::{Duration, Instant};

const NANOS_IN_MILLI: f64 = 1_000_000.0;

/// Running totals over a sequence of timed calls.
///
/// Single threaded: each [`Call`] borrows the accumulator mutably, so calls
/// cannot overlap and are always recorded as start/end pairs.
#[derive(Debug, Clone, Default)]
pub struct TimingStatistics {
    calls: u64,
    sum_nanos: u128,
    sum_squared_nanos: f64,
    min_nanos: u64,
    max_nanos: u64,
}

impl TimingStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts timing one unit of work. The sample is recorded when the returned
    /// [`Call`] is ended.
    pub fn new_call(&mut self) -> Call<'_> {
        Call {
            stats: self,
            start: Instant::now(),
        }
    }

    /// Adds a single sample.
    pub fn record(&mut self, elapsed: Duration) {
        let nanos = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);

        if self.calls == 0 {
            self.min_nanos = nanos;
            self.max_nanos = nanos;
        } else {
            self.min_nanos = self.min_nanos.min(nanos);
            self.max_nanos = self.max_nanos.max(nanos);
        }

        self.calls += 1;
        self.sum_nanos += nanos as u128;
        self.sum_squared_nanos += (nanos as f64) * (nanos as f64);
    }

    pub fn calls(&self) -> u64 {
        self.calls
    }

    pub fn snapshot(&self) -> Statistics {
        if self.calls == 0 {
            return Statistics::default();
        }

        let n = self.calls as f64;
        let sum = self.sum_nanos as f64;
        let mean = sum / n;
        // population variance, clamped since the two running sums round independently
        let variance = (self.sum_squared_nanos / n - mean * mean).max(0.0);

        Statistics {
            calls: self.calls,
            sum_nanos: u64::try_from(self.sum_nanos).unwrap_or(u64::MAX),
            min_nanos: self.min_nanos,
            max_nanos: self.max_nanos,
            mean_nanos: mean,
            std_dev_nanos: variance.sqrt(),
        }
    }
}

/// An in-flight timed call.
#[must_use = "a call records nothing until `end` is called"]
pub struct Call<'a> {
    stats: &'a mut TimingStatistics,
    start: Instant,
}

impl Call<'_> {
    pub fn end(self) {
        let elapsed = self.start.elapsed();
        self.stats.record(elapsed);
    }
}

/// Immutable view of a [`TimingStatistics`]. All times in nanoseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Statistics {
    pub calls: u64,
    pub sum_nanos: u64,
    pub min_nanos: u64,
    pub max_nanos: u64,
    pub mean_nanos: f64,
    pub std_dev_nanos: f64,
}

impl Statistics {
    pub fn sum(&self) -> Duration {
        Duration::from_nanos(self.sum_nanos)
    }
}

impl Display for Statistics {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "nCalls = {};", self.calls)?;
        writeln!(f, "sum    = {:.3}ms;", self.sum_nanos as f64 / NANOS_IN_MILLI)?;
        writeln!(f, "min    = {:.3}ms;", self.min_nanos as f64 / NANOS_IN_MILLI)?;
        writeln!(f, "max    = {:.3}ms;", self.max_nanos as f64 / NANOS_IN_MILLI)?;
        writeln!(f, "mean   = {:.3}ms;", self.mean_nanos / NANOS_IN_MILLI)?;
        write!(f, "stdDev = {:.3}ms;", self.std_dev_nanos / NANOS_IN_MILLI)
    }
}
