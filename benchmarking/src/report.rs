use crate::BenchmarkParams;
use std::fmt::{self, Display, Formatter};
use utils::Statistics;
use vectors::VectorKind;

/// Approximate bytes per stored component.
pub const BYTES_PER_COMPONENT: f64 = 12.0;

/// A value accumulated across a phase, reported so the work cannot be
/// optimised away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accumulated {
    pub name: &'static str,
    pub value: f64,
}

/// One report line: a phase over one vector kind.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseReport {
    pub label: String,
    pub kind: VectorKind,
    pub accumulated: Option<Accumulated>,
    pub stats: Statistics,
    pub units_per_sec: f64,
    pub mb_per_sec: f64,
}

impl PhaseReport {
    pub fn new(
        label: impl Into<String>,
        kind: VectorKind,
        accumulated: Option<Accumulated>,
        stats: Statistics,
        params: &BenchmarkParams,
    ) -> Self {
        Self::with_multiplier(label, kind, accumulated, stats, params, 1)
    }

    pub fn with_multiplier(
        label: impl Into<String>,
        kind: VectorKind,
        accumulated: Option<Accumulated>,
        stats: Statistics,
        params: &BenchmarkParams,
        multiplier: u32,
    ) -> Self {
        Self {
            label: label.into(),
            kind,
            accumulated,
            units_per_sec: units_per_sec(params, stats.sum_nanos),
            mb_per_sec: mb_per_sec(params, stats.sum_nanos, multiplier),
            stats,
        }
    }
}

/// Logical operations per second: `loop * num_vectors * 1e9 / elapsed_ns`.
pub fn units_per_sec(params: &BenchmarkParams, total_nanos: u64) -> f64 {
    (params.loop_count * params.num_vectors) as f64 * 1e9 / total_nanos as f64
}

/// Estimated bandwidth:
/// `multiplier * loop * num_vectors * cardinality * 1000 * 12 / elapsed_ns`.
pub fn mb_per_sec(params: &BenchmarkParams, total_nanos: u64, multiplier: u32) -> f64 {
    let components = (params.loop_count * params.num_vectors * params.cardinality) as f64;
    multiplier as f64 * components * 1000.0 * BYTES_PER_COMPONENT / total_nanos as f64
}

impl Display for PhaseReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label, self.kind)?;
        if let Some(acc) = self.accumulated {
            write!(f, " {} = {}", acc.name, acc.value)?;
        }
        write!(
            f,
            " {}\nSpeed: {} UnitsProcessed/sec {} MBytes/sec",
            self.stats, self.units_per_sec, self.mb_per_sec
        )
    }
}
