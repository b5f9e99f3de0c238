use anyhow::{ensure, Result};

/// Sizes and repeat counts fixed for a whole benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkParams {
    pub cardinality: usize,  // dimensionality of every vector
    pub num_vectors: usize,  // size of the corpus and of each matrix row
    pub loop_count: usize,   // outer repeats per phase
    pub ops_per_unit: usize, // distance calls folded into one timed unit
}

impl Default for BenchmarkParams {
    fn default() -> Self {
        Self {
            cardinality: 1000,
            num_vectors: 100,
            loop_count: 200,
            ops_per_unit: 10,
        }
    }
}

impl BenchmarkParams {
    /// Rejects configurations the phases cannot run. The dot phase pairs each
    /// vector with its successor modulo `num_vectors`, and the distance phase
    /// compares each vector against the first `ops_per_unit` vectors of its row,
    /// so `num_vectors` must be positive and no smaller than `ops_per_unit`.
    ///
    /// Zero loops or a zero vector size still run; their rates come out as
    /// NaN or infinity.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.num_vectors >= 1, "number of vectors must be at least 1");
        ensure!(
            self.ops_per_unit <= self.num_vectors,
            "number of ops ({}) exceeds number of vectors ({})",
            self.ops_per_unit,
            self.num_vectors
        );
        Ok(())
    }
}
