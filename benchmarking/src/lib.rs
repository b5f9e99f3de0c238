pub mod cli;
mod corpus;
mod driver;
mod params;
pub mod report;

pub use corpus::generate_corpus;
pub use driver::{
    clone_benchmark, create_benchmark, distance_measure_benchmark, dot_benchmark, run_benchmarks,
    BenchmarkRun, PhaseOutcome, RepresentationMatrix,
};
pub use params::BenchmarkParams;
pub use report::{Accumulated, PhaseReport};
