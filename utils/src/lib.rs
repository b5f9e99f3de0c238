pub mod timing;

pub use timing::{Call, Statistics, TimingStatistics};
