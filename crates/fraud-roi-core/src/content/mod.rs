pub mod benchmarks;
pub mod plan;
