//! Command implementations

pub mod benchmark;
pub mod create;
pub mod simple;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use create::{CreateResult, create_puzzle};
pub use simple::run_simple;
