//! Batch simulation and consumer-side aggregation.

pub mod batch;
pub mod summary;

pub use batch::{run_simulations, BatchConfig, BatchRunner, MatchRecord, SetRecord, MAX_SETS};
pub use summary::{BatchSummary, PlayerSummary};
