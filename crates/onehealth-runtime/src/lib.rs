pub mod error;
pub mod execution;
pub mod helpers;

pub use error::{RuntimeError, RuntimeResult};
pub use execution::{execute_run, ItemFailure, RunMetadata, RunOptions, RunResult};
pub use helpers::{PerItemParameters, UniformParameters};
