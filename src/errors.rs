use std::path::PathBuf;
use thiserror::Error;

/// All failure kinds of the simulator.
///
/// Bounds and argument errors are programmer bugs and abort the affected
/// cell. [`ExhaustedPool`](SimulationError::ExhaustedPool) is a recoverable
/// local condition. [`ConfigMissing`](SimulationError::ConfigMissing) is
/// fatal before any simulation begins.
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("base {base} is outside chromosome of length {length}")]
    OutOfRange { base: i64, length: usize },

    #[error("replication fork is already attached")]
    AlreadyAttached,

    #[error("no free replication fork in the pool")]
    ExhaustedPool,

    #[error("argument {0:?} is mandatory")]
    ConfigMissing(&'static str),

    #[error("failed to build the worker thread pool: {0}")]
    ThreadPool(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}
