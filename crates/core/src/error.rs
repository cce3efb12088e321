use thiserror::Error;

/// Top-level error type used across the workspace.
///
/// A sensor that cannot produce a reading is not an error: adapters return
/// `None` and the aggregator records a zero sample instead.
#[derive(Debug, Error)]
pub enum TelemonError {
    #[error("config error: {0}")]
    Config(String),

    /// The GPU binding could not be initialised or device 0 is missing.
    #[error("GPU error: {0}")]
    Gpu(String),

    #[error("scheduler error: {0}")]
    Scheduler(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = TelemonError> = std::result::Result<T, E>;
