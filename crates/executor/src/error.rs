use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to load configuration: {0}")]
    ConfigLoadError(String),

    #[error("Unknown scenario '{0}'. Expected one of: layout, false-sharing, all.")]
    UnknownScenario(String),

    #[error("{scenario} variants produced different results: {detail}")]
    ResultMismatch {
        scenario: &'static str,
        detail: String,
    },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),
}
