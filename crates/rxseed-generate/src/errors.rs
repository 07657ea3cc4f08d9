use thiserror::Error;

/// Errors emitted by the dataset generator.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("cannot sample '{table}.{column}' from an empty id pool")]
    EmptyIdPool {
        table: &'static str,
        column: &'static str,
    },
    #[error("table '{table}' produced a row with {actual} fields, header has {expected}")]
    RecordArity {
        table: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
