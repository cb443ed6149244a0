use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid expense: {0}")]
    InvalidExpense(String),
    #[error("Invalid budget: {0}")]
    InvalidBudget(String),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("Snapshot schema v{found} is newer than supported v{supported}")]
    UnsupportedSchema { found: u32, supported: u32 },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
