#[derive(Debug, thiserror::Error)]
pub enum StockError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read fixture file: {0}")]
    FixtureRead(std::io::Error),
    #[error("failed to parse fixture file: {0}")]
    FixtureParse(serde_json::Error),
}

pub type StockResult<T> = std::result::Result<T, StockError>;
