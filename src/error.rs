use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Invalid item type: {0}")]
    InvalidItemType(String),

    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Invalid menu file: {0}")]
    InvalidSeed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, MenuError>;
