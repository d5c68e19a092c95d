use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] fireworks_inventory_common::Error),
}

pub type Result<T> = std::result::Result<T, InventoryError>;
