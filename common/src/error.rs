//! エラー型定義

use thiserror::Error;

/// スプレッドシート読み込み時のエラー
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("{0}")]
    Unreadable(String),

    #[error("Workbook has no worksheets.")]
    NoWorksheet,

    #[error("Excel file is empty or has no data rows.")]
    NoDataRows,

    #[error("Could not find required columns. Please ensure your file has columns for 'Company'/'Brand', 'Item'/'Product', and 'Price'.")]
    MissingColumns { found: Vec<String> },

    #[error("No valid items found in the Excel file. Please check data and column names.")]
    NoValidRows,
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Failed to parse Excel file: {0}")]
    Decode(#[from] DecodeError),

    #[error("Failed to generate Excel file: {0}")]
    Encode(String),

    #[error("Item with name \"{0}\" not found")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Could not fetch {0}")]
    Fetch(String),

    #[error("{0}")]
    Validation(String),

    #[error("There is no inventory data to download.")]
    EmptyInventory,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
