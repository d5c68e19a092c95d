//! Sri Venkateswara Fire Works 在庫ツール（CLI）
//!
//! 在庫ストア本体は `fireworks-inventory-common`。ここではファイル保存・設定・CLIを扱う。

pub mod cli;
pub mod config;
pub mod error;
pub mod prompt;
pub mod report;
pub mod session;
pub mod storage;
