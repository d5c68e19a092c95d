//! CLI用の在庫ストア構築と入出力
//!
//! 起動のたびに保存済み在庫（なければ同梱スプレッドシート）を読み込む。

use crate::config::Config;
use crate::error::{InventoryError, Result};
use crate::storage::{FileSource, FileStorage};
use fireworks_inventory_common::{InventoryStore, PersistenceGateway};
use std::path::{Path, PathBuf};

pub type CliStore = InventoryStore<FileStorage>;

/// 設定に従ってストアを開く（読み込みは行わない）
pub fn create_store(config: &Config) -> Result<CliStore> {
    let data_dir = config.resolve_data_dir()?;
    tracing::debug!(data_dir = %data_dir.display(), key = %config.storage_key, "opening store");

    let gateway = PersistenceGateway::with_key(FileStorage::new(data_dir), config.storage_key.clone());
    Ok(InventoryStore::new(gateway))
}

/// ストアを開いて在庫を読み込む
pub fn open_store(config: &Config) -> Result<CliStore> {
    let mut store = create_store(config)?;
    store.fetch_initial(&FileSource::new(&config.bundled_path))?;
    Ok(store)
}

/// アップロード相当: ファイルを読み込んで在庫を置き換える
pub fn import_file(store: &mut CliStore, file: &Path) -> Result<usize> {
    if !file.exists() {
        return Err(InventoryError::FileNotFound(file.display().to_string()));
    }

    let bytes = std::fs::read(file)?;
    let count = store.load_from_upload(&bytes)?.len();
    Ok(count)
}

/// 出力先がディレクトリ（または拡張子なし）ならファイル名を付ける
pub fn export_path(output: Option<&Path>, file_name: &str) -> PathBuf {
    match output {
        None => PathBuf::from(file_name),
        Some(output) if output.is_dir() || output.extension().is_none() => output.join(file_name),
        Some(output) => output.to_path_buf(),
    }
}

/// 在庫をxlsxファイルに書き出す
pub fn export_file(store: &CliStore, output: &Path) -> Result<()> {
    let bytes = store.export_workbook()?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_path_default() {
        assert_eq!(export_path(None, "out.xlsx"), PathBuf::from("out.xlsx"));
    }

    #[test]
    fn test_export_path_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(export_path(Some(dir.path()), "out.xlsx"), dir.path().join("out.xlsx"));
        assert_eq!(
            export_path(Some(Path::new("exports")), "out.xlsx"),
            PathBuf::from("exports/out.xlsx")
        );
    }

    #[test]
    fn test_export_path_explicit_file() {
        assert_eq!(
            export_path(Some(Path::new("custom.xlsx")), "out.xlsx"),
            PathBuf::from("custom.xlsx")
        );
    }
}
