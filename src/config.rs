use crate::error::{InventoryError, Result};
use fireworks_inventory_common::STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// データディレクトリを上書きする環境変数
pub const DATA_DIR_ENV: &str = "SV_INVENTORY_DATA_DIR";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 在庫JSONの保存先（未設定時は ~/.local/share/sv-inventory）
    pub data_dir: Option<PathBuf>,
    pub storage_key: String,
    /// 初回起動時に読み込むスプレッドシート
    pub bundled_path: PathBuf,
    pub export_file_name: String,
}

// `#[serde(default)]` が項目ごとにここを参照する
impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            storage_key: STORAGE_KEY.into(),
            bundled_path: PathBuf::from("core").join("CORNATION.xlsx"),
            export_file_name: "CORNATION_updated.xlsx".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 設定ファイルを読む（ファイルがなければ既定値、欠けた項目も既定値で補う）
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            InventoryError::Config(format!("{}: {}", path.display(), e))
        })
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| InventoryError::Config("Home directory not found".into()))?;
        Ok(home.join(".config").join("sv-inventory").join("config.json"))
    }

    /// 在庫JSONの保存先を決定
    ///
    /// 環境変数 > 設定ファイル > OS標準のデータディレクトリ
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            if !dir.trim().is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }

        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }

        dirs::data_local_dir()
            .map(|dir| dir.join("sv-inventory"))
            .ok_or_else(|| InventoryError::Config("Data directory not found".into()))
    }

    pub fn set_bundled_path(&mut self, path: PathBuf) -> Result<()> {
        self.bundled_path = path;
        self.save()
    }

    pub fn set_data_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.data_dir = Some(dir);
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.storage_key, "sv_fireworks_inventory");
        assert_eq!(config.bundled_path, PathBuf::from("core/CORNATION.xlsx"));
        assert_eq!(config.export_file_name, "CORNATION_updated.xlsx");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"data_dir": "/tmp/inventory"}"#).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/inventory")));
        assert_eq!(config.storage_key, STORAGE_KEY);
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config.export_file_name, "CORNATION_updated.xlsx");
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_load_from_partial_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"export_file_name": "prices.xlsx"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.export_file_name, "prices.xlsx");
        assert_eq!(config.storage_key, STORAGE_KEY);
        assert_eq!(config.bundled_path, PathBuf::from("core/CORNATION.xlsx"));
    }

    #[test]
    fn test_load_from_invalid_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ broken").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, InventoryError::Config(_)));
    }
}
