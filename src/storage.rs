//! ファイルによる在庫保存
//!
//! ブラウザの localStorage の代わりに、キーごとに `<key>.json` をデータディレクトリへ置く。

use fireworks_inventory_common::{BundledSource, KeyValueStore};
use std::path::{Path, PathBuf};

/// ディレクトリ上のキー・値ストア
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// キーに対応するファイルパス
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStorage {
    fn get_item(&self, key: &str) -> fireworks_inventory_common::Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(path)?))
    }

    fn set_item(&mut self, key: &str, value: &str) -> fireworks_inventory_common::Result<()> {
        std::fs::create_dir_all(&self.dir)?;

        // 一時ファイルに書いてから置き換える
        let path = self.path_for(key);
        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, value)?;
        std::fs::rename(&temp_path, &path)?;

        tracing::debug!(path = %path.display(), bytes = value.len(), "inventory written");
        Ok(())
    }
}

/// ファイルから読む同梱スプレッドシート
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    location: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let location = path.display().to_string();
        Self { path, location }
    }
}

impl BundledSource for FileSource {
    fn location(&self) -> &str {
        &self.location
    }

    fn fetch(&self) -> fireworks_inventory_common::Result<Vec<u8>> {
        Ok(std::fs::read(&self.path)?)
    }
}
