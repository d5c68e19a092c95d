//! 永続化ゲートウェイ
//!
//! 在庫全体をJSON配列として1つのキーに保存する。
//! キー・値ストアの実体（localStorage、ファイル、メモリ）は `KeyValueStore` で差し替える。

use crate::error::{Error, Result};
use crate::sheet;
use crate::types::InventoryRecord;
use std::collections::HashMap;

/// 在庫データの保存キー
pub const STORAGE_KEY: &str = "sv_fireworks_inventory";

/// 文字列のキー・値ストア
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

/// メモリ上のキー・値ストア
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// 初回起動時に読み込む同梱スプレッドシート
pub trait BundledSource {
    /// ログ表示用の場所（パスやURL）
    fn location(&self) -> &str;
    fn fetch(&self) -> Result<Vec<u8>>;
}

/// 取得済みのバイト列（WASMでの事前fetchやテストで使用）
#[derive(Debug, Clone)]
pub struct BytesSource {
    location: String,
    bytes: Option<Vec<u8>>,
}

impl BytesSource {
    pub fn new(location: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { location: location.into(), bytes: Some(bytes) }
    }

    /// 取得できなかった場合
    pub fn missing(location: impl Into<String>) -> Self {
        Self { location: location.into(), bytes: None }
    }
}

impl BundledSource for BytesSource {
    fn location(&self) -> &str {
        &self.location
    }

    fn fetch(&self) -> Result<Vec<u8>> {
        self.bytes
            .clone()
            .ok_or_else(|| Error::Fetch(self.location.clone()))
    }
}

/// 同梱スプレッドシートを読み込む
///
/// 取得・解析のどちらに失敗しても空を返し、手動アップロードに委ねる。
pub fn load_bundled_default(source: &dyn BundledSource) -> Vec<InventoryRecord> {
    log::info!("Attempting to fetch initial data from {}", source.location());

    match source.fetch().and_then(|bytes| sheet::decode(&bytes)) {
        Ok(records) => records,
        Err(e) => {
            log::warn!(
                "Could not automatically load initial data from {}: {}",
                source.location(),
                e
            );
            Vec::new()
        }
    }
}

/// 在庫の読み書き
#[derive(Debug, Clone)]
pub struct PersistenceGateway<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> PersistenceGateway<S> {
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, STORAGE_KEY)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self { backend, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// 保存済みの在庫を読み込む
    ///
    /// 未保存・読み込み失敗・JSON破損はいずれも空として扱う。
    pub fn load(&self) -> Vec<InventoryRecord> {
        let stored = match self.backend.get_item(&self.key) {
            Ok(Some(stored)) => stored,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("Failed to read stored inventory, returning empty list: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&stored) {
            Ok(records) => records,
            Err(e) => {
                log::warn!("Stored inventory is corrupt, returning empty list: {}", e);
                Vec::new()
            }
        }
    }

    /// 在庫全体を上書き保存
    pub fn save(&mut self, records: &[InventoryRecord]) -> Result<()> {
        let json = serde_json::to_string(records)?;
        self.backend.set_item(&self.key, &json)?;
        log::debug!("Saved {} items under {}", records.len(), self.key);
        Ok(())
    }
}
