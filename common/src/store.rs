//! 在庫ストア
//!
//! 全レコード・フィルタ済み一覧・ブランド一覧・UI状態を1つにまとめる。
//! 変更操作のたびにフィルタ済み一覧を同期的に再計算し、変更後の一覧を返す。
//!
//! 制約:
//! - 編集対象は品名で検索し、同名が複数あれば先頭が対象になる
//! - 保存は常に全体の上書き（単一書き込み前提）
//! - 保存に失敗してもメモリ上の変更は戻さない

use crate::brand::{brand_icon, derive_brands};
use crate::error::{Error, Result};
use crate::filter::{Filter, ViewMode};
use crate::gateway::{load_bundled_default, BundledSource, KeyValueStore, PersistenceGateway};
use crate::sheet;
use crate::types::{Brand, InventoryRecord, NewRecord, RecordUpdate};

/// ストアの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStatus {
    IdleEmpty,
    Loading,
    Loaded,
    Error,
}

impl StoreStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreStatus::IdleEmpty => "idle-empty",
            StoreStatus::Loading => "loading",
            StoreStatus::Loaded => "loaded",
            StoreStatus::Error => "error",
        }
    }
}

pub struct InventoryStore<S> {
    gateway: PersistenceGateway<S>,
    records: Vec<InventoryRecord>,
    filtered: Vec<InventoryRecord>,
    brands: Vec<Brand>,
    filter: Filter,
    loading: bool,
    loaded: bool,
    error: Option<String>,
    editing: Option<InventoryRecord>,
    adding: bool,
}

impl<S: KeyValueStore> InventoryStore<S> {
    pub fn new(gateway: PersistenceGateway<S>) -> Self {
        Self {
            gateway,
            records: Vec::new(),
            filtered: Vec::new(),
            brands: Vec::new(),
            filter: Filter::default(),
            loading: false,
            loaded: false,
            error: None,
            editing: None,
            adding: false,
        }
    }

    // =============================================
    // 参照
    // =============================================

    pub fn records(&self) -> &[InventoryRecord] {
        &self.records
    }

    pub fn filtered(&self) -> &[InventoryRecord] {
        &self.filtered
    }

    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    pub fn selected_brand(&self) -> Option<&str> {
        self.filter.brand.as_deref()
    }

    pub fn search_query(&self) -> &str {
        &self.filter.query
    }

    pub fn view_mode(&self) -> ViewMode {
        self.filter.view_mode()
    }

    pub fn heading(&self) -> String {
        self.filter.heading()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn editing_target(&self) -> Option<&InventoryRecord> {
        self.editing.as_ref()
    }

    pub fn is_adding(&self) -> bool {
        self.adding
    }

    pub fn gateway(&self) -> &PersistenceGateway<S> {
        &self.gateway
    }

    pub fn status(&self) -> StoreStatus {
        if self.loading {
            StoreStatus::Loading
        } else if self.error.is_some() {
            StoreStatus::Error
        } else if self.loaded {
            StoreStatus::Loaded
        } else {
            StoreStatus::IdleEmpty
        }
    }

    // =============================================
    // 読み込み
    // =============================================

    /// 非同期の取得を始める前に読み込み中にする
    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// 保存済みの在庫、なければ同梱スプレッドシートを読み込む
    pub fn fetch_initial(&mut self, bundled: &dyn BundledSource) -> Result<&[InventoryRecord]> {
        self.begin_loading();

        let mut records = self.gateway.load();
        if records.is_empty() {
            log::info!("No items in storage, attempting to fetch initial file.");
            records = load_bundled_default(bundled);
            if !records.is_empty() {
                if let Err(e) = self.gateway.save(&records) {
                    return Err(self.fail(e));
                }
            }
        }

        self.replace_records(records);
        log::info!("Loaded {} items ({} brands)", self.records.len(), self.brands.len());
        Ok(&self.filtered)
    }

    /// アップロードされたスプレッドシートで在庫を置き換える
    ///
    /// 失敗時は既存の在庫も破棄する。
    pub fn load_from_upload(&mut self, bytes: &[u8]) -> Result<&[InventoryRecord]> {
        self.begin_loading();

        let saved = sheet::decode(bytes).and_then(|records| {
            self.gateway.save(&records)?;
            Ok(records)
        });

        match saved {
            Ok(records) => {
                self.replace_records(records);
                Ok(&self.filtered)
            }
            Err(e) => {
                log::warn!("Upload failed, clearing {} loaded items", self.records.len());
                self.records.clear();
                self.brands.clear();
                self.filtered.clear();
                Err(self.fail(e))
            }
        }
    }

    // =============================================
    // フィルタ・UI状態
    // =============================================

    /// ブランドを選択（検索語はリセット、空文字は選択解除）
    pub fn set_selected_brand(&mut self, brand: Option<String>) -> &[InventoryRecord] {
        self.filter.brand = brand.filter(|b| !b.is_empty());
        self.filter.query.clear();
        self.refilter();
        &self.filtered
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) -> &[InventoryRecord] {
        self.filter.query = query.into();
        self.refilter();
        &self.filtered
    }

    pub fn set_editing_target(&mut self, record: Option<InventoryRecord>) {
        self.editing = record;
    }

    pub fn set_adding_target(&mut self, adding: bool) {
        self.adding = adding;
    }

    // =============================================
    // 変更
    // =============================================

    /// 品名が一致する先頭のレコードを編集
    pub fn update_record(
        &mut self,
        original_item_name: &str,
        update: RecordUpdate,
    ) -> Result<&[InventoryRecord]> {
        log::info!("Updating item: {} -> {:?}", original_item_name, update);

        let Some(index) = self
            .records
            .iter()
            .position(|r| r.item_name == original_item_name)
        else {
            return Err(self.fail(Error::NotFound(original_item_name.to_string())));
        };

        let record = &mut self.records[index];
        record.item_name = update.item_name;
        record.price = update.price;
        self.refilter();

        if let Err(e) = self.gateway.save(&self.records) {
            return Err(self.fail(e));
        }

        self.editing = None;
        Ok(&self.filtered)
    }

    /// レコードを追加（idは最大値+1）
    pub fn add_record(&mut self, new_record: NewRecord) -> Result<&[InventoryRecord]> {
        log::info!("Adding new item: {:?}", new_record);

        let id = match self.next_id() {
            Ok(id) => id,
            Err(e) => return Err(self.fail(e)),
        };
        self.records.push(InventoryRecord {
            id,
            brand_icon: brand_icon(&new_record.brand),
            brand: new_record.brand,
            item_name: new_record.item_name,
            price: new_record.price,
            dr_price: new_record.dr_price,
        });
        self.brands = derive_brands(&self.records);
        self.refilter();

        if let Err(e) = self.gateway.save(&self.records) {
            return Err(self.fail(e));
        }

        self.adding = false;
        Ok(&self.filtered)
    }

    /// 全レコードをxlsxに書き出す
    pub fn export_workbook(&self) -> Result<Vec<u8>> {
        if self.records.is_empty() {
            return Err(Error::EmptyInventory);
        }
        sheet::encode(&self.records)
    }

    /// 最大id+1（空なら1）。u32の上限を超える場合はエラー
    pub fn next_id(&self) -> Result<u32> {
        match self.records.iter().map(|r| r.id).max() {
            None => Ok(1),
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| Error::Validation(format!("Cannot assign an id after {}", max))),
        }
    }

    // =============================================
    // 内部処理
    // =============================================

    fn replace_records(&mut self, records: Vec<InventoryRecord>) {
        self.records = records;
        self.brands = derive_brands(&self.records);
        self.filter = Filter::default();
        self.refilter();
        self.error = None;
        self.loading = false;
        self.loaded = true;
    }

    fn refilter(&mut self) {
        self.filtered = self.filter.apply(&self.records);
    }

    /// エラーを記録して返す
    fn fail(&mut self, error: Error) -> Error {
        log::error!("{}", error);
        self.error = Some(error.to_string());
        self.loading = false;
        error
    }
}
