//! ページから使う在庫ストアのハンドル
//!
//! 返り値はすべて JSON 化可能なスナップショット。
//! 失敗した操作は例外（エラーメッセージ文字列）として投げる。

use crate::fetch::{fetch_bundled, DEFAULT_BUNDLED_URL};
use crate::storage::LocalStorage;
use fireworks_inventory_common::{
    BytesSource, InventoryRecord, InventoryStore, NewRecord, PersistenceGateway, RecordUpdate,
    ViewMode,
};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

type WebStore = InventoryStore<LocalStorage>;

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

fn to_js_error(error: impl std::fmt::Display) -> JsValue {
    let message = error.to_string();
    web_sys::console::error_1(&message.as_str().into());
    JsValue::from_str(&message)
}

#[wasm_bindgen]
pub struct InventoryApp {
    store: Rc<RefCell<WebStore>>,
    bundled_url: String,
}

#[wasm_bindgen]
impl InventoryApp {
    #[wasm_bindgen(constructor)]
    pub fn new(bundled_url: Option<String>) -> Result<InventoryApp, JsValue> {
        let backend = LocalStorage::open().map_err(to_js_error)?;
        let store = InventoryStore::new(PersistenceGateway::new(backend));

        Ok(Self {
            store: Rc::new(RefCell::new(store)),
            bundled_url: bundled_url.unwrap_or_else(|| DEFAULT_BUNDLED_URL.to_string()),
        })
    }

    /// 保存済みの在庫、なければ同梱スプレッドシートを読み込む
    ///
    /// Promise はフィルタ済み一覧で解決する。
    #[wasm_bindgen(js_name = fetchInitial)]
    pub fn fetch_initial(&self) -> js_sys::Promise {
        let store = Rc::clone(&self.store);
        let url = self.bundled_url.clone();

        future_to_promise(async move {
            let needs_bundled = {
                let mut guard = store.borrow_mut();
                guard.begin_loading();
                guard.gateway().load().is_empty()
            };

            // 借用を保持したまま await しない
            let source = if needs_bundled {
                fetch_bundled(&url).await
            } else {
                BytesSource::missing(url)
            };

            let mut guard = store.borrow_mut();
            let view = guard.fetch_initial(&source).map_err(to_js_error)?;
            to_js(view)
        })
    }

    /// アップロードされたファイルのバイト列で在庫を置き換える
    #[wasm_bindgen(js_name = loadFromUpload)]
    pub fn load_from_upload(&self, bytes: &[u8]) -> Result<JsValue, JsValue> {
        let mut store = self.store.borrow_mut();
        let view = store.load_from_upload(bytes).map_err(to_js_error)?;
        to_js(view)
    }

    #[wasm_bindgen(js_name = setSelectedBrand)]
    pub fn set_selected_brand(&self, brand: Option<String>) -> Result<JsValue, JsValue> {
        let mut store = self.store.borrow_mut();
        to_js(store.set_selected_brand(brand))
    }

    #[wasm_bindgen(js_name = setSearchQuery)]
    pub fn set_search_query(&self, query: String) -> Result<JsValue, JsValue> {
        let mut store = self.store.borrow_mut();
        to_js(store.set_search_query(query))
    }

    /// 編集対象を品名で指定（None で解除）
    #[wasm_bindgen(js_name = setEditingTarget)]
    pub fn set_editing_target(&self, item_name: Option<String>) {
        let mut store = self.store.borrow_mut();
        let target = item_name.and_then(|name| {
            store
                .records()
                .iter()
                .find(|r| r.item_name == name)
                .cloned()
        });
        store.set_editing_target(target);
    }

    #[wasm_bindgen(js_name = setAddingTarget)]
    pub fn set_adding_target(&self, adding: bool) {
        self.store.borrow_mut().set_adding_target(adding);
    }

    /// フォーム入力から品目を追加
    #[wasm_bindgen(js_name = addItem)]
    pub fn add_item(
        &self,
        brand: &str,
        item_name: &str,
        price: &str,
        dr_price: &str,
    ) -> Result<JsValue, JsValue> {
        let new_record =
            NewRecord::from_input(brand, item_name, price, dr_price).map_err(to_js_error)?;

        let mut store = self.store.borrow_mut();
        let view = store.add_record(new_record).map_err(to_js_error)?;
        to_js(view)
    }

    /// 品名が一致する先頭の品目を編集
    #[wasm_bindgen(js_name = updateItem)]
    pub fn update_item(
        &self,
        original_item_name: &str,
        item_name: &str,
        price: &str,
    ) -> Result<JsValue, JsValue> {
        let update = RecordUpdate::from_input(item_name, price).map_err(to_js_error)?;

        let mut store = self.store.borrow_mut();
        let view = store
            .update_record(original_item_name, update)
            .map_err(to_js_error)?;
        to_js(view)
    }

    /// 全品目をxlsxにして返す（ダウンロードはページ側で行う）
    #[wasm_bindgen(js_name = exportWorkbook)]
    pub fn export_workbook(&self) -> Result<js_sys::Uint8Array, JsValue> {
        let bytes = self.store.borrow().export_workbook().map_err(to_js_error)?;
        Ok(js_sys::Uint8Array::from(bytes.as_slice()))
    }

    // =============================================
    // スナップショット
    // =============================================

    pub fn records(&self) -> Result<JsValue, JsValue> {
        to_js(self.store.borrow().records())
    }

    pub fn filtered(&self) -> Result<JsValue, JsValue> {
        to_js(self.store.borrow().filtered())
    }

    pub fn brands(&self) -> Result<JsValue, JsValue> {
        to_js(self.store.borrow().brands())
    }

    #[wasm_bindgen(js_name = editingTarget)]
    pub fn editing_target(&self) -> Result<JsValue, JsValue> {
        let store = self.store.borrow();
        let target: Option<&InventoryRecord> = store.editing_target();
        to_js(&target)
    }

    #[wasm_bindgen(js_name = isAdding)]
    pub fn is_adding(&self) -> bool {
        self.store.borrow().is_adding()
    }

    #[wasm_bindgen(js_name = selectedBrand)]
    pub fn selected_brand(&self) -> Option<String> {
        self.store.borrow().selected_brand().map(str::to_string)
    }

    #[wasm_bindgen(js_name = searchQuery)]
    pub fn search_query(&self) -> String {
        self.store.borrow().search_query().to_string()
    }

    /// "brands" または "items"
    #[wasm_bindgen(js_name = viewMode)]
    pub fn view_mode(&self) -> String {
        match self.store.borrow().view_mode() {
            ViewMode::Brands => "brands".to_string(),
            ViewMode::Items => "items".to_string(),
        }
    }

    pub fn heading(&self) -> String {
        self.store.borrow().heading()
    }

    /// "idle-empty" / "loading" / "loaded" / "error"
    pub fn status(&self) -> String {
        self.store.borrow().status().as_str().to_string()
    }

    #[wasm_bindgen(js_name = isLoading)]
    pub fn is_loading(&self) -> bool {
        self.store.borrow().is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.store.borrow().error().map(str::to_string)
    }
}
