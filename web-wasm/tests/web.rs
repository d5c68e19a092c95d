//! ブラウザ上での統合テスト（wasm-pack test --headless --chrome）

#![cfg(target_arch = "wasm32")]

use fireworks_inventory_common::{KeyValueStore, STORAGE_KEY};
use fireworks_inventory_wasm::{init_logging, InventoryApp, LocalStorage};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn clear_storage() {
    let mut storage = LocalStorage::open().unwrap();
    storage.set_item(STORAGE_KEY, "[]").unwrap();
}

#[wasm_bindgen_test]
fn test_local_storage_roundtrip() {
    let mut storage = LocalStorage::open().unwrap();
    storage.set_item("sv_test_key", "value").unwrap();
    assert_eq!(storage.get_item("sv_test_key").unwrap(), Some("value".to_string()));
    assert_eq!(storage.get_item("sv_missing_key").unwrap(), None);
}

#[wasm_bindgen_test]
fn test_add_and_filter() {
    clear_storage();
    let app = InventoryApp::new(None).unwrap();
    assert_eq!(app.status(), "idle-empty");

    app.add_item("Acme", "Rocket", "45", "").unwrap();
    app.add_item("Sony", "Flower Pot", "80", "70").unwrap();
    assert_eq!(app.view_mode(), "brands");

    app.set_selected_brand(Some("Sony".to_string())).unwrap();
    assert_eq!(app.view_mode(), "items");
    assert_eq!(app.heading(), "Sony");

    app.update_item("Flower Pot", "Flower Pot Big", "90").unwrap();
    assert!(app.error().is_none());
    assert!(app.update_item("Missing", "X", "1").is_err());
    assert!(app.error().is_some());
}

#[wasm_bindgen_test]
fn test_invalid_input_is_rejected() {
    clear_storage();
    let app = InventoryApp::new(None).unwrap();
    assert!(app.add_item("", "Rocket", "45", "").is_err());
    assert!(app.add_item("Acme", "Rocket", "abc", "").is_err());
}

#[wasm_bindgen_test]
fn test_upload_failure_sets_error() {
    clear_storage();
    let app = InventoryApp::new(None).unwrap();
    assert!(app.load_from_upload(b"not a workbook").is_err());
    assert_eq!(app.status(), "error");
    assert!(app.export_workbook().is_err());
}

/// 破損した保存データは警告を出して空として扱う
#[wasm_bindgen_test]
async fn test_corrupt_storage_loads_empty() {
    init_logging();
    let mut storage = LocalStorage::open().unwrap();
    storage.set_item(STORAGE_KEY, "{ not json").unwrap();

    let app = InventoryApp::new(Some("/missing/CORNATION.xlsx".to_string())).unwrap();
    JsFuture::from(app.fetch_initial()).await.unwrap();

    assert_eq!(app.status(), "loaded");
    assert!(app.error().is_none());
    assert!(app.export_workbook().is_err());
}

#[wasm_bindgen_test]
fn test_empty_brand_is_no_selection() {
    clear_storage();
    let app = InventoryApp::new(None).unwrap();
    app.add_item("Acme", "Rocket", "45", "").unwrap();

    app.set_selected_brand(Some(String::new())).unwrap();
    assert_eq!(app.selected_brand(), None);
    assert_eq!(app.view_mode(), "brands");
}
