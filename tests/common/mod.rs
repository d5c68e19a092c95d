//! 統合テスト用ヘルパー

#![allow(dead_code)]

use fireworks_inventory::config::Config;
use fireworks_inventory_common::{brand_icon, sheet, InventoryRecord};
use std::path::Path;

/// 一時ディレクトリを保存先・同梱ファイル置き場にした設定
pub fn config_in(dir: &Path) -> Config {
    Config {
        data_dir: Some(dir.join("data")),
        bundled_path: dir.join("core").join("CORNATION.xlsx"),
        ..Config::default()
    }
}

pub fn record(id: u32, brand: &str, item_name: &str, price: f64, dr_price: Option<f64>) -> InventoryRecord {
    InventoryRecord {
        id,
        brand: brand.to_string(),
        item_name: item_name.to_string(),
        price,
        dr_price,
        brand_icon: brand_icon(brand),
    }
}

pub fn sample_records() -> Vec<InventoryRecord> {
    vec![
        record(1, "Coronation", "Rocket", 45.0, None),
        record(2, "Sony", "Flower Pot Big", 120.0, Some(98.0)),
        record(3, "Coronation", "Sky Shot 12", 240.0, Some(200.0)),
        record(4, "Standard", "Sparkler 10cm", 20.0, None),
    ]
}

/// 同梱スプレッドシートを置く
pub fn write_bundled(config: &Config, records: &[InventoryRecord]) {
    let bytes = sheet::encode(records).expect("encode失敗");
    if let Some(parent) = config.bundled_path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&config.bundled_path, bytes).unwrap();
}
