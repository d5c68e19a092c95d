//! ブランドとアイコンの導出
//!
//! アイコンはブランド名の文字コード合計から固定リストの位置を決めるため、
//! 同じブランドは読み込み順やセッションに関係なく同じアイコンになる。

use crate::types::{Brand, InventoryRecord};
use std::collections::HashSet;

/// アイコン画像の配置ディレクトリ
pub const ICON_DIR: &str = "/assets/icons";

/// 割り当て可能なアイコンファイル名
pub const AVAILABLE_ICONS: [&str; 20] = [
    "coronation-logo.png",
    "standard-fireworks.png",
    "sony-logo.png",
    "cock-brand-logo.png",
    "classic-sparkler.png",
    "bombs.png",
    "crackers box.png",
    "Deepam.png",
    "flowerpot.png",
    "shot1.png",
    "rocket-blast.png",
    "sparkling-fountain.png",
    "ground-spinner.png",
    "flower-pot.png",
    "atom-bomb-cracker.png",
    "peacock-display.png",
    "tri-color-burst.png",
    "comet-star.png",
    "whistling-rocket.png",
    "golden-wheel.png",
];

/// ブランド名からアイコンパスを決定
///
/// 空のブランド名は先頭のアイコン。
pub fn brand_icon(brand_name: &str) -> String {
    let index = if brand_name.trim().is_empty() {
        0
    } else {
        // UTF-16コード単位の合計
        let hash: u64 = brand_name.encode_utf16().map(u64::from).sum();
        (hash % AVAILABLE_ICONS.len() as u64) as usize
    };

    format!("{}/{}", ICON_DIR, AVAILABLE_ICONS[index])
}

/// レコードからブランド一覧を導出（初出順）
pub fn derive_brands(records: &[InventoryRecord]) -> Vec<Brand> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut brands = Vec::new();

    for record in records {
        if seen.insert(record.brand.as_str()) {
            brands.push(Brand {
                name: record.brand.clone(),
                icon: record.brand_icon.clone(),
            });
        }
    }

    brands
}
