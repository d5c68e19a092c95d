//! 在庫データの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - InventoryRecord: 価格表の1行（永続化形式と同じフィールド名）
//! - Brand: レコードから導出されるブランド一覧の要素
//! - NewRecord / RecordUpdate: 追加・編集操作の入力

use serde::{Deserialize, Serialize};

/// 価格表の1行
///
/// 永続化されるJSONのフィールド名は `id, brand, item_name, price, dr_price, brand_icon`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: u32,
    pub brand: String,
    pub item_name: String,
    pub price: f64,
    /// DR価格（未設定は null）
    #[serde(default)]
    pub dr_price: Option<f64>,
    #[serde(default)]
    pub brand_icon: String,
}

/// ブランド（レコードから導出、単独では永続化しない）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    pub icon: String,
}

/// 追加するレコードの入力値
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecord {
    pub brand: String,
    pub item_name: String,
    pub price: f64,
    pub dr_price: Option<f64>,
}

/// 既存レコードの編集内容
#[derive(Debug, Clone, PartialEq)]
pub struct RecordUpdate {
    pub item_name: String,
    pub price: f64,
}
