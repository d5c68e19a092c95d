//! 対話入力
//!
//! コマンドライン引数で省略された項目を dialoguer で入力させ、
//! common の入力検証に通す。

use crate::error::{InventoryError, Result};
use dialoguer::Input;
use fireworks_inventory_common::{InventoryRecord, NewRecord, RecordUpdate};

fn prompt_text(label: &str, initial: &str, allow_empty: bool) -> Result<String> {
    Input::<String>::new()
        .with_prompt(label)
        .with_initial_text(initial)
        .allow_empty(allow_empty)
        .interact_text()
        .map_err(|e| InventoryError::Input(e.to_string()))
}

fn value_or_prompt(value: Option<String>, label: &str, initial: &str, allow_empty: bool) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => prompt_text(label, initial, allow_empty),
    }
}

/// 編集内容を取得（既存値を初期値にする）
pub fn record_update(
    current: &InventoryRecord,
    name: Option<String>,
    price: Option<String>,
) -> Result<RecordUpdate> {
    let name = value_or_prompt(name, "Item name", &current.item_name, false)?;
    let price = value_or_prompt(price, "Price", &current.price.to_string(), false)?;

    Ok(RecordUpdate::from_input(&name, &price)?)
}

/// 追加内容を取得
pub fn new_record(
    brand: Option<String>,
    item: Option<String>,
    price: Option<String>,
    dr: Option<String>,
    interactive_dr: bool,
) -> Result<NewRecord> {
    let brand = value_or_prompt(brand, "Company", "", false)?;
    let item = value_or_prompt(item, "Item name", "", false)?;
    let price = value_or_prompt(price, "Price", "", false)?;
    let dr = match dr {
        Some(dr) => dr,
        None if interactive_dr => prompt_text("DR price (optional)", "", true)?,
        None => String::new(),
    };

    Ok(NewRecord::from_input(&brand, &item, &price, &dr)?)
}
