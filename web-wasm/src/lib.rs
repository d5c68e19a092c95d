//! 花火在庫ビューア（WASM版）
//!
//! ブラウザのページから在庫ストアを操作するためのバインディング。
//! 保存先は `window.localStorage`、同梱スプレッドシートは fetch で取得する。

mod app;
mod fetch;
mod storage;

pub use app::InventoryApp;
pub use storage::LocalStorage;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    init_logging();
}

/// common の `log` 出力をブラウザのコンソールへ流す（2回目以降は何もしない）
pub fn init_logging() {
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already installed");
    }
}
