//! 同梱スプレッドシートの取得

use fireworks_inventory_common::BytesSource;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

pub const DEFAULT_BUNDLED_URL: &str = "/core/CORNATION.xlsx";

async fn fetch_bytes(url: &str) -> Result<Vec<u8>, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window object"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("HTTP error: {}", resp.status())));
    }

    let buffer = JsFuture::from(resp.array_buffer()?).await?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// 同梱スプレッドシートを取得する
///
/// 取得できなければ「なし」として扱い、ストア側で空在庫になる。
pub async fn fetch_bundled(url: &str) -> BytesSource {
    match fetch_bytes(url).await {
        Ok(bytes) => BytesSource::new(url, bytes),
        Err(e) => {
            web_sys::console::warn_1(&format!("Failed to fetch {}: {:?}", url, e).into());
            BytesSource::missing(url)
        }
    }
}
