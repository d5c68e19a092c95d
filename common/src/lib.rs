//! Fireworks Inventory Common Library
//!
//! CLIとWeb(WASM)で共有される型・スプレッドシート変換・在庫ストア

pub mod types;
pub mod error;
pub mod input;
pub mod brand;
pub mod filter;
pub mod sheet;
pub mod gateway;
pub mod store;

pub use types::{Brand, InventoryRecord, NewRecord, RecordUpdate};
pub use error::{DecodeError, Error, Result};
pub use brand::{brand_icon, derive_brands};
pub use filter::{Filter, ViewMode};
pub use gateway::{
    load_bundled_default, BundledSource, BytesSource, KeyValueStore, MemoryStorage,
    PersistenceGateway, STORAGE_KEY,
};
pub use store::{InventoryStore, StoreStatus};
