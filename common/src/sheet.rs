//! スプレッドシート変換
//!
//! - decode: 先頭シートの表（1行目がヘッダー）を InventoryRecord に変換
//! - encode: COMPANY / ITEM / PRICE / DR の4列で Inventory シートを出力

use crate::brand::brand_icon;
use crate::error::{DecodeError, Error, Result};
use crate::input::parse_leading_decimal;
use crate::types::InventoryRecord;
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use rust_xlsxwriter::{Format, Workbook};
use std::io::Cursor;

/// 出力シート名
pub const SHEET_NAME: &str = "Inventory";

/// 出力列（順序固定）
pub const EXPORT_HEADERS: [&str; 4] = ["COMPANY", "ITEM", "PRICE", "DR"];

const BRAND_HEADERS: &[&str] = &["company", "brand"];
const ITEM_HEADERS: &[&str] = &["item", "item name", "item_name", "product"];
const PRICE_HEADERS: &[&str] = &["price", "rate"];
const DR_HEADERS: &[&str] = &["dr", "dr price", "dr_price"];

const UNKNOWN_BRAND: &str = "Unknown";
const UNNAMED_ITEM: &str = "Unnamed Item";

/// 解決済みの列位置
#[derive(Debug, Clone, Copy, PartialEq)]
struct Columns {
    brand: usize,
    item: usize,
    price: usize,
    dr: Option<usize>,
}

/// 候補名の順に、大文字小文字・前後空白を無視してヘッダーを探す
fn find_header(headers: &[String], candidates: &[&str]) -> Option<usize> {
    candidates.iter().find_map(|name| {
        headers
            .iter()
            .position(|h| h.trim().to_lowercase() == *name)
    })
}

fn resolve_columns(headers: &[String]) -> std::result::Result<Columns, DecodeError> {
    let brand = find_header(headers, BRAND_HEADERS);
    let item = find_header(headers, ITEM_HEADERS);
    let price = find_header(headers, PRICE_HEADERS);

    match (brand, item, price) {
        (Some(brand), Some(item), Some(price)) => Ok(Columns {
            brand,
            item,
            price,
            dr: find_header(headers, DR_HEADERS),
        }),
        _ => {
            log::error!("Missing required headers. Found: {:?}", headers);
            Err(DecodeError::MissingColumns { found: headers.to_vec() })
        }
    }
}

/// セルの文字列表現（空セル・エラーセルは None）
fn cell_text(cell: Option<&Data>) -> Option<String> {
    match cell? {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => Some(s.clone()),
        Data::Float(f) => Some(f.to_string()),
        Data::Int(i) => Some(i.to_string()),
        other => Some(other.to_string()),
    }
}

/// セルの数値（数値でなければ None）
fn cell_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => parse_leading_decimal(s),
        _ => None,
    }
}

fn is_blank_row(row: &[Data]) -> bool {
    row.iter().all(|cell| match cell {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    })
}

/// 1行をレコードに変換。品名なし・価格が数値でない行は None
fn row_to_record(row: &[Data], columns: &Columns, id: u32) -> Option<InventoryRecord> {
    let brand = cell_text(row.get(columns.brand))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| UNKNOWN_BRAND.to_string());

    let item_name = cell_text(row.get(columns.item))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| UNNAMED_ITEM.to_string());

    if item_name == UNNAMED_ITEM {
        return None;
    }

    // 空の価格セルは0
    let price = match row.get(columns.price) {
        None | Some(Data::Empty) => 0.0,
        Some(Data::String(s)) if s.trim().is_empty() => 0.0,
        Some(cell) => cell_number(cell)?,
    };
    if price < 0.0 {
        return None;
    }

    let dr_price = columns
        .dr
        .and_then(|col| row.get(col))
        .and_then(cell_number);

    Some(InventoryRecord {
        id,
        brand_icon: brand_icon(&brand),
        brand,
        item_name,
        price,
        dr_price,
    })
}

fn decode_workbook(bytes: &[u8]) -> std::result::Result<Vec<InventoryRecord>, DecodeError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| DecodeError::Unreadable(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(DecodeError::NoWorksheet)?
        .map_err(|e| DecodeError::Unreadable(e.to_string()))?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row
            .iter()
            .map(|cell| cell_text(Some(cell)).unwrap_or_default())
            .collect(),
        None => return Err(DecodeError::NoDataRows),
    };

    let data_rows: Vec<&[Data]> = rows.filter(|row| !is_blank_row(row)).collect();
    if data_rows.is_empty() {
        return Err(DecodeError::NoDataRows);
    }

    let columns = resolve_columns(&headers)?;

    let records: Vec<InventoryRecord> = data_rows
        .iter()
        .enumerate()
        .filter_map(|(index, row)| row_to_record(row, &columns, index as u32 + 1))
        .collect();

    if records.is_empty() {
        return Err(DecodeError::NoValidRows);
    }

    Ok(records)
}

/// スプレッドシートのバイト列をレコードに変換
pub fn decode(bytes: &[u8]) -> Result<Vec<InventoryRecord>> {
    log::info!("Parsing items from Excel file buffer ({} bytes).", bytes.len());

    match decode_workbook(bytes) {
        Ok(records) => {
            log::info!("Successfully parsed {} items from file.", records.len());
            Ok(records)
        }
        Err(e) => {
            log::error!("Error processing Excel file: {}", e);
            Err(Error::Decode(e))
        }
    }
}

/// レコードをxlsxのバイト列に変換
pub fn encode(records: &[InventoryRecord]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|e| Error::Encode(format!("set sheet name: {}", e)))?;

    for (col, header) in EXPORT_HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Encode(format!("write header: {}", e)))?;
    }
    worksheet
        .set_column_width(1, 32)
        .map_err(|e| Error::Encode(format!("set column width: {}", e)))?;

    for (index, record) in records.iter().enumerate() {
        let row = index as u32 + 1;
        worksheet
            .write_string(row, 0, &record.brand)
            .and_then(|ws| ws.write_string(row, 1, &record.item_name))
            .and_then(|ws| ws.write_number(row, 2, record.price))
            .map_err(|e| Error::Encode(format!("write row: {}", e)))?;

        // DR未設定は空セル
        if let Some(dr_price) = record.dr_price {
            worksheet
                .write_number(row, 3, dr_price)
                .map_err(|e| Error::Encode(format!("write row: {}", e)))?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| Error::Encode(format!("save workbook: {}", e)))
}
