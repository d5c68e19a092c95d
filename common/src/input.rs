//! 入力値の解析と検証
//!
//! 追加・編集フォームから渡された文字列を検証して、ストア操作の入力に変換する。
//! ストア側では検証しないため、呼び出し側は必ずここを通す。

use crate::error::{Error, Result};
use crate::types::{NewRecord, RecordUpdate};
use regex::Regex;

/// 文字列先頭の10進数を読み取る（"45.50 Rs" → 45.5）
///
/// 先頭に数値がない場合は None。
pub fn parse_leading_decimal(text: &str) -> Option<f64> {
    lazy_static::lazy_static! {
        static ref LEADING_DECIMAL_RE: Regex =
            Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").unwrap();
    }

    LEADING_DECIMAL_RE
        .captures(text)
        .and_then(|cap| cap[1].parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

fn parse_price(text: &str) -> Result<f64> {
    match parse_leading_decimal(text) {
        Some(price) if price >= 0.0 => Ok(price),
        _ => Err(Error::Validation(format!("Invalid price: \"{}\"", text.trim()))),
    }
}

impl NewRecord {
    /// 追加フォームの入力を検証
    ///
    /// ブランド・品名は前後空白を除いて必須、価格は0以上の数値。
    /// DR価格は空欄なら未設定。
    pub fn from_input(brand: &str, item_name: &str, price: &str, dr_price: &str) -> Result<Self> {
        let brand = brand.trim();
        let item_name = item_name.trim();

        if brand.is_empty() || item_name.is_empty() || parse_price(price).is_err() {
            return Err(Error::Validation(
                "Company, Item Name, and a valid Price are required.".to_string(),
            ));
        }

        let dr_price = if dr_price.trim().is_empty() {
            None
        } else {
            Some(
                parse_leading_decimal(dr_price)
                    .ok_or_else(|| Error::Validation(format!("Invalid DR price: \"{}\"", dr_price.trim())))?,
            )
        };

        Ok(Self {
            brand: brand.to_string(),
            item_name: item_name.to_string(),
            price: parse_price(price)?,
            dr_price,
        })
    }
}

impl RecordUpdate {
    /// 編集フォームの入力を検証
    pub fn from_input(item_name: &str, price: &str) -> Result<Self> {
        let item_name = item_name.trim();
        if item_name.is_empty() {
            return Err(Error::Validation("Item name is required.".to_string()));
        }

        Ok(Self {
            item_name: item_name.to_string(),
            price: parse_price(price)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_decimal() {
        assert_eq!(parse_leading_decimal("45"), Some(45.0));
        assert_eq!(parse_leading_decimal(" 45.50 Rs"), Some(45.5));
        assert_eq!(parse_leading_decimal(".5"), Some(0.5));
        assert_eq!(parse_leading_decimal("-3"), Some(-3.0));
        assert_eq!(parse_leading_decimal("1e2"), Some(100.0));
        assert_eq!(parse_leading_decimal("Rs 45"), None);
        assert_eq!(parse_leading_decimal(""), None);
    }

    #[test]
    fn test_new_record_trims_and_parses() {
        let record = NewRecord::from_input("  Acme ", " Rocket ", "45", "").unwrap();
        assert_eq!(record.brand, "Acme");
        assert_eq!(record.item_name, "Rocket");
        assert_eq!(record.price, 45.0);
        assert_eq!(record.dr_price, None);

        let record = NewRecord::from_input("Acme", "Rocket", "45", "38.5").unwrap();
        assert_eq!(record.dr_price, Some(38.5));
    }

    #[test]
    fn test_new_record_rejects_blank_and_negative() {
        assert!(NewRecord::from_input("  ", "Rocket", "45", "").is_err());
        assert!(NewRecord::from_input("Acme", "", "45", "").is_err());
        assert!(NewRecord::from_input("Acme", "Rocket", "abc", "").is_err());
        assert!(NewRecord::from_input("Acme", "Rocket", "-1", "").is_err());
        assert!(NewRecord::from_input("Acme", "Rocket", "10", "n/a").is_err());
    }

    #[test]
    fn test_new_record_zero_price_is_valid() {
        let record = NewRecord::from_input("Acme", "Free Sample", "0", "").unwrap();
        assert_eq!(record.price, 0.0);
    }

    #[test]
    fn test_record_update_from_input() {
        let update = RecordUpdate::from_input(" Rocket Pro ", "50").unwrap();
        assert_eq!(update.item_name, "Rocket Pro");
        assert_eq!(update.price, 50.0);

        assert!(RecordUpdate::from_input("", "50").is_err());
        assert!(RecordUpdate::from_input("Rocket", "-5").is_err());
    }
}
