//! ブランド・検索語によるフィルタ

use crate::types::InventoryRecord;

/// 一覧表示の切り替え
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// ブランド選択画面
    Brands,
    /// 品目一覧（ブランド選択中または検索中）
    Items,
}

/// フィルタ条件
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub brand: Option<String>,
    pub query: String,
}

impl Filter {
    pub fn matches(&self, record: &InventoryRecord) -> bool {
        if let Some(brand) = &self.brand {
            if &record.brand != brand {
                return false;
            }
        }

        self.query.is_empty()
            || record
                .item_name
                .to_lowercase()
                .contains(&self.query.to_lowercase())
    }

    /// 条件に一致するレコードを元の順序で抽出
    pub fn apply(&self, records: &[InventoryRecord]) -> Vec<InventoryRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }

    pub fn view_mode(&self) -> ViewMode {
        if self.brand.is_none() && self.query.is_empty() {
            ViewMode::Brands
        } else {
            ViewMode::Items
        }
    }

    /// 品目一覧の見出し
    pub fn heading(&self) -> String {
        match &self.brand {
            Some(brand) => brand.clone(),
            None => format!("Search results for \"{}\"", self.query),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, brand: &str, item_name: &str) -> InventoryRecord {
        InventoryRecord {
            id,
            brand: brand.to_string(),
            item_name: item_name.to_string(),
            price: 1.0,
            dr_price: None,
            brand_icon: String::new(),
        }
    }

    fn sample() -> Vec<InventoryRecord> {
        vec![
            record(1, "Sony", "Rocket Small"),
            record(2, "Acme", "Sky Rocket"),
            record(3, "Sony", "Flower Pot"),
            record(4, "Acme", "Chakkar"),
            record(5, "Sony", "ROCKET Big"),
        ]
    }

    fn ids(records: &[InventoryRecord]) -> Vec<u32> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_no_filter_returns_everything() {
        assert_eq!(ids(&Filter::default().apply(&sample())), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_brand_filter_is_exact() {
        let filter = Filter { brand: Some("Sony".into()), query: String::new() };
        assert_eq!(ids(&filter.apply(&sample())), vec![1, 3, 5]);

        let filter = Filter { brand: Some("sony".into()), query: String::new() };
        assert!(filter.apply(&sample()).is_empty());
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let filter = Filter { brand: None, query: "rocket".into() };
        assert_eq!(ids(&filter.apply(&sample())), vec![1, 2, 5]);
    }

    #[test]
    fn test_brand_and_query_combine() {
        let filter = Filter { brand: Some("Sony".into()), query: "Rocket".into() };
        assert_eq!(ids(&filter.apply(&sample())), vec![1, 5]);
    }

    #[test]
    fn test_filter_matches_subset_for_every_combination() {
        let records = sample();
        let brands = [None, Some("Sony"), Some("Acme"), Some("Missing")];
        let queries = ["", "rocket", "o", "zzz"];

        for brand in brands {
            for query in queries {
                let filter = Filter { brand: brand.map(String::from), query: query.to_string() };
                let expected: Vec<u32> = records
                    .iter()
                    .filter(|r| brand.map_or(true, |b| r.brand == b))
                    .filter(|r| r.item_name.to_lowercase().contains(query))
                    .map(|r| r.id)
                    .collect();
                assert_eq!(ids(&filter.apply(&records)), expected, "{:?}", filter);
            }
        }
    }

    #[test]
    fn test_view_mode_and_heading() {
        let filter = Filter::default();
        assert_eq!(filter.view_mode(), ViewMode::Brands);

        let filter = Filter { brand: None, query: "pot".into() };
        assert_eq!(filter.view_mode(), ViewMode::Items);
        assert_eq!(filter.heading(), "Search results for \"pot\"");

        let filter = Filter { brand: Some("Acme".into()), query: String::new() };
        assert_eq!(filter.view_mode(), ViewMode::Items);
        assert_eq!(filter.heading(), "Acme");
    }
}
