//! 一覧の表示

use fireworks_inventory_common::{Brand, InventoryRecord};

/// 価格表示（整数なら小数点なし）
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{:.0}", price)
    } else {
        format!("{:.2}", price)
    }
}

pub fn print_brands(brands: &[Brand], records: &[InventoryRecord]) {
    if brands.is_empty() {
        println!("No brands found. Import an inventory file with `sv-inventory import <file>`.");
        return;
    }

    for brand in brands {
        let count = records.iter().filter(|r| r.brand == brand.name).count();
        println!("  {:<30} {:>4} items  {}", brand.name, count, brand.icon);
    }
}

pub fn print_records(heading: &str, records: &[InventoryRecord]) {
    println!("{}\n", heading);

    if records.is_empty() {
        println!("No items match your search.");
        return;
    }

    println!("  {:>4}  {:<20} {:<36} {:>10} {:>10}", "ID", "COMPANY", "ITEM", "PRICE", "DR");
    for record in records {
        let dr = record.dr_price.map(format_price).unwrap_or_else(|| "-".to_string());
        println!(
            "  {:>4}  {:<20} {:<36} {:>10} {:>10}",
            record.id,
            record.brand,
            record.item_name,
            format_price(record.price),
            dr
        );
    }
    println!("\n{} items", records.len());
}
