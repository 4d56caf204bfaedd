use chrono::{DateTime, Local, Utc};
use console::style;
use tabled::{
    settings::{Alignment, Style},
    Table, Tabled,
};

use crate::models::cart::CartSummary;
use crate::models::product::Product;

#[derive(Tabled)]
struct CartTableRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Product")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
}

pub fn format_cart_table(products: &[Product], currency: &str) -> String {
    if products.is_empty() {
        return String::new();
    }

    let rows: Vec<CartTableRow> = products
        .iter()
        .enumerate()
        .map(|(index, product)| CartTableRow {
            position: index + 1,
            name: if product.name.len() > 30 {
                format!("{}...", &product.name[..27])
            } else {
                product.name.clone()
            },
            price: format_price(product.price, currency),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded()).with(Alignment::left());

    table.to_string()
}

pub fn format_price(amount: f64, currency: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", currency, amount.abs())
    } else {
        format!("{}{:.2}", currency, amount)
    }
}

pub fn format_receipt(summary: &CartSummary, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{}: {}\n",
        style("Items").bold(),
        summary.item_count
    ));
    output.push_str(&format!(
        "{}: {}\n",
        style("Total").bold(),
        style(format_price(summary.total_price, currency)).green()
    ));
    output.push_str(&format!(
        "{}: {}\n",
        style("Generated").bold(),
        style(format_date(&summary.generated_at)).dim()
    ));

    output
}

pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
