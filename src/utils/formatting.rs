use chrono::{DateTime, Local, Utc};
use console::style;
use tabled::{Table, Tabled, settings::{Style, Alignment}};

use crate::models::{
    cart::Cart,
    discount::{Discount, DiscountStrategy},
    product::Product,
    receipt::Receipt,
};

#[derive(Tabled)]
struct ProductTableRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Available")]
    available: String,
}

#[derive(Tabled)]
struct CartTableRow {
    #[tabled(rename = "Product")]
    name: String,
    #[tabled(rename = "Unit Price")]
    unit_price: String,
    #[tabled(rename = "Qty")]
    quantity: i32,
    #[tabled(rename = "Line Total")]
    line_total: String,
}

pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn format_amount(currency: &str, amount: f64) -> String {
    format!("{}{:.2}", currency, amount)
}

/// Shortest form that still shows a decimal point: `1035.0`, `0.5`, `12.25`.
pub fn format_bill_amount(currency: &str, amount: f64) -> String {
    format!("{}{:?}", currency, amount)
}

/// `Total Bill with {label} Discount: $1035.0`
pub fn format_total_line(currency: &str, discount: &dyn DiscountStrategy, total: f64) -> String {
    format!(
        "Total Bill with {} Discount: {}",
        discount.label(),
        format_bill_amount(currency, total)
    )
}

pub fn format_product_table(products: &[Product], currency: &str) -> String {
    if products.is_empty() {
        return String::new();
    }

    let rows: Vec<ProductTableRow> = products
        .iter()
        .map(|product| ProductTableRow {
            name: product.name().to_string(),
            category: product.category().to_string(),
            price: format_amount(currency, product.price()),
            available: if product.is_available() { "yes" } else { "no" }.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Alignment::left());

    table.to_string()
}

pub fn format_cart_table(cart: &Cart, currency: &str) -> String {
    if cart.is_empty() {
        return String::new();
    }

    let rows: Vec<CartTableRow> = cart
        .items()
        .map(|item| CartTableRow {
            name: item.product().name().to_string(),
            unit_price: format_amount(currency, item.product().price()),
            quantity: item.quantity(),
            line_total: format_amount(currency, item.total_price()),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Alignment::left());

    table.to_string()
}

pub fn format_receipt(receipt: &Receipt, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}: {}\n", style("Cart").bold(), style(&receipt.cart_id).cyan()));
    output.push_str(&format!("{}: {}\n", style("Issued").bold(), style(format_date(&receipt.issued_at)).dim()));

    for line in &receipt.lines {
        output.push_str(&format!(
            "  {} x {} @ {} = {}\n",
            line.quantity,
            style(&line.name).green(),
            format_amount(currency, line.unit_price),
            format_amount(currency, line.line_total)
        ));
    }

    output.push_str(&format!("{}: {}\n", style("Subtotal").bold(), format_amount(currency, receipt.subtotal)));
    if receipt.discount != Discount::None {
        output.push_str(&format!(
            "{}: {} ({})\n",
            style("Discount").bold(),
            style(receipt.discount).yellow(),
            format_amount(currency, receipt.savings())
        ));
    }
    output.push_str(&format!("{}: {}\n", style("Total").bold(), style(format_amount(currency, receipt.total)).green()));

    output
}
