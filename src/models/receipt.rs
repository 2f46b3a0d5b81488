use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::discount::Discount;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ReceiptLine {
    pub name: String,
    pub unit_price: f64,
    pub quantity: i32,
    pub line_total: f64,
}

/// Priced snapshot of a cart at checkout time.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Receipt {
    pub cart_id: Uuid,
    pub issued_at: DateTime<Utc>,
    pub lines: Vec<ReceiptLine>,
    pub subtotal: f64,
    pub discount: Discount,
    pub total: f64,
}

impl Receipt {
    pub fn savings(&self) -> f64 {
        self.subtotal - self.total
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
