use serde::{Deserialize, Serialize};

/// Pricing adjustment applied to a cart's raw total.
pub trait DiscountStrategy {
    fn apply_discount(&self, total: f64) -> f64;

    /// Short name used in "Total Bill with {label} Discount" lines.
    fn label(&self) -> String;
}

/// Leaves the total unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NoDiscount;

impl DiscountStrategy for NoDiscount {
    fn apply_discount(&self, total: f64) -> f64 {
        total
    }

    fn label(&self) -> String {
        "No".to_string()
    }
}

/// Takes `percentage` percent off the total. The percentage is not bounded:
/// values over 100 yield a negative total and negative values add a surcharge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentageDiscount {
    percentage: f64,
}

impl PercentageDiscount {
    pub fn new(percentage: f64) -> Self {
        Self { percentage }
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }
}

impl DiscountStrategy for PercentageDiscount {
    fn apply_discount(&self, total: f64) -> f64 {
        total - (total * self.percentage / 100.0)
    }

    fn label(&self) -> String {
        "Percentage".to_string()
    }
}

/// Halves the whole cart total. This treats every unit as eligible rather
/// than pairing items up.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BuyOneGetOneFree;

impl DiscountStrategy for BuyOneGetOneFree {
    fn apply_discount(&self, total: f64) -> f64 {
        total / 2.0
    }

    fn label(&self) -> String {
        "BOGO".to_string()
    }
}

/// Serializable choice of strategy, used by the CLI and stored on receipts.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(tag = "kind", content = "percentage", rename_all = "snake_case")]
pub enum Discount {
    #[default]
    None,
    Percentage(f64),
    BuyOneGetOneFree,
}

impl DiscountStrategy for Discount {
    fn apply_discount(&self, total: f64) -> f64 {
        match self {
            Discount::None => NoDiscount.apply_discount(total),
            Discount::Percentage(pct) => PercentageDiscount::new(*pct).apply_discount(total),
            Discount::BuyOneGetOneFree => BuyOneGetOneFree.apply_discount(total),
        }
    }

    fn label(&self) -> String {
        match self {
            Discount::None => NoDiscount.label(),
            Discount::Percentage(pct) => PercentageDiscount::new(*pct).label(),
            Discount::BuyOneGetOneFree => BuyOneGetOneFree.label(),
        }
    }
}

impl std::fmt::Display for Discount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Discount::None => write!(f, "no discount"),
            Discount::Percentage(pct) => write!(f, "{}% off", pct),
            Discount::BuyOneGetOneFree => write!(f, "buy one get one free"),
        }
    }
}
