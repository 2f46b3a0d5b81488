use serde::{Deserialize, Serialize};

use crate::models::product::Product;

/// A line in a cart: an owned copy of a product plus a quantity.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CartItem {
    product: Product,
    quantity: i32,
}

impl CartItem {
    pub fn new(product: Product, quantity: i32) -> Self {
        Self { product, quantity }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    /// Replaces the quantity. No bounds check; zero and negative values are kept as given.
    pub fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity;
    }

    pub fn total_price(&self) -> f64 {
        self.product.price() * f64::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_price() {
        let item = CartItem::new(Product::new("Headphones", 50.0, true), 3);
        assert_eq!(item.total_price(), 150.0);
    }

    #[test]
    fn test_set_quantity_replaces() {
        let mut item = CartItem::new(Product::new("Laptop", 1000.0, true), 1);
        item.set_quantity(4);
        assert_eq!(item.quantity(), 4);
        assert_eq!(item.total_price(), 4000.0);

        item.set_quantity(-2);
        assert_eq!(item.quantity(), -2);
        assert_eq!(item.total_price(), -2000.0);
    }
}
