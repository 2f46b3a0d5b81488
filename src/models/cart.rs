use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::models::{
    cart_item::CartItem,
    discount::{Discount, DiscountStrategy},
    product::Product,
    receipt::{Receipt, ReceiptLine},
};

/// What `Cart::add_product` did with the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was created from a copy of the product.
    Added,
    /// The product was already in the cart; its quantity is now `quantity`.
    Incremented { quantity: i32 },
    /// The product is not available and the cart was left untouched.
    Unavailable,
    /// The new quantity would not fit in an `i32`; the line keeps `quantity`.
    QuantityOverflow { quantity: i32 },
}

/// Cart lines keyed by product name, kept in insertion order.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Cart {
    id: Uuid,
    created_at: DateTime<Utc>,
    items: IndexMap<String, CartItem>,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            items: IndexMap::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Adds `quantity` units of `product`.
    ///
    /// The first add stores a clone of `product`; later adds under the same
    /// name only accumulate quantity, so the stored price and availability
    /// are the ones seen first.
    pub fn add_product(&mut self, product: &Product, quantity: i32) -> AddOutcome {
        if !product.is_available() {
            warn!("{} is not available.", product.name());
            return AddOutcome::Unavailable;
        }

        match self.items.get_mut(product.name()) {
            Some(item) => match item.quantity().checked_add(quantity) {
                Some(total) => {
                    item.set_quantity(total);
                    debug!("Cart {}: {} quantity now {}", self.id, product.name(), total);
                    AddOutcome::Incremented { quantity: total }
                }
                None => {
                    warn!(
                        "Cart {}: adding {} to {} {} overflows, quantity left unchanged",
                        self.id,
                        quantity,
                        item.quantity(),
                        product.name()
                    );
                    AddOutcome::QuantityOverflow {
                        quantity: item.quantity(),
                    }
                }
            },
            None => {
                self.items.insert(
                    product.name().to_string(),
                    CartItem::new(product.clone(), quantity),
                );
                debug!("Cart {}: added {} x{}", self.id, product.name(), quantity);
                AddOutcome::Added
            }
        }
    }

    /// Overwrites the quantity of an existing line. Returns false when no
    /// line has that name.
    pub fn update_quantity(&mut self, product_name: &str, quantity: i32) -> bool {
        match self.items.get_mut(product_name) {
            Some(item) => {
                item.set_quantity(quantity);
                debug!("Cart {}: {} quantity set to {}", self.id, product_name, quantity);
                true
            }
            None => false,
        }
    }

    pub fn remove_product(&mut self, product_name: &str) -> Option<CartItem> {
        let removed = self.items.shift_remove(product_name);
        if removed.is_some() {
            debug!("Cart {}: removed {}", self.id, product_name);
        }
        removed
    }

    pub fn get(&self, product_name: &str) -> Option<&CartItem> {
        self.items.get(product_name)
    }

    pub fn items(&self) -> impl Iterator<Item = &CartItem> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// One "You have N name(s) in your cart." line per item, in insertion order.
    pub fn display_lines(&self) -> Vec<String> {
        self.items
            .values()
            .map(|item| {
                format!(
                    "You have {} {}(s) in your cart.",
                    item.quantity(),
                    item.product().name()
                )
            })
            .collect()
    }

    pub fn subtotal(&self) -> f64 {
        self.items.values().map(CartItem::total_price).sum()
    }

    pub fn calculate_total(&self, discount_strategy: &dyn DiscountStrategy) -> f64 {
        discount_strategy.apply_discount(self.subtotal())
    }

    pub fn checkout(&self, discount: &Discount) -> Receipt {
        let lines = self
            .items
            .values()
            .map(|item| ReceiptLine {
                name: item.product().name().to_string(),
                unit_price: item.product().price(),
                quantity: item.quantity(),
                line_total: item.total_price(),
            })
            .collect();

        Receipt {
            cart_id: self.id,
            issued_at: Utc::now(),
            lines,
            subtotal: self.subtotal(),
            discount: *discount,
            total: self.calculate_total(discount),
        }
    }
}

impl std::fmt::Display for Cart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in self.display_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
