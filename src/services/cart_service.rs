use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    catalog::{CatalogError, CatalogRepository},
    models::{
        cart::{AddOutcome, Cart},
        cart_item::CartItem,
        discount::{Discount, DiscountStrategy},
        receipt::Receipt,
    },
};

#[derive(Error, Debug)]
pub enum CartServiceError {
    #[error("Product '{name}' is not in the catalog")]
    ProductNotFound { name: String },

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// A shopping session: one cart filled from a catalog.
pub struct CartService {
    catalog: Arc<dyn CatalogRepository>,
    cart: Cart,
}

impl CartService {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        let cart = Cart::new();
        info!("Started cart session {}", cart.id());
        Self { catalog, cart }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn catalog(&self) -> &Arc<dyn CatalogRepository> {
        &self.catalog
    }

    /// Looks `name` up in the catalog and adds the catalog's product to the cart.
    pub fn add_by_name(
        &mut self,
        name: &str,
        quantity: i32,
    ) -> Result<AddOutcome, CartServiceError> {
        let product = self
            .catalog
            .find_by_name(name)?
            .ok_or_else(|| CartServiceError::ProductNotFound {
                name: name.to_string(),
            })?;

        let outcome = self.cart.add_product(&product, quantity);
        match outcome {
            AddOutcome::Added => info!("Added {} x{} to cart", name, quantity),
            AddOutcome::Incremented { quantity: total } => {
                info!("Added {} more {}, now {}", quantity, name, total)
            }
            AddOutcome::Unavailable => warn!("Skipped unavailable product {}", name),
            AddOutcome::QuantityOverflow { quantity: kept } => {
                warn!("Cannot add {} more {}, quantity stays {}", quantity, name, kept)
            }
        }
        Ok(outcome)
    }

    pub fn update_quantity(&mut self, name: &str, quantity: i32) -> bool {
        let updated = self.cart.update_quantity(name, quantity);
        if updated {
            info!("Set {} quantity to {}", name, quantity);
        } else {
            debug!("Update ignored, {} is not in the cart", name);
        }
        updated
    }

    pub fn remove_product(&mut self, name: &str) -> Option<CartItem> {
        let removed = self.cart.remove_product(name);
        if removed.is_some() {
            info!("Removed {} from cart", name);
        } else {
            debug!("Remove ignored, {} is not in the cart", name);
        }
        removed
    }

    pub fn total(&self, discount: &Discount) -> f64 {
        let total = self.cart.calculate_total(discount);
        debug!(
            "Cart {} total with {} discount: {:.2}",
            self.cart.id(),
            discount.label(),
            total
        );
        total
    }

    pub fn receipt(&self, discount: &Discount) -> Receipt {
        let receipt = self.cart.checkout(discount);
        info!(
            "Checked out cart {}: {} lines, total {:.2}",
            receipt.cart_id,
            receipt.lines.len(),
            receipt.total
        );
        receipt
    }
}
