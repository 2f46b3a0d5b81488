use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    #[default]
    General,
    Electronic,
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductCategory::General => write!(f, "general"),
            ProductCategory::Electronic => write!(f, "electronic"),
        }
    }
}

/// A catalog item. The price is fixed once the product is built; a cart keeps
/// its own clone, so later changes to the caller's copy never reach the cart.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    name: String,
    price: f64,
    available: bool,
    #[serde(default)]
    category: ProductCategory,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, available: bool) -> Self {
        Self {
            name: name.into(),
            price,
            available,
            category: ProductCategory::General,
        }
    }

    pub fn electronic(name: impl Into<String>, price: f64, available: bool) -> Self {
        Self {
            category: ProductCategory::Electronic,
            ..Self::new(name, price, available)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn category(&self) -> ProductCategory {
        self.category
    }
}

// request dto
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct StoreProductRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    #[validate(regex(
        path = "PRODUCT_NAME_REGEX",
        message = "Name must start with a letter or digit and contain only letters, digits, spaces, '-' or '_'"
    ))]
    pub name: String,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    #[serde(default = "default_available")]
    pub available: bool,

    #[serde(default)]
    pub category: ProductCategory,
}

lazy_static::lazy_static! {
    static ref PRODUCT_NAME_REGEX: Regex = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 _-]*$").unwrap();
}

fn default_available() -> bool {
    true
}

impl StoreProductRequest {
    pub fn new(name: impl Into<String>, price: f64, available: bool) -> Self {
        Self {
            name: name.into(),
            price,
            available,
            category: ProductCategory::General,
        }
    }

    pub fn with_category(mut self, category: ProductCategory) -> Self {
        self.category = category;
        self
    }

    /// Validates the request and builds the product.
    pub fn into_product(self) -> Result<Product, validator::ValidationErrors> {
        self.validate()?;
        Ok(Product {
            name: self.name.trim().to_string(),
            price: self.price,
            available: self.available,
            category: self.category,
        })
    }
}
