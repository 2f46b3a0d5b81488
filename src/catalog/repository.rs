use std::path::Path;
use std::sync::RwLock;

use indexmap::IndexMap;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::product::{Product, ProductCategory, StoreProductRequest};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Product not found: {name}")]
    NotFound { name: String },
    #[error("Product already exists: {name}")]
    DuplicateProduct { name: String },
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Catalog lock poisoned")]
    LockPoisoned,
}

/// Product catalog the cart service looks products up in.
pub trait CatalogRepository: Send + Sync {
    fn store(&self, request: StoreProductRequest) -> Result<Product, CatalogError>;
    fn find_by_name(&self, name: &str) -> Result<Option<Product>, CatalogError>;
    fn list(&self) -> Result<Vec<Product>, CatalogError>;
    fn count(&self) -> Result<usize, CatalogError>;
}

/// In-memory catalog, listed in the order products were stored.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: RwLock<IndexMap<String, Product>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two products the demo scenario sells.
    pub fn with_demo_products() -> Result<Self, CatalogError> {
        let catalog = Self::new();
        catalog.store(
            StoreProductRequest::new("Laptop", 1000.0, true)
                .with_category(ProductCategory::Electronic),
        )?;
        catalog.store(
            StoreProductRequest::new("Headphones", 50.0, true)
                .with_category(ProductCategory::Electronic),
        )?;
        Ok(catalog)
    }

    /// Builds a catalog from a JSON array of product entries.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let requests: Vec<StoreProductRequest> = serde_json::from_str(json)?;
        let catalog = Self::new();
        for request in requests {
            catalog.store(request)?;
        }
        Ok(catalog)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        info!("Loading catalog from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        info!("Loaded {} products from {}", catalog.count()?, path.display());
        Ok(catalog)
    }
}

impl CatalogRepository for InMemoryCatalog {
    fn store(&self, request: StoreProductRequest) -> Result<Product, CatalogError> {
        let product = request.into_product()?;

        let mut products = self.products.write().map_err(|_| CatalogError::LockPoisoned)?;
        if products.contains_key(product.name()) {
            return Err(CatalogError::DuplicateProduct {
                name: product.name().to_string(),
            });
        }

        debug!("Catalog: stored {} at {:.2}", product.name(), product.price());
        products.insert(product.name().to_string(), product.clone());
        Ok(product)
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Product>, CatalogError> {
        let products = self.products.read().map_err(|_| CatalogError::LockPoisoned)?;
        Ok(products.get(name).cloned())
    }

    fn list(&self) -> Result<Vec<Product>, CatalogError> {
        let products = self.products.read().map_err(|_| CatalogError::LockPoisoned)?;
        Ok(products.values().cloned().collect())
    }

    fn count(&self) -> Result<usize, CatalogError> {
        let products = self.products.read().map_err(|_| CatalogError::LockPoisoned)?;
        Ok(products.len())
    }
}
