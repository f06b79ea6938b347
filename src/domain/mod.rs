//! Domain model: the product catalog and its entries.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product name must not be empty")]
    EmptyName,
}

/// A single catalog entry. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub url: String,
}

impl Product {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Result<Self, CatalogError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }
        Ok(Self { name, url: url.into() })
    }
}

/// An ordered, read-only collection of products, built once at startup and
/// shared for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from explicit entries, rejecting empty names.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        if products.iter().any(|p| p.name.trim().is_empty()) {
            return Err(CatalogError::EmptyName);
        }
        Ok(Self { products })
    }

    /// The built-in two-entry catalog used when no catalog file is configured.
    pub fn seeded() -> Self {
        Self {
            products: vec![
                Product {
                    name: "Mac Book Pro M4".into(),
                    url: "https://support.apple.com/en-lk/121552".into(),
                },
                Product {
                    name: "Samsung S25 Ultra".into(),
                    url: "https://www.gsmarena.com/samsung_galaxy_s25_ultra-13322.php".into(),
                },
            ],
        }
    }

    /// All products, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Case-insensitive exact-match lookup. Returns the first-inserted match
    /// when names collide; substrings never match.
    pub fn find(&self, name: &str) -> Option<&Product> {
        let needle = name.to_lowercase();
        self.products.iter().find(|p| p.name.to_lowercase() == needle)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
