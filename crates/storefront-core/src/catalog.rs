//! Product catalog: the fixed set of purchasable product records.
//!
//! The catalog is read-only after construction. By default it is populated
//! from the built-in literal list ([`Catalog::builtin`]); a deployment can
//! point `StoreConfig.catalog_path` at a JSON file instead, in which case a
//! retrieval failure surfaces as [`RetrievalError`] and the session starts
//! with an empty catalog plus a user-visible notice.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RetrievalError, RetrievalResult};

/// Unique product identifier. Identity for cart removal and event routing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed product category set.
///
/// The category menu offers these labels plus the `"All"` sentinel; the
/// filter matches on [`Category::label`], so a selection string outside this
/// set simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Mobile,
    Tablet,
    Notebook,
    Pc,
}

impl Category {
    /// Display label, as shown in the category menu and matched by the filter.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mobile => "Mobile",
            Self::Tablet => "Tablet",
            Self::Notebook => "Notebook",
            Self::Pc => "PC",
        }
    }

    /// All categories in menu order.
    pub fn all() -> [Self; 4] {
        [Self::Mobile, Self::Tablet, Self::Pc, Self::Notebook]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One purchasable product record. Immutable once in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identity; no two catalog products share an id.
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    /// Non-negative unit price. Rounded to 2 decimal places at display time only.
    pub price: f64,
    /// Image URI handed to the external image-loading collaborator.
    /// Broken URIs are a display-level concern and not handled here.
    pub image: String,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: Category,
        price: f64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            category,
            price,
            image: image.into(),
        }
    }
}

/// Read-only product catalog. See the module docs for sourcing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Empty catalog, the degraded mode after a failed retrieval.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a catalog from records, enforcing the catalog invariants:
    /// unique ids and non-negative prices.
    pub fn new(products: Vec<Product>) -> RetrievalResult<Self> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id) {
                return Err(RetrievalError::DuplicateId(product.id));
            }
            if product.price < 0.0 {
                return Err(RetrievalError::NegativePrice {
                    id: product.id,
                    price: product.price,
                });
            }
        }
        Ok(Self { products })
    }

    /// The built-in demo catalog, populated once at startup from a fixed
    /// literal list.
    pub fn builtin() -> Self {
        Self {
            products: vec![
                Product::new(
                    1,
                    "Galaxy S23 Ultra",
                    Category::Mobile,
                    1199.99,
                    "https://images.unsplash.com/photo-1610945415295-d9bbf067e59c",
                ),
                Product::new(
                    2,
                    "Galaxy Tab S9+",
                    Category::Tablet,
                    899.99,
                    "https://images.unsplash.com/photo-1561154464-82e9adf32764",
                ),
                Product::new(
                    3,
                    "Galaxy Book3 Pro",
                    Category::Notebook,
                    1499.99,
                    "https://images.unsplash.com/photo-1496181133206-80ce9b88a853",
                ),
                Product::new(
                    4,
                    "Samsung Desktop PC",
                    Category::Pc,
                    999.99,
                    "https://images.unsplash.com/photo-1593640495253-23196b27a87f",
                ),
            ],
        }
    }

    /// Loads and validates a catalog from a JSON file (an array of products).
    pub fn from_json_file(path: impl AsRef<Path>) -> RetrievalResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::info!(
            target: "storefront::catalog",
            path = %path.display(),
            products = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Parses and validates a catalog from a JSON string.
    pub fn from_json_str(raw: &str) -> RetrievalResult<Self> {
        let products: Vec<Product> = serde_json::from_str(raw)?;
        Self::new(products)
    }

    /// All products in catalog enumeration order.
    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 4);
        // Re-run the constructor validation over the literal list.
        assert!(Catalog::new(catalog.list_all().to_vec()).is_ok());
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let dup = vec![
            Product::new(7, "A", Category::Mobile, 1.0, "img://a"),
            Product::new(7, "B", Category::Tablet, 2.0, "img://b"),
        ];
        match Catalog::new(dup) {
            Err(RetrievalError::DuplicateId(id)) => assert_eq!(id, ProductId(7)),
            other => panic!("expected DuplicateId, got {:?}", other.map(|c| c.len())),
        }
    }

    #[test]
    fn new_rejects_negative_price() {
        let bad = vec![Product::new(1, "A", Category::Pc, -0.01, "img://a")];
        assert!(matches!(
            Catalog::new(bad),
            Err(RetrievalError::NegativePrice { .. })
        ));
    }

    #[test]
    fn from_json_str_round_trips_products() {
        let raw = r#"[
            {"id": 10, "name": "Widget", "category": "mobile", "price": 5.5, "image": "img://w"}
        ]"#;
        let catalog = Catalog::from_json_str(raw).unwrap();
        assert_eq!(catalog.len(), 1);
        let p = catalog.get(ProductId(10)).unwrap();
        assert_eq!(p.name, "Widget");
        assert_eq!(p.category, Category::Mobile);
    }

    #[test]
    fn from_json_str_rejects_garbage() {
        assert!(matches!(
            Catalog::from_json_str("not json"),
            Err(RetrievalError::Malformed(_))
        ));
    }

    #[test]
    fn get_unknown_id_is_none() {
        assert!(Catalog::builtin().get(ProductId(999)).is_none());
    }
}
