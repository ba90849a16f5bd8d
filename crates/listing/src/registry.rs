// ABOUTME: ProductRegistry, the value-deduplicating collection of extracted products.
// ABOUTME: Rejects records missing a title or price and keeps first-seen order.

use std::fmt;

use crate::product::Product;

/// A collection of unique products under case-insensitive equality.
///
/// Membership is checked with a linear scan using `Product`'s equality, so
/// insertion and lookup always agree.
#[derive(Debug, Clone, Default)]
pub struct ProductRegistry {
    products: Vec<Product>,
}

impl ProductRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product built from the given fields.
    ///
    /// Returns `false` when the record is discarded: an empty title or price
    /// after trimming, or a value-equal member already present.
    pub fn add(&mut self, title: &str, price: &str, vendor: &str) -> bool {
        if title.trim().is_empty() || price.trim().is_empty() {
            return false;
        }
        let product = Product::new(title, price, vendor);
        if self.contains(&product) {
            return false;
        }
        self.products.push(product);
        true
    }

    pub fn contains(&self, product: &Product) -> bool {
        self.products.iter().any(|p| p == product)
    }

    /// Read-only view of the members.
    pub fn members(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn clear(&mut self) {
        self.products.clear();
    }
}

/// Set equality: same members regardless of insertion order.
impl PartialEq for ProductRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|p| other.contains(p))
    }
}

impl Eq for ProductRegistry {}

/// One listing block per product, each followed by a line break.
impl fmt::Display for ProductRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for product in &self.products {
            writeln!(f, "{}", product)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ProductRegistry {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
