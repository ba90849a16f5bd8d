// ABOUTME: Product value type holding title, price and vendor for one search result.
// ABOUTME: Equality and hashing are case-insensitive over all three fields and agree with each other.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A single product listing. All fields are stored trimmed.
#[derive(Debug, Clone, Default)]
pub struct Product {
    title: String,
    price: String,
    vendor: String,
}

impl Product {
    pub fn new(title: &str, price: &str, vendor: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            price: price.trim().to_string(),
            vendor: vendor.trim().to_string(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.trim().to_string();
    }

    pub fn set_price(&mut self, price: &str) {
        self.price = price.trim().to_string();
    }

    pub fn set_vendor(&mut self, vendor: &str) {
        self.vendor = vendor.trim().to_string();
    }

    fn folded(&self) -> [String; 3] {
        [
            self.title.to_lowercase(),
            self.price.to_lowercase(),
            self.vendor.to_lowercase(),
        ]
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.folded() == other.folded()
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded().hash(state);
    }
}

/// Renders the listing block, including its leading line break.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\n----Product Information----\n Title:  {}\n Price:  {}\nVendor:  {}",
            self.title, self.price, self.vendor
        )
    }
}
