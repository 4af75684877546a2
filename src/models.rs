//! Frontend Models
//!
//! Catalog records, cart entries and the static page content types.

/// E-book offered in the storefront (static, read-only)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Price in grosze (1/100 PLN)
    pub price_cents: u32,
    pub image: &'static str,
}

/// Cart line. Title and price are copied at add-time so the drawer renders
/// independently of the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: u32,
    pub title: String,
    pub price_cents: u32,
    /// Always >= 1; an entry reaching 0 is removed
    pub qty: u32,
}

impl CartItem {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.to_string(),
            price_cents: product.price_cents,
            qty: 1,
        }
    }

    pub fn line_total(&self) -> u64 {
        u64::from(self.price_cents) * u64::from(self.qty)
    }
}

/// Coaching package card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Package {
    pub title: &'static str,
    pub features: &'static [&'static str],
}

/// Row of the package comparison table, one value per package
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonRow {
    pub feature: &'static str,
    pub values: [&'static str; 3],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Review {
    pub author: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Step of the cooperation timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub title: &'static str,
    pub detail: &'static str,
}

/// Headline number animated with a count-up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub end: u32,
    pub suffix: &'static str,
    pub label: &'static str,
    pub detail: &'static str,
}

/// Before/after photo pair for the comparison slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metamorphosis {
    pub before: &'static str,
    pub after: &'static str,
    pub caption: &'static str,
}
