use serde::{Deserialize, Serialize};

/// A concession-stand product. Prices are integer cents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price_cents: u32,
    pub category: ProductCategory,
    pub description: String,
    pub stock: u32,
    pub promotion_price_cents: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductCategory {
    Combos,
    Drinks,
    Snacks,
    Sauces,
    Candy,
    IceCream,
    Promotions,
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductCategory::Combos => write!(f, "Combos"),
            ProductCategory::Drinks => write!(f, "Drinks"),
            ProductCategory::Snacks => write!(f, "Snacks"),
            ProductCategory::Sauces => write!(f, "Sauces"),
            ProductCategory::Candy => write!(f, "Candy"),
            ProductCategory::IceCream => write!(f, "Ice Cream"),
            ProductCategory::Promotions => write!(f, "Promotions"),
        }
    }
}

impl Product {
    /// Price the register should charge right now.
    pub fn effective_price_cents(&self) -> u32 {
        self.promotion_price_cents.unwrap_or(self.price_cents)
    }
}
