//! Shop and product entry records.
//!
//! # Responsibility
//! - Define the persisted shapes of `shops` and `products` rows.
//! - Define the write request for the add use-case and its validation.
//! - Define the (shop, product, price) triple returned by report queries.
//!
//! # Invariants
//! - `Shop::name` is unique across the store.
//! - Every `ProductEntry::shop_id` references an existing shop.
//! - `product` is nullable; a missing product name is stored as NULL.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Surrogate key of a `shops` row.
pub type ShopId = i64;

/// Surrogate key of a `products` row.
pub type ProductEntryId = i64;

/// A named entity under which products are grouped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    pub id: ShopId,
    pub name: String,
}

/// One recorded (shop, product, price) fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub id: ProductEntryId,
    pub shop_id: ShopId,
    pub product: Option<String>,
    pub price: i64,
}

/// Input for the add use-case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    /// Shop to attach the product to; created on first reference.
    pub shop_name: String,
    pub product: Option<String>,
    pub price: i64,
}

impl NewProduct {
    pub fn new(shop_name: impl Into<String>, product: Option<String>, price: i64) -> Self {
        Self {
            shop_name: shop_name.into(),
            product,
            price,
        }
    }

    /// Validates the request before it reaches the store.
    ///
    /// # Errors
    /// - [`ProductValidationError::EmptyShopName`] when the shop name is
    ///   empty. Whitespace-only names are ordinary shop names.
    pub fn validate(&self) -> Result<(), ProductValidationError> {
        if self.shop_name.is_empty() {
            return Err(ProductValidationError::EmptyShopName);
        }
        Ok(())
    }
}

/// Rejected add request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductValidationError {
    EmptyShopName,
}

impl Display for ProductValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyShopName => write!(f, "shop name must not be empty"),
        }
    }
}

impl Error for ProductValidationError {}

/// Read model produced by joining `products` to `shops`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub shop_name: String,
    pub product: Option<String>,
    pub price: i64,
}

impl ReportRow {
    pub fn new(shop_name: impl Into<String>, product: Option<&str>, price: i64) -> Self {
        Self {
            shop_name: shop_name.into(),
            product: product.map(str::to_string),
            price,
        }
    }
}
