//! Shop use-case service.
//!
//! # Responsibility
//! - Provide the add/display/select entry points for callers.
//! - Shape repository rows into printable [`Report`] values.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - `display` over an empty store is silent; `select` of an unknown shop
//!   yields [`Report::ShopNotFound`].

use crate::model::shop::{NewProduct, ProductEntry};
use crate::report::table::Report;
use crate::repo::shop_repo::{RepoResult, ShopRepository};
use log::{debug, info};

/// Use-case service wrapper for shop operations.
pub struct ShopService<R: ShopRepository> {
    repo: R,
}

impl<R: ShopRepository> ShopService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Records one product entry for `shop_name`, creating the shop on first use.
    pub fn add_product(
        &self,
        shop_name: &str,
        product: Option<&str>,
        price: i64,
    ) -> RepoResult<ProductEntry> {
        let request = NewProduct::new(shop_name, product.map(str::to_string), price);
        let entry = self.repo.add_product(&request)?;
        info!(
            "event=product_add module=service status=ok shop_id={} entry_id={}",
            entry.shop_id, entry.id
        );
        Ok(entry)
    }

    /// Builds the report over every shop.
    pub fn display(&self) -> RepoResult<Report> {
        let rows = self.repo.list_report()?;
        debug!(
            "event=report_display module=service status=ok rows={}",
            rows.len()
        );
        Ok(Report::listing(rows))
    }

    /// Builds the report for the shop named exactly `shop_name`.
    pub fn select(&self, shop_name: &str) -> RepoResult<Report> {
        let rows = self.repo.select_report(shop_name)?;
        debug!(
            "event=report_select module=service status=ok rows={}",
            rows.len()
        );
        Ok(Report::selection(rows))
    }
}
