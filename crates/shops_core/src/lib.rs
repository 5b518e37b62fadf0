//! Core logic for the shops tool: store schema, shop/product persistence and
//! report rendering. This crate is the single source of truth for invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod report;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::shop::{
    NewProduct, ProductEntry, ProductEntryId, ProductValidationError, ReportRow, Shop, ShopId,
};
pub use report::table::{render_table, Report, SHOP_NOT_FOUND_MESSAGE};
pub use repo::shop_repo::{RepoError, RepoResult, ShopRepository, SqliteShopRepository};
pub use service::shop_service::ShopService;
