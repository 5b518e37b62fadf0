//! Fixed-width bordered table output.
//!
//! # Invariants
//! - Columns are 30/20/8 characters wide with one space of padding per side.
//! - Headers are centered; shop and product cells are left-aligned; prices
//!   are right-aligned.
//! - Cells wider than their column are printed in full, never truncated.
//! - A NULL product renders as a blank cell.

use crate::model::shop::ReportRow;
use std::fmt::{Display, Formatter};

pub const SHOP_COLUMN_WIDTH: usize = 30;
pub const PRODUCT_COLUMN_WIDTH: usize = 20;
pub const PRICE_COLUMN_WIDTH: usize = 8;

pub const SHOP_HEADER: &str = "Name";
pub const PRODUCT_HEADER: &str = "Product";
pub const PRICE_HEADER: &str = "Price";

/// Message printed by `select` when the shop has no rows.
pub const SHOP_NOT_FOUND_MESSAGE: &str = "No such shop";

/// Outcome of a report use-case, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// At least one row; rendered as a table.
    Rows(Vec<ReportRow>),
    /// Unfiltered report over a store with no product rows; renders nothing.
    Empty,
    /// Filtered report matched no rows.
    ShopNotFound,
}

impl Report {
    /// Builds the unfiltered report: silent when there are no rows.
    pub fn listing(rows: Vec<ReportRow>) -> Self {
        if rows.is_empty() {
            Self::Empty
        } else {
            Self::Rows(rows)
        }
    }

    /// Builds the single-shop report: explicit not-found when there are no rows.
    pub fn selection(rows: Vec<ReportRow>) -> Self {
        if rows.is_empty() {
            Self::ShopNotFound
        } else {
            Self::Rows(rows)
        }
    }

    pub fn rows(&self) -> &[ReportRow] {
        match self {
            Self::Rows(rows) => rows,
            Self::Empty | Self::ShopNotFound => &[],
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rows(rows) => Table(rows).fmt(f),
            Self::Empty => Ok(()),
            Self::ShopNotFound => writeln!(f, "{SHOP_NOT_FOUND_MESSAGE}"),
        }
    }
}

/// Renders `rows` as a bordered table, one `\n`-terminated line per row.
///
/// Returns an empty string for an empty slice.
pub fn render_table(rows: &[ReportRow]) -> String {
    Table(rows).to_string()
}

struct Table<'a>(&'a [ReportRow]);

impl Display for Table<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }

        let border = border_line();
        writeln!(f, "{border}")?;
        writeln!(
            f,
            "| {SHOP_HEADER:^shop$} | {PRODUCT_HEADER:^product$} | {PRICE_HEADER:^price$} |",
            shop = SHOP_COLUMN_WIDTH,
            product = PRODUCT_COLUMN_WIDTH,
            price = PRICE_COLUMN_WIDTH,
        )?;
        writeln!(f, "{border}")?;
        for row in self.0 {
            writeln!(
                f,
                "| {:<shop$} | {:<product$} | {:>price$} |",
                row.shop_name,
                row.product.as_deref().unwrap_or(""),
                row.price,
                shop = SHOP_COLUMN_WIDTH,
                product = PRODUCT_COLUMN_WIDTH,
                price = PRICE_COLUMN_WIDTH,
            )?;
        }
        writeln!(f, "{border}")
    }
}

fn border_line() -> String {
    format!(
        "+-{}-+-{}-+-{}-+",
        "-".repeat(SHOP_COLUMN_WIDTH),
        "-".repeat(PRODUCT_COLUMN_WIDTH),
        "-".repeat(PRICE_COLUMN_WIDTH)
    )
}
