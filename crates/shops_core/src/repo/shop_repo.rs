//! Shop/product repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Resolve-or-create shops by name and append product entries.
//! - Run the report join (`products` -> `shops`) with and without a shop filter.
//!
//! # Invariants
//! - Write paths call `NewProduct::validate()` before SQL mutations.
//! - Shop creation uses `ON CONFLICT(name) DO NOTHING`; an existing name is
//!   reused, never duplicated.
//! - Each `add_product` call inserts exactly one `products` row.
//! - Shop name filters are exact and case-sensitive.

use crate::db::DbError;
use crate::model::shop::{NewProduct, ProductEntry, ProductValidationError, ReportRow, Shop};
use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};

const REPORT_SELECT_SQL: &str = "SELECT
    s.name AS shop_name,
    p.product AS product,
    p.price AS price
FROM shops AS s
JOIN products AS p ON s.id = p.shop_id";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for shop/product persistence and queries.
#[derive(Debug)]
pub enum RepoError {
    Validation(ProductValidationError),
    Db(DbError),
    /// Connection is missing a table the repository needs.
    MissingRequiredTable(&'static str),
    /// Table exists but lacks a column the repository needs.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "store is missing required table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "store table `{table}` is missing column `{column}`")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted shop data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::MissingRequiredTable(_)
            | Self::MissingRequiredColumn { .. }
            | Self::InvalidData(_) => None,
        }
    }
}

impl From<ProductValidationError> for RepoError {
    fn from(value: ProductValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for shop/product operations.
pub trait ShopRepository {
    /// Creates the shop if needed and appends one product entry to it.
    fn add_product(&self, request: &NewProduct) -> RepoResult<ProductEntry>;
    /// Looks up a shop by exact name.
    fn find_shop(&self, name: &str) -> RepoResult<Option<Shop>>;
    /// Returns every product entry joined to its shop, ordered by shop name.
    fn list_report(&self) -> RepoResult<Vec<ReportRow>>;
    /// Returns the product entries of the shop named exactly `name`.
    fn select_report(&self, name: &str) -> RepoResult<Vec<ReportRow>>;
}

/// SQLite-backed shop repository.
pub struct SqliteShopRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteShopRepository<'conn> {
    /// Constructs a repository from an initialized connection.
    ///
    /// # Errors
    /// - Returns `MissingRequiredTable`/`MissingRequiredColumn` when the
    ///   schema initializer has not run on `conn`.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_shop_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ShopRepository for SqliteShopRepository<'_> {
    fn add_product(&self, request: &NewProduct) -> RepoResult<ProductEntry> {
        request.validate()?;

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        tx.execute(
            "INSERT INTO shops (name) VALUES (?1)
             ON CONFLICT(name) DO NOTHING;",
            [request.shop_name.as_str()],
        )?;

        let shop_id: i64 = tx.query_row(
            "SELECT id FROM shops WHERE name = ?1;",
            [request.shop_name.as_str()],
            |row| row.get(0),
        )?;

        tx.execute(
            "INSERT INTO products (shop_id, product, price) VALUES (?1, ?2, ?3);",
            params![shop_id, request.product.as_deref(), request.price],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        Ok(ProductEntry {
            id,
            shop_id,
            product: request.product.clone(),
            price: request.price,
        })
    }

    fn find_shop(&self, name: &str) -> RepoResult<Option<Shop>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM shops WHERE name = ?1;")?;
        let mut rows = stmt.query([name])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(Shop {
                id: row.get("id")?,
                name: row.get("name")?,
            }));
        }

        Ok(None)
    }

    fn list_report(&self) -> RepoResult<Vec<ReportRow>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{REPORT_SELECT_SQL} ORDER BY s.name ASC, p.id ASC;"))?;
        let mut rows = stmt.query([])?;
        collect_report_rows(&mut rows)
    }

    fn select_report(&self, name: &str) -> RepoResult<Vec<ReportRow>> {
        let mut stmt = self.conn.prepare(&format!(
            "{REPORT_SELECT_SQL}
             WHERE s.name = ?1
             ORDER BY p.id ASC;"
        ))?;
        let mut rows = stmt.query([name])?;
        collect_report_rows(&mut rows)
    }
}

fn collect_report_rows(rows: &mut rusqlite::Rows<'_>) -> RepoResult<Vec<ReportRow>> {
    let mut report = Vec::new();
    while let Some(row) = rows.next()? {
        report.push(parse_report_row(row)?);
    }
    Ok(report)
}

fn parse_report_row(row: &Row<'_>) -> RepoResult<ReportRow> {
    let shop_name: Option<String> = row.get("shop_name")?;
    let shop_name = shop_name
        .ok_or_else(|| RepoError::InvalidData("NULL value in shops.name".to_string()))?;
    let price: Option<i64> = row.get("price")?;
    let price =
        price.ok_or_else(|| RepoError::InvalidData("NULL value in products.price".to_string()))?;

    Ok(ReportRow {
        shop_name,
        product: row.get("product")?,
        price,
    })
}

fn ensure_shop_connection_ready(conn: &Connection) -> RepoResult<()> {
    for table in ["shops", "products"] {
        if !table_exists(conn, table)? {
            return Err(RepoError::MissingRequiredTable(table));
        }
    }

    for column in ["id", "name"] {
        if !table_has_column(conn, "shops", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "shops",
                column,
            });
        }
    }

    for column in ["id", "shop_id", "product", "price"] {
        if !table_has_column(conn, "products", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "products",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
