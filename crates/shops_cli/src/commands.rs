//! Command dispatch.
//!
//! # Responsibility
//! - Open the store, run one use-case, write its report to the caller.
//!
//! # Invariants
//! - The connection lives only for one command and is dropped on every
//!   return path, errors included.
//! - Nothing is written for `add`.

use crate::args::Commands;
use log::info;
use shops_core::db::{open_db, DbError};
use shops_core::{LoggingError, RepoError, ShopService, SqliteShopRepository};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Write;
use std::path::Path;

/// Failure of one CLI invocation after argument parsing.
#[derive(Debug)]
pub enum CliError {
    Logging(LoggingError),
    Db(DbError),
    Repo(RepoError),
    Output(std::io::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Logging(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Output(err) => write!(f, "failed to write report: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Logging(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::Output(err) => Some(err),
        }
    }
}

impl From<LoggingError> for CliError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

impl From<DbError> for CliError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<RepoError> for CliError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Output(value)
    }
}

/// Runs one parsed command against its store, writing report text to `out`.
pub fn run(command: &Commands, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        Commands::Add {
            store,
            name,
            product,
            price,
        } => with_service(&store.filename, |service| {
            service.add_product(name, product.as_deref(), *price)?;
            Ok(())
        }),
        Commands::Display { store } => with_service(&store.filename, |service| {
            let report = service.display()?;
            write!(out, "{report}")?;
            Ok(())
        }),
        Commands::Select {
            store,
            selected_shop,
        } => with_service(&store.filename, |service| {
            let report = service.select(selected_shop)?;
            write!(out, "{report}")?;
            Ok(())
        }),
    }
}

fn with_service<T>(
    path: &Path,
    action: impl FnOnce(&ShopService<SqliteShopRepository<'_>>) -> Result<T, CliError>,
) -> Result<T, CliError> {
    info!(
        "event=store_session module=cli status=start path={}",
        path.display()
    );
    let conn = open_db(path)?;
    let service = ShopService::new(SqliteShopRepository::try_new(&conn)?);
    let result = action(&service);
    info!(
        "event=store_session module=cli status={}",
        if result.is_ok() { "ok" } else { "error" }
    );
    result
}
