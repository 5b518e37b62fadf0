//! The shop store: one SQLite file holding `shops` and `products`.
//!
//! Every connection handed out by [`open_db`] has passed
//! [`schema::initialize_schema`]; repositories rely on that.

mod error;
mod open;
pub mod schema;

pub use error::{DbError, DbResult};
pub use open::{open_db, open_db_in_memory};
