//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes enforce `NewProduct::validate()` before persistence.
//! - The store is append-only: no update or delete paths exist.

pub mod shop_repo;
