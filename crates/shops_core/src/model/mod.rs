//! Shop/product domain model.
//!
//! # Invariants
//! - Shops are identified by a unique name and never updated or deleted.
//! - Product entries are append-only; duplicates are allowed.

pub mod shop;
