//! Console report rendering.
//!
//! # Responsibility
//! - Turn report rows into the bordered fixed-width text table.
//! - Distinguish an empty store from an unknown shop.

pub mod table;
