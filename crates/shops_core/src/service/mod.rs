//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the add/display/select use-cases.
//! - Keep the command-line layer decoupled from storage details.

pub mod shop_service;
