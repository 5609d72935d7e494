//! Core types and trait definitions for the certdeck certification store.
//!
//! Platforms, records, the catalog snapshot and its JSON form, query
//! parameters, and the [`store::CertificationStore`] trait. No HTTP or
//! storage code lives here.

pub mod catalog;
pub mod error;
pub mod platform;
pub mod query;
pub mod record;
pub mod store;

pub use error::{Error, Result};
