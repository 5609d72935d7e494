//! In-memory backend for the certdeck certification store.
//!
//! The whole catalog lives behind a single [`tokio::sync::RwLock`]; every
//! mutation completes under one write-lock acquisition, so operations never
//! interleave and a failed call changes nothing.

mod ids;
mod store;

pub use store::MemoryStore;
