//! In-process document store.

mod store;

pub use store::MemoryStore;
