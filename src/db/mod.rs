//! Storage layer: one JSON document slot on disk, whole-aggregate reads
//! and writes.

pub mod migrate;
pub mod seed;
pub mod store;

pub use store::DataStore;
