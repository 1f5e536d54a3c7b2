//! Diagnosis ledger: the append-only, newest-first record sequence and
//! its persistence.
//!
//! Storage is a single JSON document named after the `plant-md-diagnoses`
//! storage key. The store is an injected capability so the engine can be
//! tested against an in-memory fake.

pub mod ledger;
pub mod store;

pub use ledger::{append, seed_ledger, Ledger};
pub use store::{DiagnosisStore, FileStore, MemoryStore, STORAGE_KEY};

#[cfg(test)]
mod ledger_test;
#[cfg(test)]
mod store_test;
