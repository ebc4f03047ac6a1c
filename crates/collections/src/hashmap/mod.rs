use thiserror::Error;

mod hash_table;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TableError {
    #[error("Table capacity must be at least one slot")]
    ZeroCapacity,

    /// Every slot is occupied, there is nowhere to probe to
    #[error("No empty slot left for a new key, capacity: {capacity}")]
    CapacityExhausted { capacity: usize },

    /// Insert was asked to store a key that already owns a slot
    #[error("Key already present: {0:?}")]
    DuplicateKey(String),

    /// Append was asked to extend a key that owns no slot
    #[error("Key not present: {0:?}")]
    MissingKey(String),
}

/// One occupied cell of a [`HashTable`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub key: String,
    pub values: Vec<String>,
}

pub use hash_table::{HashTable, Iter};
