//! Fixed-capacity open-addressing table mapping string keys to ordered
//! lists of string values.

pub mod hashmap;
mod macros;

pub use hashmap::{HashTable, Iter, Slot, TableError};
