use std::fmt;

use log::{trace, warn};

use super::{Slot, TableError};
use crate::slot;

/// Multiplier of the polynomial string hash
const HASH_MULTIPLIER: u128 = 31;

/// Open-addressing table with a fixed number of slots.
///
/// Collisions are resolved by linear probing towards lower indices,
/// wrapping from `0` to `capacity - 1`. Insertion and lookup walk the
/// same probe sequence, so a key is always found between its home slot
/// and the first empty slot below it.
#[derive(Debug, Clone)]
pub struct HashTable {
    slots: Vec<Option<Slot>>,
    items: usize,
}

#[derive(Debug)]
pub struct Iter<'a> {
    slots: std::slice::Iter<'a, Option<Slot>>,
}

impl HashTable {
    /// Creates a new, empty `HashTable` with `cap` many slots
    ///
    /// The capacity never changes afterwards.
    pub fn new_with_slots(cap: usize) -> Result<Self, TableError> {
        if cap == 0 {
            return Err(TableError::ZeroCapacity);
        }

        Ok(Self {
            slots: (0..cap).map(|_| None).collect(),
            items: 0,
        })
    }

    /// Returns the number of occupied slots
    pub fn used(&self) -> usize {
        self.items
    }

    /// Shorthand for `self.used() == 0`
    pub fn is_empty(&self) -> bool {
        self.used() == 0
    }

    /// Returns the number of slots, occupied or not
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_full(&self) -> bool {
        self.items == self.capacity()
    }

    pub fn load_factor_f32(&self) -> f32 {
        (self.items as f32) / self.capacity() as f32
    }

    /// Home slot of `key`.
    ///
    /// Horner's rule over the key's chars with multiplier 31, reduced modulo
    /// the capacity after every step. The result equals the unbounded
    /// polynomial modulo the capacity.
    pub fn hash(&self, key: &str) -> usize {
        let m = self.capacity() as u128;
        key.chars()
            .fold(0u128, |p, c| (p * HASH_MULTIPLIER + c as u128) % m) as usize
    }

    /// Stores `key` with the single value `value`.
    ///
    /// # Errors
    ///
    /// - [`TableError::DuplicateKey`] if `key` already owns a slot
    /// - [`TableError::CapacityExhausted`] if every slot is taken
    pub fn insert(&mut self, key: &str, value: &str) -> Result<(), TableError> {
        if self.find(key).is_some() {
            return Err(TableError::DuplicateKey(key.to_owned()));
        }
        self.place(key, value)
    }

    /// Pushes `value` to the end of the list stored under `key`
    pub fn append(&mut self, key: &str, value: &str) -> Result<(), TableError> {
        match self.find(key) {
            Some(i) => {
                self.push_at(i, value);
                Ok(())
            }
            None => Err(TableError::MissingKey(key.to_owned())),
        }
    }

    /// Appends to `key` when present, inserts it otherwise
    pub fn insert_or_append(&mut self, key: &str, value: &str) -> Result<(), TableError> {
        match self.find(key) {
            Some(i) => {
                self.push_at(i, value);
                Ok(())
            }
            None => self.place(key, value),
        }
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.find(key)
            .and_then(|i| self.slots[i].as_ref())
            .map(|s| s.values.as_slice())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    // [adapters]

    /// Iterates occupied slots in slot order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            slots: self.slots.iter(),
        }
    }

    // [private]

    /// Next index of the probe sequence
    fn step(&self, i: usize) -> usize {
        if i == 0 { self.capacity() - 1 } else { i - 1 }
    }

    /// Walks the probe sequence of `key` and returns the slot holding it.
    ///
    /// Stops on the first empty slot, or after coming back to the home slot,
    /// so at most `capacity` slots are visited.
    fn find(&self, key: &str) -> Option<usize> {
        let start = self.hash(key);
        let mut i = start;

        while let Some(slot) = &self.slots[i] {
            if slot.key == key {
                return Some(i);
            }
            trace!(target: "probe", "{key:?} collides with {:?} at {i}", slot.key);
            i = self.step(i);
            if i == start {
                break;
            }
        }

        None
    }

    /// Puts a new key into the first empty slot of its probe sequence.
    /// Callers have already made sure the key is absent.
    fn place(&mut self, key: &str, value: &str) -> Result<(), TableError> {
        if self.is_full() {
            return Err(TableError::CapacityExhausted {
                capacity: self.capacity(),
            });
        }

        let mut i = self.hash(key);
        for _ in 0..self.capacity() {
            if self.slots[i].is_none() {
                trace!(target: "insert", "{key:?} stored at {i}");
                self.slots[i] = Some(slot!(key, value));
                self.items += 1;
                if self.crossed_high_load() {
                    warn!(target: "insert", "table is over 3/4 full ({} slots)", self.capacity());
                }
                return Ok(());
            }
            i = self.step(i);
        }

        // only reachable if `items` went out of sync with the slots
        Err(TableError::CapacityExhausted {
            capacity: self.capacity(),
        })
    }

    /// True right after the insert that pushed the load above 3/4
    fn crossed_high_load(&self) -> bool {
        let limit = self.capacity() * 3;
        self.items * 4 > limit && (self.items - 1) * 4 <= limit
    }

    fn push_at(&mut self, i: usize, value: &str) {
        if let Some(slot) = self.slots[i].as_mut() {
            slot.values.push(value.to_owned());
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a [String]);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots
            .by_ref()
            .flatten()
            .next()
            .map(|s| (s.key.as_str(), s.values.as_slice()))
    }
}

impl<'a> IntoIterator for &'a HashTable {
    type Item = (&'a str, &'a [String]);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for HashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match slot {
                Some(s) => write!(f, "({:?}, {:?})", s.key, s.values)?,
                None => write!(f, "None")?,
            }
        }
        write!(f, "]")
    }
}
