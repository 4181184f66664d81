//! HashTable implementation
//!
//! Vec of optional slots, division hashing, linear probing.

use crate::config::Config;
use crate::error::{MapError, Result};

use super::{Entry, IntegerKey, Slot};

/// Outcome of probing for a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    /// The key lives in this slot
    Occupied(usize),

    /// The key is absent; this is the first empty slot on its probe path
    Vacant(usize),

    /// Every slot was visited without finding the key or an empty slot
    Exhausted,
}

/// Fixed-capacity open-addressing hash table
#[derive(Debug, Clone)]
pub struct HashTable<K, V> {
    /// Backing storage; its length is the capacity and never changes
    slots: Vec<Slot<K, V>>,

    /// Number of occupied slots
    len: usize,
}

impl<K: IntegerKey, V> HashTable<K, V> {
    /// Create an empty table with `capacity` slots
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(MapError::InvalidCapacity(capacity));
        }

        tracing::debug!("Creating hash table with {} slots", capacity);

        Ok(Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            len: 0,
        })
    }

    /// Create an empty table sized by `config.table_capacity`
    pub fn with_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Self::new(config.table_capacity)
    }

    /// Insert a key-value pair
    ///
    /// Returns the previous value if the key was already present. Fails with
    /// `TableFull` when the key is new and no slot is empty.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>> {
        let idx = match self.probe(&key) {
            Probe::Occupied(idx) | Probe::Vacant(idx) => idx,
            Probe::Exhausted => {
                tracing::warn!("Hash table full, rejecting insert (capacity {})", self.capacity());
                return Err(MapError::TableFull {
                    capacity: self.capacity(),
                });
            }
        };

        match &mut self.slots[idx] {
            Some(entry) => Ok(Some(std::mem::replace(&mut entry.value, value))),
            slot @ None => {
                *slot = Some(Entry { key, value });
                self.len += 1;
                Ok(None)
            }
        }
    }

    /// Get a reference to the value stored for `key`
    pub fn get(&self, key: &K) -> Result<&V> {
        match self.probe(key) {
            Probe::Occupied(idx) | Probe::Vacant(idx) => self.slots[idx]
                .as_ref()
                .map(|entry| &entry.value)
                .ok_or(MapError::KeyNotFound),
            Probe::Exhausted => Err(MapError::KeyNotFound),
        }
    }

    /// Get a mutable reference to the value stored for `key`
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V> {
        match self.probe(key) {
            Probe::Occupied(idx) | Probe::Vacant(idx) => self.slots[idx]
                .as_mut()
                .map(|entry| &mut entry.value)
                .ok_or(MapError::KeyNotFound),
            Probe::Exhausted => Err(MapError::KeyNotFound),
        }
    }

    /// Check whether `key` is stored in the table
    pub fn contains(&self, key: &K) -> bool {
        matches!(self.probe(key), Probe::Occupied(_))
    }

    /// Remove `key`, returning its value
    pub fn remove(&mut self, key: &K) -> Result<V> {
        let idx = match self.probe(key) {
            Probe::Occupied(idx) | Probe::Vacant(idx) => idx,
            Probe::Exhausted => return Err(MapError::KeyNotFound),
        };
        let entry = self.slots[idx].take().ok_or(MapError::KeyNotFound)?;

        self.len -= 1;
        self.backward_shift(idx);

        Ok(entry.value)
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the table holds no entries
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots, fixed at construction
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Empty every slot. Capacity is unchanged.
    pub fn clear(&mut self) {
        tracing::debug!("Clearing hash table ({} entries)", self.len);
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.len = 0;
    }

    /// Home slot of a key before any probing
    fn home(&self, key: &K) -> usize {
        (key.as_integer() % self.capacity() as u64) as usize
    }

    /// Walk the probe sequence of `key`, visiting at most `capacity` slots
    fn probe(&self, key: &K) -> Probe {
        let capacity = self.capacity();
        let home = self.home(key);

        for step in 0..capacity {
            let idx = (home + step) % capacity;
            match &self.slots[idx] {
                None => return Probe::Vacant(idx),
                Some(entry) if entry.key == *key => return Probe::Occupied(idx),
                Some(_) => {}
            }
        }

        Probe::Exhausted
    }

    /// Close the gap left at `hole` by pulling back later members of the
    /// same cluster whose home slot does not lie between the gap and them.
    fn backward_shift(&mut self, mut hole: usize) {
        let capacity = self.capacity();
        let start = hole;

        for step in 1..capacity {
            let idx = (start + step) % capacity;
            let home = match &self.slots[idx] {
                None => break,
                Some(entry) => self.home(&entry.key),
            };

            // entry at idx stays put if its home is cyclically in (hole, idx]
            let reachable = if hole <= idx {
                hole < home && home <= idx
            } else {
                hole < home || home <= idx
            };

            if !reachable {
                self.slots[hole] = self.slots[idx].take();
                hole = idx;
            }
        }
    }
}
