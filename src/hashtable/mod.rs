//! HashTable Module
//!
//! Fixed-capacity associative array using open addressing.
//!
//! ## Responsibilities
//! - Map integer-convertible keys to values
//! - Resolve collisions by linear probing
//! - Never resize: capacity is set once at construction
//! - Surface a full table as an error instead of probing forever
//!
//! ## Slot Layout
//! ```text
//! capacity = 4, keys 1 and 5 (both hash to slot 1)
//!
//!   slot:   0        1         2         3
//!         ┌──────┬─────────┬─────────┬──────┐
//!         │ None │ (1,"a") │ (5,"b") │ None │
//!         └──────┴─────────┴─────────┴──────┘
//!                  home(5) ──► probe +1
//! ```
//!
//! Removal shifts later cluster members back into the freed slot, so a
//! slot is always either empty or occupied and no tombstones are kept.

mod table;

pub use table::HashTable;

/// Keys that can be converted to an integer for slot selection.
///
/// The table's home slot for a key is `as_integer() % capacity`.
pub trait IntegerKey: Eq {
    /// Integer used to pick the home slot
    ///
    /// Equal keys must return the same value. Distinct keys may collide.
    fn as_integer(&self) -> u64;
}

macro_rules! impl_integer_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntegerKey for $t {
                #[inline]
                fn as_integer(&self) -> u64 {
                    *self as u64
                }
            }
        )*
    };
}

// Signed values wrap through their two's-complement bit pattern; 128-bit
// values keep their low 64 bits.
impl_integer_key!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl IntegerKey for char {
    #[inline]
    fn as_integer(&self) -> u64 {
        u64::from(*self)
    }
}

impl IntegerKey for bool {
    #[inline]
    fn as_integer(&self) -> u64 {
        u64::from(*self)
    }
}

/// A key-value pair stored in an occupied slot
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

/// One cell of the backing array
pub(crate) type Slot<K, V> = Option<Entry<K, V>>;
