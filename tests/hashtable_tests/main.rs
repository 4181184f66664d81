//! HashTable Tests
//!
//! Tests verify:
//! - Basic insert / get / remove / contains
//! - Collision handling by linear probing
//! - Replacement of existing keys
//! - Full-table behavior
//! - Capacity and config handling

#[path = "../common/mod.rs"]
mod common;

use atlasmap::{Config, HashTable, IntegerKey, MapError};

// =============================================================================
// Helper Functions
// =============================================================================

fn table(capacity: usize) -> HashTable<u64, String> {
    common::init_tracing();
    HashTable::new(capacity).unwrap()
}

// =============================================================================
// Construction Tests
// =============================================================================

#[test]
fn test_new_table_is_empty() {
    let table = table(16);
    assert_eq!(table.len(), 0);
    assert_eq!(table.capacity(), 16);
    assert!(table.is_empty());
}

#[test]
fn test_zero_capacity_rejected() {
    let result: Result<HashTable<u64, u64>, _> = HashTable::new(0);
    assert_eq!(result.unwrap_err(), MapError::InvalidCapacity(0));
}

#[test]
fn test_with_config_uses_table_capacity() {
    let config = Config::builder().table_capacity(8).build();
    let table: HashTable<u32, u32> = HashTable::with_config(&config).unwrap();
    assert_eq!(table.capacity(), 8);
}

#[test]
fn test_with_config_rejects_zero_capacity() {
    let config = Config::builder().table_capacity(0).build();
    let result: Result<HashTable<u32, u32>, _> = HashTable::with_config(&config);
    assert!(matches!(result, Err(MapError::Config(_))));
}

// =============================================================================
// Basic Operations Tests
// =============================================================================

#[test]
fn test_insert_and_get() {
    let mut table = table(8);

    assert_eq!(table.insert(3, "three".to_string()), Ok(None));

    assert_eq!(table.get(&3).unwrap(), "three");
    assert!(table.contains(&3));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_get_nonexistent_key() {
    let table = table(8);
    assert_eq!(table.get(&42), Err(MapError::KeyNotFound));
    assert!(!table.contains(&42));
}

#[test]
fn test_insert_replaces_existing_value() {
    let mut table = table(8);

    table.insert(1, "old".to_string()).unwrap();
    let previous = table.insert(1, "new".to_string()).unwrap();

    assert_eq!(previous, Some("old".to_string()));
    assert_eq!(table.get(&1).unwrap(), "new");
    assert_eq!(table.len(), 1);
}

#[test]
fn test_get_mut_updates_value() {
    let mut table = table(8);
    table.insert(2, "a".to_string()).unwrap();

    table.get_mut(&2).unwrap().push('b');

    assert_eq!(table.get(&2).unwrap(), "ab");
    assert_eq!(table.get_mut(&9), Err(MapError::KeyNotFound));
}

#[test]
fn test_remove_returns_value() {
    let mut table = table(8);
    table.insert(4, "four".to_string()).unwrap();

    assert_eq!(table.remove(&4), Ok("four".to_string()));
    assert_eq!(table.get(&4), Err(MapError::KeyNotFound));
    assert!(table.is_empty());
}

#[test]
fn test_remove_nonexistent_key() {
    let mut table = table(8);
    table.insert(1, "one".to_string()).unwrap();

    assert_eq!(table.remove(&2), Err(MapError::KeyNotFound));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_remove_twice() {
    let mut table = table(8);
    table.insert(1, "one".to_string()).unwrap();

    assert!(table.remove(&1).is_ok());
    assert_eq!(table.remove(&1), Err(MapError::KeyNotFound));
}

#[test]
fn test_clear_keeps_capacity() {
    let mut table = table(4);
    table.insert(1, "a".to_string()).unwrap();
    table.insert(2, "b".to_string()).unwrap();

    table.clear();

    assert!(table.is_empty());
    assert_eq!(table.capacity(), 4);
    assert_eq!(table.get(&1), Err(MapError::KeyNotFound));
    table.insert(1, "c".to_string()).unwrap();
    assert_eq!(table.get(&1).unwrap(), "c");
}

// =============================================================================
// Collision Tests
// =============================================================================

#[test]
fn test_colliding_keys_both_retrievable() {
    let mut table = table(4);

    // 1 % 4 == 5 % 4
    table.insert(1, "a".to_string()).unwrap();
    table.insert(5, "b".to_string()).unwrap();

    assert_eq!(table.get(&1).unwrap(), "a");
    assert_eq!(table.get(&5).unwrap(), "b");
}

#[test]
fn test_remove_head_of_collision_chain() {
    let mut table = table(4);
    table.insert(1, "a".to_string()).unwrap();
    table.insert(5, "b".to_string()).unwrap();

    table.remove(&1).unwrap();

    assert_eq!(table.get(&1), Err(MapError::KeyNotFound));
    assert_eq!(table.get(&5).unwrap(), "b");
}

#[test]
fn test_long_chain_survives_middle_removal() {
    let mut table = table(8);
    for k in [0, 8, 16, 24, 32] {
        table.insert(k, k.to_string()).unwrap();
    }

    table.remove(&16).unwrap();

    for k in [0, 8, 24, 32] {
        assert_eq!(table.get(&k).unwrap(), &k.to_string());
    }
    assert!(!table.contains(&16));
}

#[test]
fn test_interleaved_chains() {
    let mut table = table(8);
    // two clusters that run into each other: homes 1 and 2
    for k in [1, 2, 9, 10, 17] {
        table.insert(k, k.to_string()).unwrap();
    }

    table.remove(&1).unwrap();
    table.remove(&10).unwrap();

    for k in [2, 9, 17] {
        assert_eq!(table.get(&k).unwrap(), &k.to_string());
    }
    assert_eq!(table.len(), 3);
}

// =============================================================================
// Capacity Tests
// =============================================================================

#[test]
fn test_n_minus_one_keys_fit() {
    let n = 32;
    let mut table = table(n);
    for k in 0..(n as u64 - 1) {
        table.insert(k * 7, format!("v{}", k)).unwrap();
    }

    for k in 0..(n as u64 - 1) {
        assert_eq!(table.get(&(k * 7)).unwrap(), &format!("v{}", k));
    }
    assert_eq!(table.len(), n - 1);
}

#[test]
fn test_full_table_rejects_new_key() {
    let mut table = table(3);
    for k in 0..3 {
        table.insert(k, "x".to_string()).unwrap();
    }

    assert_eq!(
        table.insert(99, "y".to_string()),
        Err(MapError::TableFull { capacity: 3 })
    );
    assert_eq!(table.len(), 3);
}

#[test]
fn test_full_table_still_replaces_existing_key() {
    let mut table = table(2);
    table.insert(0, "a".to_string()).unwrap();
    table.insert(1, "b".to_string()).unwrap();

    assert_eq!(table.insert(1, "c".to_string()), Ok(Some("b".to_string())));
    assert_eq!(table.get(&1).unwrap(), "c");
}

#[test]
fn test_full_table_lookup_of_absent_key() {
    let mut table = table(2);
    table.insert(0, "a".to_string()).unwrap();
    table.insert(1, "b".to_string()).unwrap();

    assert_eq!(table.get(&7), Err(MapError::KeyNotFound));
    assert_eq!(table.remove(&7), Err(MapError::KeyNotFound));
    assert!(!table.contains(&7));
}

#[test]
fn test_insert_after_remove_on_full_table() {
    let mut table = table(2);
    table.insert(0, "a".to_string()).unwrap();
    table.insert(1, "b".to_string()).unwrap();

    table.remove(&0).unwrap();
    table.insert(4, "c".to_string()).unwrap();

    assert_eq!(table.get(&4).unwrap(), "c");
    assert_eq!(table.get(&1).unwrap(), "b");
}

// =============================================================================
// Key Type Tests
// =============================================================================

#[test]
fn test_signed_keys() {
    common::init_tracing();
    let mut table: HashTable<i32, &str> = HashTable::new(5).unwrap();
    table.insert(-1, "minus one").unwrap();
    table.insert(4, "four").unwrap();

    assert_eq!(table.get(&-1), Ok(&"minus one"));
    assert_eq!(table.get(&4), Ok(&"four"));
}

#[test]
fn test_custom_key_type() {
    #[derive(Debug, PartialEq, Eq)]
    struct UserId(u32);

    impl IntegerKey for UserId {
        fn as_integer(&self) -> u64 {
            u64::from(self.0)
        }
    }

    common::init_tracing();
    let mut table = HashTable::new(4).unwrap();
    table.insert(UserId(2), "alice").unwrap();
    table.insert(UserId(6), "bob").unwrap();

    assert_eq!(table.get(&UserId(6)), Ok(&"bob"));
    assert_eq!(table.remove(&UserId(2)), Ok("alice"));
    assert_eq!(table.get(&UserId(6)), Ok(&"bob"));
}

#[test]
fn test_distinct_keys_may_share_integer() {
    // names keyed by length: equal names agree on the integer, unequal names
    // of the same length collide
    #[derive(Debug, PartialEq, Eq)]
    struct Name(&'static str);

    impl IntegerKey for Name {
        fn as_integer(&self) -> u64 {
            self.0.len() as u64
        }
    }

    common::init_tracing();
    let mut table = HashTable::new(8).unwrap();
    table.insert(Name("ann"), 1).unwrap();
    table.insert(Name("bob"), 2).unwrap();
    table.insert(Name("cy"), 3).unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table.get(&Name("ann")), Ok(&1));
    assert_eq!(table.get(&Name("bob")), Ok(&2));
    assert_eq!(table.get(&Name("eve")), Err(MapError::KeyNotFound));

    assert_eq!(table.insert(Name("bob"), 20), Ok(Some(2)));
    assert_eq!(table.remove(&Name("ann")), Ok(1));
    assert_eq!(table.get(&Name("bob")), Ok(&20));
}
