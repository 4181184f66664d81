//! # AtlasMap
//!
//! Two independent associative containers:
//! - `HashTable`: fixed-capacity open-addressing map with linear probing
//! - `RedBlackTree`: ordered map kept height-balanced by red-black coloring
//!
//! Both are single-threaded and unsynchronized. Callers that share an
//! instance across threads wrap it in their own lock.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────┐      ┌──────────────────────────┐
//! │        HashTable         │      │       RedBlackTree       │
//! │  key % capacity + probe  │      │  BST descent + fix-ups   │
//! └────────────┬─────────────┘      └────────────┬─────────────┘
//!              │                                 │
//!              ▼                                 ▼
//!   ┌─────────────────────┐          ┌─────────────────────────┐
//!   │  Vec<Option<Entry>> │          │  NodeArena (Vec + free) │
//!   │  fixed length       │          │  index-linked nodes     │
//!   └─────────────────────┘          └─────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod hashtable;
pub mod rbtree;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{MapError, Result};
pub use config::{Config, DuplicatePolicy};
pub use hashtable::{HashTable, IntegerKey};
pub use rbtree::{Color, RedBlackTree, TreeStats};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of AtlasMap
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
