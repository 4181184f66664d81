//! Configuration for AtlasMap
//!
//! Centralized configuration with sensible defaults.

use crate::error::{MapError, Result};

/// Main configuration shared by both containers
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Hash Table Configuration
    // -------------------------------------------------------------------------
    /// Number of slots in a hash table built from this config.
    /// Fixed for the lifetime of the table.
    pub table_capacity: usize,

    // -------------------------------------------------------------------------
    // Red-Black Tree Configuration
    // -------------------------------------------------------------------------
    /// What the tree does when a key is inserted twice
    pub duplicate_policy: DuplicatePolicy,

    /// Re-validate every red-black invariant after each mutation
    ///
    /// A failed check returns `MapError::CorruptStructure` from `insert` or
    /// `delete`, but the mutation has already been applied by then.
    pub check_invariants: bool,
}

/// Duplicate-key policy for the red-black tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Overwrite the stored value in place and hand back the old one
    #[default]
    Replace,

    /// Leave the tree untouched and fail with `MapError::DuplicateKey`
    Reject,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_capacity: 64,
            duplicate_policy: DuplicatePolicy::Replace,
            check_invariants: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that the config describes containers that can actually be built
    pub fn validate(&self) -> Result<()> {
        if self.table_capacity == 0 {
            return Err(MapError::Config(
                "table_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the number of hash table slots
    pub fn table_capacity(mut self, capacity: usize) -> Self {
        self.config.table_capacity = capacity;
        self
    }

    /// Set the tree's duplicate-key policy
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.config.duplicate_policy = policy;
        self
    }

    /// Enable or disable post-mutation invariant checks
    pub fn check_invariants(mut self, enabled: bool) -> Self {
        self.config.check_invariants = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
