//! RedBlackTree Module
//!
//! Ordered associative container with guaranteed O(log n) height.
//!
//! ## Responsibilities
//! - Ordered insert / lookup / delete by key
//! - Min / max and successor / predecessor queries
//! - Rebalancing by rotation and recoloring after every mutation
//! - Self-check of the red-black invariants
//!
//! ## Storage
//! Nodes live in an index-addressed arena. A parent owns its children
//! through `Option<NodeId>` links; the parent link is a plain index and
//! owns nothing.
//!
//! ```text
//!              ┌──────────┐
//!   root ────► │ 20 black │
//!              └──┬────┬──┘
//!          left   │    │   right
//!        ┌────────▼┐  ┌▼────────┐
//!        │ 10 black│  │ 30 black│
//!        └────────┬┘  └┬────────┘
//!                 │    │
//!           ┌─────▼┐  ┌▼─────┐
//!           │15 red│  │25 red│
//!           └──────┘  └──────┘
//! ```

mod balance;
mod node;
mod tree;
mod validate;

pub use tree::RedBlackTree;
pub use validate::TreeStats;

/// Node color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// Handle to a node slot in the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

/// Which child link of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Left,
    Right,
}

impl Direction {
    pub(crate) fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
