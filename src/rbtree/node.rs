//! Tree nodes and the arena that stores them.
//!
//! The arena is a single Vec of optional nodes addressed by position, with a
//! freelist of vacated positions that get reused on the next allocation.

use std::ops::{Index, IndexMut};

use super::{Color, Direction, NodeId};

/// A node in the red-black tree
#[derive(Debug, Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) color: Color,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,

    /// Back-link to the parent. `None` only for the root.
    pub(crate) parent: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    /// A fresh unlinked red node
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            color: Color::Red,
            left: None,
            right: None,
            parent: None,
        }
    }

    pub(crate) fn child(&self, dir: Direction) -> Option<NodeId> {
        match dir {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, dir: Direction, child: Option<NodeId>) {
        match dir {
            Direction::Left => self.left = child,
            Direction::Right => self.right = child,
        }
    }
}

/// Index-addressed node storage
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<K, V> {
    /// Node slots; `None` marks a vacated slot.
    slots: Vec<Option<Node<K, V>>>,

    /// Vacated slots, reused before the Vec grows.
    free: Vec<NodeId>,
}

impl<K, V> NodeArena<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Number of live nodes
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Store a node and return its handle
    pub(crate) fn alloc(&mut self, node: Node<K, V>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Take a node out of the arena, vacating its slot
    pub(crate) fn release(&mut self, id: NodeId) -> Option<Node<K, V>> {
        let node = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id);
        Some(node)
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<K, V>> {
        self.slots.get(id.0)?.as_ref()
    }

    /// Drop every node and reset the freelist
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

impl<K, V> Index<NodeId> for NodeArena<K, V> {
    type Output = Node<K, V>;

    fn index(&self, id: NodeId) -> &Self::Output {
        match self.slots.get(id.0) {
            Some(Some(node)) => node,
            _ => panic!("stale node handle {:?}", id),
        }
    }
}

impl<K, V> IndexMut<NodeId> for NodeArena<K, V> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        match self.slots.get_mut(id.0) {
            Some(Some(node)) => node,
            _ => panic!("stale node handle {:?}", id),
        }
    }
}
