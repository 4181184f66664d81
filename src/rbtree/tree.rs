//! RedBlackTree implementation
//!
//! Public operations. Rebalancing lives in `balance.rs`.

use std::cmp::Ordering;

use crate::config::{Config, DuplicatePolicy};
use crate::error::{MapError, Result};

use super::node::{Node, NodeArena};
use super::{Color, Direction, NodeId};

/// Ordered map backed by a red-black tree
#[derive(Debug, Clone)]
pub struct RedBlackTree<K, V> {
    /// Node storage
    pub(crate) arena: NodeArena<K, V>,

    /// The root node, `None` when the tree is empty
    pub(crate) root: Option<NodeId>,

    /// What `insert` does with an existing key
    policy: DuplicatePolicy,

    /// Run `validate` after every mutation
    check_invariants: bool,
}

impl<K: Ord, V> RedBlackTree<K, V> {
    /// Create an empty tree that replaces values on duplicate insert
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Create an empty tree using the tree settings of `config`
    pub fn with_config(config: &Config) -> Self {
        tracing::debug!(
            "Creating red-black tree (duplicates: {:?}, invariant checks: {})",
            config.duplicate_policy,
            config.check_invariants
        );

        Self {
            arena: NodeArena::new(),
            root: None,
            policy: config.duplicate_policy,
            check_invariants: config.check_invariants,
        }
    }

    /// Insert a key-value pair
    ///
    /// An existing key is handled by the duplicate policy: `Replace` swaps the
    /// value in place and returns the old one, `Reject` fails with
    /// `DuplicateKey` and leaves the tree untouched.
    ///
    /// With `check_invariants` on, a `CorruptStructure` error is reported after
    /// the new node has been linked in, so the key is present when it returns.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>> {
        let mut parent = None;
        let mut dir = Direction::Left;
        let mut cur = self.root;

        // Descend to the attachment point
        while let Some(id) = cur {
            let node = &mut self.arena[id];
            match key.cmp(&node.key) {
                Ordering::Less => dir = Direction::Left,
                Ordering::Greater => dir = Direction::Right,
                Ordering::Equal => {
                    return match self.policy {
                        DuplicatePolicy::Replace => {
                            Ok(Some(std::mem::replace(&mut node.value, value)))
                        }
                        DuplicatePolicy::Reject => Err(MapError::DuplicateKey),
                    };
                }
            }
            parent = Some(id);
            cur = node.child(dir);
        }

        // Attach the new red leaf
        let mut node = Node::new(key, value);
        node.parent = parent;
        let id = self.arena.alloc(node);
        match parent {
            None => self.root = Some(id),
            Some(p) => self.arena[p].set_child(dir, Some(id)),
        }

        self.insert_fixup(id)?;
        self.after_mutation()?;

        Ok(None)
    }

    /// Get a copy of the value stored for `key`
    pub fn get(&self, key: &K) -> Result<V>
    where
        V: Clone,
    {
        self.get_ref(key).cloned()
    }

    /// Get a reference to the value stored for `key`
    pub fn get_ref(&self, key: &K) -> Result<&V> {
        self.find_node(key)
            .map(|id| &self.arena[id].value)
            .ok_or(MapError::KeyNotFound)
    }

    /// Get a mutable reference to the value stored for `key`
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V> {
        let id = self.find_node(key).ok_or(MapError::KeyNotFound)?;
        Ok(&mut self.arena[id].value)
    }

    /// Check whether `key` is present
    pub fn contains_key(&self, key: &K) -> bool {
        self.find_node(key).is_some()
    }

    /// Value stored under the smallest key
    pub fn get_min(&self) -> Result<V>
    where
        V: Clone,
    {
        self.edge(Direction::Left)
            .map(|id| self.arena[id].value.clone())
    }

    /// Value stored under the largest key
    pub fn get_max(&self) -> Result<V>
    where
        V: Clone,
    {
        self.edge(Direction::Right)
            .map(|id| self.arena[id].value.clone())
    }

    /// The smallest key
    pub fn min_key(&self) -> Result<K>
    where
        K: Clone,
    {
        self.edge(Direction::Left).map(|id| self.arena[id].key.clone())
    }

    /// The largest key
    pub fn max_key(&self) -> Result<K>
    where
        K: Clone,
    {
        self.edge(Direction::Right)
            .map(|id| self.arena[id].key.clone())
    }

    /// The entry that follows `key` in key order
    ///
    /// `key` must be present. Returns `Ok(None)` when `key` is the maximum.
    pub fn successor(&self, key: &K) -> Result<Option<(K, V)>>
    where
        K: Clone,
        V: Clone,
    {
        let id = self.find_node(key).ok_or(MapError::KeyNotFound)?;
        Ok(self.step(id, Direction::Right).map(|next| self.entry(next)))
    }

    /// The entry that precedes `key` in key order
    ///
    /// `key` must be present. Returns `Ok(None)` when `key` is the minimum.
    pub fn predecessor(&self, key: &K) -> Result<Option<(K, V)>>
    where
        K: Clone,
        V: Clone,
    {
        let id = self.find_node(key).ok_or(MapError::KeyNotFound)?;
        Ok(self.step(id, Direction::Left).map(|prev| self.entry(prev)))
    }

    /// Remove `key`, returning its value
    ///
    /// A `CorruptStructure` error from rebalancing or from the
    /// `check_invariants` pass is reported after the node has been unlinked
    /// and released. The key is gone and its value is dropped.
    pub fn delete(&mut self, key: &K) -> Result<V> {
        let z = self.find_node(key).ok_or(MapError::KeyNotFound)?;

        let (z_left, z_right, z_parent) = {
            let node = &self.arena[z];
            (node.left, node.right, node.parent)
        };

        // `x` takes the structural place of the node that leaves the tree;
        // `x_parent` tracks where it hangs since `x` may be absent.
        let removed_color;
        let x;
        let x_parent;

        match (z_left, z_right) {
            (None, _) => {
                removed_color = self.arena[z].color;
                x = z_right;
                x_parent = z_parent;
                self.transplant(z, z_right);
            }
            (_, None) => {
                removed_color = self.arena[z].color;
                x = z_left;
                x_parent = z_parent;
                self.transplant(z, z_left);
            }
            (Some(left), Some(right)) => {
                // Two children: the in-order successor is spliced into z's
                // position and keeps z's color.
                let y = self
                    .step(z, Direction::Right)
                    .ok_or_else(|| MapError::CorruptStructure("two-child node has no successor".to_string()))?;
                removed_color = self.arena[y].color;
                x = self.arena[y].right;

                if self.arena[y].parent == Some(z) {
                    x_parent = Some(y);
                } else {
                    x_parent = self.arena[y].parent;
                    self.transplant(y, x);
                    self.arena[y].right = Some(right);
                    self.arena[right].parent = Some(y);
                }

                self.transplant(z, Some(y));
                self.arena[y].left = Some(left);
                self.arena[left].parent = Some(y);
                self.arena[y].color = self.arena[z].color;
            }
        }

        let removed = self
            .arena
            .release(z)
            .ok_or_else(|| MapError::CorruptStructure(format!("node {:?} released twice", z)))?;

        if removed_color == Color::Black {
            self.delete_fixup(x, x_parent)?;
        }
        self.after_mutation()?;

        Ok(removed.value)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Check if the tree holds no entries
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        tracing::debug!("Clearing red-black tree ({} entries)", self.len());
        self.root = None;
        self.arena.clear();
    }

    /// Color of the root, `None` when the tree is empty
    pub fn root_color(&self) -> Option<Color> {
        self.root.map(|id| self.arena[id].color)
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();

        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.arena[id];
            stack.extend(node.left.map(|c| (c, depth + 1)));
            stack.extend(node.right.map(|c| (c, depth + 1)));
        }

        height
    }

    /// Number of black nodes on the leftmost root-to-leaf path
    pub fn black_height(&self) -> usize {
        let mut count = 0;
        let mut cur = self.root;
        while let Some(id) = cur {
            if self.arena[id].color == Color::Black {
                count += 1;
            }
            cur = self.arena[id].left;
        }
        count
    }

    /// BST search by key
    pub(crate) fn find_node(&self, key: &K) -> Option<NodeId> {
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = &self.arena[id];
            cur = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    /// Leftmost (`Left`) or rightmost (`Right`) node of the whole tree
    fn edge(&self, dir: Direction) -> Result<NodeId> {
        self.root
            .map(|root| self.extreme(root, dir))
            .ok_or(MapError::EmptyTree)
    }

    fn entry(&self, id: NodeId) -> (K, V)
    where
        K: Clone,
        V: Clone,
    {
        let node = &self.arena[id];
        (node.key.clone(), node.value.clone())
    }

    fn after_mutation(&self) -> Result<()> {
        if self.check_invariants {
            self.validate()?;
        }
        Ok(())
    }
}

impl<K, V> RedBlackTree<K, V> {
    /// Color of a possibly absent node; absent leaves are black
    pub(crate) fn color(&self, id: Option<NodeId>) -> Color {
        id.map_or(Color::Black, |id| self.arena[id].color)
    }

    /// Descend from `from` as far as possible in `dir`
    pub(crate) fn extreme(&self, from: NodeId, dir: Direction) -> NodeId {
        let mut cur = from;
        while let Some(next) = self.arena[cur].child(dir) {
            cur = next;
        }
        cur
    }

    /// In-order neighbour of `id`: successor for `Right`, predecessor for
    /// `Left`. Descends the subtree on that side when there is one, and
    /// otherwise climbs until it arrives from the opposite side.
    pub(crate) fn step(&self, id: NodeId, dir: Direction) -> Option<NodeId> {
        if let Some(child) = self.arena[id].child(dir) {
            return Some(self.extreme(child, dir.opposite()));
        }

        let mut cur = id;
        let mut parent = self.arena[cur].parent;
        while let Some(p) = parent {
            if self.arena[p].child(dir) != Some(cur) {
                break;
            }
            cur = p;
            parent = self.arena[p].parent;
        }
        parent
    }
}

impl<K: Ord, V> Default for RedBlackTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
