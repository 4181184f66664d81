//! Red-black invariant checker.
//!
//! Walks the whole tree and reports the first violation found as
//! `MapError::CorruptStructure`.

use std::cmp::Ordering;

use crate::error::{MapError, Result};

use super::node::Node;
use super::tree::RedBlackTree;
use super::{Color, NodeId};

/// Shape summary of a tree that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    /// Number of nodes reachable from the root
    pub len: usize,

    /// Nodes on the longest root-to-leaf path
    pub height: usize,

    /// Black nodes on every root-to-leaf path
    pub black_height: usize,
}

impl<K: Ord, V> RedBlackTree<K, V> {
    /// Check every red-black property plus BST ordering and parent links
    pub fn validate(&self) -> Result<TreeStats> {
        let root = match self.root {
            None => {
                return Ok(TreeStats {
                    len: 0,
                    height: 0,
                    black_height: 0,
                })
            }
            Some(root) => root,
        };

        let root_node = self.node(root)?;
        if root_node.parent.is_some() {
            return Err(corrupt(format!("root {:?} has a parent", root)));
        }
        if root_node.color != Color::Black {
            return Err(corrupt("root is red".to_string()));
        }

        let mut len = 0;
        let stats = self.check_subtree(root, None, None, &mut len)?;

        if len != self.arena.len() {
            return Err(corrupt(format!(
                "{} nodes reachable but {} allocated",
                len,
                self.arena.len()
            )));
        }

        Ok(TreeStats {
            len,
            height: stats.0,
            black_height: stats.1,
        })
    }

    /// Returns (height, black height) of the subtree at `id`. Every key in it
    /// must be strictly between `lower` and `upper`.
    fn check_subtree(
        &self,
        id: NodeId,
        lower: Option<&K>,
        upper: Option<&K>,
        len: &mut usize,
    ) -> Result<(usize, usize)> {
        let node = self.node(id)?;
        *len += 1;

        if lower.map_or(false, |lo| node.key.cmp(lo) != Ordering::Greater) {
            return Err(corrupt(format!("{:?} is not above its lower bound", id)));
        }
        if upper.map_or(false, |hi| node.key.cmp(hi) != Ordering::Less) {
            return Err(corrupt(format!("{:?} is not below its upper bound", id)));
        }

        let mut heights = [(0, 0); 2];
        for (slot, (child, lo, hi)) in [
            (node.left, lower, Some(&node.key)),
            (node.right, Some(&node.key), upper),
        ]
        .into_iter()
        .enumerate()
        {
            let Some(child) = child else { continue };
            let child_node = self.node(child)?;

            if child_node.parent != Some(id) {
                return Err(corrupt(format!("{:?} does not point back to parent {:?}", child, id)));
            }
            if node.color == Color::Red && child_node.color == Color::Red {
                return Err(corrupt(format!("red node {:?} has red child {:?}", id, child)));
            }

            heights[slot] = self.check_subtree(child, lo, hi, len)?;
        }

        let [(left_height, left_black), (right_height, right_black)] = heights;
        if left_black != right_black {
            return Err(corrupt(format!(
                "black height differs under {:?}: {} left, {} right",
                id, left_black, right_black
            )));
        }

        let own_black = usize::from(node.color == Color::Black);
        Ok((1 + left_height.max(right_height), left_black + own_black))
    }

    fn node(&self, id: NodeId) -> Result<&Node<K, V>> {
        self.arena
            .get(id)
            .ok_or_else(|| corrupt(format!("link to released node {:?}", id)))
    }
}

fn corrupt(message: String) -> MapError {
    MapError::CorruptStructure(message)
}
