//! Rotations and the two fix-up procedures that restore the red-black
//! properties after insert and delete.
//!
//! Both fix-ups are written once against a `Direction` and cover the
//! mirrored cases by flipping it.

use crate::error::{MapError, Result};

use super::tree::RedBlackTree;
use super::{Color, Direction, NodeId};

impl<K, V> RedBlackTree<K, V> {
    /// Rotate `x` down in direction `dir`.
    ///
    /// `Left` lifts x's right child into x's place, `Right` lifts its left
    /// child. Fails if that child is absent.
    pub(crate) fn rotate(&mut self, x: NodeId, dir: Direction) -> Result<()> {
        let y = self.arena[x].child(dir.opposite()).ok_or_else(|| {
            MapError::CorruptStructure(format!("{:?} rotation of {:?} without a child to lift", dir, x))
        })?;

        tracing::trace!("Rotating {:?} {:?} (lifting {:?})", x, dir, y);

        // y's inner subtree moves across to x
        let inner = self.arena[y].child(dir);
        self.arena[x].set_child(dir.opposite(), inner);
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(x);
        }

        // y takes x's place under x's parent
        let parent = self.arena[x].parent;
        self.arena[y].parent = parent;
        self.replace_child(parent, x, Some(y));

        // x hangs under y
        self.arena[y].set_child(dir, Some(x));
        self.arena[x].parent = Some(y);

        Ok(())
    }

    /// Put `v` where `u` hangs. `u`'s own links are left as they were.
    pub(crate) fn transplant(&mut self, u: NodeId, v: Option<NodeId>) {
        let parent = self.arena[u].parent;
        self.replace_child(parent, u, v);
        if let Some(v) = v {
            self.arena[v].parent = parent;
        }
    }

    /// Swap the link that points at `old` under `parent` (or the root link
    /// when `parent` is `None`) for `new`.
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(p) => {
                if self.arena[p].left == Some(old) {
                    self.arena[p].left = new;
                } else {
                    self.arena[p].right = new;
                }
            }
        }
    }

    /// Side of `parent` that `child` hangs on. An absent `child` is matched
    /// against an absent link.
    fn side_of(&self, parent: NodeId, child: Option<NodeId>) -> Direction {
        if self.arena[parent].left == child {
            Direction::Left
        } else {
            Direction::Right
        }
    }

    fn set_color(&mut self, id: Option<NodeId>, color: Color) {
        if let Some(id) = id {
            self.arena[id].color = color;
        }
    }

    /// Restore the properties after `z` was attached as a red leaf
    pub(crate) fn insert_fixup(&mut self, mut z: NodeId) -> Result<()> {
        while let Some(mut p) = self.arena[z].parent {
            if self.arena[p].color == Color::Black {
                break;
            }

            // a red parent is never the root
            let g = self.arena[p].parent.ok_or_else(|| {
                MapError::CorruptStructure(format!("red node {:?} has no parent", p))
            })?;
            let side = self.side_of(g, Some(p));
            let uncle = self.arena[g].child(side.opposite());

            if self.color(uncle) == Color::Red {
                tracing::trace!("Insert fix-up at {:?}: red uncle, recoloring", z);
                self.set_color(Some(p), Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(Some(g), Color::Red);
                z = g;
                continue;
            }

            if self.arena[p].child(side.opposite()) == Some(z) {
                tracing::trace!("Insert fix-up at {:?}: inner child, rotating parent", z);
                z = p;
                self.rotate(z, side)?;
                p = self.arena[z].parent.ok_or_else(|| {
                    MapError::CorruptStructure(format!("rotated node {:?} lost its parent", z))
                })?;
            }

            tracing::trace!("Insert fix-up at {:?}: outer child, rotating grandparent", z);
            self.set_color(Some(p), Color::Black);
            self.set_color(Some(g), Color::Red);
            self.rotate(g, side.opposite())?;
        }

        self.set_color(self.root, Color::Black);
        Ok(())
    }

    /// Restore the properties after a black node was unlinked.
    ///
    /// `x` is the node that took its place (possibly absent) and `parent` is
    /// where `x` hangs.
    pub(crate) fn delete_fixup(&mut self, mut x: Option<NodeId>, mut parent: Option<NodeId>) -> Result<()> {
        while x != self.root && self.color(x) == Color::Black {
            let p = parent.ok_or_else(|| {
                MapError::CorruptStructure("non-root node without a parent".to_string())
            })?;
            let side = self.side_of(p, x);
            let far = side.opposite();

            let mut w = self.sibling(p, side)?;

            if self.arena[w].color == Color::Red {
                tracing::trace!("Delete fix-up under {:?}: red sibling", p);
                self.set_color(Some(w), Color::Black);
                self.set_color(Some(p), Color::Red);
                self.rotate(p, side)?;
                w = self.sibling(p, side)?;
            }

            let near_child = self.arena[w].child(side);
            let far_child = self.arena[w].child(far);

            if self.color(near_child) == Color::Black && self.color(far_child) == Color::Black {
                tracing::trace!("Delete fix-up under {:?}: black nephews, moving up", p);
                self.set_color(Some(w), Color::Red);
                x = Some(p);
                parent = self.arena[p].parent;
                continue;
            }

            if self.color(far_child) == Color::Black {
                tracing::trace!("Delete fix-up under {:?}: red near nephew, rotating sibling", p);
                self.set_color(near_child, Color::Black);
                self.set_color(Some(w), Color::Red);
                self.rotate(w, far)?;
                w = self.sibling(p, side)?;
            }

            tracing::trace!("Delete fix-up under {:?}: red far nephew, rotating parent", p);
            let parent_color = self.arena[p].color;
            self.set_color(Some(w), parent_color);
            self.set_color(Some(p), Color::Black);
            let far_child = self.arena[w].child(far);
            self.set_color(far_child, Color::Black);
            self.rotate(p, side)?;
            x = self.root;
            parent = None;
        }

        self.set_color(x, Color::Black);
        Ok(())
    }

    /// The child of `p` opposite `side`. A black-height deficit on `side`
    /// guarantees it exists.
    fn sibling(&self, p: NodeId, side: Direction) -> Result<NodeId> {
        self.arena[p].child(side.opposite()).ok_or_else(|| {
            MapError::CorruptStructure(format!("node {:?} has no sibling for its {:?} child", p, side))
        })
    }
}
