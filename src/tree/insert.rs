use std::cmp::Ordering;

use super::{Color, Node, NodeIdx, RedBlackTree, NONE};
use crate::error::TreeError;

impl<T, C> RedBlackTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Insert `value`.
    ///
    /// Fails with [`TreeError::DuplicateKey`] if an equal element is already
    /// stored, in which case the tree is unchanged and `value` is dropped.
    pub fn add(&mut self, value: T) -> Result<(), TreeError> {
        let mut parent = NONE;
        let mut ordering = Ordering::Equal;
        let mut current = self.root;

        while current != NONE {
            parent = current;
            ordering = (self.compare)(&value, &self.node(current).value);
            current = match ordering {
                Ordering::Equal => return Err(TreeError::DuplicateKey),
                Ordering::Less => self.left(current),
                Ordering::Greater => self.right(current),
            };
        }

        let idx = self.alloc(value, parent);
        if parent == NONE {
            self.root = idx;
        } else if ordering == Ordering::Less {
            self.node_mut(parent).left = idx;
        } else {
            self.node_mut(parent).right = idx;
        }

        self.balance_addition(idx);
        return Ok(());
    }

    /// Push a new red leaf onto the arena.
    fn alloc(&mut self, value: T, parent: NodeIdx) -> NodeIdx {
        assert!(self.nodes.len() < NONE as usize, "red-black tree is full");
        let idx = self.nodes.len() as NodeIdx;
        self.nodes.push(Node {
            value,
            color: Color::Red,
            left: NONE,
            right: NONE,
            parent,
        });
        return idx;
    }

    /// Restore the red-black rules after attaching the red leaf `node`.
    ///
    /// Only "no red node has a red child" can be broken. A red uncle pushes
    /// the violation two levels up; a black uncle is fixed with at most two
    /// rotations, after which the loop ends.
    fn balance_addition(&mut self, mut node: NodeIdx) {
        while self.is_red(self.parent(node)) {
            // a red parent is never the root, so the grandparent exists
            let parent = self.parent(node);
            let grandparent = self.parent(parent);

            if parent == self.left(grandparent) {
                let uncle = self.right(grandparent);
                if self.is_red(uncle) {
                    log::trace!("insert fixup at {}: red uncle", node);
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    node = grandparent;
                } else {
                    if node == self.right(parent) {
                        log::trace!("insert fixup at {}: inner child", node);
                        node = parent;
                        self.rotate_left(node);
                    }
                    let parent = self.parent(node);
                    let grandparent = self.parent(parent);
                    self.set_color(parent, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    self.rotate_right(grandparent);
                }
            } else {
                let uncle = self.left(grandparent);
                if self.is_red(uncle) {
                    log::trace!("insert fixup at {}: red uncle", node);
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    node = grandparent;
                } else {
                    if node == self.left(parent) {
                        log::trace!("insert fixup at {}: inner child", node);
                        node = parent;
                        self.rotate_right(node);
                    }
                    let parent = self.parent(node);
                    let grandparent = self.parent(parent);
                    self.set_color(parent, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    self.rotate_left(grandparent);
                }
            }
        }

        let root = self.root;
        self.set_color(root, Color::Black);
    }
}
