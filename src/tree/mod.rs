//! Red-black tree stored in a node arena.
//!
//! Structure:
//! - All nodes live in a single `Vec`, links are `u32` indices into it
//! - `NONE` marks a missing child or parent and always reads as black
//! - The arena stays dense: removing a node moves the last node into its slot
//!
//! Operations:
//! - add / remove / get / contains: O(log n), one descent plus a fixup
//! - current_least / current_greatest: O(log n), not cached
//! - clear: drops the arena without walking the tree
//! - iter / stepper*: in-order, ascending under the tree's comparator

use std::cmp::Ordering;
use std::fmt;

use crate::compare::natural;

mod audit;
mod insert;
mod iter;
mod navigate;
mod remove;

pub use audit::InvariantViolation;
pub use iter::Iter;

/// Index into the node arena.
type NodeIdx = u32;
/// Sentinel value for no parent / no child.
const NONE: NodeIdx = u32::MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Color {
    Red,
    Black,
}

/// A single element and its links.
#[derive(Clone, Debug)]
struct Node<T> {
    value: T,
    color: Color,
    left: NodeIdx,
    right: NodeIdx,
    /// Back-reference for upward navigation during fixup. Never owning.
    parent: NodeIdx,
}

/// An ordered set kept balanced with the red-black rules.
///
/// Elements are ordered by an injected comparator `C`. Lookups and removals
/// can also take a comparator from a stored element to some other key type,
/// which lets callers find a record by one of its fields without building a
/// whole record.
///
/// The tree must not be mutated while a traversal is in progress; the borrow
/// checker enforces this for [`iter`](Self::iter) and the steppers.
#[derive(Clone)]
pub struct RedBlackTree<T, C = fn(&T, &T) -> Ordering> {
    /// Node arena. Every slot holds a live element.
    nodes: Vec<Node<T>>,
    /// Root index, or `NONE` when empty.
    root: NodeIdx,
    /// Three-way comparator used for every ordering decision.
    compare: C,
}

impl<T: Ord> RedBlackTree<T> {
    /// Create an empty tree ordered by `T`'s `Ord` implementation.
    pub fn new() -> RedBlackTree<T> {
        return RedBlackTree {
            nodes: Vec::new(),
            root: NONE,
            compare: natural,
        };
    }
}

impl<T: Ord> Default for RedBlackTree<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T, C> RedBlackTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Create an empty tree ordered by `compare`.
    pub fn with_comparator(compare: C) -> RedBlackTree<T, C> {
        return Self::with_capacity_and_comparator(0, compare);
    }

    /// Create an empty tree with room for `capacity` elements before reallocating.
    pub fn with_capacity_and_comparator(capacity: usize, compare: C) -> RedBlackTree<T, C> {
        return RedBlackTree {
            nodes: Vec::with_capacity(capacity),
            root: NONE,
            compare,
        };
    }
}

impl<T, C> RedBlackTree<T, C> {
    /// Number of stored elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        return self.nodes.len();
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        return self.root == NONE;
    }

    /// The comparator the tree is ordered by.
    pub fn comparator(&self) -> &C {
        return &self.compare;
    }

    /// Remove every element.
    ///
    /// The tree structure is not walked; the arena is simply emptied.
    pub fn clear(&mut self) {
        log::debug!("clearing tree of {} elements", self.nodes.len());
        self.nodes.clear();
        self.root = NONE;
    }

    /// Number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        return self.subtree_height(self.root);
    }

    fn subtree_height(&self, idx: NodeIdx) -> usize {
        if idx == NONE {
            return 0;
        }
        let node = self.node(idx);
        let left = self.subtree_height(node.left);
        let right = self.subtree_height(node.right);
        return 1 + left.max(right);
    }

    #[inline(always)]
    fn node(&self, idx: NodeIdx) -> &Node<T> {
        return &self.nodes[idx as usize];
    }

    #[inline(always)]
    fn node_mut(&mut self, idx: NodeIdx) -> &mut Node<T> {
        return &mut self.nodes[idx as usize];
    }

    #[inline(always)]
    fn left(&self, idx: NodeIdx) -> NodeIdx {
        return self.node(idx).left;
    }

    #[inline(always)]
    fn right(&self, idx: NodeIdx) -> NodeIdx {
        return self.node(idx).right;
    }

    #[inline(always)]
    fn parent(&self, idx: NodeIdx) -> NodeIdx {
        return self.node(idx).parent;
    }

    /// Color of a node; a missing node is black.
    #[inline(always)]
    fn color(&self, idx: NodeIdx) -> Color {
        if idx == NONE {
            return Color::Black;
        }
        return self.node(idx).color;
    }

    #[inline(always)]
    fn is_red(&self, idx: NodeIdx) -> bool {
        return self.color(idx) == Color::Red;
    }

    #[inline(always)]
    fn set_color(&mut self, idx: NodeIdx, color: Color) {
        debug_assert!(idx != NONE, "cannot recolor a missing node");
        self.node_mut(idx).color = color;
    }

    /// Point whatever referenced `old` as a child (or the root) at `new` instead.
    fn replace_child(&mut self, parent: NodeIdx, old: NodeIdx, new: NodeIdx) {
        if parent == NONE {
            self.root = new;
        } else if self.left(parent) == old {
            self.node_mut(parent).left = new;
        } else {
            self.node_mut(parent).right = new;
        }
    }

    /// Rotate `idx` down to the left, lifting its right child into its place.
    fn rotate_left(&mut self, idx: NodeIdx) {
        log::trace!("rotate left at {}", idx);
        let pivot = self.right(idx);
        let inner = self.left(pivot);

        self.node_mut(idx).right = inner;
        if inner != NONE {
            self.node_mut(inner).parent = idx;
        }

        let parent = self.parent(idx);
        self.node_mut(pivot).parent = parent;
        self.replace_child(parent, idx, pivot);

        self.node_mut(pivot).left = idx;
        self.node_mut(idx).parent = pivot;
    }

    /// Rotate `idx` down to the right, lifting its left child into its place.
    fn rotate_right(&mut self, idx: NodeIdx) {
        log::trace!("rotate right at {}", idx);
        let pivot = self.left(idx);
        let inner = self.right(pivot);

        self.node_mut(idx).left = inner;
        if inner != NONE {
            self.node_mut(inner).parent = idx;
        }

        let parent = self.parent(idx);
        self.node_mut(pivot).parent = parent;
        self.replace_child(parent, idx, pivot);

        self.node_mut(pivot).right = idx;
        self.node_mut(idx).parent = pivot;
    }
}

impl<T: fmt::Debug, C> fmt::Debug for RedBlackTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_set().entries(self.iter()).finish();
    }
}
