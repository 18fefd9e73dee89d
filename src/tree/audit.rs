//! Invariant checker.
//!
//! Walks the whole tree, so it is O(n). Intended for tests, fuzzing, and
//! debugging a comparator that turns out not to be a total order.

use std::cmp::Ordering;
use std::error::Error;
use std::fmt;

use rustc_hash::FxHashSet;

use super::{Color, NodeIdx, RedBlackTree, NONE};

/// The first broken rule found by [`RedBlackTree::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The root is red.
    RedRoot,
    /// A red node has a red child.
    RedRedEdge,
    /// Two paths from the same node to a leaf cross a different number of black nodes.
    BlackHeightMismatch,
    /// An in-order neighbour does not compare strictly greater than its predecessor.
    OrderViolation,
    /// A child's parent link does not point back, or a link leaves the arena.
    BrokenLink,
    /// A node is reachable twice, or the reachable count differs from `len`.
    CountMismatch,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            InvariantViolation::RedRoot => "root is red",
            InvariantViolation::RedRedEdge => "red node has a red child",
            InvariantViolation::BlackHeightMismatch => "black height differs between paths",
            InvariantViolation::OrderViolation => "elements are out of order",
            InvariantViolation::BrokenLink => "parent and child links disagree",
            InvariantViolation::CountMismatch => "reachable nodes do not match the element count",
        };
        return f.write_str(message);
    }
}

impl Error for InvariantViolation {}

impl<T, C> RedBlackTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Check every red-black and ordering invariant.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        if self.is_red(self.root) {
            return Err(InvariantViolation::RedRoot);
        }
        if self.root != NONE {
            if self.root as usize >= self.nodes.len() {
                return Err(InvariantViolation::BrokenLink);
            }
            if self.parent(self.root) != NONE {
                return Err(InvariantViolation::BrokenLink);
            }
        }

        let mut visited = FxHashSet::default();
        self.check_subtree(self.root, &mut visited)?;
        if visited.len() != self.nodes.len() {
            return Err(InvariantViolation::CountMismatch);
        }

        let mut previous: Option<&T> = None;
        for value in self.iter() {
            if let Some(prev) = previous {
                if (self.compare)(prev, value) != Ordering::Less {
                    return Err(InvariantViolation::OrderViolation);
                }
            }
            previous = Some(value);
        }
        return Ok(());
    }

    /// Returns the black height of the subtree, counting the missing leaves.
    fn check_subtree(
        &self,
        idx: NodeIdx,
        visited: &mut FxHashSet<NodeIdx>,
    ) -> Result<usize, InvariantViolation> {
        if idx == NONE {
            return Ok(1);
        }
        if !visited.insert(idx) {
            return Err(InvariantViolation::CountMismatch);
        }

        let node = self.node(idx);
        for child in [node.left, node.right] {
            if child == NONE {
                continue;
            }
            if child as usize >= self.nodes.len() || self.parent(child) != idx {
                return Err(InvariantViolation::BrokenLink);
            }
            if node.color == Color::Red && self.is_red(child) {
                return Err(InvariantViolation::RedRedEdge);
            }
        }

        let left = self.check_subtree(node.left, visited)?;
        let right = self.check_subtree(node.right, visited)?;
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch);
        }
        if node.color == Color::Black {
            return Ok(left + 1);
        }
        return Ok(left);
    }
}
