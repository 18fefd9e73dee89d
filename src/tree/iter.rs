//! In-order traversal.
//!
//! Both the lazy [`Iter`] and the callback steppers walk the tree with an
//! explicit stack of node indices rather than recursion, so a traversal can
//! be suspended between elements (or restarted) without holding a call stack.

use std::iter::FusedIterator;

use smallvec::SmallVec;

use super::{Node, NodeIdx, RedBlackTree, NONE};
use crate::error::TreeError;
use crate::step::StepStatus;

/// Red-black height is at most `2 * log2(n + 1)`, which for `u32` indices
/// never exceeds 64.
type Stack = SmallVec<[NodeIdx; 64]>;

/// Position of an in-order walk: the chain of ancestors still to be visited.
struct Cursor {
    stack: Stack,
}

impl Cursor {
    fn new<T>(nodes: &[Node<T>], root: NodeIdx) -> Cursor {
        let mut cursor = Cursor { stack: Stack::new() };
        cursor.descend_left(nodes, root);
        return cursor;
    }

    fn descend_left<T>(&mut self, nodes: &[Node<T>], mut idx: NodeIdx) {
        while idx != NONE {
            self.stack.push(idx);
            idx = nodes[idx as usize].left;
        }
    }

    /// Index of the next element in ascending order.
    fn next<T>(&mut self, nodes: &[Node<T>]) -> Option<NodeIdx> {
        let idx = self.stack.pop()?;
        self.descend_left(nodes, nodes[idx as usize].right);
        return Some(idx);
    }
}

/// Lazy ascending iterator over a tree's elements.
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    cursor: Cursor,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let idx = self.cursor.next(self.nodes)?;
        self.remaining -= 1;
        return Some(&self.nodes[idx as usize].value);
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return (self.remaining, Some(self.remaining));
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T, C> IntoIterator for &'a RedBlackTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        return self.iter();
    }
}

impl<T, C> RedBlackTree<T, C> {
    /// Iterate over the elements from least to greatest.
    pub fn iter(&self) -> Iter<'_, T> {
        return Iter {
            nodes: &self.nodes,
            cursor: Cursor::new(&self.nodes, self.root),
            remaining: self.nodes.len(),
        };
    }

    /// Call `step` on every element from least to greatest.
    pub fn stepper<F>(&self, mut step: F)
    where
        F: FnMut(&T),
    {
        for value in self.iter() {
            step(value);
        }
    }

    /// Call `step` with a mutable reference to every element from least to greatest.
    ///
    /// `step` must not change anything the comparator looks at.
    pub fn stepper_mut<F>(&mut self, mut step: F)
    where
        F: FnMut(&mut T),
    {
        let mut cursor = Cursor::new(&self.nodes, self.root);
        while let Some(idx) = cursor.next(&self.nodes) {
            step(&mut self.node_mut(idx).value);
        }
    }

    /// Call `step` on each element from least to greatest until it asks to stop.
    ///
    /// Returns `Ok(StepStatus::Break)` if `step` broke out early and
    /// `Ok(StepStatus::Continue)` if every element was visited.
    /// `StepStatus::Restart` begins again from the least element;
    /// `StepStatus::Previous` is not supported and ends the traversal with
    /// [`TreeError::Unsupported`].
    pub fn stepper_break<F>(&self, mut step: F) -> Result<StepStatus, TreeError>
    where
        F: FnMut(&T) -> StepStatus,
    {
        let mut cursor = Cursor::new(&self.nodes, self.root);
        while let Some(idx) = cursor.next(&self.nodes) {
            match step(&self.node(idx).value) {
                StepStatus::Continue => {}
                StepStatus::Break => return Ok(StepStatus::Break),
                StepStatus::Restart => {
                    log::debug!("stepper restarted after element at {}", idx);
                    cursor = Cursor::new(&self.nodes, self.root);
                }
                status @ StepStatus::Previous => return Err(TreeError::Unsupported(status)),
            }
        }
        return Ok(StepStatus::Continue);
    }

    /// Mutable counterpart of [`stepper_break`](Self::stepper_break).
    pub fn stepper_break_mut<F>(&mut self, mut step: F) -> Result<StepStatus, TreeError>
    where
        F: FnMut(&mut T) -> StepStatus,
    {
        let mut cursor = Cursor::new(&self.nodes, self.root);
        while let Some(idx) = cursor.next(&self.nodes) {
            match step(&mut self.node_mut(idx).value) {
                StepStatus::Continue => {}
                StepStatus::Break => return Ok(StepStatus::Break),
                StepStatus::Restart => {
                    log::debug!("stepper restarted after element at {}", idx);
                    cursor = Cursor::new(&self.nodes, self.root);
                }
                status @ StepStatus::Previous => return Err(TreeError::Unsupported(status)),
            }
        }
        return Ok(StepStatus::Continue);
    }
}
