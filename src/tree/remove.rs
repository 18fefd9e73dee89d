use std::cmp::Ordering;

use super::{Color, NodeIdx, RedBlackTree, NONE};
use crate::error::TreeError;

impl<T, C> RedBlackTree<T, C> {
    /// Remove the element comparing equal to `key` and return it.
    ///
    /// `compare` receives the stored element on the left and `key` on the
    /// right, and must agree with the tree's own ordering. Fails with
    /// [`TreeError::KeyNotFound`] before touching the tree if nothing matches.
    pub fn remove_by<K, F>(&mut self, key: &K, compare: F) -> Result<T, TreeError>
    where
        K: ?Sized,
        F: Fn(&T, &K) -> Ordering,
    {
        let idx = self.find(key, compare);
        if idx == NONE {
            return Err(TreeError::KeyNotFound);
        }
        return Ok(self.remove_node(idx));
    }

    /// Like [`remove_by`](Self::remove_by), but `None` when missing.
    pub fn try_remove_by<K, F>(&mut self, key: &K, compare: F) -> Option<T>
    where
        K: ?Sized,
        F: Fn(&T, &K) -> Ordering,
    {
        return self.remove_by(key, compare).ok();
    }

    /// Detach `target` from the tree, rebalance, and free its arena slot.
    ///
    /// A node with two children is not detached itself: its in-order
    /// successor is, and the two swap values first. The value returned is
    /// always the one that was stored at `target`.
    fn remove_node(&mut self, target: NodeIdx) -> T {
        let spliced = if self.left(target) == NONE || self.right(target) == NONE {
            target
        } else {
            self.leftmost(self.right(target))
        };

        let child = if self.left(spliced) != NONE {
            self.left(spliced)
        } else {
            self.right(spliced)
        };
        let parent = self.parent(spliced);

        if child != NONE {
            self.node_mut(child).parent = parent;
        }
        self.replace_child(parent, spliced, child);

        if spliced != target {
            self.swap_values(target, spliced);
        }

        // removing a black node shortens every path through `child` by one
        if self.color(spliced) == Color::Black {
            self.balance_removal(child, parent);
        }

        return self.release(spliced);
    }

    /// Restore the red-black rules after a black node was removed above `node`.
    ///
    /// `node` may be `NONE`, so its parent is tracked separately. The loop
    /// carries an extra black upward until it lands on a red node (which
    /// absorbs it) or the root.
    fn balance_removal(&mut self, mut node: NodeIdx, mut parent: NodeIdx) {
        while node != self.root && !self.is_red(node) {
            if node == self.left(parent) {
                // the removed black node guarantees a real sibling
                let mut sibling = self.right(parent);
                if self.is_red(sibling) {
                    log::trace!("remove fixup under {}: red sibling", parent);
                    self.set_color(sibling, Color::Black);
                    self.set_color(parent, Color::Red);
                    self.rotate_left(parent);
                    sibling = self.right(parent);
                }

                if !self.is_red(self.left(sibling)) && !self.is_red(self.right(sibling)) {
                    log::trace!("remove fixup under {}: black nephews", parent);
                    self.set_color(sibling, Color::Red);
                    node = parent;
                    parent = self.parent(node);
                } else {
                    if !self.is_red(self.right(sibling)) {
                        log::trace!("remove fixup under {}: red near nephew", parent);
                        let near = self.left(sibling);
                        self.set_color(near, Color::Black);
                        self.set_color(sibling, Color::Red);
                        self.rotate_right(sibling);
                        sibling = self.right(parent);
                    }

                    log::trace!("remove fixup under {}: red far nephew", parent);
                    let far = self.right(sibling);
                    self.set_color(sibling, self.color(parent));
                    self.set_color(parent, Color::Black);
                    self.set_color(far, Color::Black);
                    self.rotate_left(parent);
                    node = self.root;
                    parent = NONE;
                }
            } else {
                let mut sibling = self.left(parent);
                if self.is_red(sibling) {
                    log::trace!("remove fixup under {}: red sibling", parent);
                    self.set_color(sibling, Color::Black);
                    self.set_color(parent, Color::Red);
                    self.rotate_right(parent);
                    sibling = self.left(parent);
                }

                if !self.is_red(self.right(sibling)) && !self.is_red(self.left(sibling)) {
                    log::trace!("remove fixup under {}: black nephews", parent);
                    self.set_color(sibling, Color::Red);
                    node = parent;
                    parent = self.parent(node);
                } else {
                    if !self.is_red(self.left(sibling)) {
                        log::trace!("remove fixup under {}: red near nephew", parent);
                        let near = self.right(sibling);
                        self.set_color(near, Color::Black);
                        self.set_color(sibling, Color::Red);
                        self.rotate_left(sibling);
                        sibling = self.left(parent);
                    }

                    log::trace!("remove fixup under {}: red far nephew", parent);
                    let far = self.left(sibling);
                    self.set_color(sibling, self.color(parent));
                    self.set_color(parent, Color::Black);
                    self.set_color(far, Color::Black);
                    self.rotate_right(parent);
                    node = self.root;
                    parent = NONE;
                }
            }
        }

        if node != NONE {
            self.set_color(node, Color::Black);
        }
    }

    fn swap_values(&mut self, a: NodeIdx, b: NodeIdx) {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.nodes.split_at_mut(hi as usize);
        std::mem::swap(&mut head[lo as usize].value, &mut tail[0].value);
    }

    /// Free the slot of a detached node and return its value.
    ///
    /// The last node in the arena moves into the freed slot, so its parent
    /// and children are re-pointed at the new index first.
    fn release(&mut self, idx: NodeIdx) -> T {
        let last = (self.nodes.len() - 1) as NodeIdx;
        if idx != last {
            let moved = self.node(last);
            let (parent, left, right) = (moved.parent, moved.left, moved.right);

            self.replace_child(parent, last, idx);
            if left != NONE {
                self.node_mut(left).parent = idx;
            }
            if right != NONE {
                self.node_mut(right).parent = idx;
            }
        }
        return self.nodes.swap_remove(idx as usize).value;
    }
}

impl<T, C> RedBlackTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Remove the element equal to `value` and return the stored copy.
    pub fn remove(&mut self, value: &T) -> Result<T, TreeError> {
        let idx = self.find(value, &self.compare);
        if idx == NONE {
            return Err(TreeError::KeyNotFound);
        }
        return Ok(self.remove_node(idx));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(values: impl IntoIterator<Item = i32>) -> RedBlackTree<i32> {
        let mut tree = RedBlackTree::new();
        for v in values {
            tree.add(v).unwrap();
        }
        return tree;
    }

    fn contents(tree: &RedBlackTree<i32>) -> Vec<i32> {
        return tree.iter().copied().collect();
    }

    #[test]
    fn remove_only_element() {
        let mut tree = tree_of([1]);
        assert_eq!(tree.remove(&1), Ok(1));
        assert!(tree.is_empty());
        assert_eq!(tree.root, NONE);
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn remove_red_leaf() {
        let mut tree = tree_of([2, 1, 3]);
        assert_eq!(tree.remove(&3), Ok(3));
        assert_eq!(contents(&tree), vec![1, 2]);
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn remove_node_with_two_children_moves_successor_value() {
        let mut tree = tree_of(1..=7);
        let four = tree.find(&4, |a: &i32, b: &i32| a.cmp(b));
        assert_ne!(four, NONE);

        assert_eq!(tree.remove(&4), Ok(4));
        assert_eq!(contents(&tree), vec![1, 2, 3, 5, 6, 7]);
        assert!(!tree.contains(&4));
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn remove_missing_leaves_tree_unchanged() {
        let mut tree = tree_of([5, 3, 8]);
        assert_eq!(tree.remove(&4), Err(TreeError::KeyNotFound));
        assert_eq!(contents(&tree), vec![3, 5, 8]);
        assert_eq!(tree.len(), 3);

        let mut empty: RedBlackTree<i32> = RedBlackTree::new();
        assert_eq!(empty.remove(&4), Err(TreeError::KeyNotFound));
    }

    #[test]
    fn remove_by_key_returns_record() {
        let mut tree = RedBlackTree::with_comparator(|a: &(u32, &str), b: &(u32, &str)| a.0.cmp(&b.0));
        tree.add((1, "one")).unwrap();
        tree.add((2, "two")).unwrap();

        let by_id = |value: &(u32, &str), key: &u32| value.0.cmp(key);
        assert_eq!(tree.remove_by(&2, by_id), Ok((2, "two")));
        assert_eq!(tree.try_remove_by(&2, by_id), None);
        assert_eq!(tree.try_remove_by(&1, by_id), Some((1, "one")));
        assert!(tree.is_empty());
    }

    #[test]
    fn release_repoints_moved_node() {
        // removing the first-allocated node moves the last one into slot 0
        let mut tree = tree_of(0..16);
        assert_eq!(tree.remove(&0), Ok(0));
        assert_eq!(tree.validate(), Ok(()));
        assert_eq!(contents(&tree), (1..16).collect::<Vec<_>>());
    }

    #[test]
    fn remove_every_element_in_various_orders() {
        let n = 200;
        let orders: Vec<Vec<i32>> = vec![
            (0..n).collect(),
            (0..n).rev().collect(),
            (0..n).map(|i| (i * 37) % n).collect(),
        ];
        for order in orders {
            let mut tree = tree_of(0..n);
            for (removed, v) in order.iter().enumerate() {
                assert_eq!(tree.remove(v), Ok(*v));
                assert_eq!(tree.len(), (n as usize) - removed - 1);
                assert_eq!(tree.validate(), Ok(()), "after removing {}", v);
            }
            assert!(tree.is_empty());
        }
    }

    #[test]
    fn interleaved_adds_and_removes() {
        let mut tree = RedBlackTree::new();
        for i in 0..500i32 {
            tree.add((i * 7919) % 1009).unwrap();
            if i % 3 == 0 {
                let least = *tree.current_least().unwrap();
                tree.remove(&least).unwrap();
            }
            assert_eq!(tree.validate(), Ok(()));
        }
    }
}
