use std::cmp::Ordering;

use super::{NodeIdx, RedBlackTree, NONE};
use crate::error::TreeError;

impl<T, C> RedBlackTree<T, C> {
    /// Descend from the root towards `key`.
    ///
    /// `compare` receives the stored element on the left and the key on the
    /// right. `Greater` means the element sorts after the key, so the search
    /// continues left; `Less` continues right. Returns `NONE` if nothing
    /// compares `Equal`.
    pub(super) fn find<K, F>(&self, key: &K, compare: F) -> NodeIdx
    where
        K: ?Sized,
        F: Fn(&T, &K) -> Ordering,
    {
        let mut current = self.root;
        while current != NONE {
            let node = self.node(current);
            current = match compare(&node.value, key) {
                Ordering::Equal => return current,
                Ordering::Greater => node.left,
                Ordering::Less => node.right,
            };
        }
        return NONE;
    }

    /// Leftmost node of the subtree rooted at `idx`.
    pub(super) fn leftmost(&self, mut idx: NodeIdx) -> NodeIdx {
        while idx != NONE && self.left(idx) != NONE {
            idx = self.left(idx);
        }
        return idx;
    }

    /// Rightmost node of the subtree rooted at `idx`.
    pub(super) fn rightmost(&self, mut idx: NodeIdx) -> NodeIdx {
        while idx != NONE && self.right(idx) != NONE {
            idx = self.right(idx);
        }
        return idx;
    }

    /// The least element.
    pub fn current_least(&self) -> Result<&T, TreeError> {
        let idx = self.leftmost(self.root);
        if idx == NONE {
            return Err(TreeError::EmptyCollection);
        }
        return Ok(&self.node(idx).value);
    }

    /// The greatest element.
    pub fn current_greatest(&self) -> Result<&T, TreeError> {
        let idx = self.rightmost(self.root);
        if idx == NONE {
            return Err(TreeError::EmptyCollection);
        }
        return Ok(&self.node(idx).value);
    }

    /// Whether an element compares equal to `key`.
    ///
    /// `compare` must order elements the same way the tree's own comparator does.
    pub fn contains_by<K, F>(&self, key: &K, compare: F) -> bool
    where
        K: ?Sized,
        F: Fn(&T, &K) -> Ordering,
    {
        return self.find(key, compare) != NONE;
    }

    /// The element comparing equal to `key`.
    pub fn get_by<K, F>(&self, key: &K, compare: F) -> Result<&T, TreeError>
    where
        K: ?Sized,
        F: Fn(&T, &K) -> Ordering,
    {
        return self.try_get_by(key, compare).ok_or(TreeError::KeyNotFound);
    }

    /// Like [`get_by`](Self::get_by), but `None` when missing.
    pub fn try_get_by<K, F>(&self, key: &K, compare: F) -> Option<&T>
    where
        K: ?Sized,
        F: Fn(&T, &K) -> Ordering,
    {
        let idx = self.find(key, compare);
        if idx == NONE {
            return None;
        }
        return Some(&self.node(idx).value);
    }
}

impl<T, C> RedBlackTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Whether an element equal to `value` is stored.
    pub fn contains(&self, value: &T) -> bool {
        return self.contains_by(value, &self.compare);
    }

    /// The stored element equal to `value`.
    pub fn get(&self, value: &T) -> Result<&T, TreeError> {
        return self.get_by(value, &self.compare);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::by_key;

    #[derive(Debug, Clone, PartialEq)]
    struct Record {
        id: u32,
        label: &'static str,
    }

    fn records() -> RedBlackTree<Record, impl Fn(&Record, &Record) -> Ordering> {
        let mut tree = RedBlackTree::with_comparator(|a: &Record, b: &Record| a.id.cmp(&b.id));
        tree.add(Record { id: 20, label: "twenty" }).unwrap();
        tree.add(Record { id: 5, label: "five" }).unwrap();
        tree.add(Record { id: 12, label: "twelve" }).unwrap();
        tree.add(Record { id: 31, label: "thirty-one" }).unwrap();
        return tree;
    }

    #[test]
    fn least_and_greatest() {
        let tree = records();
        assert_eq!(tree.current_least().unwrap().id, 5);
        assert_eq!(tree.current_greatest().unwrap().id, 31);
    }

    #[test]
    fn least_of_empty_tree_fails() {
        let tree: RedBlackTree<u8> = RedBlackTree::new();
        assert_eq!(tree.current_least(), Err(TreeError::EmptyCollection));
        assert_eq!(tree.current_greatest(), Err(TreeError::EmptyCollection));
    }

    #[test]
    fn lookup_by_projected_key() {
        let tree = records();
        let by_id = by_key(|r: &Record| &r.id);

        assert!(tree.contains_by(&12, &by_id));
        assert!(!tree.contains_by(&13, &by_id));
        assert_eq!(tree.get_by(&31, &by_id).unwrap().label, "thirty-one");
        assert_eq!(tree.get_by(&7, &by_id), Err(TreeError::KeyNotFound));
        assert_eq!(tree.try_get_by(&5, &by_id).map(|r| r.label), Some("five"));
        assert_eq!(tree.try_get_by(&6, &by_id), None);
    }

    #[test]
    fn lookup_by_value_uses_own_comparator() {
        let tree = records();
        let probe = Record { id: 20, label: "ignored" };
        assert!(tree.contains(&probe));
        assert_eq!(tree.get(&probe).unwrap().label, "twenty");
    }

    #[test]
    fn find_on_empty_tree_is_none() {
        let tree: RedBlackTree<i32> = RedBlackTree::new();
        assert_eq!(tree.find(&3, |a: &i32, b: &i32| a.cmp(b)), NONE);
        assert!(!tree.contains(&3));
    }
}
