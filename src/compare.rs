//! Comparator helpers.
//!
//! A tree orders its elements with a `Fn(&T, &T) -> Ordering`. Lookups and
//! removals may use a different key type through a `Fn(&T, &K) -> Ordering`
//! that compares a stored element (left) against the key (right). Both forms
//! must describe the same total order, otherwise the shape of the tree is
//! unspecified.

use std::cmp::Ordering;

/// The natural order of `T`.
#[inline(always)]
pub fn natural<T: Ord>(left: &T, right: &T) -> Ordering {
    return left.cmp(right);
}

/// Reverse the result of a comparator.
///
/// A tree built with an inverted comparator iterates from greatest to least.
pub fn invert<T, K, F>(compare: F) -> impl Fn(&T, &K) -> Ordering
where
    T: ?Sized,
    K: ?Sized,
    F: Fn(&T, &K) -> Ordering,
{
    return move |left: &T, right: &K| compare(left, right).reverse();
}

/// Compare stored elements against a key by projecting a field out of each element.
///
/// ```
/// use redblack::compare::by_key;
/// use redblack::RedBlackTree;
///
/// struct User { id: u32, name: &'static str }
///
/// let mut users = RedBlackTree::with_comparator(|a: &User, b: &User| a.id.cmp(&b.id));
/// users.add(User { id: 7, name: "ada" }).unwrap();
/// users.add(User { id: 3, name: "grace" }).unwrap();
///
/// let by_id = by_key(|user: &User| &user.id);
/// assert_eq!(users.get_by(&3, &by_id).unwrap().name, "grace");
/// ```
pub fn by_key<T, K, P>(project: P) -> impl Fn(&T, &K) -> Ordering
where
    T: ?Sized,
    K: Ord + ?Sized,
    P: Fn(&T) -> &K,
{
    return move |value: &T, key: &K| project(value).cmp(key);
}
