//! Redblack - an ordered set kept balanced with the red-black rules.
//!
//! # Quick Start
//!
//! ```
//! use redblack::{RedBlackTree, StepStatus, TreeError};
//!
//! let mut tree = RedBlackTree::new();
//! for v in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.add(v).unwrap();
//! }
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3, 4, 5, 7, 8, 9]);
//! assert_eq!(tree.add(5), Err(TreeError::DuplicateKey));
//! assert_eq!(tree.remove(&4), Ok(4));
//! assert_eq!(tree.current_least(), Ok(&1));
//!
//! // stop after the first two elements
//! let mut seen = Vec::new();
//! tree.stepper_break(|v| {
//!     seen.push(*v);
//!     if seen.len() == 2 { StepStatus::Break } else { StepStatus::Continue }
//! }).unwrap();
//! assert_eq!(seen, vec![1, 3]);
//! ```
//!
//! # Comparators
//!
//! A tree is ordered by a `Fn(&T, &T) -> Ordering`, `Ord` by default.
//! Lookups and removals accept a second comparator `Fn(&T, &K) -> Ordering`
//! so an element can be found by a key that is not itself a `T`; see
//! [`compare::by_key`].
//!
//! # Threading
//!
//! The tree does no locking. Share it across threads behind a mutex.

pub mod compare;
pub mod error;
pub mod step;
pub mod tree;

pub use error::TreeError;
pub use step::StepStatus;
pub use tree::{InvariantViolation, Iter, RedBlackTree};
