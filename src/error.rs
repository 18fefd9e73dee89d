//! Errors returned by tree operations.

use std::error::Error;
use std::fmt;

use crate::step::StepStatus;

/// Error returned when a tree operation cannot be carried out.
///
/// Every failing operation is detected before the tree is mutated, so the
/// tree is unchanged after any `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// An element comparing equal to the added value is already stored.
    DuplicateKey,
    /// No stored element compares equal to the requested key.
    KeyNotFound,
    /// The tree has no elements.
    EmptyCollection,
    /// A traversal callback returned a control signal the tree does not implement.
    Unsupported(StepStatus),
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::DuplicateKey => write!(f, "an element with the same key already exists"),
            TreeError::KeyNotFound => write!(f, "no element matches the given key"),
            TreeError::EmptyCollection => write!(f, "the tree is empty"),
            TreeError::Unsupported(status) => {
                write!(f, "traversal signal {:?} is not supported", status)
            }
        }
    }
}

impl Error for TreeError {}
