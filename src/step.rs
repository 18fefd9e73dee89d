//! Control signals for breakable traversals.

/// Returned by a breakable stepper callback after each element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepStatus {
    /// Proceed to the next element.
    Continue,
    /// Stop the traversal; no further callbacks are made.
    Break,
    /// Abandon the current position and start again from the least element.
    Restart,
    /// Step backwards. Not implemented: a traversal that receives it fails
    /// with [`TreeError::Unsupported`](crate::TreeError::Unsupported).
    Previous,
}
