//! Stack discipline errors.

/// Errors raised when an operation would break the stack invariants.
///
/// Both variants indicate a caller bug: the set of states and the order in
/// which they are pushed and popped are fixed by the owning game logic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum StackError {
    /// A push would exceed the inline capacity above the root activation.
    #[error("activation stack is full (capacity: {capacity})")]
    Overflow {
        /// Number of activations allowed above the root.
        capacity: usize,
    },

    /// A pop would remove the root activation.
    #[error("cannot pop the root activation")]
    Underflow,
}
