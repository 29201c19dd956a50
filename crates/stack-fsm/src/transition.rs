//! Transition requests and update outcomes.

/// The request a state returns from [`State::update`](crate::State::update).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition<Id> {
    /// Keep the current activation on top.
    Stay,

    /// Finish the current activation and resume the one beneath it.
    Pop,

    /// Replace the current activation with a new activation of `Id`.
    ///
    /// A `Goto` naming the current state's own id is treated as [`Transition::Stay`].
    Goto(Id),
}

impl<Id> Transition<Id> {
    /// Returns `true` if this is a `Pop` request.
    #[inline]
    pub fn is_pop(&self) -> bool {
        matches!(self, Transition::Pop)
    }

    /// Returns the requested target id, if any.
    #[inline]
    pub fn target(&self) -> Option<&Id> {
        match self {
            Transition::Goto(id) => Some(id),
            Transition::Stay | Transition::Pop => None,
        }
    }
}

/// What one [`StackMachine::update`](crate::StackMachine::update) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step<Id> {
    /// No transition took place.
    Stayed(Id),

    /// The top activation finished and the parent was re-entered.
    Popped { from: Id, to: Id },

    /// The top activation was replaced.
    Switched { from: Id, to: Id },
}

impl<Id: Copy> Step<Id> {
    /// Returns the id that is on top after the step.
    pub fn current(&self) -> Id {
        match *self {
            Step::Stayed(id) => id,
            Step::Popped { to, .. } | Step::Switched { to, .. } => to,
        }
    }

    /// Returns `true` if the top activation changed.
    pub fn is_transition(&self) -> bool {
        !matches!(self, Step::Stayed(_))
    }
}
