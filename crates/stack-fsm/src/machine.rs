//! The activation stack.
//!
//! [`StackMachine`] keeps a root activation plus a bounded stack of
//! activations suspended above it. Only the top activation is updated. The
//! root can be swapped with [`StackMachine::replace`] but never popped, so the
//! machine always has an active state.

use arrayvec::ArrayVec;

use crate::{Activation, StackError, State, Step, Transition};

/// Default number of activations that may sit above the root.
pub const DEFAULT_CAPACITY: usize = 8;

/// Hierarchical state machine over a stack of activations.
///
/// # Semantics
///
/// Every [`push`](Self::push) is paired with exactly one `enter` call and
/// every [`pop`](Self::pop) with exactly one `exit` call on the affected
/// activation. [`update`](Self::update) runs the top activation and applies
/// the transition it requests:
///
/// - `Stay`, or `Goto` of the current id: nothing else happens
/// - `Pop`: the top exits and is removed, then the new top is entered again
/// - `Goto(id)`: the top exits and is replaced by a fresh activation of `id`
#[derive(Debug)]
pub struct StackMachine<S, const N: usize = DEFAULT_CAPACITY> {
    root: S,
    above: ArrayVec<S, N>,
}

impl<S: Activation, const N: usize> StackMachine<S, N> {
    /// Creates a machine whose root is a fresh activation of `initial`.
    ///
    /// The root is entered immediately.
    pub fn new<C>(initial: S::Id, ctx: &mut C) -> Self
    where
        S: State<C>,
    {
        let mut root = S::activate(initial);
        root.enter(ctx);
        Self {
            root,
            above: ArrayVec::new(),
        }
    }

    /// Returns the active (top) activation.
    #[inline]
    pub fn peek(&self) -> &S {
        self.above.last().unwrap_or(&self.root)
    }

    /// Returns the id of the active state.
    #[inline]
    pub fn state(&self) -> S::Id {
        self.peek().id()
    }

    /// Returns the number of activations, root included. Always at least one.
    #[inline]
    pub fn depth(&self) -> usize {
        self.above.len() + 1
    }

    /// Iterates activation ids from the root to the top.
    pub fn ids(&self) -> impl Iterator<Item = S::Id> + '_ {
        core::iter::once(&self.root)
            .chain(self.above.iter())
            .map(Activation::id)
    }

    /// Returns `true` if any activation on the stack has the given id.
    pub fn contains(&self, id: S::Id) -> bool {
        self.ids().any(|candidate| candidate == id)
    }

    /// Pushes a fresh activation of `id` and enters it.
    ///
    /// Pushing an id that is already active is legal and runs `enter` again
    /// on the new activation.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Overflow`] without calling any hook when the
    /// stack is full.
    pub fn push<C>(&mut self, id: S::Id, ctx: &mut C) -> Result<(), StackError>
    where
        S: State<C>,
    {
        self.above
            .try_push(S::activate(id))
            .map_err(|_| StackError::Overflow { capacity: N })?;
        self.top_mut().enter(ctx);
        Ok(())
    }

    /// Exits and removes the top activation, returning its id.
    ///
    /// The activation beneath is *not* re-entered; callers that want to
    /// resume it fresh use [`update`](Self::update) with a `Pop` request.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Underflow`] when only the root remains.
    pub fn pop<C>(&mut self, ctx: &mut C) -> Result<S::Id, StackError>
    where
        S: State<C>,
    {
        let mut top = self.above.pop().ok_or(StackError::Underflow)?;
        top.exit(ctx);
        Ok(top.id())
    }

    /// Exits the top activation and puts a fresh activation of `id` in its place.
    ///
    /// Equivalent to a pop followed by a push, except that it also works on
    /// the root. Returns the id that was replaced.
    pub fn replace<C>(&mut self, id: S::Id, ctx: &mut C) -> S::Id
    where
        S: State<C>,
    {
        let top = self.top_mut();
        top.exit(ctx);
        let previous = top.id();
        *top = S::activate(id);
        top.enter(ctx);
        previous
    }

    /// Runs one update of the top activation and applies its transition.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Underflow`] if the root requests `Pop`.
    pub fn update<C>(&mut self, ctx: &mut C) -> Result<Step<S::Id>, StackError>
    where
        S: State<C>,
    {
        let current = self.state();

        match self.top_mut().update(ctx) {
            Transition::Stay => Ok(Step::Stayed(current)),
            Transition::Goto(next) if next == current => Ok(Step::Stayed(current)),
            Transition::Goto(next) => {
                self.replace(next, ctx);
                Ok(Step::Switched {
                    from: current,
                    to: next,
                })
            }
            Transition::Pop => {
                self.pop(ctx)?;
                let resumed = self.top_mut();
                resumed.enter(ctx);
                Ok(Step::Popped {
                    from: current,
                    to: resumed.id(),
                })
            }
        }
    }

    fn top_mut(&mut self) -> &mut S {
        match self.above.last_mut() {
            Some(top) => top,
            None => &mut self.root,
        }
    }
}
