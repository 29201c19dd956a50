use crate::agent::Body;
use crate::world::{Arena, EntityId};

/// Context handed to behavior hooks.
///
/// Stands in for the agent that owns the stack: hooks mutate the agent's
/// [`Body`] and consult or update the shared [`Arena`].
pub struct Blackboard<'a> {
    pub body: &'a mut Body,
    pub arena: &'a mut Arena,
}

impl<'a> Blackboard<'a> {
    pub fn new(body: &'a mut Body, arena: &'a mut Arena) -> Self {
        Self { body, arena }
    }

    /// Ties an activation's target to the agent focus.
    ///
    /// The first entry adopts the current focus. Later entries (resuming after
    /// a detour pushed on top) put the activation's own target back in focus.
    pub fn bind_focus(&mut self, slot: &mut Option<EntityId>) {
        match *slot {
            Some(id) => self.body.focus = Some(id),
            None => *slot = self.body.focus,
        }
    }
}
