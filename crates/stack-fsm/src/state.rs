//! Core state traits.
//!
//! This module defines [`Activation`], the identity half of a state, and
//! [`State`], the behavior half. The behavior trait is generic over a context
//! type `C`, which stands in for the entity that owns the machine: hooks read
//! and mutate the owner through it instead of holding a back-reference.

use core::fmt::Debug;

use crate::Transition;

/// Identity of a state activation.
///
/// Implementors are usually a sum type with one variant per behavior, each
/// variant carrying the data that one activation needs (a countdown, a path).
pub trait Activation: Sized {
    /// Stable identifier of a state variant.
    ///
    /// The id set is closed, so building an activation can never fail.
    type Id: Copy + Eq + Debug;

    /// Builds a fresh activation record for `id`.
    ///
    /// Per-activation fields are initialized later by [`State::enter`].
    fn activate(id: Self::Id) -> Self;

    /// Returns the identifier of this activation.
    fn id(&self) -> Self::Id;
}

/// Behavior hooks of a state, evaluated against a context.
pub trait State<C>: Activation {
    /// Called when the activation becomes the top of the stack.
    ///
    /// This runs on push and again every time the activation is resumed by a
    /// [`Transition::Pop`] of the state above it, so resumption starts fresh.
    fn enter(&mut self, _ctx: &mut C) {}

    /// Called once per turn while this activation is on top.
    ///
    /// # Returns
    ///
    /// - [`Transition::Stay`] (or a `Goto` of its own id) to keep running
    /// - [`Transition::Pop`] to finish and resume the activation beneath
    /// - [`Transition::Goto`] to be replaced by another state
    fn update(&mut self, ctx: &mut C) -> Transition<Self::Id>;

    /// Called when the activation is removed from the stack.
    fn exit(&mut self, _ctx: &mut C) {}
}
