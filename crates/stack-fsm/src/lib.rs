//! Lightweight stack-based state machine for turn-based agents.
//!
//! This library provides a minimal, deterministic hierarchical state machine
//! designed for agents that are stepped once per game turn.
//!
//! - **Stack, not a flat FSM**: a short-lived reaction is pushed on top of a
//!   long-lived behavior and suspends it instead of replacing it
//! - **Activation records**: every push builds a fresh record from a closed id
//!   set, so there is no shared mutable singleton per state
//! - **Never empty**: the root activation can be replaced but never popped
//! - **Bounded**: the stack lives inline with a fixed capacity
//!
//! # Architecture
//!
//! - [`Activation`]: Identity of a state variant and how to build a record for it
//! - [`State`]: Enter / update / exit hooks, generic over a context type
//! - [`Transition`]: What a state asks for at the end of an update
//! - [`StackMachine`]: The activation stack and the transition protocol
//! - [`StackError`]: Stack discipline violations

pub mod error;
pub mod machine;
pub mod state;
pub mod transition;

// Re-export core types for ergonomic API
pub use error::StackError;
pub use machine::{DEFAULT_CAPACITY, StackMachine};
pub use state::{Activation, State};
pub use transition::{Step, Transition};
