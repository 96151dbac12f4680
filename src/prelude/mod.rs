//! Blueprints for the standard traits, and the hooks collections use to compare, hash and display
//! values through them.
//!
//! These are ordinary blueprints, defined lazily in whichever [`Registry`](crate::Registry) they
//! are used with. Nothing implements them automatically: a type only gains, say, equality once an
//! implementation of [`PartialEq`] is registered for it.

mod blueprints;
mod hooks;

pub use blueprints::*;
pub use hooks::*;
