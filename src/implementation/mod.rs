//! A module containing [`ImplRegistry`] and the [`ImplRecord`]s it stores.
//!
//! Implementations are keyed by target type identity first and trait identity second. Each target
//! holds at most one record per trait, and a record is only accepted once every ancestor of its
//! trait already has one for the same target.

mod error;
mod overrides;
mod record;
mod registry;

pub use error::*;
pub use overrides::*;
pub use record::*;
pub use registry::*;
