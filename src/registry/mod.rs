//! A module containing [`Registry`], which ties the identity, definition, implementation and
//! dispatch components together, and the [`RegistryOptions`] it is configured with.
//!
//! [`Registry`] is also re-exported at the crate root.

mod options;
mod registry;

pub use options::*;
pub use registry::*;
