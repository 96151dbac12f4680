//! A module containing [`IdentityRegistry`] and the [`TypeToken`]s it hands out.
//!
//! Every nominal type that takes part in the trait system is known by its token, and so is every
//! distinct instantiation of a generic type. Instances never get tokens of their own, they resolve
//! to the token of their type.

mod error;
mod key;
mod registry;
mod token;

pub use error::*;
pub use key::*;
pub use registry::*;
pub use token::*;
