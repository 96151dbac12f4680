//! Trait blueprints and the descriptors built from them.
//!
//! A [`Blueprint`] is a nominal Rust type standing in for a trait: it names the trait, its direct
//! parents and its methods. [`TraitCatalog`] turns blueprints into immutable [`TraitDescriptor`]s,
//! resolving each trait's full ancestor chain once and caching the result.

mod blueprint;
mod catalog;
mod descriptor;
mod error;
mod tests;

pub use blueprint::*;
pub use catalog::*;
pub use descriptor::*;
pub use error::*;
