use std::any::Any;
use std::cmp::Ordering;
use std::sync::Arc;

use super::blueprints::{self, descriptor};
use crate::args;
use crate::definition::TraitDescriptor;
use crate::dispatch::CallError;
use crate::registry::Registry;
use crate::value::{Args, Value};

/// The descriptors of every prelude trait, defined in one registry.
///
/// Handy when registering implementations, which need descriptors rather than blueprints.
#[derive(Debug, Clone)]
pub struct Prelude {
    pub partial_eq: Arc<TraitDescriptor>,
    pub eq: Arc<TraitDescriptor>,
    pub partial_ord: Arc<TraitDescriptor>,
    pub ord: Arc<TraitDescriptor>,
    pub display: Arc<TraitDescriptor>,
    pub clone: Arc<TraitDescriptor>,
    pub hash: Arc<TraitDescriptor>,
}

impl Prelude {
    /// Defines every prelude trait in `registry`, or fetches them if they are already defined.
    pub fn define(registry: &Registry) -> Prelude {
        Prelude {
            partial_eq: descriptor::<blueprints::PartialEq>(registry),
            eq: descriptor::<blueprints::Eq>(registry),
            partial_ord: descriptor::<blueprints::PartialOrd>(registry),
            ord: descriptor::<blueprints::Ord>(registry),
            display: descriptor::<blueprints::Display>(registry),
            clone: descriptor::<blueprints::Clone>(registry),
            hash: descriptor::<blueprints::Hash>(registry),
        }
    }
}

/// Returns true if `lhs` equals `rhs`, through the [`PartialEq`](blueprints::PartialEq)
/// implementation for the type of `lhs`.
pub fn eq(
    registry: &Registry,
    lhs: &(dyn Any + 'static),
    rhs: &(dyn Any + 'static),
) -> Result<bool, CallError> {
    let partial_eq = descriptor::<blueprints::PartialEq>(registry);
    let result = registry.receiver(lhs).call_trait(&partial_eq, "eq", Args::new(&[rhs]))?;
    Ok(result.downcast()?)
}

/// Returns true if `lhs` doesn't equal `rhs`, through `ne` (which defaults to the negation of
/// `eq`).
pub fn ne(
    registry: &Registry,
    lhs: &(dyn Any + 'static),
    rhs: &(dyn Any + 'static),
) -> Result<bool, CallError> {
    let partial_eq = descriptor::<blueprints::PartialEq>(registry);
    let result = registry.receiver(lhs).call_trait(&partial_eq, "ne", Args::new(&[rhs]))?;
    Ok(result.downcast()?)
}

/// Compares `lhs` with `rhs` through the [`PartialOrd`](blueprints::PartialOrd) implementation for
/// the type of `lhs`.
pub fn partial_cmp(
    registry: &Registry,
    lhs: &(dyn Any + 'static),
    rhs: &(dyn Any + 'static),
) -> Result<Option<Ordering>, CallError> {
    let partial_ord = descriptor::<blueprints::PartialOrd>(registry);
    let result = registry
        .receiver(lhs)
        .call_trait(&partial_ord, "partial_cmp", Args::new(&[rhs]))?;
    Ok(result.downcast()?)
}

/// Compares `lhs` with `rhs` through the [`Ord`](blueprints::Ord) implementation for the type of
/// `lhs`.
pub fn cmp(
    registry: &Registry,
    lhs: &(dyn Any + 'static),
    rhs: &(dyn Any + 'static),
) -> Result<Ordering, CallError> {
    let ord = descriptor::<blueprints::Ord>(registry);
    let result = registry.receiver(lhs).call_trait(&ord, "cmp", Args::new(&[rhs]))?;
    Ok(result.downcast()?)
}

/// Formats `value` through its [`Display`](blueprints::Display) implementation.
pub fn display(registry: &Registry, value: &(dyn Any + 'static)) -> Result<String, CallError> {
    let display = descriptor::<blueprints::Display>(registry);
    let result = registry.receiver(value).call_trait(&display, "fmt", args![])?;
    Ok(result.downcast()?)
}

/// Duplicates `value` through its [`Clone`](blueprints::Clone) implementation.
pub fn clone_value(registry: &Registry, value: &(dyn Any + 'static)) -> Result<Value, CallError> {
    let clone = descriptor::<blueprints::Clone>(registry);
    registry.receiver(value).call_trait(&clone, "clone", args![])
}

/// Hashes `value` through its [`Hash`](blueprints::Hash) implementation.
pub fn hash(registry: &Registry, value: &(dyn Any + 'static)) -> Result<u64, CallError> {
    let hash = descriptor::<blueprints::Hash>(registry);
    let result = registry.receiver(value).call_trait(&hash, "hash", args![])?;
    Ok(result.downcast()?)
}
