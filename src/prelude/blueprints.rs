use std::cmp::Ordering;
use std::sync::Arc;

use crate::definition::{Blueprint, BlueprintRef, Declarations, TraitDescriptor};
use crate::registry::Registry;
use crate::util::result::ResultExtension;
use crate::value::{Method, Value};

/// Equality. Implementations supply `eq`, which returns a `bool`; `ne` is its negation.
pub struct PartialEq;

/// Equality that is reflexive. Declares no methods of its own.
pub struct Eq;

/// Partial ordering. Implementations supply `partial_cmp`, which returns an
/// `Option<Ordering>`; `lt`, `le`, `gt` and `ge` are derived from it.
pub struct PartialOrd;

/// Total ordering. Implementations supply `cmp`, which returns an `Ordering`.
pub struct Ord;

/// Formatting for display. Implementations supply `fmt`, which returns a `String`.
pub struct Display;

/// Duplication. Implementations supply `clone`, which returns a new value of the receiver's type.
pub struct Clone;

/// Hashing. Implementations supply `hash`, which returns a `u64`.
pub struct Hash;

impl Blueprint for PartialEq {
    const NAME: &'static str = "PartialEq";

    fn declare(methods: &mut Declarations) {
        methods.require("eq").provide(
            "ne",
            Method::new(|receiver, args| {
                let eq = descriptor::<PartialEq>(receiver.registry());
                let equal = receiver.call_trait(&eq, "eq", args)?.downcast::<bool>()?;
                Ok(Value::new(!equal))
            }),
        );
    }
}

impl Blueprint for Eq {
    const NAME: &'static str = "Eq";

    fn parents() -> Vec<BlueprintRef> {
        vec![BlueprintRef::of::<PartialEq>()]
    }

    fn declare(_: &mut Declarations) {}
}

impl Blueprint for PartialOrd {
    const NAME: &'static str = "PartialOrd";

    fn parents() -> Vec<BlueprintRef> {
        vec![BlueprintRef::of::<PartialEq>()]
    }

    fn declare(methods: &mut Declarations) {
        methods
            .require("partial_cmp")
            .provide("lt", comparison(|ordering| ordering == Ordering::Less))
            .provide("le", comparison(|ordering| ordering != Ordering::Greater))
            .provide("gt", comparison(|ordering| ordering == Ordering::Greater))
            .provide("ge", comparison(|ordering| ordering != Ordering::Less));
    }
}

impl Blueprint for Ord {
    const NAME: &'static str = "Ord";

    fn parents() -> Vec<BlueprintRef> {
        vec![BlueprintRef::of::<Eq>(), BlueprintRef::of::<PartialOrd>()]
    }

    fn declare(methods: &mut Declarations) {
        methods.require("cmp");
    }
}

impl Blueprint for Display {
    const NAME: &'static str = "Display";

    fn declare(methods: &mut Declarations) {
        methods.require("fmt");
    }
}

impl Blueprint for Clone {
    const NAME: &'static str = "Clone";

    fn declare(methods: &mut Declarations) {
        methods.require("clone");
    }
}

impl Blueprint for Hash {
    const NAME: &'static str = "Hash";

    fn declare(methods: &mut Declarations) {
        methods.require("hash");
    }
}

/// Returns the descriptor for one of the prelude's blueprints.
///
/// # Panics
/// Never panics in practice: the prelude's blueprints have no cycles or conflicting methods, so
/// defining them can't fail.
pub(crate) fn descriptor<B: Blueprint>(registry: &Registry) -> Arc<TraitDescriptor> {
    registry.define_trait::<B>().throw()
}

/// A default body which compares the receiver with its first argument through `partial_cmp`, and
/// tests the result with `test`. Incomparable values never pass.
fn comparison(test: fn(Ordering) -> bool) -> Method {
    Method::new(move |receiver, args| {
        let partial_ord = descriptor::<PartialOrd>(receiver.registry());
        let ordering = receiver
            .call_trait(&partial_ord, "partial_cmp", args)?
            .downcast::<Option<Ordering>>()?;
        Ok(Value::new(ordering.is_some_and(test)))
    })
}
