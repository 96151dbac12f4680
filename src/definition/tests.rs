#![cfg(test)]

use std::sync::Arc;

use super::*;
use crate::identity::IdentityRegistry;
use crate::registry::CyclePolicy;
use crate::value::{Method, Value};

fn unit() -> Method {
    Method::new(|_, _| Ok(Value::unit()))
}

struct Base;
struct Middle;
struct Leaf;

impl Blueprint for Base {
    const NAME: &'static str = "Base";

    fn declare(methods: &mut Declarations) {
        methods.require("base").provide("described", unit());
    }
}

impl Blueprint for Middle {
    const NAME: &'static str = "Middle";

    fn parents() -> Vec<BlueprintRef> {
        vec![BlueprintRef::of::<Base>()]
    }

    fn declare(methods: &mut Declarations) {
        methods.require("middle");
    }
}

impl Blueprint for Leaf {
    const NAME: &'static str = "Leaf";

    fn parents() -> Vec<BlueprintRef> {
        vec![BlueprintRef::of::<Middle>()]
    }

    fn declare(methods: &mut Declarations) {
        methods.require("leaf");
    }
}

struct Top;
struct Left;
struct Right;
struct Bottom;

impl Blueprint for Top {
    const NAME: &'static str = "Top";

    fn declare(methods: &mut Declarations) {
        methods.require("top");
    }
}

impl Blueprint for Left {
    const NAME: &'static str = "Left";

    fn parents() -> Vec<BlueprintRef> {
        vec![BlueprintRef::of::<Top>()]
    }

    fn declare(methods: &mut Declarations) {
        methods.require("left");
    }
}

impl Blueprint for Right {
    const NAME: &'static str = "Right";

    fn parents() -> Vec<BlueprintRef> {
        vec![BlueprintRef::of::<Top>()]
    }

    fn declare(methods: &mut Declarations) {
        methods.require("right");
    }
}

impl Blueprint for Bottom {
    const NAME: &'static str = "Bottom";

    fn parents() -> Vec<BlueprintRef> {
        vec![BlueprintRef::of::<Left>(), BlueprintRef::of::<Right>()]
    }

    fn declare(_: &mut Declarations) {}
}

struct Redeclares;

impl Blueprint for Redeclares {
    const NAME: &'static str = "Redeclares";

    fn parents() -> Vec<BlueprintRef> {
        vec![BlueprintRef::of::<Middle>()]
    }

    fn declare(methods: &mut Declarations) {
        methods.require("own").require("base");
    }
}

struct Ping;
struct Pong;
struct Narcissus;

impl Blueprint for Ping {
    const NAME: &'static str = "Ping";

    fn parents() -> Vec<BlueprintRef> {
        vec![BlueprintRef::of::<Pong>()]
    }

    fn declare(methods: &mut Declarations) {
        methods.require("ping");
    }
}

impl Blueprint for Pong {
    const NAME: &'static str = "Pong";

    fn parents() -> Vec<BlueprintRef> {
        vec![BlueprintRef::of::<Ping>()]
    }

    fn declare(methods: &mut Declarations) {
        methods.require("pong");
    }
}

impl Blueprint for Narcissus {
    const NAME: &'static str = "Narcissus";

    fn parents() -> Vec<BlueprintRef> {
        vec![BlueprintRef::of::<Narcissus>()]
    }

    fn declare(_: &mut Declarations) {}
}

fn names(ancestors: &[Arc<TraitDescriptor>]) -> Vec<&'static str> {
    ancestors.iter().map(|ancestor| ancestor.name()).collect()
}

#[test]
fn test_ancestor_chain() {
    let ids = IdentityRegistry::new();
    let catalog = TraitCatalog::new();
    let leaf = catalog
        .define(&ids, BlueprintRef::of::<Leaf>(), CyclePolicy::Reject)
        .unwrap();

    assert_eq!(
        names(leaf.ancestors()),
        ["Base", "Middle"],
        "Ancestors should be listed deepest-first."
    );
    assert_eq!(leaf.parents(), [ids.of::<Middle>()]);
    assert_eq!(leaf.identity(), ids.of::<Leaf>());
    assert_eq!(
        catalog.len(),
        3,
        "Defining a trait should define each of its ancestors too."
    );

    let middle = catalog.get(ids.of::<Middle>()).unwrap();
    assert!(leaf.extends(&middle));
    assert!(!middle.extends(&leaf));
    assert_eq!(
        leaf.declaring("base").map(TraitDescriptor::name),
        Some("Base"),
        "Inherited methods should resolve to the ancestor declaring them."
    );
    assert!(!leaf.declares("base"), "Descriptors only declare their own methods.");
}

#[test]
fn test_diamond_is_not_a_cycle() {
    let ids = IdentityRegistry::new();
    let catalog = TraitCatalog::new();
    let bottom = catalog
        .define(&ids, BlueprintRef::of::<Bottom>(), CyclePolicy::Reject)
        .unwrap();

    assert_eq!(
        names(bottom.ancestors()),
        ["Top", "Left", "Right"],
        "An ancestor reachable along two paths should appear once."
    );
}

#[test]
fn test_definitions_are_cached() {
    let ids = IdentityRegistry::new();
    let catalog = TraitCatalog::new();
    let first = catalog
        .define(&ids, BlueprintRef::of::<Middle>(), CyclePolicy::Reject)
        .unwrap();
    let second = catalog
        .define(&ids, BlueprintRef::of::<Middle>(), CyclePolicy::Reject)
        .unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    let leaf = catalog
        .define(&ids, BlueprintRef::of::<Leaf>(), CyclePolicy::Reject)
        .unwrap();
    assert!(
        Arc::ptr_eq(&leaf.ancestors()[1], &first),
        "Later definitions should share already-defined ancestors."
    );
}

#[test]
fn test_method_declarations() {
    let ids = IdentityRegistry::new();
    let catalog = TraitCatalog::new();
    let base = catalog
        .define(&ids, BlueprintRef::of::<Base>(), CyclePolicy::Reject)
        .unwrap();

    let declared: Vec<_> = base.methods().iter().map(MethodDecl::name).collect();
    assert_eq!(declared, ["base", "described"]);
    assert!(base.declaration("base").unwrap().is_required());
    assert!(base.default_body("described").is_some());
    assert!(base.default_body("base").is_none());
    assert!(!base.declares("missing"));
}

#[test]
fn test_conflicting_method() {
    let ids = IdentityRegistry::new();
    let catalog = TraitCatalog::new();
    let error = catalog
        .define(&ids, BlueprintRef::of::<Redeclares>(), CyclePolicy::Reject)
        .unwrap_err();

    match error {
        DefineError::ConflictingMethod(error) => {
            assert_eq!(error.method, "base");
            assert_eq!(error.parent, "Base");
            assert_eq!(error.trait_name, "Redeclares");
        },
        other => panic!("expected a conflicting method, got {other}"),
    }
    assert!(
        catalog.is_empty(),
        "A failed definition shouldn't leave any of its ancestors behind."
    );
}

#[test]
fn test_cycles_rejected() {
    let ids = IdentityRegistry::new();
    let catalog = TraitCatalog::new();
    let error = catalog
        .define(&ids, BlueprintRef::of::<Ping>(), CyclePolicy::Reject)
        .unwrap_err();

    match error {
        DefineError::CyclicAncestry(error) => {
            assert_eq!(error.trait_name, "Ping");
            assert_eq!(error.chain, "Ping -> Pong -> Ping");
        },
        other => panic!("expected a cycle, got {other}"),
    }
    assert!(catalog.is_empty());

    assert!(
        catalog
            .define(&ids, BlueprintRef::of::<Narcissus>(), CyclePolicy::Reject)
            .unwrap_err()
            .is_cyclic_ancestry(),
        "A trait listing itself as a parent is a cycle."
    );
}

#[test]
fn test_cycles_truncated() {
    let ids = IdentityRegistry::new();
    let catalog = TraitCatalog::new();
    let ping = catalog
        .define(&ids, BlueprintRef::of::<Ping>(), CyclePolicy::Truncate)
        .unwrap();

    assert_eq!(names(ping.ancestors()), ["Pong"]);
    let pong = catalog.get(ids.of::<Pong>()).unwrap();
    assert!(
        pong.ancestors().is_empty(),
        "The revisited ancestor should contribute nothing."
    );

    let narcissus = catalog
        .define(&ids, BlueprintRef::of::<Narcissus>(), CyclePolicy::Truncate)
        .unwrap();
    assert!(narcissus.ancestors().is_empty());
}

#[test]
fn test_redeclaring_replaces() {
    let mut methods = Declarations::default();
    methods.require("show").provide("show", unit());
    assert_eq!(methods.len(), 1);
    assert!(!methods.into_vec()[0].is_required());
}
