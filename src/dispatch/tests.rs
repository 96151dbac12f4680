#![cfg(test)]

use super::*;
use crate::args;
use crate::definition::{Blueprint, BlueprintRef, Declarations};
use crate::implementation::Overrides;
use crate::registry::{Completeness, Registry, RegistryOptions};
use crate::value::{Method, Value};

struct Show;
struct Describe;

impl Blueprint for Show {
    const NAME: &'static str = "Show";

    fn declare(methods: &mut Declarations) {
        methods.require("show");
    }
}

impl Blueprint for Describe {
    const NAME: &'static str = "Describe";

    fn parents() -> Vec<BlueprintRef> {
        vec![BlueprintRef::of::<Show>()]
    }

    fn declare(methods: &mut Declarations) {
        methods.provide(
            "describe",
            Method::new(|receiver, args| {
                let shown = receiver.call("show", args)?.downcast::<String>()?;
                Ok(Value::new(format!("a point at {shown}")))
            }),
        );
    }
}

struct Point {
    x: i64,
    y: i64,
}

struct Line;

fn show_point() -> Overrides {
    Overrides::new().with_typed("show", |point: &Point, _| {
        Ok(format!("({},{})", point.x, point.y))
    })
}

#[test]
fn test_dispatch() {
    let registry = Registry::new();
    let show = registry.define_trait::<Show>().unwrap();
    registry.implement::<Point>(&show, show_point()).unwrap();

    let point = Point { x: 1, y: 2 };
    let shown = registry.call(&point, "show", args![]).unwrap();
    assert_eq!(shown.take::<String>(), "(1,2)");

    let shown = registry.call_trait(&point, &show, "show", args![]).unwrap();
    assert_eq!(shown.take::<String>(), "(1,2)");

    let shown = point.dispatch_in(&registry, "show", args![]).unwrap();
    assert_eq!(shown.take::<String>(), "(1,2)");
}

#[test]
fn test_dispatch_failures() {
    let registry = Registry::new();
    let show = registry.define_trait::<Show>().unwrap();

    match registry.call_trait(&Line, &show, "show", args![]).unwrap_err() {
        CallError::NotImplemented(error) => {
            assert_eq!(error.method, "show");
            assert_eq!(error.trait_name, "Show");
        },
        other => panic!("expected a missing implementation, got {other}"),
    }

    match registry.call(&Line, "show", args![]).unwrap_err() {
        CallError::NotImplemented(error) => {
            assert_eq!(error.trait_name, "Show");
            assert!(
                error.target.ends_with("Line"),
                "Errors should name the receiver's type, got {}.",
                error.target
            );
        },
        other => panic!("expected a missing implementation, got {other}"),
    }
    assert!(
        registry.call(&Line, "vanish", args![]).unwrap_err().is_missing_member(),
        "Names no defined trait declares aren't members at all."
    );
    assert!(
        Line.dispatch_in(&registry, "show", args![]).unwrap_err().is_not_implemented(),
        "Member-style calls should report the unimplemented trait."
    );
    assert!(
        registry
            .call_trait(&Line, &show, "hide", args![])
            .unwrap_err()
            .is_unknown_method(),
        "Calling a method the trait never declared should be rejected as unknown."
    );
}

#[test]
fn test_late_implementation_is_honored() {
    let registry = Registry::new();
    let show = registry.define_trait::<Show>().unwrap();
    let point = Point { x: 3, y: 4 };

    assert!(registry.call_trait(&point, &show, "show", args![]).is_err());
    registry.implement::<Point>(&show, show_point()).unwrap();
    assert_eq!(
        registry
            .call_trait(&point, &show, "show", args![])
            .unwrap()
            .take::<String>(),
        "(3,4)",
        "Calls should resolve the implementation at call time."
    );
}

#[test]
fn test_default_bodies_dispatch_through_receiver() {
    let registry = Registry::new();
    let show = registry.define_trait::<Show>().unwrap();
    let describe = registry.define_trait::<Describe>().unwrap();
    registry.implement::<Point>(&show, show_point()).unwrap();
    registry.implement::<Point>(&describe, Overrides::new()).unwrap();

    let described = registry
        .call(&Point { x: 0, y: 1 }, "describe", args![])
        .unwrap();
    assert_eq!(described.take::<String>(), "a point at (0,1)");
}

#[test]
fn test_natives_take_precedence() {
    let registry = Registry::new();
    let show = registry.define_trait::<Show>().unwrap();
    registry.define_native::<Point>(
        "show",
        Method::typed(|point: &Point, _| Ok(format!("Point {{ x: {}, y: {} }}", point.x, point.y))),
    );
    registry.implement::<Point>(&show, show_point()).unwrap();

    let point = Point { x: 1, y: 2 };
    assert_eq!(
        registry.call(&point, "show", args![]).unwrap().take::<String>(),
        "Point { x: 1, y: 2 }"
    );
    assert_eq!(
        registry
            .call_trait(&point, &show, "show", args![])
            .unwrap()
            .take::<String>(),
        "(1,2)",
        "Calling through the trait should bypass the native member."
    );
}

#[test]
fn test_bound_view() {
    let registry = Registry::new();
    let show = registry.define_trait::<Show>().unwrap();
    let describe = registry.define_trait::<Describe>().unwrap();
    registry.implement::<Point>(&show, show_point()).unwrap();

    let point = Point { x: 5, y: 6 };
    assert!(registry.get_implementation(&point, &describe).is_none());
    assert!(registry.get_implementation(&Line, &show).is_none());

    let view = registry.get_implementation(&point, &show).unwrap();
    assert_eq!(view.descriptor().name(), "Show");
    assert_eq!(view.names().collect::<Vec<_>>(), ["show"]);
    assert_eq!(view.call("show", args![]).unwrap().take::<String>(), "(5,6)");

    let bound = view.method("show").unwrap();
    assert_eq!(bound.invoke(args![]).unwrap().take::<String>(), "(5,6)");

    assert!(
        view.method("describe").unwrap_err().is_unknown_method(),
        "Reading an undeclared member from a view should fail."
    );
}

#[test]
fn test_missing_method_at_first_call() {
    let registry = Registry::with_options(
        RegistryOptions::default().with_completeness(Completeness::AtFirstCall),
    );
    let show = registry.define_trait::<Show>().unwrap();
    registry.implement::<Line>(&show, Overrides::new()).unwrap();

    assert!(registry.has_implementation::<Line>(&show));
    assert!(
        registry.call(&Line, "show", args![]).unwrap_err().is_not_implemented(),
        "A declared method without a body should fail when it is first called."
    );
    let view = registry.get_implementation(&Line, &show).unwrap();
    assert!(view.call("show", args![]).unwrap_err().is_not_implemented());
}

#[test]
fn test_generic_instantiation_receivers() {
    struct Tagged(&'static str);

    let registry = Registry::new();
    let show = registry.define_trait::<Show>().unwrap();
    let metres = registry
        .identity_of_generic::<Tagged>(&["Metres".into()])
        .unwrap();
    registry
        .implement_for(
            metres,
            &show,
            Overrides::new().with_typed("show", |tagged: &Tagged, _| Ok(format!("{}m", tagged.0))),
        )
        .unwrap();

    let length = Tagged("12");
    assert_eq!(
        registry
            .receiver_as(&length, metres)
            .call("show", args![])
            .unwrap()
            .take::<String>(),
        "12m"
    );
    assert!(
        registry.call(&length, "show", args![]).is_err(),
        "The bare type shouldn't share its instantiation's implementations."
    );
    assert!(
        registry
            .receiver_as(&Line, metres)
            .call("show", args![])
            .unwrap_err()
            .is_receiver_type(),
        "Typed bodies should reject receivers of the wrong type."
    );
}

#[test]
fn test_method_bodies_may_register() {
    struct Lazy;

    let registry = Registry::new();
    let show = registry.define_trait::<Show>().unwrap();
    registry.define_native::<Lazy>(
        "prepare",
        Method::new(|receiver, _| {
            let registry = receiver.registry();
            let show = registry
                .define_trait::<Show>()
                .map_err(|e| CallError::failure(e.to_string()))?;
            registry
                .implement::<Lazy>(
                    &show,
                    Overrides::new().with_typed("show", |_: &Lazy, _| Ok(String::from("ready"))),
                )
                .map_err(|e| CallError::failure(e.to_string()))?;
            Ok(Value::unit())
        }),
    );

    registry.call(&Lazy, "prepare", args![]).unwrap();
    assert!(registry.has_implementation::<Lazy>(&show));
    assert_eq!(
        registry.call(&Lazy, "show", args![]).unwrap().take::<String>(),
        "ready"
    );
}

#[test]
fn test_method_failures_propagate() {
    let registry = Registry::new();
    let show = registry.define_trait::<Show>().unwrap();
    registry
        .implement::<Line>(
            &show,
            Overrides::new().with("show", Method::new(|_, _| Err(CallError::failure("no ink")))),
        )
        .unwrap();

    match registry.call(&Line, "show", args![]).unwrap_err() {
        CallError::Failed(failure) => assert_eq!(failure.message, "no ink"),
        other => panic!("expected the body's own failure, got {other}"),
    }
}
