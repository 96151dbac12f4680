use std::any::Any;
use std::sync::Arc;
#[cfg(feature = "global")]
use std::sync::LazyLock;

use super::RegistryOptions;
use crate::definition::{Blueprint, BlueprintRef, DefineError, TraitCatalog, TraitDescriptor};
use crate::identity::{IdentityRegistry, InvalidTargetError, TypeArg, TypeToken};
use crate::implementation::{ImplRegistry, ImplementError, Overrides};
use crate::value::Method;

#[cfg(feature = "global")]
static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);

/// The trait system: type identities, trait definitions and the implementations registered
/// against them.
///
/// Most programs use the process-wide [`Registry::global`], but independent registries can be
/// created for isolation (such as in tests). Identities are shared by every registry, so a type
/// (or trait) has the same [`TypeToken`] in all of them, while traits and implementations are
/// local to the registry they were registered with. A descriptor from one registry can be queried
/// against another, and finds whatever that registry holds for the same trait identity.
///
/// # Examples
/// ```
/// # use runtime_traits::args;
/// # use runtime_traits::definition::{Blueprint, Declarations};
/// # use runtime_traits::implementation::Overrides;
/// # use runtime_traits::registry::Registry;
/// struct Display;
///
/// impl Blueprint for Display {
///     const NAME: &'static str = "Display";
///
///     fn declare(methods: &mut Declarations) {
///         methods.require("show");
///     }
/// }
///
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// let registry = Registry::new();
/// let display = registry.define_trait::<Display>().unwrap();
/// registry
///     .implement::<Point>(
///         &display,
///         Overrides::new().with_typed("show", |p: &Point, _| Ok(format!("({},{})", p.x, p.y))),
///     )
///     .unwrap();
///
/// let shown = registry.call(&Point { x: 1, y: 2 }, "show", args![]).unwrap();
/// assert_eq!(shown.take::<String>(), "(1,2)");
/// assert!(registry.call(&"not a point", "show", args![]).is_err());
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    pub(crate) options: RegistryOptions,
    pub(crate) identities: IdentityRegistry,
    pub(crate) traits: TraitCatalog,
    pub(crate) implementations: ImplRegistry,
}

impl Registry {
    /// Creates a new, empty Registry with the default options.
    pub fn new() -> Registry {
        Registry::default()
    }

    pub fn with_options(options: RegistryOptions) -> Registry {
        Registry {
            options,
            ..Registry::default()
        }
    }

    /// Returns the process-wide Registry, created with the default options on first use.
    #[cfg(feature = "global")]
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    pub const fn options(&self) -> &RegistryOptions {
        &self.options
    }

    pub const fn identities(&self) -> &IdentityRegistry {
        &self.identities
    }

    pub const fn traits(&self) -> &TraitCatalog {
        &self.traits
    }

    pub const fn implementations(&self) -> &ImplRegistry {
        &self.implementations
    }

    /// Returns the identity of `T`, see [`IdentityRegistry::of`].
    pub fn identity_of<T: ?Sized + 'static>(&self) -> TypeToken {
        self.identities.of::<T>()
    }

    /// Returns the identity of the generic type `T` instantiated with `args`, see
    /// [`IdentityRegistry::of_generic`].
    pub fn identity_of_generic<T: ?Sized + 'static>(
        &self,
        args: &[TypeArg],
    ) -> Result<TypeToken, InvalidTargetError> {
        self.identities.of_generic::<T>(args)
    }

    /// Returns the identity of the type of `value`, failing if there is no value.
    pub fn identity_of_value(
        &self,
        value: Option<&(dyn Any + 'static)>,
    ) -> Result<TypeToken, InvalidTargetError> {
        self.identities.of_value(value)
    }

    /// Returns the display name of `identity`.
    pub fn name_of(&self, identity: TypeToken) -> String {
        self.identities.describe(identity)
    }

    /// Defines the trait blueprinted by `B`, and any of its ancestors not yet defined. Defining a
    /// trait again returns the same descriptor.
    pub fn define_trait<B: Blueprint>(&self) -> Result<Arc<TraitDescriptor>, DefineError> {
        self.define_blueprint(BlueprintRef::of::<B>())
    }

    pub fn define_blueprint(
        &self,
        blueprint: BlueprintRef,
    ) -> Result<Arc<TraitDescriptor>, DefineError> {
        self.traits.define(&self.identities, blueprint, self.options.cycles)
    }

    /// Implements the trait described by `descriptor` for `T`, see [`implement_for`].
    ///
    /// [`implement_for`]: Registry::implement_for
    pub fn implement<T: ?Sized + 'static>(
        &self,
        descriptor: &Arc<TraitDescriptor>,
        overrides: Overrides,
    ) -> Result<(), ImplementError> {
        self.implement_for(self.identity_of::<T>(), descriptor, overrides)
    }

    /// Implements the trait described by `descriptor` for the type identified by `target`, taking
    /// the trait's default bodies and then `overrides`.
    ///
    /// Fails if `target` already implements the trait, if any ancestor of the trait isn't
    /// implemented for `target` yet, if an override names a method the trait doesn't declare, or
    /// (with [`Completeness::AtRegistration`](super::Completeness::AtRegistration)) if a declared
    /// method ends up without a body. Nothing is registered on failure.
    pub fn implement_for(
        &self,
        target: TypeToken,
        descriptor: &Arc<TraitDescriptor>,
        overrides: Overrides,
    ) -> Result<(), ImplementError> {
        self.implementations.implement(
            target,
            &self.identities.describe(target),
            descriptor,
            overrides,
            self.options.completeness,
        )
    }

    /// Defines `name` as a native member of `T`. Trait implementations never install a forwarding
    /// member over a native one.
    pub fn define_native<T: ?Sized + 'static>(&self, name: impl Into<String>, method: Method) {
        self.define_native_for(self.identity_of::<T>(), name, method)
    }

    pub fn define_native_for(&self, target: TypeToken, name: impl Into<String>, method: Method) {
        self.implementations.define_native(target, name, method)
    }

    /// Returns true if `T` implements the trait described by `descriptor`.
    pub fn has_implementation<T: ?Sized + 'static>(&self, descriptor: &TraitDescriptor) -> bool {
        self.has_implementation_for(self.identity_of::<T>(), descriptor)
    }

    pub fn has_implementation_for(&self, target: TypeToken, descriptor: &TraitDescriptor) -> bool {
        self.implementations.contains(target, descriptor.identity())
    }

    /// Returns the descriptors of every trait `T` implements, in registration order.
    pub fn implemented_traits<T: ?Sized + 'static>(&self) -> Vec<Arc<TraitDescriptor>> {
        self.implementations.traits_of(self.identity_of::<T>())
    }
}
