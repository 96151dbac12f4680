use std::any::Any;

use super::{BoundView, CallError, Receiver};
use crate::definition::TraitDescriptor;
use crate::identity::TypeToken;
use crate::registry::Registry;
use crate::value::{Args, Value};

impl Registry {
    /// Wraps `value` as a receiver dispatching under the identity of its type.
    pub fn receiver<'a>(&'a self, value: &'a (dyn Any + 'static)) -> Receiver<'a> {
        Receiver::new(value, self.identities.of_val(value), self)
    }

    /// Wraps `value` as a receiver dispatching under `identity`, such as the identity of a generic
    /// instantiation that the value's Rust type alone doesn't capture.
    pub fn receiver_as<'a>(
        &'a self,
        value: &'a (dyn Any + 'static),
        identity: TypeToken,
    ) -> Receiver<'a> {
        Receiver::new(value, identity, self)
    }

    /// Wraps `value` as a receiver dispatching under the identity of `T`. Unlike
    /// [`receiver`](Registry::receiver), this records the name of `T` for error messages.
    pub fn receiver_of<'a, T: Any>(&'a self, value: &'a T) -> Receiver<'a> {
        Receiver::new(value, self.identities.of::<T>(), self)
    }

    /// Calls the member `method` of `value`, see [`Receiver::call`].
    pub fn call<T: Any>(
        &self,
        value: &T,
        method: &str,
        args: Args<'_>,
    ) -> Result<Value, CallError> {
        self.receiver_of(value).call(method, args)
    }

    /// Calls `method` from the trait described by `descriptor` on `value`, see
    /// [`Receiver::call_trait`].
    pub fn call_trait<T: Any>(
        &self,
        value: &T,
        descriptor: &TraitDescriptor,
        method: &str,
        args: Args<'_>,
    ) -> Result<Value, CallError> {
        self.receiver_of(value).call_trait(descriptor, method, args)
    }

    /// Returns a view over `value`'s implementation of the trait described by `descriptor`, or
    /// None if `T` doesn't implement it.
    pub fn get_implementation<'a, T: Any>(
        &'a self,
        value: &'a T,
        descriptor: &TraitDescriptor,
    ) -> Option<BoundView<'a>> {
        self.receiver_of(value).implementation(descriptor)
    }
}

/// Lets any value call its trait members directly, as if they were its own methods.
///
/// # Examples
/// ```
/// # use runtime_traits::args;
/// # use runtime_traits::definition::{Blueprint, Declarations};
/// # use runtime_traits::dispatch::Dispatch;
/// # use runtime_traits::implementation::Overrides;
/// # use runtime_traits::registry::Registry;
/// struct Comparable;
///
/// impl Blueprint for Comparable {
///     const NAME: &'static str = "Comparable";
///
///     fn declare(methods: &mut Declarations) {
///         methods.require("compare");
///     }
/// }
///
/// struct Crate {
///     value: i64,
/// }
///
/// let registry = Registry::new();
/// let comparable = registry.define_trait::<Comparable>().unwrap();
/// registry
///     .implement::<Crate>(
///         &comparable,
///         Overrides::new().with_typed("compare", |a: &Crate, args| {
///             Ok(a.value - args.get::<Crate>(0)?.value)
///         }),
///     )
///     .unwrap();
///
/// let (three, five) = (Crate { value: 3 }, Crate { value: 5 });
/// let ordering = three.dispatch_in(&registry, "compare", args![five]).unwrap();
/// assert_eq!(ordering.take::<i64>(), -2);
/// ```
pub trait Dispatch: Any {
    /// Calls the member `method` of this value using `registry`.
    fn dispatch_in(
        &self,
        registry: &Registry,
        method: &str,
        args: Args<'_>,
    ) -> Result<Value, CallError>
    where
        Self: Sized,
    {
        registry.call(self, method, args)
    }

    /// Calls the member `method` of this value using the global registry.
    #[cfg(feature = "global")]
    fn dispatch(&self, method: &str, args: Args<'_>) -> Result<Value, CallError>
    where
        Self: Sized,
    {
        Registry::global().call(self, method, args)
    }
}

impl<T: Any> Dispatch for T {}
