use std::any::{self, Any};
use std::fmt::{self, Debug, Formatter};

use super::{BoundView, CallError, MissingMemberError, NotImplementedError};
use crate::definition::TraitDescriptor;
use crate::identity::TypeToken;
use crate::implementation::{Member, UnknownMethodError};
use crate::registry::Registry;
use crate::value::{Args, ReceiverTypeError, Value};

/// A value on which trait methods are being called, together with the identity it dispatches
/// under and the registry that holds its implementations.
///
/// Method bodies receive the Receiver they were called on, so they can downcast it or call other
/// methods on it.
#[derive(Clone, Copy)]
pub struct Receiver<'a> {
    value: &'a (dyn Any + 'static),
    identity: TypeToken,
    registry: &'a Registry,
}

impl<'a> Receiver<'a> {
    pub(crate) const fn new(
        value: &'a (dyn Any + 'static),
        identity: TypeToken,
        registry: &'a Registry,
    ) -> Receiver<'a> {
        Receiver {
            value,
            identity,
            registry,
        }
    }

    pub const fn value(&self) -> &'a (dyn Any + 'static) {
        self.value
    }

    /// Returns the identity this receiver dispatches under. This is the identity of the value's
    /// type, unless the receiver was created with an explicit one.
    pub const fn identity(&self) -> TypeToken {
        self.identity
    }

    pub const fn registry(&self) -> &'a Registry {
        self.registry
    }

    /// Returns the receiver's value as a `T`.
    pub fn downcast<T: Any>(&self) -> Result<&'a T, ReceiverTypeError> {
        self.value.downcast_ref::<T>().ok_or(ReceiverTypeError {
            expected: any::type_name::<T>(),
        })
    }

    /// Calls the member `method` with the provided `args`.
    ///
    /// Members the receiver's type defines natively are preferred, then members forwarded to a
    /// trait implementation. A forwarded member looks up the implementation it forwards to at the
    /// time of the call.
    ///
    /// Fails with [`NotImplementedError`] if the receiver's type has no such member but a defined
    /// trait declares `method`, or with [`MissingMemberError`] if no trait does.
    pub fn call(&self, method: &str, args: Args<'_>) -> Result<Value, CallError> {
        match self.registry.implementations.member(self.identity, method) {
            Some(Member::Native(body)) => body.invoke(self, args),
            Some(Member::Forward(descriptor)) => self.call_trait(&descriptor, method, args),
            None => match self.registry.traits.declaring(method) {
                Some(descriptor) => Err(self.not_implemented(&descriptor, method).into()),
                None => Err(MissingMemberError {
                    member: method.to_owned(),
                    target: self.registry.identities.describe(self.identity),
                }
                .into()),
            },
        }
    }

    /// Calls `method` from the trait described by `descriptor`, ignoring any native member or
    /// other trait's method of the same name.
    ///
    /// Fails with [`UnknownMethodError`] if the trait doesn't declare `method`, or with
    /// [`NotImplementedError`] if the receiver's type has no implementation of the trait or its
    /// implementation has no body for `method`.
    pub fn call_trait(
        &self,
        descriptor: &TraitDescriptor,
        method: &str,
        args: Args<'_>,
    ) -> Result<Value, CallError> {
        if !descriptor.declares(method) {
            return Err(UnknownMethodError {
                method: method.to_owned(),
                trait_name: descriptor.name(),
            }
            .into());
        }

        let body = self
            .registry
            .implementations
            .record(self.identity, descriptor.identity())
            .and_then(|record| record.method(method).cloned())
            .ok_or_else(|| self.not_implemented(descriptor, method))?;
        body.invoke(self, args)
    }

    /// Returns a view over the receiver's implementation of the trait described by `descriptor`,
    /// or None if its type doesn't implement the trait.
    pub fn implementation(&self, descriptor: &TraitDescriptor) -> Option<BoundView<'a>> {
        let record = self
            .registry
            .implementations
            .record(self.identity, descriptor.identity())?;
        Some(BoundView::new(*self, record))
    }

    pub(crate) fn not_implemented(
        &self,
        descriptor: &TraitDescriptor,
        method: &str,
    ) -> NotImplementedError {
        NotImplementedError {
            method: method.to_owned(),
            trait_name: descriptor.name(),
            target: self.registry.identities.describe(self.identity),
        }
    }
}

impl Debug for Receiver<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Receiver")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}
