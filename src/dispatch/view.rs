use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use super::{CallError, Receiver};
use crate::definition::TraitDescriptor;
use crate::implementation::{ImplRecord, UnknownMethodError};
use crate::value::{Args, Method, Value};

/// A view over one value's implementation of one trait, with the value bound as the receiver of
/// every method.
///
/// The view holds the implementation record it was created from. Records never change once
/// stored, so the view stays accurate for as long as it lives.
#[derive(Clone)]
pub struct BoundView<'a> {
    receiver: Receiver<'a>,
    record: Arc<ImplRecord>,
}

impl<'a> BoundView<'a> {
    pub(crate) fn new(receiver: Receiver<'a>, record: Arc<ImplRecord>) -> BoundView<'a> {
        BoundView { receiver, record }
    }

    pub fn receiver(&self) -> &Receiver<'a> {
        &self.receiver
    }

    pub fn descriptor(&self) -> &Arc<TraitDescriptor> {
        self.record.descriptor()
    }

    /// Returns the names of the methods available through this view.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.record.names()
    }

    /// Returns the method `name`, bound to the view's receiver.
    ///
    /// Fails with [`UnknownMethodError`] if the trait doesn't declare `name`, or with a
    /// [`NotImplementedError`](super::NotImplementedError) if the implementation has no body for
    /// it.
    pub fn method(&self, name: &str) -> Result<BoundMethod<'a>, CallError> {
        let descriptor = self.record.descriptor();
        if !descriptor.declares(name) {
            return Err(UnknownMethodError {
                method: name.to_owned(),
                trait_name: descriptor.name(),
            }
            .into());
        }

        match self.record.method(name) {
            Some(method) => Ok(BoundMethod {
                receiver: self.receiver,
                method: method.clone(),
            }),
            None => Err(self.receiver.not_implemented(descriptor, name).into()),
        }
    }

    /// Calls the method `name` on the view's receiver with the provided `args`.
    pub fn call(&self, name: &str, args: Args<'_>) -> Result<Value, CallError> {
        self.method(name)?.invoke(args)
    }
}

impl Debug for BoundView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundView")
            .field("receiver", &self.receiver)
            .field("record", &self.record)
            .finish()
    }
}

/// A single trait method with its receiver already bound.
#[derive(Debug, Clone)]
pub struct BoundMethod<'a> {
    receiver: Receiver<'a>,
    method: Method,
}

impl BoundMethod<'_> {
    pub fn invoke(&self, args: Args<'_>) -> Result<Value, CallError> {
        self.method.invoke(&self.receiver, args)
    }
}
