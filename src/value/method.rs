use std::any::Any;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use super::{Args, Value};
use crate::dispatch::{CallError, Receiver};
use crate::util::fmt::DebugRaw;

type Body = dyn Fn(&Receiver<'_>, Args<'_>) -> Result<Value, CallError> + Send + Sync;

/// A shareable trait method body, either a default supplied by a trait or an override supplied
/// by an implementation.
///
/// Cloning a Method is cheap, it only clones a reference to the body.
#[derive(Clone)]
pub struct Method(Arc<Body>);

impl Method {
    /// Creates a Method from a body that works on any receiver. Default bodies are usually
    /// written this way, calling other trait methods through the [`Receiver`].
    pub fn new<F>(body: F) -> Method
    where
        F: Fn(&Receiver<'_>, Args<'_>) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        Method(Arc::new(body))
    }

    /// Creates a Method for receivers of type `T`. The receiver is downcast before `body` is
    /// invoked and the result is boxed afterwards.
    ///
    /// Invoking the Method on a receiver of any other type fails with a
    /// [`ReceiverTypeError`](super::ReceiverTypeError).
    pub fn typed<T, R, F>(body: F) -> Method
    where
        T: Any,
        R: Any,
        F: Fn(&T, Args<'_>) -> Result<R, CallError> + Send + Sync + 'static,
    {
        Method::new(move |receiver, args| {
            let this = receiver.downcast::<T>()?;
            body(this, args).map(Value::new)
        })
    }

    /// Invokes the body with the provided `receiver` and `args`.
    pub fn invoke(&self, receiver: &Receiver<'_>, args: Args<'_>) -> Result<Value, CallError> {
        (self.0)(receiver, args)
    }

    /// Returns true if both Methods share the same body.
    pub fn same_body(&self, other: &Method) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Debug for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Method").field(&DebugRaw("<body>")).finish()
    }
}
