use std::any::{self, Any};
use std::fmt::{self, Debug, Formatter};

use super::ReturnTypeError;
use crate::util::result::ResultExtension;

/// The result of a trait method: any `'static` value, boxed.
pub struct Value(Box<dyn Any>);

impl Value {
    pub fn new<T: Any>(value: T) -> Value {
        Value(Box::new(value))
    }

    /// A Value containing `()`, for methods that return nothing.
    pub fn unit() -> Value {
        Value::new(())
    }

    /// Returns true if the contained value is of type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.0.is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Result<&T, ReturnTypeError> {
        self.0.downcast_ref::<T>().ok_or(ReturnTypeError {
            expected: any::type_name::<T>(),
        })
    }

    /// Moves the contained value out as a `T`, or returns an error if it is some other type.
    pub fn downcast<T: Any>(self) -> Result<T, ReturnTypeError> {
        match self.0.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(_) => Err(ReturnTypeError {
                expected: any::type_name::<T>(),
            }),
        }
    }

    /// Moves the contained value out as a `T`.
    ///
    /// # Panics
    /// Panics if the contained value isn't a `T`. See [`downcast`](Value::downcast) for a
    /// non-panicking version.
    pub fn take<T: Any>(self) -> T {
        self.downcast().throw()
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Value").finish_non_exhaustive()
    }
}
