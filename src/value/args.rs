use std::any::{self, Any};
use std::fmt::{self, Debug, Formatter};

use super::{ArgumentError, ArgumentTypeError, MissingArgumentError};

/// A borrowed, ordered list of arguments for a trait method, not including the receiver.
///
/// Usually built with the [`args!`](crate::args) macro, which borrows each argument in place.
#[derive(Clone, Copy)]
pub struct Args<'a> {
    values: &'a [&'a (dyn Any + 'static)],
}

impl<'a> Args<'a> {
    pub const fn new(values: &'a [&'a (dyn Any + 'static)]) -> Args<'a> {
        Args { values }
    }

    /// An empty argument list.
    pub const fn none() -> Args<'static> {
        Args { values: &[] }
    }

    pub const fn len(&self) -> usize {
        self.values.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the argument at `index` as a `T`.
    pub fn get<T: Any>(&self, index: usize) -> Result<&'a T, ArgumentError> {
        let value = self.raw(index).ok_or(MissingArgumentError {
            index,
            len: self.len(),
        })?;

        value.downcast_ref::<T>().ok_or_else(|| {
            ArgumentTypeError {
                index,
                expected: any::type_name::<T>(),
            }
            .into()
        })
    }

    /// Returns the argument at `index` without downcasting it.
    pub fn raw(&self, index: usize) -> Option<&'a (dyn Any + 'static)> {
        self.values.get(index).copied()
    }
}

impl Debug for Args<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Args").field("len", &self.len()).finish()
    }
}

/// Builds an [`Args`] list by borrowing each of the provided place expressions.
///
/// The list borrows temporaries, so it should be passed straight into the call that uses it.
///
/// ```
/// # use runtime_traits::args;
/// let (x, y) = (1_i64, String::from("two"));
/// assert_eq!(args![x, y].len(), 2);
/// assert_eq!(*args![x, y].get::<i64>(0).unwrap(), 1);
/// assert!(args![x, y].get::<i64>(1).is_err());
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::value::Args::none()
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::value::Args::new(&[$(&$arg as &(dyn ::std::any::Any + 'static)),+])
    };
}
