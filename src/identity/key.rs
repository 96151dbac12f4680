use std::borrow::Cow;

use super::{InvalidTargetError, TypeToken};

/// A single argument of a generic instantiation.
///
/// Arguments that are themselves types known to an
/// [`IdentityRegistry`](super::IdentityRegistry) should be passed by token. Anything else (such
/// as a type that only exists at run time) can be passed by its display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeArg {
    Token(TypeToken),
    Named(Cow<'static, str>),
}

impl TypeArg {
    pub fn named(name: impl Into<Cow<'static, str>>) -> TypeArg {
        TypeArg::Named(name.into())
    }
}

impl From<TypeToken> for TypeArg {
    fn from(value: TypeToken) -> Self {
        TypeArg::Token(value)
    }
}

impl From<&'static str> for TypeArg {
    fn from(value: &'static str) -> Self {
        TypeArg::Named(Cow::Borrowed(value))
    }
}

impl From<String> for TypeArg {
    fn from(value: String) -> Self {
        TypeArg::Named(Cow::Owned(value))
    }
}

/// The lookup key for one generic instantiation, derived from its ordered argument list.
///
/// Two keys are equal exactly when their argument lists are equal element-wise, so argument order
/// is significant: `Pair<A, B>` and `Pair<B, A>` are different instantiations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstantiationKey(Box<[TypeArg]>);

impl InstantiationKey {
    /// Creates a key from the provided `args`, failing if any of them is named by an empty
    /// string.
    pub fn new(args: &[TypeArg]) -> Result<InstantiationKey, InvalidTargetError> {
        for arg in args {
            if let TypeArg::Named(name) = arg
                && name.is_empty()
            {
                return Err(InvalidTargetError::unnamed_argument());
            }
        }
        Ok(InstantiationKey(args.into()))
    }

    pub fn args(&self) -> &[TypeArg] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
