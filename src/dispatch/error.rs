use derive_more::{Display, Error, From, IsVariant};

use crate::implementation::UnknownMethodError;
use crate::value::{ArgumentError, MethodFailure, ReceiverTypeError, ReturnTypeError};

#[derive(Debug, Display, Clone, Error)]
#[display("{target} does not implement `{method}` from trait {trait_name}")]
pub struct NotImplementedError {
    pub method: String,
    pub trait_name: &'static str,
    pub target: String,
}

#[derive(Debug, Display, Clone, Error)]
#[display("{target} has no member `{member}`")]
pub struct MissingMemberError {
    pub member: String,
    pub target: String,
}

/// Any failure raised while calling a trait method, by the trait system or by the method body.
#[derive(Debug, Display, Clone, From, Error, IsVariant)]
pub enum CallError {
    NotImplemented(NotImplementedError),
    MissingMember(MissingMemberError),
    UnknownMethod(UnknownMethodError),
    Argument(ArgumentError),
    ReceiverType(ReceiverTypeError),
    ReturnType(ReturnTypeError),
    Failed(MethodFailure),
}

impl CallError {
    /// Creates a [`MethodFailure`] with the provided `message`, for method bodies to report their
    /// own errors.
    pub fn failure(message: impl Into<String>) -> CallError {
        MethodFailure::new(message).into()
    }
}
