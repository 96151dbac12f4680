use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Display, Clone, Error)]
#[display("missing argument {index}, only {len} were provided")]
pub struct MissingArgumentError {
    pub index: usize,
    pub len: usize,
}

#[derive(Debug, Display, Clone, Error)]
#[display("argument {index} is not of type {expected}")]
pub struct ArgumentTypeError {
    pub index: usize,
    pub expected: &'static str,
}

#[derive(Debug, Display, Clone, From, Error, IsVariant)]
pub enum ArgumentError {
    Missing(MissingArgumentError),
    Type(ArgumentTypeError),
}

#[derive(Debug, Display, Clone, Error)]
#[display("receiver is not of type {expected}")]
pub struct ReceiverTypeError {
    pub expected: &'static str,
}

#[derive(Debug, Display, Clone, Error)]
#[display("returned value is not of type {expected}")]
pub struct ReturnTypeError {
    pub expected: &'static str,
}

/// A failure reported by a method body itself, rather than by the trait system.
#[derive(Debug, Display, Clone, Error)]
#[display("{message}")]
pub struct MethodFailure {
    pub message: String,
}

impl MethodFailure {
    pub fn new(message: impl Into<String>) -> MethodFailure {
        MethodFailure {
            message: message.into(),
        }
    }
}
