use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Display, Clone, Error)]
#[display("{target} already implements {trait_name}")]
pub struct DuplicateImplementationError {
    pub target: String,
    pub trait_name: &'static str,
}

#[derive(Debug, Display, Clone, Error)]
#[display("{target} must implement {parent} before it can implement {trait_name}")]
pub struct MissingParentImplementationError {
    pub target: String,
    pub trait_name: &'static str,
    pub parent: &'static str,
}

#[derive(Debug, Display, Clone, Error)]
#[display("trait {trait_name} does not declare a method `{method}`")]
pub struct UnknownMethodError {
    pub method: String,
    pub trait_name: &'static str,
}

#[derive(Debug, Display, Clone, Error)]
#[display("implementation of {trait_name} for {target} is missing method `{method}`")]
pub struct MissingMethodError {
    pub method: &'static str,
    pub trait_name: &'static str,
    pub target: String,
}

#[derive(Debug, Display, Clone, From, Error, IsVariant)]
pub enum ImplementError {
    DuplicateImplementation(DuplicateImplementationError),
    MissingParentImplementation(MissingParentImplementationError),
    UnknownMethod(UnknownMethodError),
    MissingMethod(MissingMethodError),
}
