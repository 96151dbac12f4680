use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Display, Clone, Error)]
#[display("trait {trait_name} redeclares method `{method}`, already declared by parent {parent}")]
pub struct ConflictingMethodError {
    pub method: &'static str,
    pub trait_name: &'static str,
    pub parent: &'static str,
}

#[derive(Debug, Display, Clone, Error)]
#[display("trait {trait_name} is its own ancestor: {chain}")]
pub struct CyclicAncestryError {
    pub trait_name: &'static str,
    pub chain: String,
}

#[derive(Debug, Display, Clone, From, Error, IsVariant)]
pub enum DefineError {
    ConflictingMethod(ConflictingMethodError),
    CyclicAncestry(CyclicAncestryError),
}
