use derive_more::{Display, Error};

#[derive(Debug, Display, Clone, Error)]
#[display("unable to resolve a type identity for {what}")]
pub struct InvalidTargetError {
    pub what: &'static str,
}

impl InvalidTargetError {
    pub(crate) const fn absent_value() -> InvalidTargetError {
        InvalidTargetError {
            what: "an absent value",
        }
    }

    pub(crate) const fn unnamed_argument() -> InvalidTargetError {
        InvalidTargetError {
            what: "a type argument with an empty name",
        }
    }
}
