use std::fmt::{self, Debug, Formatter};

/// Writes the contained text as-is when debug formatted, without quotes or escapes. Used for
/// placeholders such as method bodies, which have no meaningful debug representation.
pub struct DebugRaw<'a>(pub &'a str);

impl Debug for DebugRaw<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
