use std::fmt::{self, Debug, Display, Formatter};
use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

/// An opaque identity for a nominal type, or for one instantiation of a generic type.
///
/// Tokens are only meaningful for equality and hashing. They are drawn from a single
/// process-wide counter and handed out once per type, so two different types never share one.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeToken(NonZeroU64);

impl TypeToken {
    /// Allocates a token that has never been handed out before.
    ///
    /// # Panics
    /// Panics if the counter wraps, which would take 2^64 allocations.
    pub(crate) fn fresh() -> TypeToken {
        let raw = NEXT_TOKEN.fetch_add(1, Ordering::Relaxed);
        match NonZeroU64::new(raw) {
            Some(raw) => TypeToken(raw),
            None => panic!("Type token counter overflowed!"),
        }
    }

    /// Returns the raw value of this token, for use in logs and diagnostics.
    pub const fn raw(self) -> u64 {
        self.0.get()
    }
}

impl Debug for TypeToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "TypeToken(#{})", self.raw())
    }
}

impl Display for TypeToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.raw())
    }
}
