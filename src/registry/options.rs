/// When an implementation missing a body for one of its trait's methods is rejected.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Completeness {
    /// [`implement`](super::Registry::implement) fails with a
    /// [`MissingMethodError`](crate::implementation::MissingMethodError).
    #[default]
    AtRegistration,
    /// The implementation is accepted, calling the missing method fails with a
    /// [`NotImplementedError`](crate::dispatch::NotImplementedError).
    AtFirstCall,
}

/// What defining a trait does when its ancestor chain leads back to itself.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CyclePolicy {
    /// Definition fails with a [`CyclicAncestryError`](crate::definition::CyclicAncestryError).
    #[default]
    Reject,
    /// The revisited ancestor is skipped and contributes no further ancestors.
    Truncate,
}

/// Run-time configuration for a [`Registry`](super::Registry).
///
/// # Examples
/// ```
/// # use runtime_traits::registry::{Completeness, CyclePolicy, Registry, RegistryOptions};
/// let registry = Registry::with_options(
///     RegistryOptions::default().with_completeness(Completeness::AtFirstCall),
/// );
/// assert_eq!(registry.options().completeness, Completeness::AtFirstCall);
/// assert_eq!(registry.options().cycles, CyclePolicy::Reject);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RegistryOptions {
    pub completeness: Completeness,
    pub cycles: CyclePolicy,
}

impl RegistryOptions {
    pub const fn with_completeness(mut self, completeness: Completeness) -> RegistryOptions {
        self.completeness = completeness;
        self
    }

    pub const fn with_cycles(mut self, cycles: CyclePolicy) -> RegistryOptions {
        self.cycles = cycles;
        self
    }
}
