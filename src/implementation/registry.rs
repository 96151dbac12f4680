use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use super::{
    DuplicateImplementationError, ImplRecord, ImplementError, MissingMethodError,
    MissingParentImplementationError, Overrides, UnknownMethodError,
};
use crate::definition::TraitDescriptor;
use crate::identity::TypeToken;
use crate::registry::Completeness;
use crate::value::Method;

/// A member a target type exposes by name: either one it defines natively, or one forwarded to
/// the implementation of a trait.
#[derive(Debug, Clone)]
pub enum Member {
    Native(Method),
    Forward(Arc<TraitDescriptor>),
}

/// Everything registered for a single target type.
#[derive(Debug, Default)]
struct TargetEntry {
    records: FxHashMap<TypeToken, Arc<ImplRecord>>,
    // Trait identities in registration order.
    order: Vec<TypeToken>,
    natives: FxHashMap<String, Method>,
    forwards: FxHashMap<String, Arc<TraitDescriptor>>,
}

impl TargetEntry {
    fn member(&self, name: &str) -> Option<Member> {
        match self.natives.get(name) {
            Some(native) => Some(Member::Native(native.clone())),
            None => self.forwards.get(name).cloned().map(Member::Forward),
        }
    }

    fn defines(&self, name: &str) -> bool {
        self.natives.contains_key(name) || self.forwards.contains_key(name)
    }

    /// Checks that the trait described by `descriptor` isn't implemented yet, and that all of its
    /// ancestors are.
    fn check_coherence(
        &self,
        target_name: &str,
        descriptor: &TraitDescriptor,
    ) -> Result<(), ImplementError> {
        if self.records.contains_key(&descriptor.identity()) {
            return Err(DuplicateImplementationError {
                target: target_name.to_owned(),
                trait_name: descriptor.name(),
            }
            .into());
        }

        match descriptor
            .ancestors()
            .iter()
            .find(|ancestor| !self.records.contains_key(&ancestor.identity()))
        {
            Some(ancestor) => Err(MissingParentImplementationError {
                target: target_name.to_owned(),
                trait_name: descriptor.name(),
                parent: ancestor.name(),
            }
            .into()),
            None => Ok(()),
        }
    }
}

/// Builds the method table for an implementation: the trait's default bodies, then `overrides`.
fn merge(
    target_name: &str,
    descriptor: &TraitDescriptor,
    overrides: Overrides,
    completeness: Completeness,
) -> Result<FxHashMap<String, Method>, ImplementError> {
    let mut methods: FxHashMap<String, Method> = descriptor
        .methods()
        .iter()
        .filter_map(|decl| Some((decl.name().to_owned(), decl.default()?.clone())))
        .collect();

    for (name, method) in overrides.into_methods() {
        if !descriptor.declares(&name) {
            return Err(UnknownMethodError {
                method: name,
                trait_name: descriptor.name(),
            }
            .into());
        }
        methods.insert(name, method);
    }

    if completeness == Completeness::AtRegistration
        && let Some(decl) = descriptor
            .methods()
            .iter()
            .find(|decl| !methods.contains_key(decl.name()))
    {
        return Err(MissingMethodError {
            method: decl.name(),
            trait_name: descriptor.name(),
            target: target_name.to_owned(),
        }
        .into());
    }

    Ok(methods)
}

/// The association from target types to their implementation records.
///
/// The registry never owns target values, only the method tables registered for their types.
/// Each target has its own lock, so registering for one type never blocks dispatch on another.
/// No lock is held while a method body runs.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `m`: The number of methods the trait declares.
/// - `a`: The number of ancestors the trait has.
///
/// | Method | Complexity |
/// |-|-|
/// | `implement` | `O(m + a)` |
/// | `record` | `O(1)` |
/// | `contains` | `O(1)` |
/// | `member` | `O(1)` |
#[derive(Debug, Default)]
pub struct ImplRegistry {
    targets: RwLock<FxHashMap<TypeToken, Arc<RwLock<TargetEntry>>>>,
}

impl ImplRegistry {
    pub fn new() -> ImplRegistry {
        ImplRegistry::default()
    }

    /// Registers the implementation of the trait described by `descriptor` for `target`.
    ///
    /// The record's method table starts from the trait's default bodies, then takes each of the
    /// `overrides`. On success, a forwarding member is installed on `target` for every method the
    /// trait declares, unless the target already has a member of that name.
    ///
    /// Registration is all or nothing: on failure, neither the record nor any forwarding members
    /// are installed.
    pub fn implement(
        &self,
        target: TypeToken,
        target_name: &str,
        descriptor: &Arc<TraitDescriptor>,
        overrides: Overrides,
        completeness: Completeness,
    ) -> Result<(), ImplementError> {
        // Nothing is created for `target` until the implementation has been validated.
        match self.existing(target) {
            Some(entry) => entry.read().check_coherence(target_name, descriptor)?,
            None => TargetEntry::default().check_coherence(target_name, descriptor)?,
        }
        let methods = merge(target_name, descriptor, overrides, completeness)?;

        let entry = self.entry(target);
        let mut entry = entry.write();
        // Another registration for `target` may have landed since the check above.
        entry.check_coherence(target_name, descriptor)?;

        let record = Arc::new(ImplRecord::new(Arc::clone(descriptor), methods));
        entry.records.insert(descriptor.identity(), record);
        entry.order.push(descriptor.identity());

        for decl in descriptor.methods() {
            if entry.defines(decl.name()) {
                trace!(
                    ty = target_name,
                    member = decl.name(),
                    "member already defined, not forwarding"
                );
                continue;
            }
            entry
                .forwards
                .insert(decl.name().to_owned(), Arc::clone(descriptor));
        }

        debug!(
            ty = target_name,
            trait_name = descriptor.name(),
            "registered implementation"
        );
        Ok(())
    }

    /// Defines `name` as a native member of `target`. Natives take precedence over forwarded
    /// members of the same name and a later native replaces an earlier one.
    pub fn define_native(&self, target: TypeToken, name: impl Into<String>, method: Method) {
        let name = name.into();
        trace!(%target, member = %name, "defined native member");
        self.entry(target).write().natives.insert(name, method);
    }

    /// Returns true if `target` has an implementation of the trait identified by `trait_identity`.
    pub fn contains(&self, target: TypeToken, trait_identity: TypeToken) -> bool {
        self.existing(target)
            .is_some_and(|entry| entry.read().records.contains_key(&trait_identity))
    }

    /// Returns the record stored for `target` and the trait identified by `trait_identity`.
    pub fn record(&self, target: TypeToken, trait_identity: TypeToken) -> Option<Arc<ImplRecord>> {
        self.existing(target)?
            .read()
            .records
            .get(&trait_identity)
            .cloned()
    }

    /// Resolves the member `name` of `target`.
    pub fn member(&self, target: TypeToken, name: &str) -> Option<Member> {
        self.existing(target)?.read().member(name)
    }

    /// Returns the descriptors of every trait `target` implements, in registration order.
    pub fn traits_of(&self, target: TypeToken) -> Vec<Arc<TraitDescriptor>> {
        let Some(entry) = self.existing(target) else {
            return Vec::new();
        };
        let entry = entry.read();
        entry
            .order
            .iter()
            .filter_map(|identity| entry.records.get(identity))
            .map(|record| Arc::clone(record.descriptor()))
            .collect()
    }

    /// Returns the number of implementation records across every target.
    pub fn len(&self) -> usize {
        self.targets
            .read()
            .values()
            .map(|entry| entry.read().records.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of target types with anything registered for them, whether
    /// implementations or native members.
    pub fn target_count(&self) -> usize {
        self.targets.read().len()
    }

    fn existing(&self, target: TypeToken) -> Option<Arc<RwLock<TargetEntry>>> {
        self.targets.read().get(&target).cloned()
    }

    fn entry(&self, target: TypeToken) -> Arc<RwLock<TargetEntry>> {
        if let Some(entry) = self.existing(target) {
            return entry;
        }
        Arc::clone(self.targets.write().entry(target).or_default())
    }
}
