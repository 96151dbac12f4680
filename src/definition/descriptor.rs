use std::sync::Arc;

use super::MethodDecl;
use crate::identity::TypeToken;
use crate::value::Method;

/// The resolved, immutable form of a trait.
///
/// A descriptor knows its own methods and every trait it extends, directly or transitively. The
/// ancestor list is ordered deepest-first: every ancestor appears after all of its own ancestors,
/// so implementing a trait's ancestors in list order always installs parents before children.
/// Ancestors reachable along more than one path (diamonds) appear once.
#[derive(Debug)]
pub struct TraitDescriptor {
    pub(crate) identity: TypeToken,
    pub(crate) name: &'static str,
    pub(crate) methods: Vec<MethodDecl>,
    pub(crate) parents: Vec<TypeToken>,
    pub(crate) ancestors: Vec<Arc<TraitDescriptor>>,
}

impl TraitDescriptor {
    pub const fn identity(&self) -> TypeToken {
        self.identity
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the trait's own method declarations, in declaration order. Methods inherited from
    /// ancestors are not included.
    pub fn methods(&self) -> &[MethodDecl] {
        &self.methods
    }

    /// Returns true if the trait itself declares a method called `name`.
    pub fn declares(&self, name: &str) -> bool {
        self.declaration(name).is_some()
    }

    pub fn declaration(&self, name: &str) -> Option<&MethodDecl> {
        self.methods.iter().find(|decl| decl.name() == name)
    }

    /// Returns the default body for `name`, if the trait declares one.
    pub fn default_body(&self, name: &str) -> Option<&Method> {
        self.declaration(name).and_then(MethodDecl::default)
    }

    /// Returns the identities of the traits this one directly extends.
    pub fn parents(&self) -> &[TypeToken] {
        &self.parents
    }

    pub fn ancestors(&self) -> &[Arc<TraitDescriptor>] {
        &self.ancestors
    }

    /// Returns true if `other` is one of this trait's ancestors.
    pub fn extends(&self, other: &TraitDescriptor) -> bool {
        self.ancestors
            .iter()
            .any(|ancestor| ancestor.identity == other.identity)
    }

    /// Returns the ancestor (or this trait itself) that declares the method `name`.
    pub fn declaring(&self, name: &str) -> Option<&TraitDescriptor> {
        if self.declares(name) {
            return Some(self);
        }
        self.ancestors
            .iter()
            .rev()
            .map(Arc::as_ref)
            .find(|ancestor| ancestor.declares(name))
    }
}
