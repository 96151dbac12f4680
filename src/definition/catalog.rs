use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::{debug, trace, warn};

use super::{
    BlueprintRef, ConflictingMethodError, CyclicAncestryError, DefineError, TraitDescriptor,
};
use crate::identity::{IdentityRegistry, TypeToken};
use crate::registry::CyclePolicy;

/// The set of traits defined so far, keyed by trait identity.
///
/// Defining a blueprint also defines each of its ancestors, so every descriptor's ancestors are
/// in the catalog too. Descriptors are built once and shared afterwards, repeated definitions of
/// the same blueprint return the cached descriptor.
#[derive(Debug, Default)]
pub struct TraitCatalog {
    defined: RwLock<FxHashMap<TypeToken, Arc<TraitDescriptor>>>,
}

impl TraitCatalog {
    pub fn new() -> TraitCatalog {
        TraitCatalog::default()
    }

    /// Returns the descriptor for `blueprint`, building it (and any undefined ancestors) on first
    /// request.
    ///
    /// Fails if one of the blueprint's own methods is already declared by an ancestor, or (with
    /// [`CyclePolicy::Reject`]) if the blueprint is reachable from its own parents. Nothing is
    /// added to the catalog when definition fails.
    pub fn define(
        &self,
        ids: &IdentityRegistry,
        blueprint: BlueprintRef,
        cycles: CyclePolicy,
    ) -> Result<Arc<TraitDescriptor>, DefineError> {
        let identity = blueprint.identity(ids);
        if let Some(descriptor) = self.get(identity) {
            trace!(trait_name = blueprint.name(), "trait already defined");
            return Ok(descriptor);
        }

        let mut defined = self.defined.write();
        // Built into a scratch map first, so a failure part way up the chain leaves no ancestors
        // behind.
        let mut walk = Walk {
            ids,
            cycles,
            defined: &defined,
            built: FxHashMap::default(),
            path: Vec::new(),
        };
        let descriptor = walk.resolve(blueprint)?;
        let built = walk.built;
        defined.extend(built);
        Ok(descriptor)
    }

    pub fn get(&self, identity: TypeToken) -> Option<Arc<TraitDescriptor>> {
        self.defined.read().get(&identity).cloned()
    }

    /// Returns a defined trait that declares `method` itself, preferring the one whose identity
    /// was assigned first.
    pub fn declaring(&self, method: &str) -> Option<Arc<TraitDescriptor>> {
        self.defined
            .read()
            .values()
            .filter(|descriptor| descriptor.declares(method))
            .min_by_key(|descriptor| descriptor.identity.raw())
            .cloned()
    }

    pub fn contains(&self, identity: TypeToken) -> bool {
        self.defined.read().contains_key(&identity)
    }

    pub fn len(&self) -> usize {
        self.defined.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct Walk<'a> {
    ids: &'a IdentityRegistry,
    cycles: CyclePolicy,
    defined: &'a FxHashMap<TypeToken, Arc<TraitDescriptor>>,
    built: FxHashMap<TypeToken, Arc<TraitDescriptor>>,
    // Traits whose ancestors are still being resolved, outermost first.
    path: Vec<(TypeToken, &'static str)>,
}

impl Walk<'_> {
    fn lookup(&self, identity: TypeToken) -> Option<Arc<TraitDescriptor>> {
        self.defined
            .get(&identity)
            .or_else(|| self.built.get(&identity))
            .cloned()
    }

    fn resolve(&mut self, blueprint: BlueprintRef) -> Result<Arc<TraitDescriptor>, DefineError> {
        let identity = blueprint.identity(self.ids);
        if let Some(descriptor) = self.lookup(identity) {
            return Ok(descriptor);
        }

        self.path.push((identity, blueprint.name()));

        let mut parents = Vec::new();
        let mut ancestors: Vec<Arc<TraitDescriptor>> = Vec::new();
        for parent in blueprint.parents() {
            let parent_identity = parent.identity(self.ids);
            if self.path.iter().any(|(on_path, _)| *on_path == parent_identity) {
                match self.cycles {
                    CyclePolicy::Reject => return Err(self.cycle_error(parent).into()),
                    CyclePolicy::Truncate => {
                        warn!(
                            trait_name = blueprint.name(),
                            parent = parent.name(),
                            "ancestor cycle truncated"
                        );
                        continue;
                    },
                }
            }

            let parent = self.resolve(parent)?;
            for ancestor in parent.ancestors().iter().chain([&parent]) {
                if !ancestors.iter().any(|known| known.identity == ancestor.identity) {
                    ancestors.push(Arc::clone(ancestor));
                }
            }
            if !parents.contains(&parent.identity) {
                parents.push(parent.identity);
            }
        }

        self.path.pop();

        let methods = blueprint.declarations().into_vec();
        for decl in &methods {
            if let Some(parent) = ancestors.iter().find(|ancestor| ancestor.declares(decl.name())) {
                return Err(ConflictingMethodError {
                    method: decl.name(),
                    trait_name: blueprint.name(),
                    parent: parent.name,
                }
                .into());
            }
        }

        let descriptor = Arc::new(TraitDescriptor {
            identity,
            name: blueprint.name(),
            methods,
            parents,
            ancestors,
        });
        debug!(
            trait_name = descriptor.name,
            identity = %identity,
            methods = descriptor.methods.len(),
            ancestors = descriptor.ancestors.len(),
            "defined trait"
        );
        self.built.insert(identity, Arc::clone(&descriptor));
        Ok(descriptor)
    }

    fn cycle_error(&self, revisited: BlueprintRef) -> CyclicAncestryError {
        let revisited_identity = revisited.identity(self.ids);
        let start = self
            .path
            .iter()
            .position(|(identity, _)| *identity == revisited_identity)
            .unwrap_or(0);
        let mut chain: Vec<&str> = self.path[start..].iter().map(|(_, name)| *name).collect();
        chain.push(revisited.name());
        CyclicAncestryError {
            trait_name: revisited.name(),
            chain: chain.join(" -> "),
        }
    }
}
