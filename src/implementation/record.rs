use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::definition::TraitDescriptor;
use crate::util::fmt::DebugRaw;
use crate::value::Method;

/// The method table one target type supplies for one trait: the trait's defaults merged with the
/// implementation's overrides.
///
/// Records are immutable once stored. Under
/// [`Completeness::AtFirstCall`](crate::registry::Completeness::AtFirstCall), a record may lack
/// bodies for some of its trait's required methods.
pub struct ImplRecord {
    descriptor: Arc<TraitDescriptor>,
    methods: FxHashMap<String, Method>,
}

impl ImplRecord {
    pub(crate) fn new(
        descriptor: Arc<TraitDescriptor>,
        methods: FxHashMap<String, Method>,
    ) -> ImplRecord {
        ImplRecord {
            descriptor,
            methods,
        }
    }

    /// Returns the descriptor of the implemented trait.
    pub fn descriptor(&self) -> &Arc<TraitDescriptor> {
        &self.descriptor
    }

    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.get(name)
    }

    /// Returns the names of all methods with a body, in the trait's declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.descriptor
            .methods()
            .iter()
            .map(|decl| decl.name())
            .filter(|name| self.methods.contains_key(*name))
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Returns true if every method the trait declares has a body.
    pub fn is_complete(&self) -> bool {
        self.len() == self.descriptor.methods().len()
    }
}

impl Debug for ImplRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImplRecord")
            .field("trait", &DebugRaw(self.descriptor.name()))
            .field("methods", &self.names().map(DebugRaw).collect::<Vec<_>>())
            .finish()
    }
}
