use std::any::{self, Any, TypeId};
use std::fmt::{self, Debug, Formatter};
use std::sync::LazyLock;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::trace;

use super::{InstantiationKey, InvalidTargetError, TypeArg, TypeToken};

static TABLES: LazyLock<Tables> = LazyLock::new(Tables::default);

/// The process-wide identity tables. Entries are never removed.
#[derive(Default)]
struct Tables {
    types: RwLock<FxHashMap<TypeId, TypeToken>>,
    instantiations: RwLock<FxHashMap<TypeToken, FxHashMap<InstantiationKey, TypeToken>>>,
    names: RwLock<FxHashMap<TypeToken, Box<str>>>,
}

/// Assigns [`TypeToken`]s to types and generic instantiations, lazily and exactly once.
///
/// Identities belong to the process, not to any one registry: every IdentityRegistry is a handle
/// onto the same three tables.
/// - Rust types to their tokens.
/// - Per generic base token, instantiation keys to the token of that instantiation.
/// - Tokens to display names, used in error messages and logs.
///
/// So a type (or instantiation) has the same token for the life of the process, no matter which
/// [`Registry`](crate::registry::Registry) asks for it.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `of` | `O(1)` |
/// | `of_val` | `O(1)` |
/// | `of_generic` | `O(a)`* |
/// | `name_of` | `O(1)`** |
///
/// \* Where `a` is the number of type arguments, which are hashed to find the instantiation.
///
/// \** Plus the length of the name, which is copied out.
#[derive(Default, Clone, Copy)]
pub struct IdentityRegistry {
    _shared: (),
}

impl IdentityRegistry {
    /// Returns a handle onto the process-wide identity tables.
    pub fn new() -> IdentityRegistry {
        IdentityRegistry::default()
    }

    /// Returns the token for `T`, creating one on first request.
    pub fn of<T: ?Sized + 'static>(&self) -> TypeToken {
        self.of_type_id(TypeId::of::<T>(), any::type_name::<T>())
    }

    /// Returns the token for the type of `value`. Instances don't have identities of their own,
    /// so this is always the same token that [`of`](IdentityRegistry::of) returns for the type.
    pub fn of_val(&self, value: &(dyn Any + 'static)) -> TypeToken {
        // The concrete type's name isn't recoverable from a trait object, so a type first seen
        // here is named by its token until something names it properly.
        self.of_type_id((*value).type_id(), "")
    }

    /// Returns the token for the type of `value`, failing with [`InvalidTargetError`] if there is
    /// no value at all.
    pub fn of_value(
        &self,
        value: Option<&(dyn Any + 'static)>,
    ) -> Result<TypeToken, InvalidTargetError> {
        match value {
            Some(value) => Ok(self.of_val(value)),
            None => Err(InvalidTargetError::absent_value()),
        }
    }

    /// Returns the token for the instantiation of the generic type `T` with the ordered `args`,
    /// creating one the first time this exact argument list is seen.
    ///
    /// An empty argument list refers to `T` itself.
    pub fn of_generic<T: ?Sized + 'static>(
        &self,
        args: &[TypeArg],
    ) -> Result<TypeToken, InvalidTargetError> {
        let base = self.of::<T>();
        if args.is_empty() {
            return Ok(base);
        }
        Ok(self.instantiate(base, InstantiationKey::new(args)?))
    }

    /// Returns the token for the instantiation of `base` described by `key`, creating it on a
    /// miss.
    pub fn instantiate(&self, base: TypeToken, key: InstantiationKey) -> TypeToken {
        if key.is_empty() {
            return base;
        }

        let found = TABLES
            .instantiations
            .read()
            .get(&base)
            .and_then(|keys| keys.get(&key))
            .copied();
        if let Some(token) = found {
            return token;
        }

        let name = self.describe_instantiation(base, &key);
        let mut instantiations = TABLES.instantiations.write();
        // Another writer may have raced us here between the locks.
        *instantiations
            .entry(base)
            .or_default()
            .entry(key)
            .or_insert_with(|| {
                let token = TypeToken::fresh();
                trace!(%token, %base, %name, "assigned generic instantiation identity");
                TABLES.names.write().insert(token, name.into_boxed_str());
                token
            })
    }

    /// Returns the display name recorded for `token`, if a name is known for it.
    pub fn name_of(&self, token: TypeToken) -> Option<String> {
        TABLES.names.read().get(&token).map(|name| name.to_string())
    }

    /// Returns the display name of `token`, or the token itself when no name is known.
    pub fn describe(&self, token: TypeToken) -> String {
        self.name_of(token).unwrap_or_else(|| token.to_string())
    }

    /// Returns the number of distinct identities (including instantiations) handed out by the
    /// process so far.
    pub fn len(&self) -> usize {
        let instantiations: usize = TABLES
            .instantiations
            .read()
            .values()
            .map(FxHashMap::len)
            .sum();
        TABLES.types.read().len() + instantiations
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn of_type_id(&self, id: TypeId, name: &'static str) -> TypeToken {
        let found = TABLES.types.read().get(&id).copied();
        if let Some(token) = found {
            if !name.is_empty() {
                self.backfill_name(token, name);
            }
            return token;
        }

        let mut types = TABLES.types.write();
        *types.entry(id).or_insert_with(|| {
            let token = TypeToken::fresh();
            trace!(%token, name, "assigned type identity");
            if !name.is_empty() {
                TABLES.names.write().insert(token, name.into());
            }
            token
        })
    }

    fn backfill_name(&self, token: TypeToken, name: &'static str) {
        if TABLES.names.read().contains_key(&token) {
            return;
        }
        TABLES.names.write().entry(token).or_insert_with(|| name.into());
    }

    fn describe_instantiation(&self, base: TypeToken, key: &InstantiationKey) -> String {
        let mut name = self.describe(base);
        name.push('<');
        for (i, arg) in key.args().iter().enumerate() {
            if i > 0 {
                name.push_str(", ");
            }
            match arg {
                TypeArg::Token(token) => name.push_str(&self.describe(*token)),
                TypeArg::Named(arg) => name.push_str(arg),
            }
        }
        name.push('>');
        name
    }
}

impl Debug for IdentityRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityRegistry")
            .field("len", &self.len())
            .finish()
    }
}
