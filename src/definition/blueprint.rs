use std::any::{self, TypeId};
use std::fmt::{self, Debug, Formatter};

use crate::identity::{IdentityRegistry, TypeToken};
use crate::value::Method;

/// A nominal type that acts as the blueprint for a trait.
///
/// Blueprints are usually unit structs. They carry no data themselves, only the trait's name, its
/// direct parents and its method declarations.
///
/// # Examples
/// ```
/// # use runtime_traits::definition::{Blueprint, BlueprintRef, Declarations};
/// # use runtime_traits::value::{Method, Value};
/// struct Named;
///
/// impl Blueprint for Named {
///     const NAME: &'static str = "Named";
///
///     fn declare(methods: &mut Declarations) {
///         methods.require("name");
///     }
/// }
///
/// struct Greet;
///
/// impl Blueprint for Greet {
///     const NAME: &'static str = "Greet";
///
///     fn parents() -> Vec<BlueprintRef> {
///         vec![BlueprintRef::of::<Named>()]
///     }
///
///     fn declare(methods: &mut Declarations) {
///         methods.provide("greet", Method::new(|receiver, args| {
///             let name = receiver.call("name", args)?.downcast::<String>()?;
///             Ok(Value::new(format!("Hello, {name}!")))
///         }));
///     }
/// }
/// ```
pub trait Blueprint: 'static {
    /// The trait's display name, used in errors and logs.
    const NAME: &'static str;

    /// The traits this trait directly extends, in declaration order.
    fn parents() -> Vec<BlueprintRef> {
        Vec::new()
    }

    /// Declares the trait's own methods, with default bodies where it has them. Methods inherited
    /// from parents must not be declared again.
    fn declare(methods: &mut Declarations);
}

/// A type-erased handle to a [`Blueprint`], so that ancestor chains can be walked without knowing
/// each parent's type statically.
#[derive(Clone, Copy)]
pub struct BlueprintRef {
    type_id: fn() -> TypeId,
    type_name: fn() -> &'static str,
    name: &'static str,
    parents: fn() -> Vec<BlueprintRef>,
    declare: fn(&mut Declarations),
}

impl BlueprintRef {
    pub fn of<B: Blueprint>() -> BlueprintRef {
        BlueprintRef {
            type_id: TypeId::of::<B>,
            type_name: any::type_name::<B>,
            name: B::NAME,
            parents: B::parents,
            declare: B::declare,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the identity of the blueprint type, which is also the identity of the trait.
    pub fn identity(&self, ids: &IdentityRegistry) -> TypeToken {
        ids.of_type_id((self.type_id)(), (self.type_name)())
    }

    pub fn parents(&self) -> Vec<BlueprintRef> {
        (self.parents)()
    }

    pub fn declarations(&self) -> Declarations {
        let mut methods = Declarations::default();
        (self.declare)(&mut methods);
        methods
    }
}

impl Debug for BlueprintRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlueprintRef")
            .field("name", &self.name)
            .field("type", &(self.type_name)())
            .finish()
    }
}

/// A single method declared by a trait, with its default body if it has one.
#[derive(Debug, Clone)]
pub struct MethodDecl {
    name: &'static str,
    default: Option<Method>,
}

impl MethodDecl {
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn default(&self) -> Option<&Method> {
        self.default.as_ref()
    }

    /// Returns true if implementations must supply this method themselves.
    pub const fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

/// The ordered set of methods a blueprint declares.
///
/// Declaring the same name twice replaces the earlier declaration.
#[derive(Debug, Clone, Default)]
pub struct Declarations {
    methods: Vec<MethodDecl>,
}

impl Declarations {
    /// Declares a method with no default body.
    pub fn require(&mut self, name: &'static str) -> &mut Declarations {
        self.declare(name, None)
    }

    /// Declares a method with a default body, used unless an implementation overrides it.
    pub fn provide(&mut self, name: &'static str, body: Method) -> &mut Declarations {
        self.declare(name, Some(body))
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    pub(crate) fn into_vec(self) -> Vec<MethodDecl> {
        self.methods
    }

    fn declare(&mut self, name: &'static str, default: Option<Method>) -> &mut Declarations {
        let decl = MethodDecl { name, default };
        match self.methods.iter_mut().find(|existing| existing.name == name) {
            Some(existing) => *existing = decl,
            None => self.methods.push(decl),
        }
        self
    }
}
