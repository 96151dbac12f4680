use std::any::Any;

use rustc_hash::FxHashMap;

use crate::dispatch::CallError;
use crate::value::{Args, Method};

/// The method bodies an implementation supplies in place of (or in the absence of) its trait's
/// defaults.
///
/// Supplying the same name twice keeps the later body.
///
/// # Examples
/// ```
/// # use runtime_traits::implementation::Overrides;
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// let overrides = Overrides::new()
///     .with_typed("show", |point: &Point, _| Ok(format!("({},{})", point.x, point.y)));
/// assert_eq!(overrides.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    methods: FxHashMap<String, Method>,
}

impl Overrides {
    pub fn new() -> Overrides {
        Overrides::default()
    }

    pub fn with(mut self, name: impl Into<String>, method: Method) -> Overrides {
        self.methods.insert(name.into(), method);
        self
    }

    /// Adds a body for receivers of type `T`, see [`Method::typed`].
    pub fn with_typed<T, R, F>(self, name: impl Into<String>, body: F) -> Overrides
    where
        T: Any,
        R: Any,
        F: Fn(&T, Args<'_>) -> Result<R, CallError> + Send + Sync + 'static,
    {
        self.with(name, Method::typed(body))
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    pub(crate) fn into_methods(self) -> impl Iterator<Item = (String, Method)> {
        self.methods.into_iter()
    }
}

impl<N: Into<String>> FromIterator<(N, Method)> for Overrides {
    fn from_iter<I: IntoIterator<Item = (N, Method)>>(iter: I) -> Self {
        Overrides {
            methods: iter
                .into_iter()
                .map(|(name, method)| (name.into(), method))
                .collect(),
        }
    }
}
