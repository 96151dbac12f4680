//! Calling trait methods on values.
//!
//! Every call re-resolves its implementation from the registry at the moment it is made, nothing is
//! cached at the call site. A value's members can be called by name ([`Receiver::call`]), through
//! one specific trait ([`Receiver::call_trait`]), or through a [`BoundView`] over a single
//! implementation.

mod dispatcher;
mod error;
mod receiver;
mod tests;
mod view;

pub use dispatcher::*;
pub use error::*;
pub use receiver::*;
pub use view::*;
