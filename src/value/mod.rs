//! Dynamically typed values passed into and out of trait methods.
//!
//! Method bodies all share one signature: they take a [`Receiver`](crate::dispatch::Receiver) and
//! an [`Args`] list and return a [`Value`]. [`Method::typed`] recovers static types at the edges
//! by downcasting the receiver and boxing the result.

mod args;
mod error;
mod method;
mod value;

pub use args::*;
pub use error::*;
pub use method::*;
pub use value::*;
