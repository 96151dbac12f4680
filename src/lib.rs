//! This crate is my attempt at writing (some key parts of) a trait system that works at run time.
//!
//! # Purpose
//! Rust's traits are checked entirely by the compiler: an implementation exists before it is used,
//! supertraits are implemented before subtraits, and two implementations of one trait for one type
//! are rejected as incoherent. This crate reproduces those guarantees for behaviour attached to
//! types after the fact, at run time, where nothing but the registry itself can enforce them.
//!
//! # Method
//! The trait system is built bottom-up from four parts, each only trusting the ones before it:
//! - [`identity`]: Assigns every type (and every instantiation of a generic type) a unique,
//!   stable [`TypeToken`](identity::TypeToken).
//! - [`definition`]: Turns [`Blueprint`](definition::Blueprint)s into immutable
//!   [`TraitDescriptor`](definition::TraitDescriptor)s, resolving each trait's ancestors.
//! - [`implementation`]: Stores at most one method table per (type, trait) pair, and only once
//!   every ancestor of the trait is implemented for the same type.
//! - [`dispatch`]: Looks up the current method table on every call, so a value can call its trait
//!   methods by name.
//!
//! [`Registry`] ties them together. Method bodies work on dynamically typed [`value`]s, with
//! [`Method::typed`](value::Method::typed) recovering static types at the edges.
//!
//! # Error Handling
//! Every failure is reported through a [`Result`], with a union enum per operation
//! ([`DefineError`](definition::DefineError), [`ImplementError`](implementation::ImplementError),
//! [`CallError`](dispatch::CallError)) made up of small structs that implement
//! [`Error`](std::error::Error). Nothing is retried and nothing is swallowed. A failed
//! registration leaves the registry exactly as it was.
//!
//! # Features
//! - `global`: Provides the process-wide [`Registry::global`].
//! - `prelude`: Provides blueprints for the standard traits and the equality, ordering, hashing
//!   and display hooks that collections use, in [`prelude`].
//!
//! Both are enabled by default.
//!
//! # Dependencies
//! Errors are derived with `derive_more`, registries are guarded by `parking_lot` locks over
//! `rustc-hash` maps, and registration is logged through `tracing`. The crate never installs a
//! subscriber itself.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]
#![allow(clippy::new_without_default)]

pub mod definition;
pub mod dispatch;
pub mod identity;
pub mod implementation;
#[cfg(feature = "prelude")]
pub mod prelude;
pub mod registry;
pub mod value;

pub(crate) mod util;

#[doc(inline)]
pub use registry::Registry;
