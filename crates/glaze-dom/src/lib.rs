//! Sink-bound attribute containers for Glaze.
//!
//! The `glaze-attr` core is pure: it never reads or writes a live
//! document object. This crate is the adapter layer on the other side of
//! that boundary. A bound container owns a core container plus an
//! [`AttributeSink`], and pushes the canonical serialized form into the
//! sink after every mutation that actually changed state.
//!
//! # Design
//!
//! The sink is injected rather than embedded as a live handle, so any
//! host object that can accept a `(name, value)` write — a DOM element,
//! a test recorder, a template renderer — can sit behind a bound
//! container.

/// Containers bound to an attribute sink.
pub mod bound;
/// Qualified-name (`prefix:local`) splitting.
pub mod qualified;
/// The external write boundary.
pub mod sink;

pub use bound::{BoundAttributes, BoundTokenList};
pub use qualified::QualifiedName;
pub use sink::AttributeSink;
