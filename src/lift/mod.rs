//! Lifted literals and the per-action literal universe.
//!
//! A lifted (parameter-bound) literal says "predicate P holds of the
//! objects bound to action-parameter positions i, j, ...". The universe
//! builder enumerates every such literal obtainable by matching an
//! observed fluent's arguments, object for object, against an action's
//! observed parameter tuples.

pub mod literal;
pub mod universe;

pub use literal::{LiftedFluent, LiftedLiteral};
pub use universe::{bind_fluent, literal_universe};
