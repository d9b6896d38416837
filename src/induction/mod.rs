//! Precondition/effect induction.
//!
//! One [`ActionSchema`] accumulates evidence per distinct action name;
//! the [`Inducer`] orchestrates the two-phase run over a corpus and
//! assembles the output model.

pub mod inducer;
pub mod schema;

pub use inducer::{learn, learn_with, learn_with_sorts, Inducer};
pub use schema::{ActionSchema, SchemaPhase};
