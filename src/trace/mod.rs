//! Input data model for sift.
//!
//! These types represent the observed trace corpus handed to the
//! induction engine by the trace/observation collaborator: planning
//! objects, ground fluents and actions, transitions, and the corpus
//! container with its keyed accessors. The whole module is read-only
//! from the engine's point of view; induction never mutates a
//! transition, fluent, or object.

pub mod corpus;
pub mod fluent;
pub mod objects;
pub mod transition;

pub use corpus::TraceCorpus;
pub use fluent::{GroundFluent, State};
pub use objects::{GroundAction, PlanningObject};
pub use transition::{ChangeKind, FluentChange, Transition};
