//! sift - STRIPS action-model induction from observed traces.
//!
//! sift infers a lifted action model (preconditions and add/delete
//! effects per action schema) from a corpus of grounded
//! state-action-state transitions. Sorts are inferred by parameter
//! co-occurrence, candidate literals are enumerated per action, and
//! the precondition set shrinks monotonically over observations while
//! effect evidence accumulates.

pub mod config;
pub mod error;
pub mod induction;
pub mod lift;
pub mod model;
pub mod sorts;
pub mod trace;

pub use config::{InductionConfig, ParallelConfig, SortConfig, SortSource};
pub use error::{Result, SiftError};
pub use induction::{learn, learn_with, learn_with_sorts, ActionSchema, Inducer, SchemaPhase};
pub use lift::{bind_fluent, literal_universe, LiftedFluent, LiftedLiteral};
pub use model::{LearnedAction, Model};
pub use sorts::{infer_from_actions, infer_from_fluents, SortId, SortMap, UnionFind};
pub use trace::{
    ChangeKind, FluentChange, GroundAction, GroundFluent, PlanningObject, State, TraceCorpus,
    Transition,
};
