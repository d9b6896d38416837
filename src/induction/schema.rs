//! Per-action induction state.
//!
//! An [`ActionSchema`] moves through three phases:
//!
//! ```text
//! Uninitialized -> Accumulating -> Finalized
//! ```
//!
//! Initialization seeds the precondition candidate set with the full
//! literal universe. Each observed transition then shrinks the
//! candidate set (a true precondition must hold before every
//! occurrence) and grows the effect sets from observed truth flips.
//! After finalization no further mutation is permitted.

use rustc_hash::FxHashSet;
use tracing::{trace, warn};

use crate::error::{Result, SiftError};
use crate::lift::{bind_fluent, LiftedLiteral};
use crate::sorts::{SortId, SortMap};
use crate::trace::{ChangeKind, Transition};

/// Lifecycle phase of an [`ActionSchema`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaPhase {
    /// Created, candidate sets not yet seeded.
    Uninitialized,
    /// Processing transitions.
    Accumulating,
    /// All transitions processed; read-only.
    Finalized,
}

/// Induction state for one distinct action name.
#[derive(Debug, Clone)]
pub struct ActionSchema {
    name: String,
    arity: usize,
    param_sorts: Vec<SortId>,
    phase: SchemaPhase,
    /// Shrink-only precondition candidate set.
    precond: FxHashSet<LiftedLiteral>,
    /// Grow-only add-effect evidence.
    add_effects: FxHashSet<LiftedLiteral>,
    /// Grow-only delete-effect evidence.
    delete_effects: FxHashSet<LiftedLiteral>,
    observations: usize,
}

impl ActionSchema {
    /// Create an uninitialized schema for an action name.
    pub fn new(name: impl Into<String>, arity: usize, param_sorts: Vec<SortId>) -> Self {
        Self {
            name: name.into(),
            arity,
            param_sorts,
            phase: SchemaPhase::Uninitialized,
            precond: FxHashSet::default(),
            add_effects: FxHashSet::default(),
            delete_effects: FxHashSet::default(),
            observations: 0,
        }
    }

    /// Transition: Uninitialized -> Accumulating.
    ///
    /// Seeds the precondition candidate set with the literal universe.
    /// Effect sets start empty.
    pub fn initialize(&mut self, universe: FxHashSet<LiftedLiteral>) -> Result<()> {
        if self.phase != SchemaPhase::Uninitialized {
            return Err(SiftError::invalid_phase(format!(
                "cannot initialize schema `{}` in {:?} phase",
                self.name, self.phase
            )));
        }
        debug_assert!(
            universe.iter().all(|l| l.params.iter().all(|&i| i < self.arity)),
            "universe literal indices must respect the schema arity"
        );
        self.precond = universe;
        self.phase = SchemaPhase::Accumulating;
        Ok(())
    }

    /// Process one observed transition of this action.
    ///
    /// Fails with [`SiftError::SchemaArityMismatch`] when the
    /// occurrence's parameter count disagrees with the recorded arity;
    /// that aborts the whole run since it indicates corrupt trace data.
    pub fn observe(&mut self, transition: &Transition, sorts: &SortMap) -> Result<()> {
        if self.phase != SchemaPhase::Accumulating {
            return Err(SiftError::invalid_phase(format!(
                "cannot observe transition for schema `{}` in {:?} phase",
                self.name, self.phase
            )));
        }
        let params = &transition.action.params;
        if params.len() != self.arity {
            return Err(SiftError::arity_mismatch(
                &self.name,
                self.arity,
                params.len(),
            ));
        }

        // Precondition shrink. A candidate survives only if its
        // grounding is true in this pre-state; absence is false
        // (closed world on the observed fluent universe).
        let before = self.precond.len();
        let pre = &transition.pre;
        self.precond.retain(|lit| match lit.ground(params) {
            Some(grounding) => pre.contains(&grounding),
            None => false,
        });
        trace!(
            action = %self.name,
            removed = before - self.precond.len(),
            remaining = self.precond.len(),
            "precondition shrink"
        );

        // Effect accumulation over observed truth flips.
        for change in transition.changed_fluents() {
            let bindings = bind_fluent(change.fluent, params, sorts);
            if bindings.is_empty() {
                // Unresolvable binding: the flipped fluent involves
                // objects outside this occurrence's parameters. Skip.
                trace!(
                    action = %self.name,
                    fluent = %change.fluent.name,
                    "skipping unbindable effect fluent"
                );
                continue;
            }
            match change.kind {
                ChangeKind::Added => self.add_effects.extend(bindings),
                ChangeKind::Deleted => self.delete_effects.extend(bindings),
            }
        }

        self.observations += 1;
        Ok(())
    }

    /// Transition: Accumulating -> Finalized.
    ///
    /// Literals present in both effect sets signal a context-dependent
    /// effect this style of learning cannot resolve; both are retained
    /// and surfaced, with a warning.
    pub fn finalize(&mut self) -> Result<()> {
        if self.phase != SchemaPhase::Accumulating {
            return Err(SiftError::invalid_phase(format!(
                "cannot finalize schema `{}` in {:?} phase",
                self.name, self.phase
            )));
        }
        for lit in self.add_effects.intersection(&self.delete_effects) {
            warn!(
                action = %self.name,
                literal = %lit,
                "literal observed as both add and delete effect; retaining both"
            );
        }
        self.phase = SchemaPhase::Finalized;
        Ok(())
    }

    /// Action name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Recorded parameter count.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Parameter sort signature.
    pub fn param_sorts(&self) -> &[SortId] {
        &self.param_sorts
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SchemaPhase {
        self.phase
    }

    /// Current precondition candidate set.
    pub fn precond(&self) -> &FxHashSet<LiftedLiteral> {
        &self.precond
    }

    /// Accumulated add-effect literals.
    pub fn add_effects(&self) -> &FxHashSet<LiftedLiteral> {
        &self.add_effects
    }

    /// Accumulated delete-effect literals.
    pub fn delete_effects(&self) -> &FxHashSet<LiftedLiteral> {
        &self.delete_effects
    }

    /// Number of transitions processed so far.
    pub fn observations(&self) -> usize {
        self.observations
    }
}
