//! The learned action model.
//!
//! Terminal artifacts of an induction run. A [`Model`] is immutable
//! once assembled; two models are equal iff their fluent and action
//! sets are set-equal under structural equality, independent of
//! insertion order. Ordered sets make the serialized form canonical,
//! so equal models serialize identically.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lift::{LiftedFluent, LiftedLiteral};
use crate::sorts::SortId;

/// One learned lifted action schema.
///
/// Precondition and effect sets keep the full parameter-bound literal
/// form, which downstream collaborators need to reconstruct grounded
/// actions.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct LearnedAction {
    /// Action name.
    pub name: String,
    /// Sort of each parameter.
    pub param_sorts: Vec<SortId>,
    /// Literals that held before every observed occurrence.
    pub precond: BTreeSet<LiftedLiteral>,
    /// Literals observed flipping false to true.
    pub add_effects: BTreeSet<LiftedLiteral>,
    /// Literals observed flipping true to false.
    pub delete_effects: BTreeSet<LiftedLiteral>,
}

impl LearnedAction {
    /// Create a learned action from its finalized sets.
    pub fn new(
        name: impl Into<String>,
        param_sorts: Vec<SortId>,
        precond: BTreeSet<LiftedLiteral>,
        add_effects: BTreeSet<LiftedLiteral>,
        delete_effects: BTreeSet<LiftedLiteral>,
    ) -> Self {
        Self {
            name: name.into(),
            param_sorts,
            precond,
            add_effects,
            delete_effects,
        }
    }

    /// Number of parameters.
    pub fn arity(&self) -> usize {
        self.param_sorts.len()
    }

    /// Literals present in both effect sets.
    ///
    /// Non-empty when different occurrences flipped the same literal in
    /// opposite directions: a context-dependent effect this style of
    /// learning cannot resolve. Both sides are retained in the model.
    pub fn conflicting_effects(&self) -> impl Iterator<Item = &LiftedLiteral> {
        self.add_effects.intersection(&self.delete_effects)
    }
}

impl fmt::Display for LearnedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}:", self.name, self.arity())?;
        write!(f, " pre[")?;
        for (i, lit) in self.precond.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{lit}")?;
        }
        write!(f, "] add[")?;
        for (i, lit) in self.add_effects.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{lit}")?;
        }
        write!(f, "] del[")?;
        for (i, lit) in self.delete_effects.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{lit}")?;
        }
        write!(f, "]")
    }
}

/// The final induced model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Distinct lifted fluent signatures across all actions.
    pub fluents: BTreeSet<LiftedFluent>,
    /// Learned action schemas.
    pub actions: BTreeSet<LearnedAction>,
}

impl Model {
    /// The empty model, the valid outcome for an empty corpus.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Assemble a model from learned actions.
    ///
    /// The model-wide fluent set is the deduplicated bare form of every
    /// literal in every action's sets.
    pub fn assemble(actions: impl IntoIterator<Item = LearnedAction>) -> Self {
        let actions: BTreeSet<LearnedAction> = actions.into_iter().collect();
        let fluents = actions
            .iter()
            .flat_map(|a| {
                a.precond
                    .iter()
                    .chain(a.add_effects.iter())
                    .chain(a.delete_effects.iter())
            })
            .map(LiftedLiteral::signature)
            .collect();
        Self { fluents, actions }
    }

    /// Look up a learned action by name.
    pub fn action(&self, name: &str) -> Option<&LearnedAction> {
        self.actions.iter().find(|a| a.name == name)
    }

    /// Whether the model contains no actions and no fluents.
    pub fn is_empty(&self) -> bool {
        self.fluents.is_empty() && self.actions.is_empty()
    }

    /// Canonical JSON form; equal models produce identical output.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "model: {} fluents, {} actions", self.fluents.len(), self.actions.len())?;
        for fluent in &self.fluents {
            writeln!(f, "  fluent {fluent}")?;
        }
        for action in &self.actions {
            writeln!(f, "  action {action}")?;
        }
        Ok(())
    }
}
