//! Lifted literal value types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sorts::SortId;
use crate::trace::{GroundFluent, PlanningObject};

/// A parameter-bound literal: a predicate over an action's parameters.
///
/// `params[k]` is the index into the owning action's parameter list
/// that supplies the predicate's k-th argument; `sorts[k]` is that
/// argument's sort. Equality and hashing are structural.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct LiftedLiteral {
    /// Predicate name.
    pub name: String,
    /// Sort of each argument.
    pub sorts: Vec<SortId>,
    /// Index into the owning action's parameter list, per argument.
    pub params: Vec<usize>,
}

impl LiftedLiteral {
    /// Create a lifted literal.
    pub fn new(name: impl Into<String>, sorts: Vec<SortId>, params: Vec<usize>) -> Self {
        Self {
            name: name.into(),
            sorts,
            params,
        }
    }

    /// Strip the parameter binding, leaving the bare fluent signature.
    pub fn signature(&self) -> LiftedFluent {
        LiftedFluent {
            name: self.name.clone(),
            sorts: self.sorts.clone(),
        }
    }

    /// Resolve this literal against a concrete parameter tuple.
    ///
    /// `None` if any parameter index is out of bounds for the tuple,
    /// which cannot happen for literals built from the same schema's
    /// universe after the arity check.
    pub fn ground(&self, params: &[PlanningObject]) -> Option<GroundFluent> {
        let args = self
            .params
            .iter()
            .map(|&i| params.get(i).cloned())
            .collect::<Option<Vec<_>>>()?;
        Some(GroundFluent::new(self.name.clone(), args))
    }
}

impl fmt::Display for LiftedLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.name)?;
        for &i in &self.params {
            write!(f, " ?p{i}")?;
        }
        write!(f, ")")
    }
}

/// A bare lifted fluent: predicate name plus sort signature, without
/// any parameter binding. Model-wide fluent identity.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct LiftedFluent {
    /// Predicate name.
    pub name: String,
    /// Sort of each argument.
    pub sorts: Vec<SortId>,
}

impl LiftedFluent {
    /// Create a lifted fluent signature.
    pub fn new(name: impl Into<String>, sorts: Vec<SortId>) -> Self {
        Self {
            name: name.into(),
            sorts,
        }
    }

    /// Number of arguments.
    pub fn arity(&self) -> usize {
        self.sorts.len()
    }
}

impl fmt::Display for LiftedFluent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.name)?;
        for sort in &self.sorts {
            write!(f, " s{}", sort.0)?;
        }
        write!(f, ")")
    }
}
