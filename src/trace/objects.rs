//! Planning objects and ground actions.

use serde::{Deserialize, Serialize};

/// A concrete object from the planning domain.
///
/// Identity is (name, raw type string). The raw type is whatever the
/// trace source recorded (often absent); inferred sorts live in
/// [`crate::sorts::SortMap`], not here. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlanningObject {
    /// Object name, unique within a corpus.
    pub name: String,
    /// Raw type string from the trace source, if any.
    pub raw_type: Option<String>,
}

impl PlanningObject {
    /// Create an untyped object.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_type: None,
        }
    }

    /// Create an object carrying a raw type string.
    pub fn typed(name: impl Into<String>, raw_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_type: Some(raw_type.into()),
        }
    }
}

/// An action occurrence with concrete objects as parameters.
///
/// Two ground actions with identical name and parameter tuple are the
/// same occurrence-class member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroundAction {
    /// Action name (schema identifier).
    pub name: String,
    /// Ordered parameter objects.
    pub params: Vec<PlanningObject>,
}

impl GroundAction {
    /// Create a ground action from a name and parameter objects.
    pub fn new(name: impl Into<String>, params: Vec<PlanningObject>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// Number of parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}
