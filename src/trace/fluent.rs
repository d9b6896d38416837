//! Ground fluents and states.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::trace::objects::PlanningObject;

/// A predicate applied to concrete objects.
///
/// Identity is (name, objects) only. Truth is not stored on the fluent;
/// a fluent is true in a state iff it is a member of that state's set
/// (closed world: absent means false).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroundFluent {
    /// Predicate name.
    pub name: String,
    /// Ordered argument objects.
    pub args: Vec<PlanningObject>,
}

impl GroundFluent {
    /// Create a ground fluent from a predicate name and arguments.
    pub fn new(name: impl Into<String>, args: Vec<PlanningObject>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Number of arguments.
    pub fn arity(&self) -> usize {
        self.args.len()
    }
}

/// The set of ground fluents that are true at one observation point.
pub type State = FxHashSet<GroundFluent>;

/// Build a [`State`] from an iterator of fluents.
pub fn state_of(fluents: impl IntoIterator<Item = GroundFluent>) -> State {
    fluents.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obj(name: &str) -> PlanningObject {
        PlanningObject::new(name)
    }

    #[test]
    fn test_fluent_identity_is_name_and_args() {
        let f1 = GroundFluent::new("on", vec![obj("a"), obj("b")]);
        let f2 = GroundFluent::new("on", vec![obj("a"), obj("b")]);
        let f3 = GroundFluent::new("on", vec![obj("b"), obj("a")]);
        assert_eq!(f1, f2);
        assert_ne!(f1, f3);
    }

    #[test]
    fn test_state_membership_is_truth() {
        let state = state_of([GroundFluent::new("clear", vec![obj("a")])]);
        assert!(state.contains(&GroundFluent::new("clear", vec![obj("a")])));
        assert!(!state.contains(&GroundFluent::new("clear", vec![obj("b")])));
    }
}
