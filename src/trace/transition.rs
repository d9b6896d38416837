//! Observed state-action-state transitions.

use serde::{Deserialize, Serialize};

use crate::trace::fluent::{GroundFluent, State};
use crate::trace::objects::GroundAction;

/// Direction of a truth-value flip across a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// Fluent went false before, true after.
    Added,
    /// Fluent went true before, false after.
    Deleted,
}

/// One fluent whose truth value differs between pre- and post-state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FluentChange<'a> {
    /// The flipped fluent.
    pub fluent: &'a GroundFluent,
    /// Which way it flipped.
    pub kind: ChangeKind,
}

/// One observed (pre-state, action, post-state) triple from a trace.
///
/// Produced by the trace collaborator; read-only to the induction core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// Fluents true before the action.
    pub pre: State,
    /// The action occurrence.
    pub action: GroundAction,
    /// Fluents true after the action.
    pub post: State,
}

impl Transition {
    /// Create a transition from its three components.
    pub fn new(pre: State, action: GroundAction, post: State) -> Self {
        Self { pre, action, post }
    }

    /// Iterate the fluents whose truth value flipped across this
    /// transition, with direction.
    pub fn changed_fluents(&self) -> impl Iterator<Item = FluentChange<'_>> {
        let added = self
            .post
            .iter()
            .filter(|f| !self.pre.contains(*f))
            .map(|fluent| FluentChange {
                fluent,
                kind: ChangeKind::Added,
            });
        let deleted = self
            .pre
            .iter()
            .filter(|f| !self.post.contains(*f))
            .map(|fluent| FluentChange {
                fluent,
                kind: ChangeKind::Deleted,
            });
        added.chain(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::fluent::state_of;
    use crate::trace::objects::PlanningObject;

    fn obj(name: &str) -> PlanningObject {
        PlanningObject::new(name)
    }

    fn fluent(name: &str, args: &[&str]) -> GroundFluent {
        GroundFluent::new(name, args.iter().map(|a| obj(a)).collect())
    }

    #[test]
    fn test_changed_fluents_directions() {
        let t = Transition::new(
            state_of([fluent("on-table", &["a"]), fluent("clear", &["a"])]),
            GroundAction::new("pick-up", vec![obj("a")]),
            state_of([fluent("holding", &["a"]), fluent("clear", &["a"])]),
        );

        let changes: Vec<_> = t.changed_fluents().collect();
        assert_eq!(changes.len(), 2);
        assert!(changes
            .iter()
            .any(|c| c.fluent == &fluent("holding", &["a"]) && c.kind == ChangeKind::Added));
        assert!(changes
            .iter()
            .any(|c| c.fluent == &fluent("on-table", &["a"]) && c.kind == ChangeKind::Deleted));
    }

    #[test]
    fn test_no_change_yields_empty() {
        let state = state_of([fluent("clear", &["a"])]);
        let t = Transition::new(state.clone(), GroundAction::new("noop", vec![]), state);
        assert_eq!(t.changed_fluents().count(), 0);
    }
}
