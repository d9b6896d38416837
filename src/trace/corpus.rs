//! The trace corpus container.
//!
//! [`TraceCorpus`] is the collaborator-facing view of everything the
//! engine consumes: transitions keyed by action name, the distinct
//! ground actions and fluents observed anywhere, and the distinct
//! objects in first-seen order. First-seen order matters: sort labels
//! are numbered from it, so identical input order yields identical
//! labels across runs.

use indexmap::{IndexMap, IndexSet};

use crate::trace::fluent::GroundFluent;
use crate::trace::objects::{GroundAction, PlanningObject};
use crate::trace::transition::Transition;

/// An already-materialized corpus of observed transitions.
#[derive(Debug, Clone, Default)]
pub struct TraceCorpus {
    /// Transitions grouped by action name, in first-seen name order.
    transitions: IndexMap<String, Vec<Transition>>,
    /// Distinct ground action occurrences.
    actions: IndexSet<GroundAction>,
    /// Distinct ground fluents observed in any state.
    fluents: IndexSet<GroundFluent>,
    /// Distinct objects in first-seen order (action parameters before
    /// the pre-state's fluent arguments, pre before post).
    objects: IndexSet<PlanningObject>,
}

impl TraceCorpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corpus from an iterator of transitions.
    pub fn from_transitions(transitions: impl IntoIterator<Item = Transition>) -> Self {
        let mut corpus = Self::new();
        for t in transitions {
            corpus.push(t);
        }
        corpus
    }

    /// Add one observed transition.
    ///
    /// Never rejects input; structural problems such as arity
    /// mismatches are detected during induction, where they can be
    /// attributed to a schema.
    pub fn push(&mut self, transition: Transition) {
        for obj in &transition.action.params {
            self.objects.insert(obj.clone());
        }
        for fluent in transition.pre.iter().chain(transition.post.iter()) {
            for obj in &fluent.args {
                self.objects.insert(obj.clone());
            }
            self.fluents.insert(fluent.clone());
        }
        self.actions.insert(transition.action.clone());
        self.transitions
            .entry(transition.action.name.clone())
            .or_default()
            .push(transition);
    }

    /// Distinct action names in first-seen order.
    pub fn action_names(&self) -> impl Iterator<Item = &str> {
        self.transitions.keys().map(String::as_str)
    }

    /// All transitions observed for the given action name.
    pub fn transitions_for(&self, action: &str) -> &[Transition] {
        self.transitions
            .get(action)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Distinct ground action occurrences for the given action name.
    pub fn occurrences_of<'a>(
        &'a self,
        action: &'a str,
    ) -> impl Iterator<Item = &'a GroundAction> + 'a {
        self.actions.iter().filter(move |a| a.name == action)
    }

    /// All distinct ground actions observed.
    pub fn distinct_actions(&self) -> impl Iterator<Item = &GroundAction> {
        self.actions.iter()
    }

    /// All distinct ground fluents observed anywhere in the corpus.
    pub fn distinct_fluents(&self) -> impl Iterator<Item = &GroundFluent> {
        self.fluents.iter()
    }

    /// All distinct objects in first-seen order.
    pub fn objects(&self) -> impl Iterator<Item = &PlanningObject> {
        self.objects.iter()
    }

    /// Total number of transitions across all actions.
    pub fn len(&self) -> usize {
        self.transitions.values().map(Vec::len).sum()
    }

    /// Whether the corpus contains no transitions.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::fluent::state_of;

    fn obj(name: &str) -> PlanningObject {
        PlanningObject::new(name)
    }

    fn fluent(name: &str, args: &[&str]) -> GroundFluent {
        GroundFluent::new(name, args.iter().map(|a| obj(a)).collect())
    }

    fn pick_up(x: &str) -> Transition {
        Transition::new(
            state_of([fluent("clear", &[x]), fluent("on-table", &[x])]),
            GroundAction::new("pick-up", vec![obj(x)]),
            state_of([fluent("clear", &[x]), fluent("holding", &[x])]),
        )
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = TraceCorpus::new();
        assert!(corpus.is_empty());
        assert_eq!(corpus.len(), 0);
        assert_eq!(corpus.action_names().count(), 0);
        assert_eq!(corpus.objects().count(), 0);
    }

    #[test]
    fn test_push_collects_distinct_views() {
        let corpus = TraceCorpus::from_transitions([pick_up("a"), pick_up("b"), pick_up("a")]);

        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.action_names().collect::<Vec<_>>(), vec!["pick-up"]);
        assert_eq!(corpus.transitions_for("pick-up").len(), 3);
        // Duplicate occurrence of pick-up(a) collapses in the distinct view.
        assert_eq!(corpus.distinct_actions().count(), 2);
        // clear/on-table/holding for each of a and b.
        assert_eq!(corpus.distinct_fluents().count(), 6);
        assert_eq!(corpus.objects().count(), 2);
    }

    #[test]
    fn test_first_seen_object_order_is_stable() {
        let corpus = TraceCorpus::from_transitions([pick_up("b"), pick_up("a")]);
        let names: Vec<_> = corpus.objects().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_transitions_for_unknown_action_is_empty() {
        let corpus = TraceCorpus::from_transitions([pick_up("a")]);
        assert!(corpus.transitions_for("put-down").is_empty());
    }
}
