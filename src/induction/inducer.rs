//! The induction orchestrator.
//!
//! Runs the strict two-phase pipeline: sort inference over the whole
//! corpus first, then per-action universe construction and transition
//! processing, joined into the output model. Schemas are independent,
//! so the per-action phase may fan out across threads when the
//! `parallel` feature is enabled.

use tracing::debug;

use crate::config::{InductionConfig, SortSource};
use crate::error::{Result, SiftError};
use crate::induction::schema::ActionSchema;
use crate::lift::literal_universe;
use crate::model::{LearnedAction, Model};
use crate::sorts::{infer_from_actions, infer_from_fluents, SortMap};
use crate::trace::TraceCorpus;

/// Orchestrates one induction run over a corpus.
#[derive(Debug)]
pub struct Inducer<'a> {
    corpus: &'a TraceCorpus,
    config: InductionConfig,
    sorts: Option<SortMap>,
}

impl<'a> Inducer<'a> {
    /// Create an inducer with the default configuration.
    pub fn new(corpus: &'a TraceCorpus) -> Self {
        Self::with_config(corpus, InductionConfig::default())
    }

    /// Create an inducer with an explicit configuration.
    pub fn with_config(corpus: &'a TraceCorpus, config: InductionConfig) -> Self {
        Self {
            corpus,
            config,
            sorts: None,
        }
    }

    /// Create an inducer that uses a precomputed sort map.
    ///
    /// The inference phase is skipped entirely; the supplied map must
    /// cover every object appearing as an action parameter, or the run
    /// fails with [`SiftError::UnknownObject`].
    pub fn with_sorts(corpus: &'a TraceCorpus, sorts: SortMap) -> Self {
        Self {
            corpus,
            config: InductionConfig::default(),
            sorts: Some(sorts),
        }
    }

    /// Run the full pipeline and produce the model.
    ///
    /// An empty corpus yields an empty model; an arity mismatch in any
    /// schema aborts the whole run.
    pub fn run(&self) -> Result<Model> {
        if self.corpus.is_empty() {
            debug!("empty corpus; yielding empty model");
            return Ok(Model::empty());
        }

        let inferred;
        let sorts = match &self.sorts {
            Some(supplied) => {
                debug!(sorts = supplied.sort_count(), "using supplied sort map");
                supplied
            }
            None => {
                inferred = match self.config.sorts.source {
                    SortSource::Actions => infer_from_actions(self.corpus),
                    SortSource::Fluents => infer_from_fluents(self.corpus),
                };
                &inferred
            }
        };

        let names: Vec<&str> = self.corpus.action_names().collect();
        let actions = self.induce_all(&names, sorts)?;
        Ok(Model::assemble(actions))
    }

    #[cfg(feature = "parallel")]
    fn induce_all(&self, names: &[&str], sorts: &SortMap) -> Result<Vec<LearnedAction>> {
        use rayon::prelude::*;

        if self.config.parallel.enabled && names.len() >= self.config.parallel.min_actions {
            debug!(actions = names.len(), "fanning out induction per action");
            return names
                .par_iter()
                .map(|name| induce_action(name, self.corpus, sorts))
                .collect();
        }
        names
            .iter()
            .map(|name| induce_action(name, self.corpus, sorts))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn induce_all(&self, names: &[&str], sorts: &SortMap) -> Result<Vec<LearnedAction>> {
        names
            .iter()
            .map(|name| induce_action(name, self.corpus, sorts))
            .collect()
    }
}

/// Induce one action schema from all its observed transitions.
fn induce_action(name: &str, corpus: &TraceCorpus, sorts: &SortMap) -> Result<LearnedAction> {
    let transitions = corpus.transitions_for(name);
    // The name came from the corpus, so there is at least one
    // transition; its occurrence fixes the recorded arity.
    let first = &transitions[0].action;
    // A supplied sort map may miss an object; inferred maps always
    // cover the corpus. Checked across all occurrences, not just the
    // one fixing the arity, so later evidence is never dropped.
    for occurrence in corpus.occurrences_of(name) {
        if let Some(missing) = occurrence
            .params
            .iter()
            .find(|o| sorts.sort_of(&o.name).is_none())
        {
            return Err(SiftError::unknown_object(missing.name.clone(), name));
        }
    }
    let param_sorts = first
        .params
        .iter()
        .map(|o| {
            sorts
                .sort_of(&o.name)
                .ok_or_else(|| SiftError::unknown_object(o.name.clone(), name))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut schema = ActionSchema::new(name, first.arity(), param_sorts);
    schema.initialize(literal_universe(name, first.arity(), corpus, sorts))?;
    for transition in transitions {
        schema.observe(transition, sorts)?;
    }
    schema.finalize()?;
    debug!(
        action = name,
        observations = schema.observations(),
        precond = schema.precond().len(),
        add = schema.add_effects().len(),
        delete = schema.delete_effects().len(),
        "finalized schema"
    );

    Ok(LearnedAction::new(
        schema.name(),
        schema.param_sorts().to_vec(),
        schema.precond().iter().cloned().collect(),
        schema.add_effects().iter().cloned().collect(),
        schema.delete_effects().iter().cloned().collect(),
    ))
}

/// Learn a model from a corpus with the default configuration.
pub fn learn(corpus: &TraceCorpus) -> Result<Model> {
    Inducer::new(corpus).run()
}

/// Learn a model from a corpus with an explicit configuration.
pub fn learn_with(corpus: &TraceCorpus, config: InductionConfig) -> Result<Model> {
    Inducer::with_config(corpus, config).run()
}

/// Learn a model from a corpus using a precomputed sort map.
pub fn learn_with_sorts(corpus: &TraceCorpus, sorts: SortMap) -> Result<Model> {
    Inducer::with_sorts(corpus, sorts).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiftError;
    use crate::trace::fluent::state_of;
    use crate::trace::{GroundAction, GroundFluent, PlanningObject, Transition};

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
    fn test_empty_corpus_yields_empty_model() {
        let model = learn(&TraceCorpus::new()).unwrap();
        assert!(model.is_empty());
    }

    #[test]
    fn test_learn_pick_up() {
        // Two occurrences with different objects: precondition
        // candidates that hold in both pre-states survive, effects are
        // the observed flips.
        let corpus = TraceCorpus::from_transitions([pick_up("a"), pick_up("b")]);
        let model = learn(&corpus).unwrap();

        assert_eq!(model.actions.len(), 1);
        let action = model.actions.iter().next().unwrap();
        assert_eq!(action.name, "pick-up");

        let precond: Vec<&str> = action.precond.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(precond, vec!["clear", "on-table"]);
        let add: Vec<&str> = action.add_effects.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(add, vec!["holding"]);
        let delete: Vec<&str> = action
            .delete_effects
            .iter()
            .map(|l| l.name.as_str())
            .collect();
        assert_eq!(delete, vec!["on-table"]);
    }

    #[test]
    fn test_sensor_gap_removes_precondition() {
        let mut gap = pick_up("c");
        gap.pre.remove(&fluent("clear", &["c"]));
        let corpus = TraceCorpus::from_transitions([pick_up("a"), pick_up("b"), gap]);

        let model = learn(&corpus).unwrap();
        let action = model.actions.iter().next().unwrap();
        let precond: Vec<&str> = action.precond.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(precond, vec!["on-table"]);
    }

    #[test]
    fn test_unobserved_action_absent_from_model() {
        let corpus = TraceCorpus::from_transitions([pick_up("a")]);
        let model = learn(&corpus).unwrap();
        assert!(model.actions.iter().all(|a| a.name != "put-down"));
        assert_eq!(model.actions.len(), 1);
    }

    #[test]
    fn test_arity_mismatch_aborts_run() {
        let corpus = TraceCorpus::from_transitions([
            pick_up("a"),
            Transition::new(
                state_of([]),
                GroundAction::new("pick-up", vec![obj("a"), obj("b")]),
                state_of([]),
            ),
        ]);
        let err = learn(&corpus).unwrap_err();
        assert!(matches!(err, SiftError::SchemaArityMismatch { .. }));
    }

    #[test]
    fn test_idempotence() {
        let corpus = TraceCorpus::from_transitions([pick_up("a"), pick_up("b")]);
        let first = learn(&corpus).unwrap();
        let second = learn(&corpus).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_supplied_sorts_match_inferred() {
        use crate::sorts::SortId;

        // A precomputed map assigning both blocks the same sort yields
        // the same model as inference would.
        let corpus = TraceCorpus::from_transitions([pick_up("a"), pick_up("b")]);
        let supplied = SortMap::from_assignments([("a", SortId(0)), ("b", SortId(0))]);
        let model = learn_with_sorts(&corpus, supplied).unwrap();
        assert_eq!(model, learn(&corpus).unwrap());
    }

    #[test]
    fn test_supplied_sorts_missing_parameter_object_is_an_error() {
        use crate::sorts::SortId;

        let corpus = TraceCorpus::from_transitions([pick_up("a"), pick_up("b")]);
        let partial = SortMap::from_assignments([("a", SortId(0))]);
        let err = learn_with_sorts(&corpus, partial).unwrap_err();
        match err {
            SiftError::UnknownObject { object, action } => {
                assert_eq!(object, "b");
                assert_eq!(action, "pick-up");
            }
            other => panic!("expected UnknownObject, got {other}"),
        }
    }

    #[test]
    fn test_fluent_sort_source() {
        let config = InductionConfig::from_toml_str(
            r#"
            [sorts]
            source = "fluents"
            "#,
        )
        .unwrap();
        let corpus = TraceCorpus::from_transitions([pick_up("a"), pick_up("b")]);
        let model = learn_with(&corpus, config).unwrap();
        // a and b co-occur in clear's argument position, so the learned
        // schema is identical to the action-sorted one here.
        assert_eq!(model, learn(&corpus).unwrap());
    }
}
