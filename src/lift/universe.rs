//! Binding enumeration and literal-universe construction.

use itertools::Itertools;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::lift::literal::LiftedLiteral;
use crate::sorts::SortMap;
use crate::trace::{GroundFluent, PlanningObject, TraceCorpus};

/// Enumerate every binding of a fluent's arguments to positions of one
/// concrete parameter tuple.
///
/// An argument may bind to any position holding an equal object; when
/// duplicate objects appear in the tuple, every valid index assignment
/// is returned as a distinct literal. Ambiguity is preserved here, not
/// resolved. An empty result means the fluent does not bind to this
/// occurrence (some argument is absent from the tuple, or involves an
/// object with no inferred sort).
pub fn bind_fluent(
    fluent: &GroundFluent,
    params: &[PlanningObject],
    sorts: &SortMap,
) -> Vec<LiftedLiteral> {
    let Some(arg_sorts) = sorts.signature_of(fluent.args.iter().map(|o| o.name.as_str()))
    else {
        return Vec::new();
    };

    // Zero-ary predicates bind trivially to any occurrence.
    if fluent.args.is_empty() {
        return vec![LiftedLiteral::new(fluent.name.clone(), Vec::new(), Vec::new())];
    }

    let mut candidates: Vec<Vec<usize>> = Vec::with_capacity(fluent.args.len());
    for arg in &fluent.args {
        let positions: Vec<usize> = params
            .iter()
            .enumerate()
            .filter(|(_, p)| *p == arg)
            .map(|(i, _)| i)
            .collect();
        if positions.is_empty() {
            return Vec::new();
        }
        candidates.push(positions);
    }

    candidates
        .into_iter()
        .multi_cartesian_product()
        .map(|assignment| {
            LiftedLiteral::new(fluent.name.clone(), arg_sorts.clone(), assignment)
        })
        .collect()
}

/// Build the literal universe for one action schema (name plus arity).
///
/// The universe is the union, over every distinct observed occurrence
/// of the action, of all bindings of every distinct observed fluent
/// against that occurrence's parameter tuple. Occurrences whose tuple
/// length disagrees with the schema arity are ignored here; the
/// inducer reports them as fatal when it processes their transitions.
/// The universe becomes the initial precondition candidate set and is
/// never grown afterwards.
pub fn literal_universe(
    action: &str,
    arity: usize,
    corpus: &TraceCorpus,
    sorts: &SortMap,
) -> FxHashSet<LiftedLiteral> {
    let mut universe = FxHashSet::default();
    for occurrence in corpus.occurrences_of(action) {
        if occurrence.arity() != arity {
            continue;
        }
        for fluent in corpus.distinct_fluents() {
            universe.extend(bind_fluent(fluent, &occurrence.params, sorts));
        }
    }
    debug!(action, size = universe.len(), "built literal universe");
    universe
}
