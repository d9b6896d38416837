//! Sort inference from position co-occurrence.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::sorts::union_find::UnionFind;
use crate::trace::TraceCorpus;

/// Identifier of an inferred sort.
///
/// Sorts are numbered by ascending smallest first-seen index of any
/// member object, so labels are stable across runs with identical
/// input order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct SortId(pub usize);

/// Mapping from object name to inferred sort, with per-sort members.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SortMap {
    by_object: IndexMap<String, SortId>,
    members: Vec<Vec<String>>,
}

impl SortMap {
    /// Build a sort map from precomputed object-to-sort assignments.
    ///
    /// For corpora whose sorts come from an external source (a known
    /// domain's type declarations, say) rather than from inference.
    /// Sort ids are taken as given; ids with no assigned object simply
    /// have no members. A repeated object name keeps its last
    /// assignment.
    pub fn from_assignments<S: Into<String>>(
        assignments: impl IntoIterator<Item = (S, SortId)>,
    ) -> Self {
        let by_object: IndexMap<String, SortId> = assignments
            .into_iter()
            .map(|(object, sort)| (object.into(), sort))
            .collect();
        let sort_count = by_object
            .values()
            .map(|s| s.0 + 1)
            .max()
            .unwrap_or(0);
        let mut members = vec![Vec::new(); sort_count];
        for (object, sort) in &by_object {
            members[sort.0].push(object.clone());
        }
        Self { by_object, members }
    }

    /// Sort of the given object name, if the object was observed.
    pub fn sort_of(&self, object: &str) -> Option<SortId> {
        self.by_object.get(object).copied()
    }

    /// Number of distinct sorts.
    pub fn sort_count(&self) -> usize {
        self.members.len()
    }

    /// Member object names of a sort, in first-seen order.
    pub fn members(&self, sort: SortId) -> &[String] {
        self.members
            .get(sort.0)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Sort signature of an ordered object-name list.
    ///
    /// `None` if any object was never observed.
    pub fn signature_of<'a>(
        &self,
        objects: impl IntoIterator<Item = &'a str>,
    ) -> Option<Vec<SortId>> {
        objects.into_iter().map(|o| self.sort_of(o)).collect()
    }

    /// Whether no objects were observed.
    pub fn is_empty(&self) -> bool {
        self.by_object.is_empty()
    }

    fn from_union_find(mut uf: UnionFind<String>) -> Self {
        let mut by_object = IndexMap::new();
        let mut members: Vec<Vec<String>> = Vec::new();
        let mut sort_of_root: FxHashMap<usize, SortId> = FxHashMap::default();
        // Walking in insertion order assigns sort ids by smallest
        // first-seen member index.
        for (object, root) in uf.members() {
            let sort = *sort_of_root.entry(root).or_insert_with(|| {
                members.push(Vec::new());
                SortId(members.len() - 1)
            });
            by_object.insert(object.clone(), sort);
            members[sort.0].push(object.clone());
        }
        Self { by_object, members }
    }
}

/// Infer sorts from action-parameter co-occurrence.
///
/// All objects ever observed in the same parameter position of the
/// same action name are unioned into one sort. Objects that occur only
/// in fluents keep singleton sorts.
pub fn infer_from_actions(corpus: &TraceCorpus) -> SortMap {
    let mut uf = UnionFind::new();
    for obj in corpus.objects() {
        uf.insert(obj.name.clone());
    }

    // (action name, position) -> first object seen there.
    let mut anchor: FxHashMap<(&str, usize), &str> = FxHashMap::default();
    for action in corpus.distinct_actions() {
        for (pos, obj) in action.params.iter().enumerate() {
            match anchor.get(&(action.name.as_str(), pos)).copied() {
                Some(first) => uf.union(&first.to_string(), &obj.name),
                None => {
                    anchor.insert((action.name.as_str(), pos), obj.name.as_str());
                }
            }
        }
    }

    let map = SortMap::from_union_find(uf);
    debug!(
        objects = map.by_object.len(),
        sorts = map.sort_count(),
        "inferred sorts from action positions"
    );
    map
}

/// Infer sorts from fluent-argument co-occurrence.
///
/// Identical procedure to [`infer_from_actions`] but grouped by
/// fluent-argument position; used when action parameter information is
/// unavailable.
pub fn infer_from_fluents(corpus: &TraceCorpus) -> SortMap {
    let mut uf = UnionFind::new();
    for obj in corpus.objects() {
        uf.insert(obj.name.clone());
    }

    let mut anchor: FxHashMap<(&str, usize), &str> = FxHashMap::default();
    for fluent in corpus.distinct_fluents() {
        for (pos, obj) in fluent.args.iter().enumerate() {
            match anchor.get(&(fluent.name.as_str(), pos)).copied() {
                Some(first) => uf.union(&first.to_string(), &obj.name),
                None => {
                    anchor.insert((fluent.name.as_str(), pos), obj.name.as_str());
                }
            }
        }
    }

    let map = SortMap::from_union_find(uf);
    debug!(
        objects = map.by_object.len(),
        sorts = map.sort_count(),
        "inferred sorts from fluent positions"
    );
    map
}
