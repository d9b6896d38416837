//! Sort (type) inference over observed planning objects.
//!
//! Objects are clustered into equivalence classes by co-occurrence in
//! the same parameter position: two objects land in the same sort iff
//! a chain of action-position (or fluent-position) co-occurrences
//! connects them. Sorts are numbered by the smallest first-seen index
//! of any member, so output is reproducible for identical input order.

pub mod infer;
pub mod union_find;

pub use infer::{infer_from_actions, infer_from_fluents, SortId, SortMap};
pub use union_find::UnionFind;
