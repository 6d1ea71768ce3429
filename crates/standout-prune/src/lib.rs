//! Prune - recursive removal of unwanted values from nested data.
//!
//! Given a tree of sequences and mappings (a parsed JSON or YAML document,
//! a `serde_json::to_value` result, ...), prune builds a copy of the same
//! shape with every value matching a predicate removed, at every depth. By
//! default the predicate removes nulls.
//!
//! # Quick Start
//!
//! ```rust
//! use serde_json::json;
//!
//! let data = json!({
//!     "name": "report",
//!     "owner": null,
//!     "tags": ["a", null, "b"],
//!     "meta": {"draft": null, "pages": 3}
//! });
//!
//! let pruned = standout_prune::filter(&data).unwrap();
//! assert_eq!(
//!     pruned,
//!     json!({"name": "report", "tags": ["a", "b"], "meta": {"pages": 3}})
//! );
//! ```
//!
//! # Semantics
//!
//! At every level the predicate is asked about each sequence element and
//! each mapping value as found in the input. Matching entries are dropped;
//! surviving containers are pruned recursively; surviving scalars are
//! carried over unchanged.
//!
//! - Sequences keep the relative order of their surviving elements.
//! - Mappings keep their surviving keys in the host's iteration order
//!   (insertion order for JSON with the default `preserve_order` feature,
//!   and always for YAML). Keys themselves are never tested.
//! - Strings are scalars. They are never split into characters.
//! - A container whose entries are all removed becomes an empty container
//!   of the same kind.
//! - The root must be a sequence or a mapping; anything else fails with
//!   [`PruneError::UnsupportedType`].
//!
//! # Predicates
//!
//! | Entry point | Predicate |
//! |-------------|-----------|
//! | [`filter`] | null values |
//! | [`filter_with`] | any `Fn(&N) -> bool` |
//! | [`try_filter_with`] | `FnMut(&N) -> Result<bool, E>`, errors returned as-is |
//! | [`Pruner::apply`] | declarative [`Rule`] set |
//!
//! Each entry point borrows its input and clones it once. The consuming
//! forms ([`filter_owned`], [`filter_owned_with`], [`try_filter_owned_with`],
//! [`Pruner::apply_owned`]) take the tree by value and move every surviving
//! scalar into the output without copying it.
//!
//! # Supported trees
//!
//! Any type implementing [`Node`]. Implementations ship for
//! `serde_json::Value` and, with the default `yaml` feature,
//! `serde_yaml::Value`.
//!
//! # Features
//!
//! - `preserve_order` (default): enables `serde_json/preserve_order`.
//!   Turn it off to keep `serde_json::Map` sorted across your dependency
//!   graph.
//! - `yaml` (default): the `serde_yaml::Value` implementation.

mod error;
mod filter;
mod node;
mod rules;

// Re-export public API
pub use error::{PruneError, Result};
pub use filter::{
    filter, filter_owned, filter_owned_with, filter_with, try_filter_owned_with, try_filter_with,
};
pub use node::{Entries, Node, Parts, Shape};
pub use rules::{Pruner, Rule};
