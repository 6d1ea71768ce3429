//! The recursive pruning pass.
//!
//! Every level applies the same rule: the predicate is asked about each
//! sequence element and each mapping value *as found in the input*, the
//! matching ones are dropped, and the survivors that are themselves
//! containers are pruned in turn. Scalars that survive are moved into the
//! rebuilt containers unchanged.
//!
//! The `*_owned` entry points consume the tree and never copy a surviving
//! scalar. The borrowing entry points clone the input once and run the same
//! pass on the clone.
//!
//! Recursion depth follows the nesting depth of the input. Callers feeding
//! untrusted, pathologically deep documents should bound depth themselves.

use log::debug;

use crate::error::{PruneError, Result};
use crate::node::{Node, Parts};

/// Removes every null value from a tree, at any depth.
///
/// The root must be a sequence or a mapping.
///
/// # Example
///
/// ```
/// use serde_json::json;
///
/// let data = json!({"a": "hello", "b": null, "c": [1, null, {"d": null}]});
/// let pruned = standout_prune::filter(&data).unwrap();
/// assert_eq!(pruned, json!({"a": "hello", "c": [1, {}]}));
/// ```
///
/// # Errors
///
/// Returns [`PruneError::UnsupportedType`] when `data` is a scalar.
pub fn filter<N: Node>(data: &N) -> Result<N> {
    filter_with(data, N::is_null)
}

/// Removes every value for which `predicate` returns `true`, at any depth.
///
/// The predicate sees the original value, before its own children are
/// pruned, and is called exactly once per sequence element and per mapping
/// value. Mapping keys are never passed to it.
///
/// ```
/// use serde_json::json;
///
/// let data = json!(["a", "NULL", "b", null]);
/// let pruned = standout_prune::filter_with(&data, |v| v.is_null() || v == "NULL").unwrap();
/// assert_eq!(pruned, json!(["a", "b"]));
/// ```
pub fn filter_with<N, P>(data: &N, predicate: P) -> Result<N>
where
    N: Node,
    P: Fn(&N) -> bool,
{
    filter_owned_with(data.clone(), predicate)
}

/// Like [`filter_with`], for predicates that can fail.
///
/// The first predicate error aborts the pass and is returned to the caller
/// exactly as the predicate produced it. The error type only needs to be
/// able to carry a [`PruneError`] for the unsupported-root case.
pub fn try_filter_with<N, E, P>(data: &N, predicate: P) -> std::result::Result<N, E>
where
    N: Node,
    E: From<PruneError>,
    P: FnMut(&N) -> std::result::Result<bool, E>,
{
    try_filter_owned_with(data.clone(), predicate)
}

/// Consuming form of [`filter`].
///
/// Surviving scalars are moved into the output, so no leaf is copied.
///
/// ```
/// use serde_json::json;
///
/// let data = json!(["kept", null]);
/// let text = data[0].as_str().unwrap().as_ptr();
///
/// let pruned = standout_prune::filter_owned(data).unwrap();
/// assert_eq!(pruned[0].as_str().unwrap().as_ptr(), text);
/// ```
pub fn filter_owned<N: Node>(data: N) -> Result<N> {
    filter_owned_with(data, N::is_null)
}

/// Consuming form of [`filter_with`].
pub fn filter_owned_with<N, P>(data: N, predicate: P) -> Result<N>
where
    N: Node,
    P: Fn(&N) -> bool,
{
    try_filter_owned_with(data, |value: &N| Ok::<_, PruneError>(predicate(value)))
}

/// Consuming form of [`try_filter_with`].
pub fn try_filter_owned_with<N, E, P>(data: N, mut predicate: P) -> std::result::Result<N, E>
where
    N: Node,
    E: From<PruneError>,
    P: FnMut(&N) -> std::result::Result<bool, E>,
{
    match data.into_parts() {
        Parts::Scalar(root) => {
            debug!("refusing to prune a {} root", root.kind());
            Err(PruneError::UnsupportedType {
                kind: root.kind(),
                repr: root.repr(),
            }
            .into())
        }
        parts => prune(parts, &mut predicate),
    }
}

fn prune<N, E, P>(parts: Parts<N>, predicate: &mut P) -> std::result::Result<N, E>
where
    N: Node,
    P: FnMut(&N) -> std::result::Result<bool, E>,
{
    match parts {
        Parts::Sequence(items) => {
            let mut kept = Vec::with_capacity(items.len());
            for item in items {
                if !predicate(&item)? {
                    kept.push(prune(item.into_parts(), predicate)?);
                }
            }
            Ok(N::from_sequence(kept))
        }
        Parts::Mapping(entries) => {
            let mut kept = Vec::with_capacity(entries.len());
            for (key, value) in entries {
                if !predicate(&value)? {
                    kept.push((key, prune(value.into_parts(), predicate)?));
                }
            }
            Ok(N::from_mapping(kept))
        }
        // Leaves below the root go through untouched.
        Parts::Scalar(value) => Ok(value),
    }
}
