//! Property-based tests for prune using proptest.

use proptest::prelude::*;
use serde_json::{json, Map, Value};
use standout_prune::{filter, filter_owned, filter_with, Pruner};

// ============================================================================
// Test helpers
// ============================================================================

fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z]{0,6}".prop_map(Value::String),
    ]
}

fn container_of(inner: impl Strategy<Value = Value> + Clone) -> impl Strategy<Value = Value> {
    prop_oneof![
        prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
        prop::collection::vec(("[a-z]{1,3}", inner), 0..6)
            .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>())),
    ]
}

fn tree_strategy() -> BoxedStrategy<Value> {
    leaf_strategy()
        .prop_recursive(4, 64, 6, |inner| container_of(inner))
        .boxed()
}

// Roots must be containers.
fn root_strategy() -> impl Strategy<Value = Value> {
    container_of(tree_strategy())
}

fn contains_match(value: &Value, predicate: &dyn Fn(&Value) -> bool) -> bool {
    match value {
        Value::Array(items) => items
            .iter()
            .any(|item| predicate(item) || contains_match(item, predicate)),
        Value::Object(map) => map
            .values()
            .any(|item| predicate(item) || contains_match(item, predicate)),
        _ => false,
    }
}

/// Walks input and output side by side and checks that the output is the
/// input with exactly the matching entries removed, order and kinds kept.
fn is_pruned_copy(input: &Value, output: &Value, predicate: &dyn Fn(&Value) -> bool) -> bool {
    match (input, output) {
        (Value::Array(before), Value::Array(after)) => {
            let survivors: Vec<&Value> = before.iter().filter(|v| !predicate(*v)).collect();
            survivors.len() == after.len()
                && survivors
                    .iter()
                    .zip(after)
                    .all(|(b, a)| is_pruned_copy(b, a, predicate))
        }
        (Value::Object(before), Value::Object(after)) => {
            let survivors: Vec<(&String, &Value)> =
                before.iter().filter(|(_, v)| !predicate(*v)).collect();
            survivors.len() == after.len()
                && survivors
                    .iter()
                    .zip(after)
                    .all(|((bk, bv), (ak, av))| *bk == ak && is_pruned_copy(bv, av, predicate))
        }
        (Value::Array(_), _) | (Value::Object(_), _) => false,
        (scalar, other) => scalar == other,
    }
}

fn is_null(value: &Value) -> bool {
    value.is_null()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Pruning twice with the same predicate changes nothing the second time.
    #[test]
    fn filter_is_idempotent(data in root_strategy()) {
        let once = filter(&data).unwrap();
        let twice = filter(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// No null survives at any depth.
    #[test]
    fn no_nulls_remain(data in root_strategy()) {
        let pruned = filter(&data).unwrap();
        prop_assert!(!contains_match(&pruned, &is_null));
    }

    /// Kinds, order and key sets match the input minus the removed entries.
    #[test]
    fn output_mirrors_input(data in root_strategy()) {
        let pruned = filter(&data).unwrap();
        prop_assert!(is_pruned_copy(&data, &pruned, &is_null));
    }

    /// Same as above with a string-matching predicate.
    #[test]
    fn custom_predicate_mirrors_input(data in root_strategy(), prefix in "[a-z]") {
        let matches = |v: &Value| v.as_str().is_some_and(|s| s.starts_with(prefix.as_str()));
        let pruned = filter_with(&data, matches).unwrap();
        prop_assert!(is_pruned_copy(&data, &pruned, &matches));
        prop_assert!(!contains_match(&pruned, &matches));
    }

    /// Borrowing and consuming passes agree.
    #[test]
    fn owned_matches_borrowed(data in root_strategy()) {
        let borrowed = filter(&data).unwrap();
        prop_assert_eq!(filter_owned(data).unwrap(), borrowed);
    }

    /// Root kind is preserved.
    #[test]
    fn root_kind_is_preserved(data in root_strategy()) {
        let pruned = filter(&data).unwrap();
        prop_assert_eq!(data.is_array(), pruned.is_array());
        prop_assert_eq!(data.is_object(), pruned.is_object());
    }

    /// A predicate that matches nothing returns an equal tree.
    #[test]
    fn empty_pruner_is_identity(data in root_strategy()) {
        let pruner = Pruner::new();
        prop_assert_eq!(pruner.apply(&data).unwrap(), data);
    }

    /// The default pruner behaves like `filter`.
    #[test]
    fn default_pruner_matches_filter(data in root_strategy()) {
        let pruner = Pruner::default();
        prop_assert_eq!(pruner.apply(&data).unwrap(), filter(&data).unwrap());
    }

    /// Scalar roots are always rejected.
    #[test]
    fn scalar_roots_rejected(data in leaf_strategy()) {
        prop_assert!(filter(&data).is_err());
    }
}
