//! Declarative pruning rules.
//!
//! A [`Pruner`] bundles a set of [`Rule`]s into a reusable predicate. A value
//! is removed when any rule matches it:
//!
//! ```text
//! remove = rule₁ ∨ rule₂ ∨ … ∨ ruleₙ
//! ```
//!
//! An empty pruner matches nothing, so [`Pruner::apply`] returns a copy of
//! the input. [`Pruner::default`] holds the single [`Rule::Null`] rule, the
//! same behavior as [`filter`](crate::filter).

use std::fmt;
use std::sync::Arc;

use log::trace;

use crate::error::Result;
use crate::filter::filter_owned_with;
use crate::node::Node;

/// A single removal condition.
pub enum Rule<N> {
    /// The value is null.
    Null,
    /// The value is a string equal to the given text.
    Equals(String),
    /// The value is the empty string.
    EmptyString,
    /// The value is a sequence or mapping with no children.
    ///
    /// Evaluated on the value as found in the input: a mapping that only
    /// becomes empty once its own children are pruned is kept.
    EmptyContainer,
    /// Arbitrary caller-supplied condition.
    Custom(Arc<dyn Fn(&N) -> bool + Send + Sync>),
}

impl<N: Node> Rule<N> {
    /// Returns `true` if `value` should be removed.
    pub fn matches(&self, value: &N) -> bool {
        match self {
            Rule::Null => value.is_null(),
            Rule::Equals(text) => value.as_str() == Some(text.as_str()),
            Rule::EmptyString => value.as_str() == Some(""),
            Rule::EmptyContainer => value.shape().is_empty_container(),
            Rule::Custom(check) => check(value),
        }
    }
}

impl<N> Clone for Rule<N> {
    fn clone(&self) -> Self {
        match self {
            Rule::Null => Rule::Null,
            Rule::Equals(text) => Rule::Equals(text.clone()),
            Rule::EmptyString => Rule::EmptyString,
            Rule::EmptyContainer => Rule::EmptyContainer,
            Rule::Custom(check) => Rule::Custom(Arc::clone(check)),
        }
    }
}

impl<N> fmt::Debug for Rule<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Null => f.write_str("Null"),
            Rule::Equals(text) => f.debug_tuple("Equals").field(text).finish(),
            Rule::EmptyString => f.write_str("EmptyString"),
            Rule::EmptyContainer => f.write_str("EmptyContainer"),
            Rule::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A reusable set of removal rules.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use standout_prune::Pruner;
///
/// let pruner = Pruner::new()
///     .null()
///     .any_of(["NULL", "null"])
///     .empty_strings()
///     .build();
///
/// let data = json!({"a": "NULL", "b": "", "c": ["x", null, "null"], "d": 0});
/// assert_eq!(pruner.apply(&data).unwrap(), json!({"c": ["x"], "d": 0}));
/// ```
pub struct Pruner<N> {
    rules: Vec<Rule<N>>,
}

impl<N: Node> Pruner<N> {
    /// Creates a pruner with no rules. It removes nothing.
    pub fn new() -> Self {
        Pruner { rules: Vec::new() }
    }

    // ========================================================================
    // Rule builders
    // ========================================================================

    /// Adds a rule.
    pub fn rule(mut self, rule: Rule<N>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Removes null values.
    pub fn null(self) -> Self {
        self.rule(Rule::Null)
    }

    /// Removes strings equal to `text`.
    pub fn equals(self, text: impl Into<String>) -> Self {
        self.rule(Rule::Equals(text.into()))
    }

    /// Removes strings equal to any of `texts`.
    pub fn any_of<I, S>(self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts.into_iter().fold(self, |pruner, text| pruner.equals(text))
    }

    /// Removes empty strings.
    pub fn empty_strings(self) -> Self {
        self.rule(Rule::EmptyString)
    }

    /// Removes sequences and mappings that are empty in the input.
    pub fn empty_containers(self) -> Self {
        self.rule(Rule::EmptyContainer)
    }

    /// Removes values for which `check` returns `true`.
    pub fn custom<F>(self, check: F) -> Self
    where
        F: Fn(&N) -> bool + Send + Sync + 'static,
    {
        self.rule(Rule::Custom(Arc::new(check)))
    }

    /// Finalizes the pruner.
    pub fn build(self) -> Self {
        self
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns the configured rules.
    pub fn rules(&self) -> &[Rule<N>] {
        &self.rules
    }

    /// Returns `true` if no rule is configured.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Returns `true` if any rule matches `value`.
    pub fn matches(&self, value: &N) -> bool {
        self.rules.iter().any(|rule| rule.matches(value))
    }

    /// Prunes `data` with these rules.
    ///
    /// # Errors
    ///
    /// Returns [`PruneError::UnsupportedType`](crate::PruneError::UnsupportedType)
    /// when `data` is a scalar.
    pub fn apply(&self, data: &N) -> Result<N> {
        self.apply_owned(data.clone())
    }

    /// Prunes `data` with these rules, consuming it.
    ///
    /// Surviving scalars are moved into the output, not copied.
    pub fn apply_owned(&self, data: N) -> Result<N> {
        trace!(
            "pruning {} root with {} rule(s)",
            data.kind(),
            self.rules.len()
        );
        filter_owned_with(data, |value| self.matches(value))
    }
}

impl<N: Node> Default for Pruner<N> {
    /// A pruner that removes null values.
    fn default() -> Self {
        Pruner::new().null()
    }
}

impl<N> Clone for Pruner<N> {
    fn clone(&self) -> Self {
        Pruner {
            rules: self.rules.clone(),
        }
    }
}

impl<N> fmt::Debug for Pruner<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pruner").field("rules", &self.rules).finish()
    }
}
