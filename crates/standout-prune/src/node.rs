//! Tree node classification.
//!
//! The [`Node`] trait is the single place where a host value is classified
//! as a sequence, a mapping or a scalar. The filter never inspects host
//! variants directly; it only sees the [`Parts`] returned by
//! [`Node::into_parts`], and rules look at the borrowed [`Shape`] returned
//! by [`Node::shape`]. Both must classify a node the same way.
//!
//! Text is always a scalar. A string holds a sequence of characters, but no
//! implementation may report it as a sequence.

use std::fmt;

/// Borrowed iterator over the entries of a mapping node.
pub type Entries<'a, N> = Box<dyn Iterator<Item = (&'a <N as Node>::Key, &'a N)> + 'a>;

/// Structural classification of a node.
pub enum Shape<'a, N: Node> {
    /// Ordered collection of child nodes.
    Sequence(&'a [N]),
    /// Key to child associations, in the host's iteration order.
    Mapping(Entries<'a, N>),
    /// Anything else. Scalars are never traversed.
    Scalar,
}

impl<N: Node> Shape<'_, N> {
    /// Returns `true` for sequences and mappings.
    pub fn is_container(&self) -> bool {
        !matches!(self, Shape::Scalar)
    }

    /// Returns `true` for sequences and mappings without children.
    ///
    /// Consumes the shape since mapping entries are a one-shot iterator.
    pub fn is_empty_container(self) -> bool {
        match self {
            Shape::Sequence(items) => items.is_empty(),
            Shape::Mapping(mut entries) => entries.next().is_none(),
            Shape::Scalar => false,
        }
    }
}

impl<N: Node + fmt::Debug> fmt::Debug for Shape<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
            Shape::Mapping(_) => f.write_str("Mapping(..)"),
            Shape::Scalar => f.write_str("Scalar"),
        }
    }
}

/// A node taken apart by value.
///
/// Children and scalars are moved out of the host value, never copied.
pub enum Parts<N: Node> {
    /// Ordered children.
    Sequence(Vec<N>),
    /// Key to child entries, in the host's iteration order.
    Mapping(Vec<(N::Key, N)>),
    /// The node itself, untouched.
    Scalar(N),
}

impl<N> fmt::Debug for Parts<N>
where
    N: Node + fmt::Debug,
    N::Key: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parts::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
            Parts::Mapping(entries) => f.debug_tuple("Mapping").field(entries).finish(),
            Parts::Scalar(value) => f.debug_tuple("Scalar").field(value).finish(),
        }
    }
}

/// A value in a nested tree that can be pruned.
///
/// # Implementing
///
/// ```
/// use standout_prune::{Node, Parts, Shape};
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum Tree {
///     Leaf(Option<i64>),
///     List(Vec<Tree>),
/// }
///
/// impl Node for Tree {
///     type Key = ();
///
///     fn shape(&self) -> Shape<'_, Self> {
///         match self {
///             Tree::List(items) => Shape::Sequence(items),
///             Tree::Leaf(_) => Shape::Scalar,
///         }
///     }
///
///     fn into_parts(self) -> Parts<Self> {
///         match self {
///             Tree::List(items) => Parts::Sequence(items),
///             leaf => Parts::Scalar(leaf),
///         }
///     }
///
///     fn from_sequence(items: Vec<Self>) -> Self {
///         Tree::List(items)
///     }
///
///     fn from_mapping(entries: Vec<((), Self)>) -> Self {
///         Tree::List(entries.into_iter().map(|(_, v)| v).collect())
///     }
///
///     fn is_null(&self) -> bool {
///         matches!(self, Tree::Leaf(None))
///     }
///
///     fn as_str(&self) -> Option<&str> {
///         None
///     }
///
///     fn kind(&self) -> &'static str {
///         match self {
///             Tree::Leaf(_) => "leaf",
///             Tree::List(_) => "list",
///         }
///     }
///
///     fn repr(&self) -> String {
///         format!("{self:?}")
///     }
/// }
///
/// let tree = Tree::List(vec![Tree::Leaf(Some(1)), Tree::Leaf(None)]);
/// let pruned = standout_prune::filter(&tree).unwrap();
/// assert_eq!(pruned, Tree::List(vec![Tree::Leaf(Some(1))]));
/// ```
pub trait Node: Clone + Sized {
    /// Mapping key type. Keys are copied to the output untouched.
    type Key: Clone + 'static;

    /// Classifies this node by reference.
    fn shape(&self) -> Shape<'_, Self>;

    /// Classifies this node by value, moving its children out.
    fn into_parts(self) -> Parts<Self>;

    /// Builds a sequence node from already pruned children.
    fn from_sequence(items: Vec<Self>) -> Self;

    /// Builds a mapping node from already pruned entries, keeping their order.
    fn from_mapping(entries: Vec<(Self::Key, Self)>) -> Self;

    /// Returns `true` for the host's null value.
    fn is_null(&self) -> bool;

    /// Returns the text of a string node.
    fn as_str(&self) -> Option<&str>;

    /// Short name of the node kind, used in diagnostics.
    fn kind(&self) -> &'static str;

    /// Textual rendering of the node, used in diagnostics.
    fn repr(&self) -> String;
}

impl Node for serde_json::Value {
    type Key = String;

    fn shape(&self) -> Shape<'_, Self> {
        use serde_json::Value;

        match self {
            Value::Array(items) => Shape::Sequence(items),
            Value::Object(map) => Shape::Mapping(Box::new(map.iter())),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Shape::Scalar,
        }
    }

    fn into_parts(self) -> Parts<Self> {
        use serde_json::Value;

        match self {
            Value::Array(items) => Parts::Sequence(items),
            Value::Object(map) => Parts::Mapping(map.into_iter().collect()),
            scalar @ (Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)) => {
                Parts::Scalar(scalar)
            }
        }
    }

    fn from_sequence(items: Vec<Self>) -> Self {
        serde_json::Value::Array(items)
    }

    fn from_mapping(entries: Vec<(String, Self)>) -> Self {
        serde_json::Value::Object(entries.into_iter().collect())
    }

    fn is_null(&self) -> bool {
        matches!(self, serde_json::Value::Null)
    }

    fn as_str(&self) -> Option<&str> {
        match self {
            serde_json::Value::String(s) => Some(s),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        use serde_json::Value;

        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    fn repr(&self) -> String {
        self.to_string()
    }
}

#[cfg(feature = "yaml")]
impl Node for serde_yaml::Value {
    type Key = serde_yaml::Value;

    fn shape(&self) -> Shape<'_, Self> {
        use serde_yaml::Value;

        match self {
            Value::Sequence(items) => Shape::Sequence(items),
            Value::Mapping(map) => Shape::Mapping(Box::new(map.iter())),
            // Tagged values are opaque: the tag and its payload go through as one leaf.
            Value::Null
            | Value::Bool(_)
            | Value::Number(_)
            | Value::String(_)
            | Value::Tagged(_) => Shape::Scalar,
        }
    }

    fn into_parts(self) -> Parts<Self> {
        use serde_yaml::Value;

        match self {
            Value::Sequence(items) => Parts::Sequence(items),
            Value::Mapping(map) => Parts::Mapping(map.into_iter().collect()),
            scalar @ (Value::Null
            | Value::Bool(_)
            | Value::Number(_)
            | Value::String(_)
            | Value::Tagged(_)) => Parts::Scalar(scalar),
        }
    }

    fn from_sequence(items: Vec<Self>) -> Self {
        serde_yaml::Value::Sequence(items)
    }

    fn from_mapping(entries: Vec<(serde_yaml::Value, Self)>) -> Self {
        serde_yaml::Value::Mapping(entries.into_iter().collect())
    }

    fn is_null(&self) -> bool {
        matches!(self, serde_yaml::Value::Null)
    }

    fn as_str(&self) -> Option<&str> {
        match self {
            serde_yaml::Value::String(s) => Some(s),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        use serde_yaml::Value;

        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
            Value::Tagged(_) => "tagged",
        }
    }

    fn repr(&self) -> String {
        match serde_yaml::to_string(self) {
            Ok(text) => text.trim_end().to_string(),
            Err(_) => format!("{self:?}"),
        }
    }
}
