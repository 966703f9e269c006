//! Collaborator traits: the node and container shapes the engine works
//! against.
//!
//! The engine is generic over the host's tree representation the same way a
//! query evaluator is generic over its document adapter. Hosts implement
//! [`QueryNode`] for their node handle and [`QueryContext`] for whatever
//! owns traversal; [`crate::simple`] ships a ready-made in-memory pair.

use serde_json::Value;

use crate::path;

/// A single tagged, attributed node.
///
/// Only read access is required; matching never mutates the tree.
pub trait QueryNode {
    /// The tag name (element name) of the node.
    fn tag(&self) -> &str;

    /// User-facing id (`#id` namespace), if any.
    fn id(&self) -> Option<&str>;

    /// Internal identifier (`=diggerid` namespace), if any. Distinct from
    /// [`QueryNode::id`].
    fn diggerid(&self) -> Option<&str>;

    /// Class names in their original order.
    fn classnames(&self) -> &[String];

    /// The nested attribute document.
    fn attributes(&self) -> &Value;

    /// Resolve a dotted attribute path; absent values read as `None`.
    fn attr(&self, dotted_path: &str) -> Option<&Value> {
        path::resolve(self.attributes(), dotted_path)
    }

    fn has_class(&self, name: &str) -> bool {
        self.classnames().iter().any(|c| c == name)
    }
}

/// A container owning an ordered set of nodes with traversal capability.
///
/// `spawn` produces the result container of a search; it must carry the same
/// traversal capability as its source so that query phases can be piped.
pub trait QueryContext: Sized {
    type Node: QueryNode;

    /// Direct children of the contained nodes, in order.
    fn children(&self) -> Vec<Self::Node>;

    /// The contained nodes followed by their full subtrees, depth-first.
    fn descendents(&self) -> Vec<Self::Node>;

    /// A fresh container wrapping exactly `nodes`.
    fn spawn(&self, nodes: Vec<Self::Node>) -> Self;
}
