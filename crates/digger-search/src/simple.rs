//! Simple in-memory tree implementation of the model traits, used by tests
//! and quick prototypes.
//!
//! Example:
//! ```
//! use digger_search::simple::{node, SimpleContainer};
//!
//! let tree = SimpleContainer::new(vec![
//!     node("country")
//!         .attr("name", "USA")
//!         .child(node("city").class("south"))
//!         .build(),
//! ]);
//!
//! let cities = tree.find("country[name^=u] > city.south").unwrap();
//! assert_eq!(cities.len(), 1);
//! ```

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::Error;
use crate::model::{QueryContext, QueryNode};
use crate::search::find_str;

#[derive(Debug)]
struct Inner {
    tag: String,
    id: Option<String>,
    diggerid: Option<String>,
    classes: Vec<String>,
    attributes: Value,
    children: Vec<SimpleNode>,
}

/// An Arc-backed immutable node. Cloning is cheap; equality is pointer
/// identity.
#[derive(Clone)]
pub struct SimpleNode(Arc<Inner>);

impl PartialEq for SimpleNode {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
impl Eq for SimpleNode {}

impl fmt::Debug for SimpleNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleNode")
            .field("tag", &self.0.tag)
            .field("id", &self.0.id)
            .field("classes", &self.0.classes)
            .finish()
    }
}

impl SimpleNode {
    pub fn children(&self) -> &[SimpleNode] {
        &self.0.children
    }

    /// This node followed by its full subtree, depth-first.
    fn collect_subtree(&self, out: &mut Vec<SimpleNode>) {
        out.push(self.clone());
        for child in &self.0.children {
            child.collect_subtree(out);
        }
    }
}

impl QueryNode for SimpleNode {
    fn tag(&self) -> &str {
        &self.0.tag
    }

    fn id(&self) -> Option<&str> {
        self.0.id.as_deref()
    }

    fn diggerid(&self) -> Option<&str> {
        self.0.diggerid.as_deref()
    }

    fn classnames(&self) -> &[String] {
        &self.0.classes
    }

    fn attributes(&self) -> &Value {
        &self.0.attributes
    }
}

/// Chainable builder for [`SimpleNode`] trees.
pub struct NodeBuilder {
    tag: String,
    id: Option<String>,
    diggerid: Option<String>,
    classes: Vec<String>,
    attributes: Map<String, Value>,
    children: Vec<SimpleNode>,
}

impl NodeBuilder {
    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn diggerid(mut self, diggerid: &str) -> Self {
        self.diggerid = Some(diggerid.to_string());
        self
    }

    pub fn class(mut self, name: &str) -> Self {
        self.classes.push(name.to_string());
        self
    }

    /// Set a top-level attribute. Nested documents can be passed as
    /// `serde_json::json!` objects.
    pub fn attr(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    pub fn child(mut self, child: impl Into<SimpleNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn build(self) -> SimpleNode {
        SimpleNode(Arc::new(Inner {
            tag: self.tag,
            id: self.id,
            diggerid: self.diggerid,
            classes: self.classes,
            attributes: Value::Object(self.attributes),
            children: self.children,
        }))
    }
}

impl From<NodeBuilder> for SimpleNode {
    fn from(builder: NodeBuilder) -> Self {
        builder.build()
    }
}

/// Start building a node with the given tag.
pub fn node(tag: &str) -> NodeBuilder {
    NodeBuilder {
        tag: tag.to_string(),
        id: None,
        diggerid: None,
        classes: Vec::new(),
        attributes: Map::new(),
        children: Vec::new(),
    }
}

/// An ordered set of [`SimpleNode`]s with traversal capability.
///
/// Search results are containers of the same type, so phases pipe naturally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleContainer {
    nodes: Vec<SimpleNode>,
}

impl SimpleContainer {
    pub fn new(nodes: Vec<SimpleNode>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[SimpleNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Parse and run a selector chain against this container.
    pub fn find(&self, selector_text: &str) -> Result<SimpleContainer, Error> {
        find_str(selector_text, self)
    }
}

impl QueryContext for SimpleContainer {
    type Node = SimpleNode;

    fn children(&self) -> Vec<SimpleNode> {
        self.nodes
            .iter()
            .flat_map(|n| n.children().iter().cloned())
            .collect()
    }

    fn descendents(&self) -> Vec<SimpleNode> {
        let mut out = Vec::new();
        for node in &self.nodes {
            node.collect_subtree(&mut out);
        }
        out
    }

    fn spawn(&self, nodes: Vec<SimpleNode>) -> Self {
        Self { nodes }
    }
}
