//! CST snapshot - a normalized, serializable representation of the tree
//!
//! The snapshot captures node types, labels, attributes, and children in a
//! format-agnostic form, so serializers and test assertions can work on the
//! structure without reimplementing tree traversal.

use crate::cst::elements::binding::ForBinding;
use crate::cst::elements::element::{Element, StarredElement};
use crate::cst::elements::expression::{Expression, Name};
use crate::cst::elements::tuple::{Tuple, TupleElement};
use crate::cst::tokens::CommaSlot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A snapshot of a CST node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CstSnapshot {
    /// The type of node (e.g., "Tuple", "Element", "Name")
    pub node_type: String,

    /// The primary label of the node
    pub label: String,

    /// Additional attributes specific to the node type
    pub attributes: BTreeMap<String, String>,

    /// Child nodes in the tree
    pub children: Vec<CstSnapshot>,
}

impl CstSnapshot {
    pub fn new(node_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            label: label.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: CstSnapshot) -> Self {
        self.children.push(child);
        self
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Produce a normalized snapshot of a node and its children.
pub trait Snapshot {
    fn snapshot(&self) -> CstSnapshot;
}

fn comma_label(slot: &CommaSlot) -> &'static str {
    match slot {
        CommaSlot::Absent => "absent",
        CommaSlot::Sentinel => "sentinel",
        CommaSlot::Explicit(_) => "explicit",
    }
}

impl Snapshot for Name {
    fn snapshot(&self) -> CstSnapshot {
        CstSnapshot::new("Name", self.value.clone())
    }
}

impl Snapshot for Expression {
    fn snapshot(&self) -> CstSnapshot {
        match self {
            Expression::Name(name) => name.snapshot(),
            Expression::Tuple(tuple) => tuple.snapshot(),
        }
    }
}

impl Snapshot for Element {
    fn snapshot(&self) -> CstSnapshot {
        CstSnapshot::new("Element", "")
            .with_attribute("comma", comma_label(&self.comma))
            .with_attribute("parens", self.lpar.len().to_string())
            .with_child(self.value.snapshot())
    }
}

impl Snapshot for StarredElement {
    fn snapshot(&self) -> CstSnapshot {
        CstSnapshot::new("StarredElement", "")
            .with_attribute("comma", comma_label(&self.comma))
            .with_attribute("parens", self.lpar.len().to_string())
            .with_child(self.value.snapshot())
    }
}

impl Snapshot for TupleElement {
    fn snapshot(&self) -> CstSnapshot {
        match self {
            TupleElement::Plain(element) => element.snapshot(),
            TupleElement::Starred(element) => element.snapshot(),
        }
    }
}

impl Snapshot for Tuple {
    fn snapshot(&self) -> CstSnapshot {
        let mut snapshot = CstSnapshot::new("Tuple", format!("{} elements", self.elements.len()))
            .with_attribute("parens", self.lpar.len().to_string());
        for element in &self.elements {
            snapshot = snapshot.with_child(element.snapshot());
        }
        snapshot
    }
}

impl Snapshot for ForBinding {
    fn snapshot(&self) -> CstSnapshot {
        CstSnapshot::new("ForBinding", "")
            .with_child(self.target.snapshot())
            .with_child(self.iter.snapshot())
    }
}
