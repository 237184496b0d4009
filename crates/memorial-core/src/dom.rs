//! Persistent element model restyled by the preview renderer.
//!
//! A [`Document`] is an ordered list of [`Node`]s. Nodes are created once
//! (see [`crate::designer::designer_document`]) and then restyled in place
//! on every render; the UI binds each element's `class`, `style`, text and
//! control state straight from the node with the same id.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Ordered set of class tokens with `classList` semantics.
///
/// Adding a token that is already present is a no-op, removing an absent
/// token is a no-op, and insertion order is kept for stable output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Parse a whitespace separated class attribute, dropping duplicates.
    pub fn parse(classes: &str) -> Self {
        let mut list = Self::new();
        list.add_all(classes);
        list
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| t == token)
    }

    pub fn add(&mut self, token: &str) {
        if !token.is_empty() && !self.contains(token) {
            self.0.push(token.to_string());
        }
    }

    pub fn remove(&mut self, token: &str) {
        self.0.retain(|t| t != token);
    }

    /// Add every whitespace separated token of `tokens`.
    pub fn add_all(&mut self, tokens: &str) {
        for token in tokens.split_whitespace() {
            self.add(token);
        }
    }

    /// Remove every whitespace separated token of `tokens`.
    pub fn remove_all(&mut self, tokens: &str) {
        for token in tokens.split_whitespace() {
            self.remove(token);
        }
    }

    /// Add `token` when `on`, remove it otherwise.
    pub fn set(&mut self, token: &str, on: bool) {
        if on {
            self.add(token);
        } else {
            self.remove(token);
        }
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.0.retain(|t| keep(t));
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// Themed region a node belongs to.
///
/// The renderer restyles nodes by role for the scene palette; nodes that
/// take no palette tokens are [`Role::Plain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Body,
    ControlsPanel,
    PreviewArea,
    Ground,
    Heading,
    Subheading,
    HeaderText,
    Caption,
    Label,
    Control,
    Plain,
}

/// A single element of the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: String,
    pub role: Role,
    /// Classes the element was created with; family sweeps never strip these.
    #[serde(skip)]
    base: ClassList,
    pub classes: ClassList,
    pub text: String,
    pub style: BTreeMap<String, String>,
    /// Current value for inputs, selects and textareas.
    pub value: String,
    /// Current state for checkboxes.
    pub checked: bool,
}

impl Node {
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
            base: ClassList::new(),
            classes: ClassList::new(),
            text: String::new(),
            style: BTreeMap::new(),
            value: String::new(),
            checked: false,
        }
    }

    /// Set the creation-time classes (also the initial class list).
    pub fn with_classes(mut self, classes: &str) -> Self {
        self.base = ClassList::parse(classes);
        self.classes = self.base.clone();
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Whether `token` was one of the node's creation-time classes.
    pub fn is_base_class(&self, token: &str) -> bool {
        self.base.contains(token)
    }

    pub fn style_of(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    pub fn set_style(&mut self, property: &str, value: &str) {
        self.style.insert(property.to_string(), value.to_string());
    }

    pub fn remove_style(&mut self, property: &str) {
        self.style.remove(property);
    }

    /// Inline style attribute, e.g. `display: block; width: 250px;`.
    pub fn style_attr(&self) -> String {
        self.style
            .iter()
            .map(|(k, v)| format!("{}: {};", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// The persistent element tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, replacing any existing node with the same id.
    pub fn insert(&mut self, node: Node) {
        match self.nodes.iter_mut().find(|n| n.id == node.id) {
            Some(existing) => *existing = node,
            None => self.nodes.push(node),
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Node> {
        let index = self.nodes.iter().position(|n| n.id == id)?;
        Some(self.nodes.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn by_role(&self, role: Role) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(move |n| n.role == role)
    }

    pub fn by_role_mut(&mut self, role: Role) -> impl Iterator<Item = &mut Node> {
        self.nodes.iter_mut().filter(move |n| n.role == role)
    }

    /// Control value, empty when the node does not exist.
    pub fn value_of(&self, id: &str) -> &str {
        self.get(id).map(|n| n.value.as_str()).unwrap_or("")
    }

    /// Checkbox state, `None` when the control does not exist.
    pub fn checked(&self, id: &str) -> Option<bool> {
        self.get(id).map(|n| n.checked)
    }

    /// Set a control value. Returns false when no such node exists.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(node) => {
                node.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Set a checkbox state. Returns false when no such node exists.
    pub fn set_checked(&mut self, id: &str, checked: bool) -> bool {
        match self.get_mut(id) {
            Some(node) => {
                node.checked = checked;
                true
            }
            None => false,
        }
    }

    pub fn text_of(&self, id: &str) -> &str {
        self.get(id).map(|n| n.text.as_str()).unwrap_or("")
    }

    /// Class attribute for binding, empty when the node does not exist.
    pub fn class_attr(&self, id: &str) -> String {
        self.get(id).map(|n| n.classes.to_string()).unwrap_or_default()
    }

    /// Style attribute for binding, empty when the node does not exist.
    pub fn style_attr(&self, id: &str) -> String {
        self.get(id).map(Node::style_attr).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_list_has_set_semantics() {
        let mut list = ClassList::parse("a b a c");
        assert_eq!(list.to_string(), "a b c");

        list.add("b");
        assert_eq!(list.len(), 3);

        list.remove("missing");
        list.remove("a");
        assert_eq!(list.to_string(), "b c");
    }

    #[test]
    fn test_class_list_ignores_empty_tokens() {
        let mut list = ClassList::new();
        list.add("");
        list.add_all("   ");
        assert!(list.is_empty());
    }

    #[test]
    fn test_class_list_set_toggles() {
        let mut list = ClassList::new();
        list.set("active", true);
        assert!(list.contains("active"));
        list.set("active", false);
        assert!(!list.contains("active"));
    }

    #[test]
    fn test_insert_replaces_same_id() {
        let mut doc = Document::new();
        doc.insert(Node::new("x", Role::Plain).with_text("one"));
        doc.insert(Node::new("x", Role::Plain).with_text("two"));
        assert_eq!(doc.nodes().len(), 1);
        assert_eq!(doc.text_of("x"), "two");
    }

    #[test]
    fn test_missing_nodes_read_as_empty() {
        let doc = Document::new();
        assert_eq!(doc.value_of("nope"), "");
        assert_eq!(doc.checked("nope"), None);
        assert_eq!(doc.class_attr("nope"), "");
    }

    #[test]
    fn test_style_attr_is_sorted() {
        let mut node = Node::new("card", Role::Plain);
        node.set_style("width", "250px");
        node.set_style("height", "400px");
        assert_eq!(node.style_attr(), "height: 400px; width: 250px;");

        node.remove_style("height");
        assert_eq!(node.style_attr(), "width: 250px;");
    }

    #[test]
    fn test_base_classes_are_remembered() {
        let mut node = Node::new("n", Role::Plain).with_classes("stone-name font-bold");
        node.classes.remove("font-bold");
        assert!(node.is_base_class("font-bold"));
        assert!(!node.classes.contains("font-bold"));
    }
}
