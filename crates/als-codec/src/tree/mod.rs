//! Arena-backed document tree.
//!
//! A [`Document`] owns every node it contains in one [`id_arena::Arena`].
//! Nodes are addressed by [`NodeId`] handles and linked parent → first
//! child → next sibling, so navigation never borrows through a node and
//! nothing is freed before the document itself is dropped.
//!
//! The tree notation only knows named elements with ordered attributes.
//! Text content, comments and processing instructions are not part of it.

mod parse;
mod print;

use id_arena::{Arena, Id};

pub use print::PrintOptions;

/// Handle of a node inside its [`Document`].
pub type NodeId = Id<Node>;

/// A named element with ordered attributes.
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    attributes: Vec<(String, String)>,
    parent: Option<NodeId>,
    first_child: Option<NodeId>,
    last_child: Option<NodeId>,
    next_sibling: Option<NodeId>,
}

impl Node {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            parent: None,
            first_child: None,
            last_child: None,
            next_sibling: None,
        }
    }

    /// Tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attributes in document order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }
}

/// The leading `<?xml ...?>` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub version: String,
    pub encoding: Option<String>,
}

impl Default for Declaration {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            encoding: Some("UTF-8".to_string()),
        }
    }
}

/// A parsed or constructed document.
#[derive(Debug)]
pub struct Document {
    arena: Arena<Node>,
    root: NodeId,
    declaration: Option<Declaration>,
}

impl Document {
    /// Create a document holding a single root element and the default
    /// declaration.
    pub fn new(root_name: &str) -> Self {
        let mut arena = Arena::new();
        let root = arena.alloc(Node::new(root_name));
        Self {
            arena,
            root,
            declaration: Some(Declaration::default()),
        }
    }

    /// The root element.
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn declaration(&self) -> Option<&Declaration> {
        self.declaration.as_ref()
    }

    /// Borrow a node.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.arena[id]
    }

    /// Tag name of a node.
    pub fn name(&self, id: NodeId) -> &str {
        &self.arena[id].name
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id].parent
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id].first_child
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id].next_sibling
    }

    /// First direct child with the given tag name.
    pub fn first_child_named(&self, id: NodeId, name: &str) -> Option<NodeId> {
        self.children(id).find(|&child| self.name(child) == name)
    }

    /// Direct children in document order.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            document: self,
            next: self.first_child(id),
        }
    }

    /// Value of the first attribute with the given name.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.arena[id]
            .attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Allocate a detached node.
    pub fn create_node(&mut self, name: &str) -> NodeId {
        self.arena.alloc(Node::new(name))
    }

    /// Append a detached node as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(self.arena[child].parent.is_none(), "node already attached");
        self.arena[child].parent = Some(parent);
        match self.arena[parent].last_child {
            Some(last) => self.arena[last].next_sibling = Some(child),
            None => self.arena[parent].first_child = Some(child),
        }
        self.arena[parent].last_child = Some(child);
    }

    /// Set an attribute, replacing an existing value in place or appending
    /// a new attribute after the existing ones.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        let value = value.into();
        let attributes = &mut self.arena[id].attributes;
        match attributes.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => entry.1 = value,
            None => attributes.push((name.to_string(), value)),
        }
    }

    /// Number of nodes owned by the document, the root included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }
}

/// Iterator over the direct children of a node.
pub struct Children<'a> {
    document: &'a Document,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.document.next_sibling(current);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut doc = Document::new("Tracks");
        let root = doc.root();
        for name in ["AudioTrack", "MidiTrack", "AudioTrack"] {
            let child = doc.create_node(name);
            doc.append_child(root, child);
        }
        let names: Vec<_> = doc.children(root).map(|id| doc.name(id)).collect();
        assert_eq!(names, vec!["AudioTrack", "MidiTrack", "AudioTrack"]);
        assert_eq!(doc.node_count(), 4);
    }

    #[test]
    fn test_first_child_named_and_siblings() {
        let mut doc = Document::new("LiveSet");
        let root = doc.root();
        let a = doc.create_node("LomId");
        let b = doc.create_node("Tracks");
        doc.append_child(root, a);
        doc.append_child(root, b);
        assert_eq!(doc.first_child_named(root, "Tracks"), Some(b));
        assert_eq!(doc.first_child_named(root, "Scenes"), None);
        assert_eq!(doc.next_sibling(a), Some(b));
        assert_eq!(doc.next_sibling(b), None);
        assert_eq!(doc.parent(b), Some(root));
    }

    #[test]
    fn test_set_attribute_replaces_in_place() {
        let mut doc = Document::new("Scene");
        let root = doc.root();
        doc.set_attribute(root, "Id", "0");
        doc.set_attribute(root, "Value", "Intro");
        doc.set_attribute(root, "Id", "3");
        assert_eq!(doc.attribute(root, "Id"), Some("3"));
        let keys: Vec<_> = doc
            .node(root)
            .attributes()
            .iter()
            .map(|(key, _)| key.as_str())
            .collect();
        assert_eq!(keys, vec!["Id", "Value"]);
    }
}
