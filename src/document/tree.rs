use crate::foundation::error::{SplitError, SplitResult};

/// Index of a node inside its [`Document`] arena.
///
/// Ids are only meaningful for the document that produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

/// An element's qualified name and attributes in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    /// Qualified tag name (`path`, `svg:path`, ...).
    pub name: String,
    /// Attributes in insertion order, including namespace declarations.
    pub attrs: Vec<(String, String)>,
}

impl Element {
    /// Attribute value by exact name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Node payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// An element with attributes and children.
    Element(Element),
    /// Character data.
    Text(String),
}

#[derive(Clone, Debug)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An SVG document as an arena of nodes with owned, index-based child lists.
///
/// Detached nodes stay allocated but are unreachable from [`Document::root`] and are skipped
/// by traversal and serialization.
#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<NodeData>,
    root: NodeId,
}

impl Document {
    /// Create a document holding a single root element.
    pub fn new(root_name: impl Into<String>) -> Self {
        let root = NodeData {
            kind: NodeKind::Element(Element {
                name: root_name.into(),
                attrs: Vec::new(),
            }),
            parent: None,
            children: Vec::new(),
        };
        Self {
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    /// The root element.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Node payload.
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    /// Element payload, `None` for text nodes.
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match &self.nodes[id.0].kind {
            NodeKind::Element(e) => Some(e),
            NodeKind::Text(_) => None,
        }
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match &mut self.nodes[id.0].kind {
            NodeKind::Element(e) => Some(e),
            NodeKind::Text(_) => None,
        }
    }

    /// Tag name of an element node.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|e| e.name.as_str())
    }

    /// Attribute value of an element node.
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).and_then(|e| e.attr(name))
    }

    /// Set (or append) an attribute. Returns `false` for text nodes.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: impl Into<String>) -> bool {
        let Some(e) = self.element_mut(id) else {
            return false;
        };
        let value = value.into();
        match e.attrs.iter().position(|(k, _)| k == name) {
            Some(i) => e.attrs[i].1 = value,
            None => e.attrs.push((name.to_owned(), value)),
        }
        true
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove_attr(&mut self, id: NodeId, name: &str) -> Option<String> {
        let e = self.element_mut(id)?;
        let idx = e.attrs.iter().position(|(k, _)| k == name)?;
        Some(e.attrs.remove(idx).1)
    }

    /// Parent node, `None` for the root and for detached nodes.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Children in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Allocate a detached element.
    pub fn create_element(
        &mut self,
        name: impl Into<String>,
        attrs: Vec<(String, String)>,
    ) -> NodeId {
        self.alloc(NodeKind::Element(Element {
            name: name.into(),
            attrs,
        }))
    }

    /// Allocate a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.alloc(NodeKind::Text(text.into()))
    }

    fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Append a detached node as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> SplitResult<()> {
        self.check_attachable(parent, child)?;
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }

    /// Insert a detached node immediately before `reference` under the same parent.
    pub fn insert_before(&mut self, reference: NodeId, node: NodeId) -> SplitResult<()> {
        let parent = self.parent(reference).ok_or_else(|| {
            SplitError::document(format!("node {} has no parent", reference.0))
        })?;
        self.check_attachable(parent, node)?;
        let siblings = &mut self.nodes[parent.0].children;
        let idx = siblings
            .iter()
            .position(|&c| c == reference)
            .ok_or_else(|| SplitError::document("parent/child links out of sync"))?;
        siblings.insert(idx, node);
        self.nodes[node.0].parent = Some(parent);
        Ok(())
    }

    /// Unlink a node (and its subtree) from its parent.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != id);
        }
    }

    fn check_attachable(&self, parent: NodeId, child: NodeId) -> SplitResult<()> {
        if self.element(parent).is_none() {
            return Err(SplitError::document(format!(
                "node {} is not an element",
                parent.0
            )));
        }
        if child == self.root || self.nodes[child.0].parent.is_some() {
            return Err(SplitError::document(format!(
                "node {} is already attached",
                child.0
            )));
        }
        let mut cur = Some(parent);
        while let Some(c) = cur {
            if c == child {
                return Err(SplitError::document("cannot attach a node under itself"));
            }
            cur = self.parent(c);
        }
        Ok(())
    }

    /// Attached nodes in document (pre-)order, starting with the root.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            doc: self,
            stack: vec![self.root],
        }
    }

    /// Attached elements named `tag`, in document order.
    pub fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.descendants()
            .filter(|&id| self.tag(id) == Some(tag))
            .collect()
    }

    /// First attached element whose `id` attribute equals `id`.
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants().find(|&n| self.attr(n, "id") == Some(id))
    }
}

/// Pre-order iterator over attached nodes.
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.doc.children(id).iter().rev().copied());
        Some(id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/tree.rs"]
mod tests;
