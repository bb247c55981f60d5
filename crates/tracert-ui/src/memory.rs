use crate::dom::{ClickHandler, Dom, RadioAttrs};
use crate::error::DomError;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioData {
    pub name: String,
    pub id: String,
    pub value: String,
    pub class_name: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Element { tag: String, id: String },
    Radio(RadioData),
    Text(String),
}

struct NodeData {
    kind: NodeKind,
    children: Vec<MemoryNode>,
    listeners: Vec<(String, ClickHandler<MemoryNode>)>,
    properties: BTreeMap<String, ClickHandler<MemoryNode>>,
    attached: Vec<(String, String)>,
}

/// Shared handle to a node of a [`MemoryDom`].
#[derive(Clone)]
pub struct MemoryNode(Rc<RefCell<NodeData>>);

impl MemoryNode {
    fn new(kind: NodeKind) -> Self {
        Self(Rc::new(RefCell::new(NodeData {
            kind,
            children: Vec::new(),
            listeners: Vec::new(),
            properties: BTreeMap::new(),
            attached: Vec::new(),
        })))
    }

    pub fn kind(&self) -> NodeKind {
        self.0.borrow().kind.clone()
    }

    pub fn children(&self) -> Vec<MemoryNode> {
        self.0.borrow().children.clone()
    }

    pub fn radio(&self) -> Option<RadioData> {
        match &self.0.borrow().kind {
            NodeKind::Radio(data) => Some(data.clone()),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<String> {
        match &self.0.borrow().kind {
            NodeKind::Text(text) => Some(text.clone()),
            _ => None,
        }
    }

    /// Names of handler properties installed by legacy registration.
    pub fn property_names(&self) -> Vec<String> {
        self.0.borrow().properties.keys().cloned().collect()
    }

    pub fn listener_count(&self) -> usize {
        self.0.borrow().listeners.len()
    }

    pub fn same_node(&self, other: &MemoryNode) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn id(&self) -> Option<String> {
        match &self.0.borrow().kind {
            NodeKind::Element { id, .. } => Some(id.clone()),
            NodeKind::Radio(data) => Some(data.id.clone()),
            NodeKind::Text(_) => None,
        }
    }

    fn set_checked(&self, checked: bool) {
        if let NodeKind::Radio(data) = &mut self.0.borrow_mut().kind {
            data.checked = checked;
        }
    }

    fn handlers_for(&self, event_type: &str) -> Vec<ClickHandler<MemoryNode>> {
        let data = self.0.borrow();
        let on_type = format!("on{event_type}");

        let mut handlers: Vec<ClickHandler<MemoryNode>> = data
            .listeners
            .iter()
            .filter(|(kind, _)| kind == event_type)
            .map(|(_, handler)| handler.clone())
            .collect();
        handlers.extend(
            data.attached
                .iter()
                .filter(|(kind, _)| *kind == on_type)
                .filter_map(|(_, property)| data.properties.get(property).cloned()),
        );
        handlers
    }
}

impl fmt::Debug for MemoryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MemoryNode").field(&self.0.borrow().kind).finish()
    }
}

/// A document tree held in memory, with native radio-group semantics.
pub struct MemoryDom {
    legacy: bool,
    nodes: RefCell<Vec<MemoryNode>>,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    pub fn new() -> Self {
        Self {
            legacy: false,
            nodes: RefCell::new(Vec::new()),
        }
    }

    /// A document whose nodes only offer `attachEvent`.
    pub fn legacy() -> Self {
        Self {
            legacy: true,
            nodes: RefCell::new(Vec::new()),
        }
    }

    pub fn create_element(&self, tag: &str, id: &str) -> MemoryNode {
        let node = MemoryNode::new(NodeKind::Element {
            tag: tag.to_string(),
            id: id.to_string(),
        });
        self.nodes.borrow_mut().push(node.clone());
        node
    }

    /// Clicks `node` the way a browser would: a radio becomes checked and
    /// every other radio sharing its name is cleared, then click handlers run.
    pub fn click(&self, node: &MemoryNode) {
        self.check(node);
        for handler in node.handlers_for("click") {
            handler(node);
        }
    }

    // Checks a radio and clears the rest of its name group.
    fn check(&self, node: &MemoryNode) {
        let Some(radio) = node.radio() else {
            return;
        };
        for other in self.nodes.borrow().iter() {
            let same_group = other
                .radio()
                .map(|data| data.name == radio.name)
                .unwrap_or(false);
            if same_group && !other.same_node(node) {
                other.set_checked(false);
            }
        }
        node.set_checked(true);
    }
}

impl Dom for MemoryDom {
    type Node = MemoryNode;

    fn element_by_id(&self, id: &str) -> Option<MemoryNode> {
        self.nodes
            .borrow()
            .iter()
            .find(|node| node.id().as_deref() == Some(id))
            .cloned()
    }

    fn create_radio(&self, attrs: &RadioAttrs<'_>) -> Result<MemoryNode, DomError> {
        let node = MemoryNode::new(NodeKind::Radio(RadioData {
            name: attrs.name.to_string(),
            id: attrs.id.to_string(),
            value: attrs.value.to_string(),
            class_name: attrs.class_name.to_string(),
            checked: false,
        }));
        self.nodes.borrow_mut().push(node.clone());
        Ok(node)
    }

    fn append_child(&self, parent: &MemoryNode, child: &MemoryNode) -> Result<(), DomError> {
        parent.0.borrow_mut().children.push(child.clone());
        Ok(())
    }

    fn append_text(&self, parent: &MemoryNode, text: &str) -> Result<(), DomError> {
        let node = MemoryNode::new(NodeKind::Text(text.to_string()));
        parent.0.borrow_mut().children.push(node);
        Ok(())
    }

    fn set_checked(&self, node: &MemoryNode, checked: bool) {
        if checked {
            self.check(node);
        } else {
            node.set_checked(false);
        }
    }

    fn is_checked(&self, node: &MemoryNode) -> bool {
        node.radio().map(|data| data.checked).unwrap_or(false)
    }

    fn supports_event_listener(&self) -> bool {
        !self.legacy
    }

    fn add_event_listener(
        &self,
        node: &MemoryNode,
        event_type: &str,
        handler: ClickHandler<MemoryNode>,
    ) -> Result<(), DomError> {
        if self.legacy {
            return Err(DomError::Unsupported("addEventListener"));
        }
        node.0
            .borrow_mut()
            .listeners
            .push((event_type.to_string(), handler));
        Ok(())
    }

    fn attach_event(
        &self,
        node: &MemoryNode,
        event_type: &str,
        property: &str,
        handler: ClickHandler<MemoryNode>,
    ) -> Result<(), DomError> {
        let mut data = node.0.borrow_mut();
        data.properties.insert(property.to_string(), handler);
        data.attached
            .push((format!("on{event_type}"), property.to_string()));
        Ok(())
    }
}
