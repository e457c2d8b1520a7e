//! The node tree
//!
//! A closed set of node variants wrapped in one sum type. Containers own
//! their children outright (`Vec<Node>`), so dropping a container drops its
//! whole subtree. There is no parent pointer and no shared ownership.
//!
//! ```text
//! Node::Element(ElementNode)
//!      ├── Node::Text(TextNode)
//!      └── Node::List(ListElementNode)
//!               └── Node::ListItem(ListItemNode)
//!                        └── Node::Button(ButtonNode)
//! ```

use crate::types::{ListType, Mode, NodeId};
use indexmap::IndexMap;
use smallvec::SmallVec;

/// Attribute map. Keys are unique, iteration follows insertion order.
pub type Attributes = IndexMap<String, String, ahash::RandomState>;

/// CSS class list. Most elements carry fewer than four classes.
pub type ClassList = SmallVec<[String; 4]>;

/// Option labels of a `<select>`
pub type OptionList = SmallVec<[String; 4]>;

/// Shared behaviour of nodes that own children
pub trait Container {
    fn children(&self) -> &[Node];

    fn children_mut(&mut self) -> &mut Vec<Node>;

    /// Append a child. Duplicates are not rejected.
    fn add_child<N: Into<Node>>(&mut self, node: N) {
        self.children_mut().push(node.into());
    }

    /// Append a child if there is one; `None` is a no-op.
    fn add_child_if_some<N: Into<Node>>(&mut self, node: Option<N>) {
        if let Some(node) = node {
            self.add_child(node);
        }
    }

    /// Remove the first child with this identity and hand it back.
    /// Returns `None` (and changes nothing) if no child matches.
    fn remove_child(&mut self, id: NodeId) -> Option<Node> {
        let children = self.children_mut();
        let position = children.iter().position(|child| child.id() == id)?;
        Some(children.remove(position))
    }

    /// Builder form of `add_child`
    fn with_child<N: Into<Node>>(mut self, node: N) -> Self
    where
        Self: Sized,
    {
        self.add_child(node);
        self
    }
}

/// Plain text
#[derive(Debug, Clone, PartialEq)]
pub struct TextNode {
    id: NodeId,
    mode: Mode,
    text: String,
}

impl TextNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(),
            mode: Mode::View,
            text: text.into(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }
}

/// A generic tag with classes, attributes and children
#[derive(Debug, Clone, PartialEq)]
pub struct ElementNode {
    id: NodeId,
    mode: Mode,
    tag_name: String,
    display_type: String,
    closing_type: String,
    classes: ClassList,
    attributes: Attributes,
    children: Vec<Node>,
}

impl ElementNode {
    pub fn new<I, S>(
        tag_name: impl Into<String>,
        display_type: impl Into<String>,
        closing_type: impl Into<String>,
        classes: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: NodeId::new(),
            mode: Mode::View,
            tag_name: tag_name.into(),
            display_type: display_type.into(),
            closing_type: closing_type.into(),
            classes: classes.into_iter().map(Into::into).collect(),
            attributes: Attributes::default(),
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn display_type(&self) -> &str {
        &self.display_type
    }

    pub fn closing_type(&self) -> &str {
        &self.closing_type
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        self.classes.push(class.into());
    }

    /// Remove every occurrence of a class; no-op if absent
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Get attribute value
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(|s| s.as_str())
    }

    /// Insert or overwrite an attribute. An overwritten key keeps its
    /// original position.
    pub fn add_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Remove an attribute; no-op if absent
    pub fn remove_attribute(&mut self, key: &str) {
        self.attributes.shift_remove(key);
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        for child in &mut self.children {
            child.set_mode(mode);
        }
    }
}

impl Container for ElementNode {
    fn children(&self) -> &[Node] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }
}

/// `<ul>` / `<ol>`
#[derive(Debug, Clone, PartialEq)]
pub struct ListElementNode {
    id: NodeId,
    mode: Mode,
    list_type: ListType,
    children: Vec<Node>,
}

impl ListElementNode {
    pub fn new(list_type: ListType) -> Self {
        Self {
            id: NodeId::new(),
            mode: Mode::View,
            list_type,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn list_type(&self) -> ListType {
        self.list_type
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        for child in &mut self.children {
            child.set_mode(mode);
        }
    }
}

impl Container for ListElementNode {
    fn children(&self) -> &[Node] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }
}

/// `<li>`
#[derive(Debug, Clone, PartialEq)]
pub struct ListItemNode {
    id: NodeId,
    mode: Mode,
    children: Vec<Node>,
}

impl ListItemNode {
    pub fn new() -> Self {
        Self {
            id: NodeId::new(),
            mode: Mode::View,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        for child in &mut self.children {
            child.set_mode(mode);
        }
    }
}

impl Default for ListItemNode {
    fn default() -> Self {
        Self::new()
    }
}

impl Container for ListItemNode {
    fn children(&self) -> &[Node] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }
}

/// `<input type="text">`
#[derive(Debug, Clone, PartialEq)]
pub struct TextInputNode {
    id: NodeId,
    mode: Mode,
    name: String,
}

impl TextInputNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(),
            mode: Mode::View,
            name: name.into(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonNode {
    id: NodeId,
    mode: Mode,
    label: String,
}

impl ButtonNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(),
            mode: Mode::View,
            label: label.into(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectNode {
    id: NodeId,
    mode: Mode,
    options: OptionList,
}

impl SelectNode {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: NodeId::new(),
            mode: Mode::View,
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }
}

/// Any member of the tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(TextNode),
    Element(ElementNode),
    List(ListElementNode),
    ListItem(ListItemNode),
    TextInput(TextInputNode),
    Button(ButtonNode),
    Select(SelectNode),
}

impl Node {
    pub fn id(&self) -> NodeId {
        match self {
            Node::Text(n) => n.id(),
            Node::Element(n) => n.id(),
            Node::List(n) => n.id(),
            Node::ListItem(n) => n.id(),
            Node::TextInput(n) => n.id(),
            Node::Button(n) => n.id(),
            Node::Select(n) => n.id(),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Node::Text(n) => n.mode(),
            Node::Element(n) => n.mode(),
            Node::List(n) => n.mode(),
            Node::ListItem(n) => n.mode(),
            Node::TextInput(n) => n.mode(),
            Node::Button(n) => n.mode(),
            Node::Select(n) => n.mode(),
        }
    }

    /// Short variant name for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Text(_) => "text",
            Node::Element(_) => "element",
            Node::List(_) => "list",
            Node::ListItem(_) => "list-item",
            Node::TextInput(_) => "text-input",
            Node::Button(_) => "button",
            Node::Select(_) => "select",
        }
    }

    /// Children of a container; empty for leaves
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(n) => n.children(),
            Node::List(n) => n.children(),
            Node::ListItem(n) => n.children(),
            Node::Text(_) | Node::TextInput(_) | Node::Button(_) | Node::Select(_) => &[],
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Node::Element(_) | Node::List(_) | Node::ListItem(_))
    }

    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Node::Element(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut ElementNode> {
        match self {
            Node::Element(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            Node::Text(n) => Some(n),
            _ => None,
        }
    }

    /// Apply a mode to this node and, for containers, every descendant.
    /// The cascade happens now, not at render time.
    pub fn set_mode(&mut self, mode: Mode) {
        match self {
            Node::Text(n) => n.set_mode(mode),
            Node::Element(n) => n.set_mode(mode),
            Node::List(n) => n.set_mode(mode),
            Node::ListItem(n) => n.set_mode(mode),
            Node::TextInput(n) => n.set_mode(mode),
            Node::Button(n) => n.set_mode(mode),
            Node::Select(n) => n.set_mode(mode),
        }
    }

    pub fn set_edit_mode(&mut self) {
        tracing::debug!(node = %self.id(), kind = self.kind_name(), "switching to edit mode");
        self.set_mode(Mode::Edit);
    }

    pub fn set_view_mode(&mut self) {
        tracing::debug!(node = %self.id(), kind = self.kind_name(), "switching to view mode");
        self.set_mode(Mode::View);
    }
}

impl From<TextNode> for Node {
    fn from(node: TextNode) -> Self {
        Node::Text(node)
    }
}

impl From<ElementNode> for Node {
    fn from(node: ElementNode) -> Self {
        Node::Element(node)
    }
}

impl From<ListElementNode> for Node {
    fn from(node: ListElementNode) -> Self {
        Node::List(node)
    }
}

impl From<ListItemNode> for Node {
    fn from(node: ListItemNode) -> Self {
        Node::ListItem(node)
    }
}

impl From<TextInputNode> for Node {
    fn from(node: TextInputNode) -> Self {
        Node::TextInput(node)
    }
}

impl From<ButtonNode> for Node {
    fn from(node: ButtonNode) -> Self {
        Node::Button(node)
    }
}

impl From<SelectNode> for Node {
    fn from(node: SelectNode) -> Self {
        Node::Select(node)
    }
}
