//! Visitor dispatch
//!
//! Each variant's `accept` calls the one handler written for it, so a
//! visitor never has to inspect a node's type. `accept` does not recurse:
//! a visitor that wants the whole tree walks the children itself.

use crate::node::{
    ButtonNode, ElementNode, ListElementNode, ListItemNode, Node, SelectNode, TextInputNode,
    TextNode,
};

pub trait NodeVisitor {
    fn visit_element(&mut self, node: &ElementNode);
    fn visit_text(&mut self, node: &TextNode);
    fn visit_list_element(&mut self, node: &ListElementNode);
    fn visit_list_item(&mut self, node: &ListItemNode);
    fn visit_text_input(&mut self, node: &TextInputNode);
    fn visit_button(&mut self, node: &ButtonNode);
    fn visit_select(&mut self, node: &SelectNode);
}

impl TextNode {
    pub fn accept<V: NodeVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_text(self);
    }
}

impl ElementNode {
    pub fn accept<V: NodeVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_element(self);
    }
}

impl ListElementNode {
    pub fn accept<V: NodeVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_list_element(self);
    }
}

impl ListItemNode {
    pub fn accept<V: NodeVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_list_item(self);
    }
}

impl TextInputNode {
    pub fn accept<V: NodeVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_text_input(self);
    }
}

impl ButtonNode {
    pub fn accept<V: NodeVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_button(self);
    }
}

impl SelectNode {
    pub fn accept<V: NodeVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_select(self);
    }
}

impl Node {
    pub fn accept<V: NodeVisitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Node::Text(n) => n.accept(visitor),
            Node::Element(n) => n.accept(visitor),
            Node::List(n) => n.accept(visitor),
            Node::ListItem(n) => n.accept(visitor),
            Node::TextInput(n) => n.accept(visitor),
            Node::Button(n) => n.accept(visitor),
            Node::Select(n) => n.accept(visitor),
        }
    }
}

/// Collects the outer rendering of every node it visits
#[derive(Debug, Default)]
pub struct RenderVisitor {
    rendered: Vec<String>,
}

impl RenderVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rendered(&self) -> &[String] {
        &self.rendered
    }

    pub fn into_rendered(self) -> Vec<String> {
        self.rendered
    }
}

impl NodeVisitor for RenderVisitor {
    fn visit_element(&mut self, node: &ElementNode) {
        self.rendered.push(node.render_outer());
    }

    fn visit_text(&mut self, node: &TextNode) {
        self.rendered.push(node.render_outer());
    }

    fn visit_list_element(&mut self, node: &ListElementNode) {
        self.rendered.push(node.render_outer());
    }

    fn visit_list_item(&mut self, node: &ListItemNode) {
        self.rendered.push(node.render_outer());
    }

    fn visit_text_input(&mut self, node: &TextInputNode) {
        self.rendered.push(node.render_outer());
    }

    fn visit_button(&mut self, node: &ButtonNode) {
        self.rendered.push(node.render_outer());
    }

    fn visit_select(&mut self, node: &SelectNode) {
        self.rendered.push(node.render_outer());
    }
}
