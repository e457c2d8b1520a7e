//! Node serializer - outer and inner HTML
//!
//! Two fixed forms per variant:
//! - outer: the node's own markup wrapping its children's outer forms
//! - inner: the children's inner forms concatenated, no wrapper
//!
//! Both are always available. `Node::render` picks one from the node's mode.

use crate::lifecycle::{ElementLifecycleHooks, LifecycleHooks};
use crate::node::{
    ButtonNode, Container, ElementNode, ListElementNode, ListItemNode, Node, SelectNode,
    TextInputNode, TextNode,
};
use crate::types::{Mode, CLOSING};

/// Append each child's outer form on its own tab-indented line
fn push_children_outer(output: &mut String, children: &[Node]) {
    for child in children {
        output.push('\t');
        output.push_str(&child.render_outer());
        output.push('\n');
    }
}

fn children_inner(children: &[Node]) -> String {
    children.iter().map(Node::render_inner).collect()
}

impl TextNode {
    pub fn render_outer(&self) -> String {
        self.text().to_string()
    }

    pub fn render_inner(&self) -> String {
        self.text().to_string()
    }
}

impl ElementNode {
    /// Format: `<tag class="a b" display="D" closing="C" k="v">`, children,
    /// then `</tag>` only when the closing type is `"closing"`.
    pub fn render_outer(&self) -> String {
        ElementLifecycleHooks.run_lifecycle_hooks();

        let mut output = String::with_capacity(64);

        output.push('<');
        output.push_str(self.tag_name());
        output.push_str(&format!(
            " class=\"{}\" display=\"{}\" closing=\"{}\"",
            self.classes().join(" "),
            self.display_type(),
            self.closing_type()
        ));

        for (key, value) in self.attributes() {
            output.push_str(&format!(" {}=\"{}\"", key, value));
        }

        output.push_str(">\n");
        push_children_outer(&mut output, self.children());

        if self.closing_type() == CLOSING {
            output.push_str("</");
            output.push_str(self.tag_name());
            output.push('>');
        }

        output
    }

    pub fn render_inner(&self) -> String {
        children_inner(self.children())
    }
}

impl ListElementNode {
    pub fn render_outer(&self) -> String {
        let tag = self.list_type().tag();
        let mut output = format!("<{}>\n", tag);
        push_children_outer(&mut output, self.children());
        output.push_str(&format!("</{}>", tag));
        output
    }

    pub fn render_inner(&self) -> String {
        children_inner(self.children())
    }
}

impl ListItemNode {
    pub fn render_outer(&self) -> String {
        let mut output = String::from("<li>\n");
        push_children_outer(&mut output, self.children());
        output.push_str("</li>");
        output
    }

    pub fn render_inner(&self) -> String {
        children_inner(self.children())
    }
}

impl TextInputNode {
    pub fn render_outer(&self) -> String {
        format!("<input type=\"text\" name=\"{}\">", self.name())
    }

    pub fn render_inner(&self) -> String {
        String::new()
    }
}

impl ButtonNode {
    pub fn render_outer(&self) -> String {
        format!("<button>{}</button>", self.label())
    }

    pub fn render_inner(&self) -> String {
        String::new()
    }
}

impl SelectNode {
    pub fn render_outer(&self) -> String {
        let mut output = String::from("<select>");
        for option in self.options() {
            output.push_str(&format!("<option>{}</option>", option));
        }
        output.push_str("</select>");
        output
    }

    pub fn render_inner(&self) -> String {
        String::new()
    }
}

impl Node {
    /// Full markup. Elements run their lifecycle hooks first.
    pub fn render_outer(&self) -> String {
        match self {
            Node::Text(n) => n.render_outer(),
            Node::Element(n) => n.render_outer(),
            Node::List(n) => n.render_outer(),
            Node::ListItem(n) => n.render_outer(),
            Node::TextInput(n) => n.render_outer(),
            Node::Button(n) => n.render_outer(),
            Node::Select(n) => n.render_outer(),
        }
    }

    pub fn render_inner(&self) -> String {
        match self {
            Node::Text(n) => n.render_inner(),
            Node::Element(n) => n.render_inner(),
            Node::List(n) => n.render_inner(),
            Node::ListItem(n) => n.render_inner(),
            Node::TextInput(n) => n.render_inner(),
            Node::Button(n) => n.render_inner(),
            Node::Select(n) => n.render_inner(),
        }
    }

    /// Render in the form the node's current mode selects
    pub fn render(&self) -> String {
        match self.mode() {
            Mode::View => self.render_outer(),
            Mode::Edit => self.render_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ListType;

    #[test]
    fn test_element_with_text_child() {
        let div = ElementNode::new("div", "D", "closing", ["a", "b"]).with_child(TextNode::new("hi"));
        assert_eq!(
            div.render_outer(),
            "<div class=\"a b\" display=\"D\" closing=\"closing\">\n\thi\n</div>"
        );
    }

    #[test]
    fn test_non_closing_element_omits_end_tag() {
        let img = ElementNode::new("img", "inline", "self", Vec::<String>::new());
        assert_eq!(
            img.render_outer(),
            "<img class=\"\" display=\"inline\" closing=\"self\">\n"
        );
    }

    #[test]
    fn test_attributes_follow_insertion_order() {
        let mut table = ElementNode::new("table", "block", "closing", ["styled-table"]);
        table.add_attribute("border", "1");
        table.add_attribute("cellpadding", "5");
        assert_eq!(
            table.render_outer(),
            "<table class=\"styled-table\" display=\"block\" closing=\"closing\" border=\"1\" cellpadding=\"5\">\n</table>"
        );
    }

    #[test]
    fn test_nested_elements() {
        let td = ElementNode::new("td", "inline", "closing", Vec::<String>::new())
            .with_child(TextNode::new("Cell 1"));
        let tr = ElementNode::new("tr", "block", "closing", Vec::<String>::new()).with_child(td);
        assert_eq!(
            tr.render_outer(),
            "<tr class=\"\" display=\"block\" closing=\"closing\">\n\
             \t<td class=\"\" display=\"inline\" closing=\"closing\">\n\tCell 1\n</td>\n\
             </tr>"
        );
        assert_eq!(tr.render_inner(), "Cell 1");
    }

    #[test]
    fn test_lists() {
        let item = ListItemNode::new().with_child(TextNode::new("one"));
        let list = ListElementNode::new(ListType::Ordered).with_child(item);
        assert_eq!(list.render_outer(), "<ol>\n\t<li>\n\tone\n</li>\n</ol>");
        assert_eq!(list.render_inner(), "one");

        let empty = ListElementNode::new(ListType::Unordered);
        assert_eq!(empty.render_outer(), "<ul>\n</ul>");
        assert_eq!(empty.render_inner(), "");
    }

    #[test]
    fn test_form_controls() {
        let input = TextInputNode::new("email");
        let button = ButtonNode::new("Send");
        let select = SelectNode::new(["red", "green"]);

        assert_eq!(input.render_outer(), "<input type=\"text\" name=\"email\">");
        assert_eq!(button.render_outer(), "<button>Send</button>");
        assert_eq!(
            select.render_outer(),
            "<select><option>red</option><option>green</option></select>"
        );

        assert_eq!(input.render_inner(), "");
        assert_eq!(button.render_inner(), "");
        assert_eq!(select.render_inner(), "");
        assert_eq!(SelectNode::new(Vec::<String>::new()).render_outer(), "<select></select>");
    }

    #[test]
    fn test_inner_skips_form_controls() {
        let form = ElementNode::new("form", "block", "closing", Vec::<String>::new())
            .with_child(TextNode::new("Name: "))
            .with_child(TextInputNode::new("name"))
            .with_child(TextNode::new("!"))
            .with_child(ButtonNode::new("Submit"));
        assert_eq!(form.render_inner(), "Name: !");
    }

    #[test]
    fn test_both_forms_ignore_stored_mode() {
        let mut node: Node = ElementNode::new("p", "block", "closing", Vec::<String>::new())
            .with_child(TextNode::new("body"))
            .into();
        let outer = node.render_outer();
        let inner = node.render_inner();

        node.set_edit_mode();
        assert_eq!(node.render_outer(), outer);
        assert_eq!(node.render_inner(), inner);
    }

    #[test]
    fn test_render_follows_mode() {
        let mut node: Node = ElementNode::new("p", "block", "closing", Vec::<String>::new())
            .with_child(TextNode::new("body"))
            .into();
        assert_eq!(node.render(), node.render_outer());

        node.set_edit_mode();
        assert_eq!(node.render(), "body");

        node.set_view_mode();
        assert_eq!(node.render(), node.render_outer());
    }

    #[test]
    fn test_text_renders_itself_both_ways() {
        let text = Node::from(TextNode::new("plain"));
        assert_eq!(text.render_outer(), "plain");
        assert_eq!(text.render_inner(), "plain");
    }

    #[test]
    fn test_only_elements_fire_hooks_on_render() {
        let logs = crate::test_support::capture_logs(|| {
            TextNode::new("quiet").render_outer();
        });
        assert!(!logs.contains("Text node"), "unexpected logs: {}", logs);

        let logs = crate::test_support::capture_logs(|| {
            ElementNode::new("p", "block", "closing", Vec::<String>::new())
                .with_child(TextNode::new("body"))
                .render_outer();
        });
        assert!(logs.contains("Element created"), "got: {}", logs);
        assert!(!logs.contains("Text node"), "unexpected logs: {}", logs);
    }
}
