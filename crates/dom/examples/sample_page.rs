//! Sample page - builds a heading and a table, then renders, walks and
//! switches modes. Context transitions are logged through tracing-subscriber.

use lightdom::{
    BreadthFirstIterator, Container, DepthFirstIterator, ElementNode, HtmlContext, Mode, Node,
    NodeIterator, RenderVisitor, TextNode,
};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut context = HtmlContext::new();

    let mut header: Node = ElementNode::new("h1", "block", "closing", Vec::<String>::new())
        .with_child(TextNode::new("Welcome to my page!"))
        .into();

    let cell = |text: &str| {
        ElementNode::new("td", "inline", "closing", Vec::<String>::new())
            .with_child(TextNode::new(text))
    };
    let row = ElementNode::new("tr", "block", "closing", Vec::<String>::new())
        .with_child(cell("Cell 1"))
        .with_child(cell("Cell 2"));
    let mut table = ElementNode::new("table", "block", "closing", ["styled-table"]).with_child(row);

    println!("Initial HTML:");
    println!("{}", context.render(&header));

    println!("\nDepth First Traversal:");
    let mut depth_first = DepthFirstIterator::new(&header);
    while depth_first.has_next() {
        if let Some(node) = depth_first.next() {
            println!("{}", context.render(node));
        }
    }

    println!("\nBreadth First Traversal:");
    let mut breadth_first = BreadthFirstIterator::new(&header);
    while breadth_first.has_next() {
        if let Some(node) = breadth_first.next() {
            println!("{}", context.render(node));
        }
    }

    println!("\nAdding attributes in Edit Mode:");
    context.add_attribute(&mut table, "border", "1");
    context.transition_to(Mode::Edit);
    context.add_attribute(&mut table, "border", "1");
    context.add_attribute(&mut table, "cellpadding", "5");
    context.remove_attribute(&mut table, "class");
    context.transition_to(Mode::View);

    let mut table: Node = table.into();

    println!("\nChanging to Edit Mode:");
    header.set_edit_mode();
    table.set_edit_mode();
    println!("{}", header.render());
    println!("{}", table.render());

    println!("\nChanging to View Mode:");
    header.set_view_mode();
    table.set_view_mode();
    println!("{}", header.render());
    println!("{}", table.render());

    println!("\nVisitor:");
    let mut visitor = RenderVisitor::new();
    for node in table.breadth_first() {
        node.accept(&mut visitor);
    }
    for rendered in visitor.rendered() {
        println!("{}", rendered);
    }
}
