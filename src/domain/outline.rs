//! Terminal outline of a mind map
//!
//! Each line shows the node's dotted position, its title, and its id, so that
//! the shell can address nodes either way.

use termtree::Tree;

use crate::domain::node::Node;
use crate::domain::ops::format_position;

const UNTITLED_LABEL: &str = "(untitled)";

pub fn render_outline(tree: &Node) -> Tree<String> {
    build(tree, &mut Vec::new())
}

fn build(node: &Node, path: &mut Vec<usize>) -> Tree<String> {
    let mut out = Tree::new(label(node, path));
    for (idx, child) in node.children.iter().enumerate() {
        path.push(idx);
        out.push(build(child, path));
        path.pop();
    }
    out
}

fn label(node: &Node, path: &[usize]) -> String {
    let position = if path.is_empty() {
        "root".to_string()
    } else {
        format_position(path)
    };
    let title = if node.title.is_empty() {
        UNTITLED_LABEL
    } else {
        node.title.as_str()
    };
    let marker = if node.text.is_empty() { "" } else { " +text" };
    format!("[{}] {}{} ({})", position, title, marker, node.id)
}
