//! Markdown export of a mind-map tree

use crate::domain::node::Node;

/// Serialize `tree` into a heading-structured Markdown document.
///
/// A node at depth `level` (root = 1) contributes a `#`-heading of weight `level`
/// when its title is non-empty, then its text verbatim when non-empty, each
/// followed by a blank line. Children follow in order, one level deeper.
/// Empty nodes emit nothing but do not shift their children's heading levels.
pub fn to_document(tree: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, tree, 1);
    out
}

fn write_node(out: &mut String, node: &Node, level: usize) {
    if !node.title.is_empty() {
        out.push_str(&heading(level, &node.title));
        out.push_str("\n\n");
    }
    if !node.text.is_empty() {
        out.push_str(&node.text);
        out.push_str("\n\n");
    }
    for child in &node.children {
        write_node(out, child, level + 1);
    }
}

fn heading(level: usize, title: &str) -> String {
    format!("{} {}", "#".repeat(level), title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::node::NodeId;

    #[test]
    fn given_empty_root_when_serializing_then_document_is_empty() {
        assert_eq!(to_document(&Node::root()), "");
    }

    #[test]
    fn given_titled_child_of_empty_root_when_serializing_then_uses_level_two() {
        let tree = Node::root().with_child(
            Node::leaf(NodeId::new("c"))
                .with_title("A")
                .with_text("B"),
        );
        assert_eq!(to_document(&tree), "## A\n\nB\n\n");
    }

    #[test]
    fn given_siblings_when_serializing_then_pre_order_left_to_right() {
        let tree = Node::root()
            .with_title("Root")
            .with_child(
                Node::leaf("a".into())
                    .with_title("A")
                    .with_child(Node::leaf("a1".into()).with_text("deep")),
            )
            .with_child(Node::leaf("b".into()).with_title("B"));

        assert_eq!(
            to_document(&tree),
            "# Root\n\n## A\n\ndeep\n\n## B\n\n"
        );
    }

    #[test]
    fn given_text_only_node_when_serializing_then_emits_body_without_heading() {
        let tree = Node::root().with_text("just text");
        assert_eq!(to_document(&tree), "just text\n\n");
    }

    #[test]
    fn given_multiline_text_when_serializing_then_emits_verbatim() {
        let tree = Node::root().with_title("T").with_text("line 1\nline 2");
        assert_eq!(to_document(&tree), "# T\n\nline 1\nline 2\n\n");
    }
}
