//! Tests for Markdown export and file-name derivation

use chrono::{NaiveDate, NaiveDateTime};
use rstest::rstest;

use mindmap::domain::{
    add_child, derive_file_name, derive_file_name_with, to_document, update_fields, Node, NodeId,
    NodeUpdate, SequentialIdGenerator, UNTITLED,
};

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .and_then(|date| date.and_hms_opt(h, mi, 0))
        .expect("valid date")
}

/// Chain root -> n-1 -> n-2 ... where every node carries a title.
fn titled_chain(levels: usize) -> Node {
    let ids = SequentialIdGenerator::new("n");
    let mut tree = Node::root();
    let mut tail = NodeId::root();
    tree = update_fields(&tree, &tail, &NodeUpdate::title("L1"));
    for level in 2..=levels {
        tree = add_child(&tree, &tail, &ids);
        tail = NodeId::new(format!("n-{}", level - 1));
        tree = update_fields(&tree, &tail, &NodeUpdate::title(format!("L{}", level)));
    }
    tree
}

#[test]
fn given_titled_chain_when_serializing_then_heading_weight_increases_by_one_per_level() {
    let document = to_document(&titled_chain(5));

    let weights: Vec<usize> = document
        .lines()
        .filter(|line| line.starts_with('#'))
        .map(|line| line.chars().take_while(|c| *c == '#').count())
        .collect();
    assert_eq!(weights, vec![1, 2, 3, 4, 5]);
}

#[test]
fn given_empty_root_with_edited_child_when_serializing_then_child_is_level_two() {
    let ids = SequentialIdGenerator::new("n");
    let tree = add_child(&Node::root(), &NodeId::root(), &ids);
    assert_eq!(tree.children.len(), 1);
    let child = tree.children[0].id.clone();

    let tree = update_fields(&tree, &child, &NodeUpdate::title("A").with_text("B"));

    assert_eq!(to_document(&tree), "## A\n\nB\n\n");
}

#[test]
fn given_empty_middle_node_when_serializing_then_grandchild_keeps_depth_heading() {
    let tree = Node::root().with_title("Top").with_child(
        Node::leaf("mid".into()).with_child(Node::leaf("low".into()).with_title("Low")),
    );

    assert_eq!(to_document(&tree), "# Top\n\n### Low\n\n");
}

#[rstest]
#[case("a/b:c", at(2026, 1, 10, 12, 34), "abc_202601101234.md")]
#[case("Plan", at(2025, 12, 31, 23, 59), "Plan_202512312359.md")]
#[case("q?<x>|\"y\"*", at(2026, 2, 3, 4, 5), "qxy_202602030405.md")]
#[case(r"back\slash", at(2026, 1, 1, 0, 0), "backslash_202601010000.md")]
fn given_title_when_deriving_file_name_then_sanitized_and_stamped(
    #[case] title: &str,
    #[case] now: NaiveDateTime,
    #[case] expected: &str,
) {
    assert_eq!(derive_file_name(title, now), expected);
}

#[test]
fn given_empty_title_when_deriving_file_name_then_placeholder_used() {
    let now = at(2026, 1, 10, 12, 34);
    assert_eq!(
        derive_file_name("", now),
        format!("{}_202601101234.md", UNTITLED)
    );
    assert_eq!(
        derive_file_name_with("", "untitled", now),
        "untitled_202601101234.md"
    );
}
