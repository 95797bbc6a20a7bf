use xmltree::{EncodeOptions, Tree, CYCLE_MARKER, RECURSION_LIMIT};

#[test]
fn test_child_referencing_ancestor() {
    let mut tree = Tree::new();
    let root = tree.parse("<a><b><c/></b></a>").unwrap();
    let b = tree.children(root)[0];
    tree.append(b, root);
    let out = tree.to_string(root);
    assert!(out.contains(CYCLE_MARKER));
    assert_eq!(out, "<a><b><c /><!-- cycle detected --></b></a>");
}

#[test]
fn test_self_reference_pretty() {
    let mut tree = Tree::new();
    let root = tree.new_element("a");
    tree.append(root, root);
    let out = String::from_utf8(tree.marshal_indent(root, "", "  ")).unwrap();
    assert_eq!(out, "<a>\n<!-- cycle detected --></a>\n");
}

#[test]
fn test_shared_node_is_not_a_cycle() {
    // the same element twice under one parent is repeated, not a cycle
    let mut tree = Tree::new();
    let root = tree.new_element("a");
    let b = tree.new_child(root, "b");
    tree.append(root, b);
    assert_eq!(tree.to_string(root), "<a><b /><b /></a>");
}

#[test]
fn test_cycle_marker_per_path() {
    let mut tree = Tree::new();
    let root = tree.new_element("a");
    let b = tree.new_child(root, "b");
    let c = tree.new_child(root, "c");
    tree.append(b, root);
    tree.append(c, b);
    assert_eq!(
        tree.to_string(root),
        "<a><b><!-- cycle detected --></b><c><b><!-- cycle detected --></b></c></a>"
    );
}

#[test]
fn test_deep_tree_is_truncated() {
    let mut tree = Tree::new();
    let root = tree.new_element("e");
    let mut current = root;
    for _ in 0..RECURSION_LIMIT * 4 {
        current = tree.new_child(current, "e");
    }
    let out = tree.to_string(root);
    // elements at depth 0 through RECURSION_LIMIT are written
    assert_eq!(out.matches("<e>").count(), RECURSION_LIMIT + 1);
    assert_eq!(out.matches("</e>").count(), RECURSION_LIMIT + 1);
}

#[test]
fn test_custom_recursion_limit() {
    let mut tree = Tree::new();
    let root = tree.parse("<a><b><c><d/></c></b></a>").unwrap();
    let mut out = Vec::new();
    tree.encode_with(root, &mut out, &EncodeOptions::new().recursion_limit(2))
        .unwrap();
    assert_eq!(out, b"<a><b><c></c></b></a>");
}
