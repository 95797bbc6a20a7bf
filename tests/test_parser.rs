use xmltree::{Error, Name, Tree, XML_NAMESPACE};

#[test]
fn test_unclosed_tag() {
    let mut tree = Tree::new();
    let doc = tree.parse(r#"<a><b></a>"#);
    match doc {
        Err(Error::InvalidCloseTag(open, close)) => {
            assert_eq!(open, "b");
            assert_eq!(close, "a");
        }
        _ => unreachable!(),
    }
}

#[test]
fn test_unclosed_tag_at_end() {
    let mut tree = Tree::new();
    let doc = tree.parse(r#"<a>"#);
    assert!(matches!(doc, Err(Error::UnclosedTag)));
}

#[test]
fn test_no_root_element() {
    let mut tree = Tree::new();
    let doc = tree.parse(r#"<?xml version="1.0"?><!-- nothing -->"#);
    assert!(matches!(doc, Err(Error::NoRootElement)));
}

#[test]
fn test_unknown_prefix() {
    let mut tree = Tree::new();
    let doc = tree.parse(r#"<x:a/>"#);
    match doc {
        Err(Error::UnknownPrefix(prefix)) => assert_eq!(prefix, "x"),
        _ => unreachable!(),
    }
    let doc = tree.parse(r#"<a y:b="1"/>"#);
    assert!(matches!(doc, Err(Error::UnknownPrefix(_))));
}

#[test]
fn test_invalid_entity() {
    let mut tree = Tree::new();
    assert!(matches!(
        tree.parse(r#"<a>&nbsp;</a>"#),
        Err(Error::InvalidEntity(_))
    ));
}

#[test]
fn test_tokenizer_error() {
    let mut tree = Tree::new();
    assert!(matches!(tree.parse(r#"<a b=1/>"#), Err(Error::Parser(_))));
}

#[test]
fn test_xml_prefix_predeclared() {
    let mut tree = Tree::new();
    let root = tree.parse(r#"<a xml:lang="en"/>"#).unwrap();
    assert_eq!(tree.element(root).attr(XML_NAMESPACE, "lang"), Some("en"));
    assert_eq!(tree.to_string(root), r#"<a xml:lang="en" />"#);
}

#[test]
fn test_default_namespace_applies_to_elements_only() {
    let mut tree = Tree::new();
    let root = tree.parse(r#"<a xmlns="urn:a" b="1"/>"#).unwrap();
    let element = tree.element(root);
    assert_eq!(element.name(), &Name::ns("urn:a", "a"));
    assert_eq!(element.attr("", "b"), Some("1"));
    assert_eq!(element.attr("urn:a", "b"), None);
}

#[test]
fn test_comments_and_pis_skipped() {
    let mut tree = Tree::new();
    let root = tree
        .parse("<?xml version=\"1.0\"?>\n<!-- c --><a><?pi x?><!-- c --><b/></a>")
        .unwrap();
    assert_eq!(tree.to_string(root), "<a><b /></a>");
}

#[test]
fn test_parse_bytes_latin1() {
    let mut tree = Tree::new();
    let root = tree
        .parse_bytes(b"<?xml version=\"1.0\" encoding=\"iso-8859-1\"?><a>caf\xe9</a>")
        .unwrap();
    assert_eq!(tree.element(root).content(), "caf\u{e9}");
    assert_eq!(tree.marshal(root), "<a>caf\u{e9}</a>".as_bytes());
}

#[test]
fn test_multiple_documents_in_one_tree() {
    let mut tree = Tree::new();
    let a = tree.parse("<a/>").unwrap();
    let b = tree.parse("<b/>").unwrap();
    assert_ne!(a, b);
    assert_eq!(tree.len(), 2);
    tree.append(a, b);
    assert_eq!(tree.to_string(a), "<a><b /></a>");
}
