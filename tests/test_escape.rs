use rstest::rstest;
use xmltree::{decode_entities, encode_entities, Tree};

#[test]
fn test_escape_in_text() {
    let mut tree = Tree::new();
    let root = tree.parse(r#"<a>&lt;</a>"#).unwrap();
    assert_eq!(tree.element(root).content(), "<");
}

#[test]
fn test_escaped_double_quote_child() {
    let mut tree = Tree::new();
    let root = tree
        .parse(r#"<parent><stringliteral>&quot;</stringliteral></parent>"#)
        .unwrap();
    let child = tree.children(root)[0];
    assert_eq!(tree.element(child).content(), "\"");
    assert_eq!(
        tree.to_string(root),
        "<parent><stringliteral>&quot;</stringliteral></parent>"
    );
}

#[test]
fn test_add_attribute_entities() {
    let mut tree = Tree::new();
    let root = tree.parse(r#"<doc/>"#).unwrap();
    tree.element_mut(root).set_attr("a", "Created & set");
    assert_eq!(tree.to_string(root), r#"<doc a="Created &amp; set" />"#);
}

#[test]
fn test_character_references_decoded() {
    let mut tree = Tree::new();
    let root = tree.parse(r#"<a b="&#60;">&#x3E;&apos;</a>"#).unwrap();
    assert_eq!(tree.element(root).attr("", "b"), Some("<"));
    assert_eq!(tree.to_string(root), r#"<a b="&lt;">&gt;'</a>"#);
}

#[rstest]
#[case("&", "&amp;")]
#[case("<", "&lt;")]
#[case(">", "&gt;")]
#[case("\"", "&quot;")]
#[case("'", "'")]
#[case("a&b<c>d\"e'f", "a&amp;b&lt;c&gt;d&quot;e'f")]
#[case("&amp;", "&amp;amp;")]
fn test_codec(#[case] decoded: &str, #[case] encoded: &str) {
    assert_eq!(encode_entities(decoded), encoded);
    assert_eq!(decode_entities(encoded), decoded);
}

#[rstest]
#[case("&amp;lt;", "&lt;")]
#[case("&amp;quot;", "&quot;")]
#[case("&lt;&amp;&gt;", "<&>")]
#[case("&#60;", "&#60;")]
#[case("&", "&")]
fn test_decode(#[case] encoded: &str, #[case] decoded: &str) {
    assert_eq!(decode_entities(encoded), decoded);
}
