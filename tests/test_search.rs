use xmltree::Tree;

const DOC: &str = r#"<lib xmlns:x="urn:x"><book id="1"><title>A</title></book><x:book id="2"><title>B</title></x:book></lib>"#;

#[test]
fn test_search_by_name() {
    let mut tree = Tree::new();
    let root = tree.parse(DOC).unwrap();
    let books = tree.search(root, "", "book");
    assert_eq!(books.len(), 1);
    assert_eq!(tree.element(books[0]).attr("", "id"), Some("1"));
    let books = tree.search(root, "urn:x", "book");
    assert_eq!(books.len(), 1);
    assert_eq!(tree.element(books[0]).attr("", "id"), Some("2"));
}

#[test]
fn test_search_includes_start() {
    let mut tree = Tree::new();
    let root = tree.parse(DOC).unwrap();
    assert_eq!(tree.search(root, "", "lib"), vec![root]);
}

#[test]
fn test_search_by_predicate() {
    let mut tree = Tree::new();
    let root = tree.parse(DOC).unwrap();
    let titles: Vec<&str> = tree
        .search_by(root, |element| element.name().local == "title")
        .into_iter()
        .map(|node| tree.element(node).content())
        .collect();
    assert_eq!(titles, vec!["A", "B"]);
}

#[test]
fn test_flatten() {
    let mut tree = Tree::new();
    let root = tree.parse(DOC).unwrap();
    let names: Vec<String> = tree
        .flatten(root)
        .into_iter()
        .map(|node| tree.element(node).name().to_string())
        .collect();
    assert_eq!(names, vec!["book", "title", "{urn:x}book", "title"]);
}

#[test]
fn test_subtree_of_search_result() {
    let mut tree = Tree::new();
    let root = tree.parse(DOC).unwrap();
    let book = tree.search(root, "urn:x", "book")[0];
    assert_eq!(
        tree.to_string(book),
        r#"<x:book id="2" xmlns:x="urn:x"><title>B</title></x:book>"#
    );
}
