use ahash::HashSet;

use crate::element::Element;
use crate::encoder::RECURSION_LIMIT;
use crate::name::Name;

/// A handle to an element in a [`Tree`].
///
/// This is a lightweight value and can be copied. It is also the identity
/// used to detect cycles: two handles are the same element if they compare
/// equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node(usize);

impl Node {
    #[inline]
    pub(crate) fn new(index: usize) -> Self {
        Node(index)
    }

    #[inline]
    pub(crate) fn get(&self) -> usize {
        self.0
    }
}

/// The `Tree` owns all elements of one or more XML documents.
///
/// Elements are created in the tree and addressed by [`Node`]. Any element
/// can be appended as a child of any other, so a tree may be turned into a
/// graph with cycles; the encoder and the traversal functions cope with
/// this.
///
/// Accessing a tree with a `Node` that was created by another tree panics
/// or returns an unrelated element.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tree {
    elements: Vec<Element>,
}

impl Tree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements in the tree, attached or not.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Create a new element with an empty scope. It is not attached to
    /// anything.
    pub fn new_element<N: Into<Name>>(&mut self, name: N) -> Node {
        self.add_element(Element::new(name.into(), Default::default()))
    }

    /// Create a new element as the last child of `parent`.
    ///
    /// The child starts out with a copy of the parent's scope, so that
    /// declarations added to it later are new at the child.
    ///
    /// ```rust
    /// use xmltree::{Name, Tree};
    ///
    /// let mut tree = Tree::new();
    /// let root = tree.new_element("root");
    /// tree.element_mut(root).scope_mut().push("x", "urn:x");
    /// let child = tree.new_child(root, Name::ns("urn:x", "child"));
    /// assert_eq!(tree.to_string(root), r#"<root xmlns:x="urn:x"><x:child /></root>"#);
    /// # let _ = child;
    /// ```
    pub fn new_child<N: Into<Name>>(&mut self, parent: Node, name: N) -> Node {
        let scope = self.element(parent).scope.clone();
        let child = self.add_element(Element::new(name.into(), scope));
        self.append(parent, child);
        child
    }

    pub(crate) fn add_element(&mut self, element: Element) -> Node {
        let node = Node::new(self.elements.len());
        self.elements.push(element);
        node
    }

    /// Append `child` to the children of `parent`.
    ///
    /// No structure checks are made: a node may be appended more than once,
    /// and appending an ancestor creates a cycle.
    pub fn append(&mut self, parent: Node, child: Node) {
        self.element_mut(parent).children.push(child);
    }

    /// The element for a node.
    #[inline]
    pub fn element(&self, node: Node) -> &Element {
        &self.elements[node.get()]
    }

    /// The element for a node, mutably.
    #[inline]
    pub fn element_mut(&mut self, node: Node) -> &mut Element {
        &mut self.elements[node.get()]
    }

    /// The children of a node.
    pub fn children(&self, node: Node) -> &[Node] {
        self.element(node).children()
    }

    /// All elements under `node` (including itself) whose name matches,
    /// in depth-first order.
    ///
    /// ```rust
    /// use xmltree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let root = tree.parse("<a><b/><c><b/></c></a>")?;
    /// assert_eq!(tree.search(root, "", "b").len(), 2);
    /// # Ok::<(), xmltree::Error>(())
    /// ```
    pub fn search(&self, node: Node, space: &str, local: &str) -> Vec<Node> {
        self.search_by(node, |element| element.name().is(space, local))
    }

    /// All elements under `node` (including itself) for which the predicate
    /// holds, in depth-first order.
    pub fn search_by<F>(&self, node: Node, mut predicate: F) -> Vec<Node>
    where
        F: FnMut(&Element) -> bool,
    {
        let mut found = Vec::new();
        self.walk(node, &mut HashSet::default(), &mut |node| {
            if predicate(self.element(node)) {
                found.push(node);
            }
        });
        found
    }

    /// All descendants of `node` in depth-first order, not including `node`
    /// itself.
    pub fn flatten(&self, node: Node) -> Vec<Node> {
        let mut found = Vec::new();
        self.walk(node, &mut HashSet::default(), &mut |descendant| {
            if descendant != node {
                found.push(descendant);
            }
        });
        found
    }

    // Pre-order traversal that skips elements already on the current path
    // and stops descending at the recursion limit.
    fn walk(&self, node: Node, path: &mut HashSet<Node>, f: &mut dyn FnMut(Node)) {
        if path.len() > RECURSION_LIMIT || path.contains(&node) {
            return;
        }
        f(node);
        path.insert(node);
        for child in self.children(node) {
            self.walk(*child, path, f);
        }
        path.remove(&node);
    }
}
