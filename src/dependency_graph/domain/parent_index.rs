use super::Node;
use std::collections::HashMap;

/// Child to parent mapping for one borrowed tree
///
/// Nodes only store downward edges, so anything that needs to walk upward
/// builds one of these from a single pre-order walk. Entries are keyed by
/// node address, which makes two equal subtrees at different positions
/// distinct. An index is only meaningful for the tree it was built from.
#[derive(Debug, Default)]
pub struct ParentIndex<'a> {
    parents: HashMap<*const Node, &'a Node>,
}

impl<'a> ParentIndex<'a> {
    /// Walks `root` once and records the parent of every descendant
    pub fn build(root: &'a Node) -> Self {
        let mut parents = HashMap::new();
        for node in root.iter() {
            for child in node.children() {
                parents.insert(child as *const Node, node);
            }
        }
        Self { parents }
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Parent of `node`, `None` for the root or for nodes outside the indexed tree
    pub fn parent(&self, node: &Node) -> Option<&'a Node> {
        self.parents.get(&(node as *const Node)).copied()
    }

    /// Whether `node` is the last child of its parent
    ///
    /// A node without parent counts as last.
    pub fn is_last_child(&self, node: &Node) -> bool {
        match self.parent(node) {
            Some(parent) => parent
                .children()
                .last()
                .is_some_and(|last| std::ptr::eq(last, node)),
            None => true,
        }
    }

    /// `node`, then its parent, up to and including the root
    pub fn ancestors_or_self(&self, node: &'a Node) -> Ancestors<'_, 'a> {
        Ancestors {
            index: self,
            next: Some(node),
        }
    }
}

/// Lazy upward walk returned by [`ParentIndex::ancestors_or_self`]
pub struct Ancestors<'i, 'a> {
    index: &'i ParentIndex<'a>,
    next: Option<&'a Node>,
}

impl<'a> Iterator for Ancestors<'_, 'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.index.parent(current);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_graph::domain::{Artifact, Scope};

    fn node(artifact_id: &str) -> Node {
        Node::new(Artifact::new("org.example", artifact_id, "1.0")).with_scope(Scope::Compile)
    }

    fn ids<'a>(nodes: impl Iterator<Item = &'a Node>) -> Vec<&'a str> {
        nodes.map(|n| n.artifact().artifact_id()).collect()
    }

    #[test]
    fn test_parent_lookup() {
        let tree = node("a")
            .with_child(node("b").with_child(node("c")))
            .with_child(node("d"));
        let index = ParentIndex::build(&tree);

        let b = &tree.children()[0];
        let c = &b.children()[0];
        assert!(index.parent(&tree).is_none());
        assert!(std::ptr::eq(index.parent(b).unwrap(), &tree));
        assert!(std::ptr::eq(index.parent(c).unwrap(), b));
    }

    #[test]
    fn test_is_last_child() {
        let tree = node("a")
            .with_child(node("b").with_child(node("c")))
            .with_child(node("d"));
        let index = ParentIndex::build(&tree);

        assert!(index.is_last_child(&tree));
        assert!(!index.is_last_child(&tree.children()[0]));
        assert!(index.is_last_child(&tree.children()[0].children()[0]));
        assert!(index.is_last_child(&tree.children()[1]));
    }

    #[test]
    fn test_equal_siblings_are_distinct() {
        let tree = node("a").with_child(node("x")).with_child(node("x"));
        let index = ParentIndex::build(&tree);

        assert!(!index.is_last_child(&tree.children()[0]));
        assert!(index.is_last_child(&tree.children()[1]));
    }

    #[test]
    fn test_ancestors_or_self_reaches_root() {
        let tree = node("a").with_child(node("b").with_child(node("c")));
        let index = ParentIndex::build(&tree);
        let c = &tree.children()[0].children()[0];

        assert_eq!(ids(index.ancestors_or_self(c)), vec!["c", "b", "a"]);
        assert_eq!(ids(index.ancestors_or_self(&tree)), vec!["a"]);
    }

    #[test]
    fn test_single_node_index_is_empty() {
        let tree = node("a");
        let index = ParentIndex::build(&tree);
        assert!(index.is_empty());
        assert!(index.is_last_child(&tree));
    }
}
