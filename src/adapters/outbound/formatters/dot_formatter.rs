use crate::dependency_graph::domain::{Node, NodeVisitor, ParentIndex};
use crate::ports::outbound::TreeFormatter;
use crate::shared::Result;

/// DotFormatter adapter rendering a Graphviz digraph
///
/// Edges of a node are written when the node is entered, one line per child.
pub struct DotFormatter;

impl DotFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DotFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeFormatter for DotFormatter {
    fn format(&self, root: &Node) -> Result<String> {
        let mut visitor = DotVisitor::default();
        root.accept(&mut visitor);
        Ok(visitor.output)
    }
}

#[derive(Default)]
struct DotVisitor<'a> {
    output: String,
    parents: Option<ParentIndex<'a>>,
}

impl<'a> NodeVisitor<'a> for DotVisitor<'a> {
    fn enter(&mut self, node: &'a Node) -> bool {
        let parents = self.parents.get_or_insert_with(|| ParentIndex::build(node));

        if parents.parent(node).is_none() {
            self.output
                .push_str(&format!("digraph \"{}\" {{ \n", node.artifact()));
        }

        for child in node.children() {
            self.output.push_str(&format!(
                "\t\"{}\" -> \"{}\" ; \n",
                node.artifact(),
                child.artifact()
            ));
        }
        true
    }

    fn leave(&mut self, node: &'a Node) -> bool {
        let is_root = self
            .parents
            .as_ref()
            .is_none_or(|parents| parents.parent(node).is_none());
        if is_root {
            self.output.push_str(" } ");
        }
        true
    }
}
