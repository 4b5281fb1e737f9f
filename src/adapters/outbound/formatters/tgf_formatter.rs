use super::NodeIds;
use crate::dependency_graph::domain::{Node, NodeVisitor, ParentIndex};
use crate::ports::outbound::TreeFormatter;
use crate::shared::Result;

/// TgfFormatter adapter rendering Trivial Graph Format
///
/// Node lines (`id label`) are written as nodes are entered. Edge lines
/// (`from to scope`) are buffered and written after a `#` separator once
/// the root is left.
pub struct TgfFormatter;

impl TgfFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TgfFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeFormatter for TgfFormatter {
    fn format(&self, root: &Node) -> Result<String> {
        let mut visitor = TgfVisitor::default();
        root.accept(&mut visitor);
        Ok(visitor.output)
    }
}

struct Edge {
    from: u64,
    to: u64,
    label: Option<String>,
}

#[derive(Default)]
struct TgfVisitor<'a> {
    output: String,
    parents: Option<ParentIndex<'a>>,
    ids: NodeIds,
    edges: Vec<Edge>,
}

impl<'a> NodeVisitor<'a> for TgfVisitor<'a> {
    fn enter(&mut self, node: &'a Node) -> bool {
        self.parents.get_or_insert_with(|| ParentIndex::build(node));
        self.output
            .push_str(&format!("{} {}\n", self.ids.id(node), node.artifact()));
        true
    }

    fn leave(&mut self, node: &'a Node) -> bool {
        let parent = self.parents.as_ref().and_then(|parents| parents.parent(node));
        match parent {
            Some(parent) => {
                let edge = Edge {
                    from: self.ids.id(parent),
                    to: self.ids.id(node),
                    label: node.scope().map(|scope| scope.to_string()),
                };
                self.edges.push(edge);
            }
            None => {
                self.output.push_str("#\n");
                for edge in &self.edges {
                    self.output.push_str(&format!("{} {}", edge.from, edge.to));
                    if let Some(label) = &edge.label {
                        self.output.push(' ');
                        self.output.push_str(label);
                    }
                    self.output.push('\n');
                }
            }
        }
        true
    }
}
