use crate::dependency_graph::domain::{GraphTokens, Node, NodeVisitor, ParentIndex};
use crate::ports::outbound::TreeFormatter;
use crate::shared::Result;

/// TextFormatter adapter rendering an indented tree
///
/// Each node is printed on its own line, prefixed by one fill token per
/// ancestor level and a branch token that depends on whether the node is
/// the last child of its parent:
///
/// ```text
/// org.example:app:jar:1.0
/// +- org.example:core:jar:1.0:compile
/// |  \- org.example:util:jar:1.0:compile
/// \- junit:junit:jar:4.13:test
/// ```
pub struct TextFormatter {
    tokens: GraphTokens,
}

impl TextFormatter {
    pub fn new(tokens: GraphTokens) -> Self {
        Self { tokens }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(GraphTokens::STANDARD)
    }
}

impl TreeFormatter for TextFormatter {
    fn format(&self, root: &Node) -> Result<String> {
        let mut visitor = SerializingVisitor::new(self.tokens);
        root.accept(&mut visitor);
        Ok(visitor.output)
    }
}

struct SerializingVisitor<'a> {
    output: String,
    tokens: GraphTokens,
    depth: usize,
    parents: Option<ParentIndex<'a>>,
}

impl SerializingVisitor<'_> {
    fn new(tokens: GraphTokens) -> Self {
        Self {
            output: String::new(),
            tokens,
            depth: 0,
            parents: None,
        }
    }
}

impl<'a> NodeVisitor<'a> for SerializingVisitor<'a> {
    fn enter(&mut self, node: &'a Node) -> bool {
        let parents = self.parents.get_or_insert_with(|| ParentIndex::build(node));

        if self.depth > 0 {
            // chain[k] sits at depth `self.depth - k`
            let chain: Vec<&Node> = parents.ancestors_or_self(node).collect();
            for level in 1..self.depth {
                let ancestor = chain[self.depth - level];
                self.output
                    .push_str(self.tokens.fill_indent(parents.is_last_child(ancestor)));
            }
            self.output
                .push_str(self.tokens.node_indent(parents.is_last_child(node)));
        }

        self.output.push_str(&node.as_string());
        self.output.push('\n');
        self.depth += 1;
        true
    }

    fn leave(&mut self, _node: &'a Node) -> bool {
        self.depth = self.depth.saturating_sub(1);
        true
    }
}
