use super::NodeIds;
use crate::dependency_graph::domain::{Node, NodeVisitor, ParentIndex};
use crate::ports::outbound::TreeFormatter;
use crate::shared::Result;

const GRAPHML_HEADER: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\"?> ",
    "<graphml xmlns=\"http://graphml.graphdrawing.org/xmlns\" ",
    "xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" ",
    "xmlns:y=\"http://www.yworks.com/xml/graphml\" ",
    "xsi:schemaLocation=\"http://graphml.graphdrawing.org/xmlns ",
    "http://graphml.graphdrawing.org/xmlns/1.0/graphml.xsd\">\n",
    "  <key for=\"node\" id=\"d0\" yfiles.type=\"nodegraphics\"/> \n",
    "  <key for=\"edge\" id=\"d1\" yfiles.type=\"edgegraphics\"/> \n",
    "<graph id=\"dependencies\" edgedefault=\"directed\">\n",
);

const GRAPHML_FOOTER: &str = "</graph></graphml>";

/// GraphmlFormatter adapter rendering yEd-compatible GraphML
///
/// Nodes are written on enter and edges on leave. The dependency scope
/// becomes the edge label.
pub struct GraphmlFormatter;

impl GraphmlFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GraphmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeFormatter for GraphmlFormatter {
    fn format(&self, root: &Node) -> Result<String> {
        let mut visitor = GraphmlVisitor::default();
        root.accept(&mut visitor);
        Ok(visitor.output)
    }
}

#[derive(Default)]
struct GraphmlVisitor<'a> {
    output: String,
    parents: Option<ParentIndex<'a>>,
    ids: NodeIds,
}

impl<'a> NodeVisitor<'a> for GraphmlVisitor<'a> {
    fn enter(&mut self, node: &'a Node) -> bool {
        let parents = self.parents.get_or_insert_with(|| ParentIndex::build(node));

        if parents.parent(node).is_none() {
            self.output.push_str(GRAPHML_HEADER);
        }

        self.output.push_str(&format!(
            "<node id=\"{}\"><data key=\"d0\"><y:ShapeNode><y:NodeLabel>{}</y:NodeLabel></y:ShapeNode></data></node>\n",
            self.ids.id(node),
            escape_xml(&node.artifact().to_string())
        ));
        true
    }

    fn leave(&mut self, node: &'a Node) -> bool {
        let parent = self.parents.as_ref().and_then(|parents| parents.parent(node));
        let Some(parent) = parent else {
            self.output.push_str(GRAPHML_FOOTER);
            return true;
        };

        self.output.push_str(&format!(
            "<edge source=\"{}\" target=\"{}\">",
            self.ids.id(parent),
            self.ids.id(node)
        ));
        if let Some(scope) = node.scope() {
            self.output.push_str(&format!(
                "<data key=\"d1\"><y:PolyLineEdge><y:EdgeLabel>{}</y:EdgeLabel></y:PolyLineEdge></data>",
                scope
            ));
        }
        self.output.push_str("</edge>\n");
        true
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
