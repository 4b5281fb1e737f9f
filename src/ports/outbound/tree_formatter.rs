use crate::dependency_graph::domain::Node;
use crate::shared::Result;

/// TreeFormatter port for rendering a dependency tree
///
/// This port abstracts the textual graph formats (indented text, DOT,
/// GraphML, TGF).
pub trait TreeFormatter {
    /// Renders the tree rooted at `root`
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn format(&self, root: &Node) -> Result<String>;
}
