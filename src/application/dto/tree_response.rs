use super::OutputType;

/// TreeResponse - Response DTO from the tree rendering use case
#[derive(Debug, Clone)]
pub struct TreeResponse {
    pub output_type: OutputType,
    /// The serialized tree
    pub rendered: String,
    /// Nodes in the collected tree
    pub collected_nodes: usize,
    /// Nodes left after pruning
    pub rendered_nodes: usize,
}
