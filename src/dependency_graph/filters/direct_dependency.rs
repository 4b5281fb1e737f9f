use super::Filter;
use crate::dependency_graph::domain::Node;
use std::collections::HashSet;

/// Keeps only the project's direct dependencies
///
/// Direct dependencies are the root's children, compared by conflict id so
/// the same artifact reached transitively under another version still counts.
#[derive(Debug, Clone)]
pub struct DirectDependencyFilter {
    conflict_ids: HashSet<String>,
}

impl DirectDependencyFilter {
    pub fn from_root(root: &Node) -> Self {
        Self {
            conflict_ids: root
                .children()
                .iter()
                .map(|child| child.artifact().conflict_id())
                .collect(),
        }
    }
}

impl Filter<Node> for DirectDependencyFilter {
    fn test(&self, node: &Node) -> bool {
        self.conflict_ids.contains(&node.artifact().conflict_id())
    }
}
