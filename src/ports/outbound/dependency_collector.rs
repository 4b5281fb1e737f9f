use crate::dependency_graph::domain::Node;
use crate::shared::Result;

/// Options for one dependency collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectRequest {
    /// Keep nodes that lost version mediation or duplicate an earlier node
    pub verbose: bool,
}

impl CollectRequest {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

/// DependencyCollector port for obtaining the resolved dependency tree
///
/// Version mediation and conflict resolution happen behind this port;
/// the returned tree is final.
pub trait DependencyCollector {
    /// Collects the dependency tree of the project
    ///
    /// # Arguments
    /// * `request` - Collection options
    ///
    /// # Returns
    /// Root node describing the project, its children being the direct dependencies
    ///
    /// # Errors
    /// Returns an error if the graph source cannot be read or parsed
    fn collect(&self, request: &CollectRequest) -> Result<Node>;
}
