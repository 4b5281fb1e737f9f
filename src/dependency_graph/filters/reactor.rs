use super::Filter;
use crate::dependency_graph::domain::{Artifact, Coordinate, Node};
use std::collections::HashSet;
use tracing::debug;

/// Rejects dependencies that are built in the same multi-module build
///
/// Matching compares `groupId:artifactId:version` only; type and classifier
/// are ignored.
#[derive(Debug, Clone, Default)]
pub struct ExcludeReactorProjectsFilter {
    reactor_keys: HashSet<String>,
}

impl ExcludeReactorProjectsFilter {
    pub fn new<'c>(reactor_projects: impl IntoIterator<Item = &'c Coordinate>) -> Self {
        Self {
            reactor_keys: reactor_projects.into_iter().map(Coordinate::key).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.reactor_keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reactor_keys.is_empty()
    }

    fn is_in_reactor(&self, artifact: &Artifact) -> bool {
        let key = artifact.key();
        let in_reactor = self.reactor_keys.contains(&key);
        if in_reactor {
            debug!("Skipped dependency {} because it is present in the reactor", key);
        }
        in_reactor
    }
}

impl Filter<Artifact> for ExcludeReactorProjectsFilter {
    fn test(&self, artifact: &Artifact) -> bool {
        !self.is_in_reactor(artifact)
    }
}

impl Filter<Node> for ExcludeReactorProjectsFilter {
    /// The root node describes the project itself and always passes
    fn test(&self, node: &Node) -> bool {
        node.scope().is_none() || !self.is_in_reactor(node.artifact())
    }
}
