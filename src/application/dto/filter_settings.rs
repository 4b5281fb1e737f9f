use crate::dependency_graph::domain::Coordinate;

/// Filter configuration shared by the resolve pipeline
///
/// Every list is a comma-separated string; an empty string means
/// "no restriction". Scopes are single keywords from the scope vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSettings {
    /// Keep only the direct dependencies of the root
    pub exclude_transitive: bool,
    pub include_scope: String,
    pub exclude_scope: String,
    pub include_types: String,
    pub exclude_types: String,
    pub include_classifiers: String,
    pub exclude_classifiers: String,
    /// Matched as prefixes of the group id
    pub include_group_ids: String,
    pub exclude_group_ids: String,
    pub include_artifact_ids: String,
    pub exclude_artifact_ids: String,
    /// Drop dependencies that are built in the same reactor
    pub exclude_reactor: bool,
    pub reactor_projects: Vec<Coordinate>,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            exclude_transitive: false,
            include_scope: String::new(),
            exclude_scope: String::new(),
            include_types: String::new(),
            exclude_types: String::new(),
            include_classifiers: String::new(),
            exclude_classifiers: String::new(),
            include_group_ids: String::new(),
            exclude_group_ids: String::new(),
            include_artifact_ids: String::new(),
            exclude_artifact_ids: String::new(),
            exclude_reactor: true,
            reactor_projects: Vec::new(),
        }
    }
}
