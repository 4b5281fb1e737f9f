use super::FilterSettings;
use crate::dependency_graph::services::NamingOptions;
use std::path::PathBuf;

/// ResolveRequest - Internal request DTO for the dependency resolution use case
#[derive(Debug, Clone, Default)]
pub struct ResolveRequest {
    pub filters: FilterSettings,
    /// Abort on the first artifact that cannot be resolved
    pub stop_on_failure: bool,
    /// Resolve the classifier variant of every artifact instead of the artifact itself
    pub classifier: Option<String>,
    /// Type used together with `classifier`; defaults to the artifact's own type
    pub artifact_type: Option<String>,
    /// When set, artifacts whose destination is up to date are reported as skipped
    pub output_directory: Option<PathBuf>,
    pub naming: NamingOptions,
    pub overwrite_releases: bool,
    pub overwrite_snapshots: bool,
    pub overwrite_if_newer: bool,
}

impl ResolveRequest {
    pub fn new(filters: FilterSettings) -> Self {
        Self {
            filters,
            overwrite_if_newer: true,
            ..Self::default()
        }
    }

    /// Non-empty classifier, if any
    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref().filter(|c| !c.is_empty())
    }

    /// Non-empty type override, if any
    pub fn artifact_type(&self) -> Option<&str> {
        self.artifact_type.as_deref().filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_classifier_is_none() {
        let mut request = ResolveRequest::new(FilterSettings::default());
        assert!(request.classifier().is_none());

        request.classifier = Some(String::new());
        assert!(request.classifier().is_none());

        request.classifier = Some("sources".to_string());
        assert_eq!(request.classifier(), Some("sources"));
    }

    #[test]
    fn test_new_overwrites_if_newer() {
        let request = ResolveRequest::new(FilterSettings::default());
        assert!(request.overwrite_if_newer);
        assert!(!request.overwrite_releases);
        assert!(request.output_directory.is_none());
    }
}
