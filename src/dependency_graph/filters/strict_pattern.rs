use super::{split_list, Filter};
use crate::dependency_graph::domain::{Artifact, Node};
use crate::ports::outbound::VersionScheme;
use tracing::debug;

/// Filters artifacts with `groupId:artifactId:type:version` patterns
///
/// Each segment may be empty or `*` (anything), `*text*` (contains),
/// `*suffix`, `prefix*`, a version range starting with `[` or `(`, or a
/// literal. A pattern with more segments than an artifact has tokens never
/// matches.
///
/// In include mode an artifact passes when any pattern matches; in exclude
/// mode it passes when none does.
pub struct StrictPatternArtifactFilter<'a> {
    patterns: Vec<String>,
    include: bool,
    versions: &'a dyn VersionScheme,
}

impl<'a> StrictPatternArtifactFilter<'a> {
    pub fn new(patterns: Vec<String>, include: bool, versions: &'a dyn VersionScheme) -> Self {
        Self {
            patterns,
            include,
            versions,
        }
    }

    /// Builds a filter from a comma separated pattern list
    pub fn from_list(patterns: &str, include: bool, versions: &'a dyn VersionScheme) -> Self {
        Self::new(split_list(patterns), include, versions)
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_include(&self) -> bool {
        self.include
    }

    fn matches_pattern(&self, artifact: &Artifact, pattern: &str) -> bool {
        let tokens = [
            artifact.group_id(),
            artifact.artifact_id(),
            artifact.artifact_type(),
            artifact.version(),
        ];

        let mut segments: Vec<&str> = pattern.split(':').collect();
        while segments.len() > 1 && segments.last().is_some_and(|s| s.is_empty()) {
            segments.pop();
        }

        segments.len() <= tokens.len()
            && segments
                .iter()
                .zip(tokens)
                .all(|(segment, token)| self.matches_segment(token, segment))
    }

    fn matches_segment(&self, token: &str, segment: &str) -> bool {
        if segment.is_empty() || segment == "*" {
            return true;
        }
        if let Some(inner) = segment.strip_prefix('*').and_then(|s| s.strip_suffix('*')) {
            return token.contains(inner);
        }
        if let Some(suffix) = segment.strip_prefix('*') {
            return token.ends_with(suffix);
        }
        if let Some(prefix) = segment.strip_suffix('*') {
            return token.starts_with(prefix);
        }
        if segment.starts_with(['[', '(']) {
            return self.in_range(token, segment);
        }
        token == segment
    }

    fn in_range(&self, version: &str, range: &str) -> bool {
        match self.versions.parse_version_range(range) {
            Ok(range) => self.versions.contains(&range, version),
            Err(e) => {
                debug!(range, error = %e, "Ignoring unparsable version range");
                false
            }
        }
    }
}

impl Filter<Artifact> for StrictPatternArtifactFilter<'_> {
    fn test(&self, artifact: &Artifact) -> bool {
        let matched = self
            .patterns
            .iter()
            .any(|pattern| self.matches_pattern(artifact, pattern));
        if self.include {
            matched
        } else {
            !matched
        }
    }
}

impl Filter<Node> for StrictPatternArtifactFilter<'_> {
    fn test(&self, node: &Node) -> bool {
        Filter::<Artifact>::test(self, node.artifact())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    struct NumericScheme;

    impl VersionScheme for NumericScheme {
        fn compare_versions(&self, a: &str, b: &str) -> Ordering {
            let parse =
                |v: &str| -> Vec<u64> { v.split('.').filter_map(|s| s.parse().ok()).collect() };
            parse(a).cmp(&parse(b))
        }
    }

    fn artifact(group_id: &str, artifact_id: &str, version: &str) -> Artifact {
        Artifact::new(group_id, artifact_id, version)
    }

    fn includes(pattern: &str, artifact: &Artifact) -> bool {
        let filter = StrictPatternArtifactFilter::from_list(pattern, true, &NumericScheme);
        Filter::<Artifact>::test(&filter, artifact)
    }

    #[test]
    fn test_prefix_wildcard_group() {
        assert!(includes(
            "org.apache.*:*:jar:*",
            &artifact("org.apache.maven", "foo", "1.0")
        ));
        assert!(!includes(
            "org.apache.*:*:jar:*",
            &artifact("com.example", "foo", "1.0")
        ));
    }

    #[test]
    fn test_segment_kinds() {
        let a = artifact("org.example", "commons-lang", "2.6");
        assert!(includes("org.example", &a));
        assert!(includes("org.example:commons-lang", &a));
        assert!(includes(":commons-lang", &a));
        assert!(includes("*:*lang", &a));
        assert!(includes("*:*mmons*", &a));
        assert!(includes("*:commons*", &a));
        assert!(!includes("*:*foo*", &a));
        assert!(!includes("org.exampl", &a));
        assert!(includes("org.example:commons-lang:jar:2.6", &a));
        assert!(!includes("org.example:commons-lang:war", &a));
    }

    #[test]
    fn test_too_many_segments_never_match() {
        let a = artifact("g", "a", "1.0");
        assert!(!includes("g:a:jar:1.0:extra", &a));
        assert!(includes("g:a:jar:1.0:", &a));
    }

    #[test]
    fn test_version_range_segment() {
        let a = artifact("g", "a", "1.5");
        assert!(includes("g:a:jar:[1.0,2.0)", &a));
        assert!(!includes("g:a:jar:[2.0,)", &a));
    }

    #[test]
    fn test_unparsable_range_does_not_match() {
        let a = artifact("g", "a", "1.5");
        assert!(!includes("g:a:jar:[1.0", &a));

        let exclude = StrictPatternArtifactFilter::from_list("g:a:jar:(1.5)", false, &NumericScheme);
        assert!(Filter::<Artifact>::test(&exclude, &a));
    }

    #[test]
    fn test_exclude_mode() {
        let filter = StrictPatternArtifactFilter::from_list("*:junit", false, &NumericScheme);
        assert!(!filter.is_include());
        assert!(!Filter::<Artifact>::test(&filter, &artifact("junit", "junit", "4.13")));
        assert!(Filter::<Artifact>::test(&filter, &artifact("g", "a", "1")));
    }

    #[test]
    fn test_any_pattern_matches() {
        let filter = StrictPatternArtifactFilter::from_list("x:y, g:a", true, &NumericScheme);
        assert_eq!(filter.patterns().len(), 2);
        assert!(Filter::<Artifact>::test(&filter, &artifact("g", "a", "1")));
    }

    #[test]
    fn test_node_delegates_to_artifact() {
        let filter = StrictPatternArtifactFilter::from_list("g:a", true, &NumericScheme);
        let node = Node::new(artifact("g", "a", "1"));
        assert!(Filter::<Node>::test(&filter, &node));
    }
}
