use crate::dependency_graph::domain::{Artifact, Node, Scope};
use crate::ports::outbound::{CollectRequest, DependencyCollector};
use crate::shared::error::MdepError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One node of the dependency graph file
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GraphNodeRecord {
    group_id: String,
    artifact_id: String,
    version: String,
    #[serde(rename = "type", default)]
    artifact_type: Option<String>,
    #[serde(default)]
    classifier: Option<String>,
    #[serde(default)]
    scope: Option<String>,
    #[serde(default)]
    optional: bool,
    /// Set by the producer on nodes that lost mediation or repeat an earlier node
    #[serde(default)]
    omitted: bool,
    #[serde(default)]
    children: Vec<GraphNodeRecord>,
}

/// Node under construction while converting records
struct Frame {
    node: Node,
    children: Vec<Node>,
    pending: std::vec::IntoIter<GraphNodeRecord>,
}

/// GraphFileReader adapter loading a resolved dependency tree from JSON
///
/// The file holds the root node; every node has `groupId`, `artifactId`,
/// `version` and optionally `type`, `classifier`, `scope`, `optional`,
/// `omitted` and `children`. Omitted nodes are only kept for verbose
/// collection.
pub struct GraphFileReader {
    path: PathBuf,
}

impl GraphFileReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses graph JSON that has already been read
    ///
    /// Nesting depth is not limited; the deserializer grows its stack on
    /// demand and the record tree is converted without recursion.
    ///
    /// # Errors
    /// Returns [`MdepError::GraphParseError`] for malformed JSON, missing
    /// mandatory fields or unknown scopes.
    pub fn parse(&self, content: &str, request: &CollectRequest) -> Result<Node> {
        let mut json = serde_json::Deserializer::from_str(content);
        json.disable_recursion_limit();
        let record = GraphNodeRecord::deserialize(serde_stacker::Deserializer::new(&mut json))
            .map_err(|e| self.parse_error(e.to_string()))?;
        json.end().map_err(|e| self.parse_error(e.to_string()))?;
        self.to_node(record, request.verbose)
    }

    fn to_node(&self, root: GraphNodeRecord, verbose: bool) -> Result<Node> {
        let mut stack = vec![self.open(root)?];

        while let Some(frame) = stack.last_mut() {
            match frame.pending.next() {
                Some(child) if child.omitted && !verbose => {
                    debug!(
                        "Dropping omitted node {}:{}:{}",
                        child.group_id, child.artifact_id, child.version
                    );
                }
                Some(child) => {
                    let opened = self.open(child)?;
                    stack.push(opened);
                }
                None => {
                    let Some(done) = stack.pop() else { break };
                    let node = done.node.with_children(done.children);
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(node),
                        None => return Ok(node),
                    }
                }
            }
        }

        Err(self.parse_error("Empty dependency graph".to_string()))
    }

    /// Builds the childless node for `record` and queues its children
    fn open(&self, record: GraphNodeRecord) -> Result<Frame> {
        let mut artifact = Artifact::new(record.group_id, record.artifact_id, record.version);
        if let Some(artifact_type) = record.artifact_type.filter(|t| !t.is_empty()) {
            artifact = artifact.with_type(artifact_type);
        }
        if let Some(classifier) = record.classifier {
            artifact = artifact.with_classifier(classifier);
        }

        let mut node = Node::new(artifact).with_optional(record.optional);
        if let Some(scope) = record.scope.filter(|s| !s.is_empty()) {
            let parsed: Scope = scope
                .parse()
                .map_err(|_| self.parse_error(format!("Unknown scope '{}'", scope)))?;
            node = node.with_scope(parsed);
        }

        Ok(Frame {
            node,
            children: Vec::new(),
            pending: record.children.into_iter(),
        })
    }

    fn parse_error(&self, details: String) -> anyhow::Error {
        MdepError::GraphParseError {
            path: self.path.clone(),
            details,
        }
        .into()
    }
}

impl DependencyCollector for GraphFileReader {
    fn collect(&self, request: &CollectRequest) -> Result<Node> {
        let content = read_regular_file(&self.path, "dependency graph").map_err(|e| {
            MdepError::FileReadError {
                path: self.path.clone(),
                details: e.to_string(),
            }
        })?;
        let root = self.parse(&content, request)?;
        debug!(
            path = %self.path.display(),
            nodes = root.len(),
            verbose = request.verbose,
            "Collected dependency graph"
        );
        Ok(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const GRAPH: &str = r#"{
        "groupId": "org.example", "artifactId": "app", "version": "1.0",
        "children": [
            { "groupId": "org.example", "artifactId": "core", "version": "2.0", "scope": "compile",
              "children": [
                { "groupId": "org.example", "artifactId": "util", "version": "1.1", "scope": "runtime",
                  "type": "test-jar", "classifier": "tests", "optional": true }
              ] },
            { "groupId": "org.example", "artifactId": "util", "version": "1.0", "scope": "compile",
              "omitted": true }
        ]
    }"#;

    #[test]
    fn test_collect_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("graph.json");
        fs::write(&path, GRAPH).unwrap();

        let reader = GraphFileReader::new(&path);
        let root = reader.collect(&CollectRequest::default()).unwrap();

        assert_eq!(root.as_string(), "org.example:app:jar:1.0");
        assert_eq!(root.children().len(), 1);
        let util = &root.children()[0].children()[0];
        assert_eq!(
            util.as_string(),
            "org.example:util:test-jar:tests:1.1:runtime (optional)"
        );
        assert_eq!(util.artifact().extension(), "jar");
    }

    #[test]
    fn test_verbose_keeps_omitted_nodes() {
        let reader = GraphFileReader::new("graph.json");
        let root = reader.parse(GRAPH, &CollectRequest::new(true)).unwrap();
        assert_eq!(root.children().len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let reader = GraphFileReader::new("/nonexistent/graph.json");
        let err = reader.collect(&CollectRequest::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MdepError>(),
            Some(MdepError::FileReadError { .. })
        ));
    }

    #[test]
    fn test_missing_field() {
        let reader = GraphFileReader::new("graph.json");
        let err = reader
            .parse(r#"{"artifactId": "a", "version": "1"}"#, &CollectRequest::default())
            .unwrap_err();
        assert!(err.to_string().contains("groupId"));
    }

    #[test]
    fn test_unknown_scope() {
        let reader = GraphFileReader::new("graph.json");
        let json = r#"{"groupId": "g", "artifactId": "a", "version": "1",
            "children": [{"groupId": "g", "artifactId": "b", "version": "1", "scope": "import"}]}"#;
        let err = reader.parse(json, &CollectRequest::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MdepError>(),
            Some(MdepError::GraphParseError { .. })
        ));
        assert!(err.to_string().contains("import"));
    }

    fn chain_json(depth: usize) -> String {
        let mut json = String::new();
        for i in 0..depth {
            json.push_str(&format!(
                r#"{{"groupId": "g", "artifactId": "a{}", "version": "1", "scope": "compile", "children": ["#,
                i
            ));
        }
        json.push_str(r#"{"groupId": "g", "artifactId": "leaf", "version": "1"}"#);
        for _ in 0..depth {
            json.push_str("]}");
        }
        json
    }

    #[test]
    fn test_deep_graph() {
        let reader = GraphFileReader::new("graph.json");
        let root = reader
            .parse(&chain_json(1000), &CollectRequest::default())
            .unwrap();

        assert_eq!(root.len(), 1001);
        assert_eq!(root.artifact().artifact_id(), "a0");
        let last = root.iter().last().unwrap();
        assert_eq!(last.artifact().artifact_id(), "leaf");
    }

    #[test]
    fn test_unknown_scope_deep_in_graph() {
        let reader = GraphFileReader::new("graph.json");
        let json = chain_json(200).replace(
            r#""artifactId": "leaf", "version": "1""#,
            r#""artifactId": "leaf", "version": "1", "scope": "bogus""#,
        );
        let err = reader.parse(&json, &CollectRequest::default()).unwrap_err();
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_trailing_content_is_rejected() {
        let reader = GraphFileReader::new("graph.json");
        let json = r#"{"groupId": "g", "artifactId": "a", "version": "1"} {}"#;
        let err = reader.parse(json, &CollectRequest::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MdepError>(),
            Some(MdepError::GraphParseError { .. })
        ));
    }
}
