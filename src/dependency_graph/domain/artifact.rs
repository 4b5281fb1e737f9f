use super::Scope;
use crate::shared::error::MdepError;
use crate::shared::Result;
use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

const SNAPSHOT_VERSION: &str = "SNAPSHOT";

const DEFAULT_TYPE: &str = "jar";

/// `<base>-<yyyyMMdd>.<HHmmss>-<buildNumber>`
static TIMESTAMPED_VERSION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(.+)-([0-9]{8}\.[0-9]{6})-([0-9]+)$").ok());

/// Rewrites a timestamped snapshot version back to `<base>-SNAPSHOT`
///
/// Any version that does not have the `<base>-<8 digit date>.<6 digit time>-<build>`
/// shape is returned unchanged.
///
/// # Examples
/// ```
/// use mdep::dependency_graph::domain::to_snapshot_version;
///
/// assert_eq!(to_snapshot_version("1.0-20230101.120000-3"), "1.0-SNAPSHOT");
/// assert_eq!(to_snapshot_version("1.0"), "1.0");
/// ```
pub fn to_snapshot_version(version: &str) -> String {
    let captures = TIMESTAMPED_VERSION
        .as_ref()
        .and_then(|pattern| pattern.captures(version));
    match captures {
        Some(caps) => format!("{}-{}", &caps[1], SNAPSHOT_VERSION),
        None => version.to_string(),
    }
}

/// File extension used for a dependency type
fn extension_for_type(artifact_type: &str) -> &str {
    match artifact_type {
        "test-jar" | "maven-plugin" | "ejb" | "ejb-client" | "java-source" | "javadoc" => "jar",
        other => other,
    }
}

/// Artifact identity plus the optional data attached during resolution
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Artifact {
    group_id: String,
    artifact_id: String,
    version: String,
    classifier: String,
    artifact_type: String,
    extension: String,
    scope: Option<Scope>,
    file: Option<PathBuf>,
}

impl Artifact {
    /// Creates a `jar` artifact without classifier
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            classifier: String::new(),
            artifact_type: DEFAULT_TYPE.to_string(),
            extension: DEFAULT_TYPE.to_string(),
            scope: None,
            file: None,
        }
    }

    /// Sets the type; the extension follows the type
    pub fn with_type(mut self, artifact_type: impl Into<String>) -> Self {
        self.artifact_type = artifact_type.into();
        self.extension = extension_for_type(&self.artifact_type).to_string();
        self
    }

    /// Overrides the extension derived from the type
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = classifier.into();
        self
    }

    pub fn with_scope(mut self, scope: Option<Scope>) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Empty when the artifact has no classifier
    pub fn classifier(&self) -> &str {
        &self.classifier
    }

    pub fn artifact_type(&self) -> &str {
        &self.artifact_type
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn scope(&self) -> Option<Scope> {
        self.scope
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn base_version(&self) -> String {
        to_snapshot_version(&self.version)
    }

    pub fn is_snapshot(&self) -> bool {
        self.version.ends_with(SNAPSHOT_VERSION) || self.base_version().ends_with(SNAPSHOT_VERSION)
    }

    /// `groupId:artifactId:version`
    pub fn key(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }

    /// `groupId:artifactId:type[:classifier]`, the identity used for conflict resolution
    pub fn conflict_id(&self) -> String {
        let mut id = format!("{}:{}:{}", self.group_id, self.artifact_id, self.artifact_type);
        if !self.classifier.is_empty() {
            id.push(':');
            id.push_str(&self.classifier);
        }
        id
    }

    /// `groupId-artifactId-type[-classifier]-version-`
    pub fn id_with_dashes(&self) -> String {
        let mut id = format!("{}-{}-{}", self.group_id, self.artifact_id, self.artifact_type);
        if !self.classifier.is_empty() {
            id.push('-');
            id.push_str(&self.classifier);
        }
        id.push('-');
        id.push_str(&self.version);
        id.push('-');
        id
    }

    /// Compares identity only (coordinates, type and extension)
    pub fn same_identity(&self, other: &Artifact) -> bool {
        self.group_id == other.group_id
            && self.artifact_id == other.artifact_id
            && self.version == other.version
            && self.classifier == other.classifier
            && self.artifact_type == other.artifact_type
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
            version: self.version.clone(),
            classifier: self.classifier.clone(),
            artifact_type: self.artifact_type.clone(),
            extension: self.extension.clone(),
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.artifact_type)?;
        if !self.classifier.is_empty() {
            write!(f, ":{}", self.classifier)?;
        }
        write!(f, ":{}", self.version)
    }
}

/// Unresolved artifact address handed to an artifact resolver
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub classifier: String,
    pub artifact_type: String,
    pub extension: String,
}

impl Coordinate {
    /// Parses `groupId:artifactId:version[:packaging[:classifier]]`
    ///
    /// # Errors
    /// Returns [`MdepError::InvalidCoordinate`] when the string does not have
    /// 3 to 5 tokens or when one of the mandatory tokens is empty.
    pub fn parse(value: &str) -> Result<Self> {
        let tokens: Vec<&str> = value.trim().split(':').map(str::trim).collect();

        if !(3..=5).contains(&tokens.len()) {
            return Err(MdepError::InvalidCoordinate {
                value: value.to_string(),
                reason: format!("expected 3 to 5 tokens, found {}", tokens.len()),
            }
            .into());
        }

        if tokens[..3].iter().any(|t| t.is_empty()) {
            return Err(MdepError::InvalidCoordinate {
                value: value.to_string(),
                reason: "groupId, artifactId and version must not be empty".to_string(),
            }
            .into());
        }

        let artifact_type = tokens.get(3).copied().filter(|t| !t.is_empty());
        let artifact_type = artifact_type.unwrap_or(DEFAULT_TYPE);

        Ok(Self {
            group_id: tokens[0].to_string(),
            artifact_id: tokens[1].to_string(),
            version: tokens[2].to_string(),
            classifier: tokens.get(4).copied().unwrap_or_default().to_string(),
            artifact_type: artifact_type.to_string(),
            extension: extension_for_type(artifact_type).to_string(),
        })
    }

    /// `groupId:artifactId:version`
    pub fn key(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }

    /// Materializes the coordinate as an artifact, optionally bound to a file
    pub fn to_artifact(&self) -> Artifact {
        Artifact::new(&self.group_id, &self.artifact_id, &self.version)
            .with_type(&self.artifact_type)
            .with_extension(&self.extension)
            .with_classifier(&self.classifier)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.extension)?;
        if !self.classifier.is_empty() {
            write!(f, ":{}", self.classifier)?;
        }
        write!(f, ":{}", self.version)
    }
}
