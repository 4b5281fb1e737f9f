use crate::dependency_graph::domain::{to_snapshot_version, Artifact};
use std::path::{Path, PathBuf};

/// Flags shaping destination file names and directories
///
/// All fields default to `false`, which yields
/// `<output dir>/<artifactId>-<version>[-<classifier>].<extension>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NamingOptions {
    pub remove_version: bool,
    pub remove_classifier: bool,
    pub remove_type: bool,
    pub prepend_group_id: bool,
    pub use_base_version: bool,
    pub use_sub_directory_per_artifact: bool,
    pub use_sub_directory_per_type: bool,
    pub use_sub_directory_per_scope: bool,
    pub use_repository_layout: bool,
}

impl NamingOptions {
    pub fn file_name(&self, artifact: &Artifact) -> String {
        formatted_file_name(
            artifact,
            self.remove_version,
            self.prepend_group_id,
            self.use_base_version,
            self.remove_classifier,
        )
    }

    pub fn output_directory(&self, base_dir: &Path, artifact: &Artifact) -> PathBuf {
        formatted_output_directory(
            self.use_sub_directory_per_scope,
            self.use_sub_directory_per_type,
            self.use_sub_directory_per_artifact,
            self.use_repository_layout,
            self.remove_version,
            self.remove_type,
            base_dir,
            artifact,
        )
    }

    /// Full destination path of `artifact` below `base_dir`
    pub fn destination(&self, base_dir: &Path, artifact: &Artifact) -> PathBuf {
        self.output_directory(base_dir, artifact)
            .join(self.file_name(artifact))
    }
}

/// Builds `[groupId-]artifactId[-version][-classifier].extension`
///
/// # Arguments
/// * `remove_version` - Leave out the version
/// * `prepend_group_id` - Start the name with the group id
/// * `use_base_version` - Use the snapshot-normalized version instead of the resolved one
/// * `remove_classifier` - Leave out the classifier
///
/// # Examples
/// ```
/// use mdep::dependency_graph::domain::Artifact;
/// use mdep::dependency_graph::services::formatted_file_name;
///
/// let artifact = Artifact::new("org.example", "lib", "1.0-20230101.120000-3")
///     .with_classifier("sources");
/// assert_eq!(
///     formatted_file_name(&artifact, false, true, true, false),
///     "org.example-lib-1.0-SNAPSHOT-sources.jar"
/// );
/// ```
pub fn formatted_file_name(
    artifact: &Artifact,
    remove_version: bool,
    prepend_group_id: bool,
    use_base_version: bool,
    remove_classifier: bool,
) -> String {
    let mut name = String::new();
    if prepend_group_id {
        name.push_str(artifact.group_id());
        name.push('-');
    }
    name.push_str(artifact.artifact_id());
    if !remove_version {
        name.push('-');
        if use_base_version {
            name.push_str(&to_snapshot_version(artifact.version()));
        } else {
            name.push_str(artifact.version());
        }
    }
    if !remove_classifier && !artifact.classifier().is_empty() {
        name.push('-');
        name.push_str(artifact.classifier());
    }
    name.push('.');
    name.push_str(artifact.extension());
    name
}

/// Directory an artifact is placed in below `base_dir`
///
/// With `repository_layout` the path is `<group path>/<artifactId>/<base version>`
/// and the other flags are ignored. Otherwise scope, type and artifact
/// segments are appended in that order for each enabled flag.
#[allow(clippy::too_many_arguments)]
pub fn formatted_output_directory(
    per_scope: bool,
    per_type: bool,
    per_artifact: bool,
    repository_layout: bool,
    strip_version: bool,
    strip_type: bool,
    base_dir: &Path,
    artifact: &Artifact,
) -> PathBuf {
    let mut dir = base_dir.to_path_buf();

    if repository_layout {
        dir.extend(artifact.group_id().split('.'));
        dir.push(artifact.artifact_id());
        dir.push(artifact.base_version());
        return dir;
    }

    if per_scope {
        if let Some(scope) = artifact.scope() {
            dir.push(scope.as_str());
        }
    }
    if per_type {
        dir.push(format!("{}s", artifact.artifact_type()));
    }
    if per_artifact {
        dir.push(dependency_id(artifact, strip_version, strip_type));
    }
    dir
}

/// `artifactId[-version][-classifier][-type]`
///
/// The type is left out when it repeats the classifier.
pub fn dependency_id(artifact: &Artifact, remove_version: bool, remove_type: bool) -> String {
    let mut id = artifact.artifact_id().to_string();
    if !remove_version {
        id.push('-');
        id.push_str(artifact.version());
    }
    if !artifact.classifier().is_empty() {
        id.push('-');
        id.push_str(artifact.classifier());
    }
    if !remove_type && artifact.classifier() != artifact.artifact_type() {
        id.push('-');
        id.push_str(artifact.artifact_type());
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_graph::domain::Scope;

    fn artifact() -> Artifact {
        Artifact::new("org.example", "lib", "1.0").with_classifier("tests")
    }

    #[test]
    fn test_file_name_default() {
        assert_eq!(
            formatted_file_name(&artifact(), false, false, false, false),
            "lib-1.0-tests.jar"
        );
    }

    #[test]
    fn test_file_name_flags() {
        let a = artifact();
        assert_eq!(formatted_file_name(&a, true, false, false, false), "lib-tests.jar");
        assert_eq!(formatted_file_name(&a, false, false, false, true), "lib-1.0.jar");
        assert_eq!(
            formatted_file_name(&a, false, true, false, false),
            "org.example-lib-1.0-tests.jar"
        );
        assert_eq!(formatted_file_name(&a, true, false, false, true), "lib.jar");
    }

    #[test]
    fn test_file_name_is_idempotent() {
        let a = artifact();
        assert_eq!(
            formatted_file_name(&a, false, true, true, false),
            formatted_file_name(&a, false, true, true, false)
        );
    }

    #[test]
    fn test_file_name_base_version() {
        let a = Artifact::new("g", "lib", "2.0-20240315.101010-7");
        assert_eq!(formatted_file_name(&a, false, false, true, false), "lib-2.0-SNAPSHOT.jar");
        assert_eq!(
            formatted_file_name(&a, false, false, false, false),
            "lib-2.0-20240315.101010-7.jar"
        );
    }

    #[test]
    fn test_file_name_uses_extension() {
        let a = Artifact::new("g", "app", "1.0").with_type("war");
        assert_eq!(formatted_file_name(&a, false, false, false, false), "app-1.0.war");
    }

    #[test]
    fn test_output_directory_segments_in_order() {
        let a = Artifact::new("org.example", "lib", "1.0").with_scope(Some(Scope::Runtime));
        let dir = formatted_output_directory(true, true, true, false, false, false, Path::new("out"), &a);
        assert_eq!(dir, Path::new("out").join("runtime").join("jars").join("lib-1.0-jar"));
    }

    #[test]
    fn test_output_directory_without_flags() {
        let a = artifact();
        let dir = formatted_output_directory(false, false, false, false, false, false, Path::new("out"), &a);
        assert_eq!(dir, Path::new("out"));
    }

    #[test]
    fn test_output_directory_missing_scope() {
        let a = Artifact::new("g", "lib", "1.0");
        let dir = formatted_output_directory(true, false, false, false, false, false, Path::new("out"), &a);
        assert_eq!(dir, Path::new("out"));
    }

    #[test]
    fn test_repository_layout_ignores_other_flags() {
        let a = Artifact::new("org.example.core", "lib", "1.0-20230101.120000-3")
            .with_scope(Some(Scope::Compile));
        let dir = formatted_output_directory(true, true, true, true, false, false, Path::new("repo"), &a);
        assert_eq!(
            dir,
            Path::new("repo")
                .join("org")
                .join("example")
                .join("core")
                .join("lib")
                .join("1.0-SNAPSHOT")
        );
    }

    #[test]
    fn test_dependency_id() {
        let sources = Artifact::new("g", "lib", "1.0")
            .with_type("sources")
            .with_classifier("sources");
        assert_eq!(dependency_id(&sources, false, false), "lib-1.0-sources");
        assert_eq!(dependency_id(&artifact(), true, false), "lib-tests-jar");
        assert_eq!(dependency_id(&artifact(), false, true), "lib-1.0-tests");
    }

    #[test]
    fn test_destination_joins_directory_and_name() {
        let options = NamingOptions {
            use_sub_directory_per_type: true,
            remove_version: true,
            ..Default::default()
        };
        let path = options.destination(Path::new("target"), &artifact());
        assert_eq!(path, Path::new("target").join("jars").join("lib-tests.jar"));
    }
}
