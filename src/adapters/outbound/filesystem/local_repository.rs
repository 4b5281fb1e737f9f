use crate::dependency_graph::domain::{to_snapshot_version, Artifact, Coordinate};
use crate::ports::outbound::ArtifactResolver;
use crate::shared::error::MdepError;
use crate::shared::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

/// LocalRepositoryResolver adapter looking artifacts up in a Maven local repository
///
/// Layout: `<repo>/<group path>/<artifactId>/<base version>/<artifactId>-<version>[-<classifier>].<extension>`.
pub struct LocalRepositoryResolver {
    repository: PathBuf,
}

impl LocalRepositoryResolver {
    pub fn new(repository: impl Into<PathBuf>) -> Self {
        Self {
            repository: repository.into(),
        }
    }

    /// `$HOME/.m2/repository`, falling back to a relative `.m2/repository`
    pub fn default_repository() -> PathBuf {
        std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .map(PathBuf::from)
            .map(|home| home.join(".m2").join("repository"))
            .unwrap_or_else(|| PathBuf::from(".m2").join("repository"))
    }

    pub fn repository(&self) -> &Path {
        &self.repository
    }

    /// Path the coordinate would occupy in the repository
    pub fn path_of(&self, coordinate: &Coordinate) -> PathBuf {
        let mut path = self.repository.clone();
        path.extend(coordinate.group_id.split('.'));
        path.push(&coordinate.artifact_id);
        path.push(to_snapshot_version(&coordinate.version));

        let mut file_name = format!("{}-{}", coordinate.artifact_id, coordinate.version);
        if !coordinate.classifier.is_empty() {
            file_name.push('-');
            file_name.push_str(&coordinate.classifier);
        }
        file_name.push('.');
        file_name.push_str(&coordinate.extension);
        path.join(file_name)
    }
}

impl Default for LocalRepositoryResolver {
    fn default() -> Self {
        Self::new(Self::default_repository())
    }
}

impl ArtifactResolver for LocalRepositoryResolver {
    fn resolve(&self, coordinate: &Coordinate) -> Result<Artifact> {
        let path = self.path_of(coordinate);
        if !path.is_file() {
            debug!(path = %path.display(), "Artifact file not found in local repository");
            return Err(MdepError::Resolution {
                coordinate: coordinate.to_string(),
                details: format!("{} does not exist", path.display()),
            }
            .into());
        }
        Ok(coordinate.to_artifact().with_file(path))
    }
}
