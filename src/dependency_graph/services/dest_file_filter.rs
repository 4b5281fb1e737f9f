use super::NamingOptions;
use crate::dependency_graph::domain::Artifact;
use crate::shared::error::MdepError;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Artifact plus optional overrides of its destination
#[derive(Debug, Clone)]
pub struct ArtifactItem {
    pub artifact: Artifact,
    pub output_directory: Option<PathBuf>,
    pub dest_file_name: Option<String>,
}

impl ArtifactItem {
    pub fn new(artifact: Artifact) -> Self {
        Self {
            artifact,
            output_directory: None,
            dest_file_name: None,
        }
    }
}

/// Decides whether an artifact still has to be copied to its destination
#[derive(Debug, Clone, Default)]
pub struct DestFileFilter {
    pub naming: NamingOptions,
    pub output_directory: PathBuf,
    pub overwrite_releases: bool,
    pub overwrite_snapshots: bool,
    pub overwrite_if_newer: bool,
}

impl DestFileFilter {
    pub fn new(output_directory: impl Into<PathBuf>, naming: NamingOptions) -> Self {
        Self {
            naming,
            output_directory: output_directory.into(),
            ..Default::default()
        }
    }

    /// Destination of `item`, honouring its overrides
    pub fn destination(&self, item: &ArtifactItem) -> PathBuf {
        let directory = match &item.output_directory {
            Some(directory) => directory.clone(),
            None => self
                .naming
                .output_directory(&self.output_directory, &item.artifact),
        };
        match item.dest_file_name.as_deref().filter(|name| !name.is_empty()) {
            Some(name) => directory.join(name),
            None => directory.join(self.naming.file_name(&item.artifact)),
        }
    }

    /// Returns true when `item` must be (re)copied
    ///
    /// # Errors
    /// Fails when `overwrite_if_newer` requires comparing modification times
    /// and either the artifact has no file or a timestamp cannot be read.
    pub fn should_copy(&self, item: &ArtifactItem) -> Result<bool> {
        let artifact = &item.artifact;
        let overwrite = if artifact.is_snapshot() {
            self.overwrite_snapshots
        } else {
            self.overwrite_releases
        };
        let destination = self.destination(item);

        if overwrite || !destination.exists() {
            return Ok(true);
        }
        if !self.overwrite_if_newer {
            return Ok(false);
        }

        let source = artifact.file().ok_or_else(|| MdepError::FileReadError {
            path: PathBuf::from(artifact.to_string()),
            details: "Artifact has not been resolved to a file".to_string(),
        })?;
        Ok(last_modified(source)? > last_modified(&destination)?)
    }

    pub fn should_copy_artifact(&self, artifact: &Artifact) -> Result<bool> {
        self.should_copy(&ArtifactItem::new(artifact.clone()))
    }
}

fn last_modified(path: &Path) -> Result<SystemTime> {
    fs::metadata(path)
        .and_then(|metadata| metadata.modified())
        .map_err(|e| {
            MdepError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
}
