use mdep::prelude::*;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock ArtifactResolver that only knows the registered `groupId:artifactId:version` keys
#[derive(Clone, Default)]
pub struct MockArtifactResolver {
    available: HashSet<String>,
    pub requested: Arc<Mutex<Vec<Coordinate>>>,
}

impl MockArtifactResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_artifact(mut self, key: &str) -> Self {
        self.available.insert(key.to_string());
        self
    }

    pub fn requested_keys(&self) -> Vec<String> {
        self.requested
            .lock()
            .unwrap()
            .iter()
            .map(Coordinate::key)
            .collect()
    }
}

impl ArtifactResolver for MockArtifactResolver {
    fn resolve(&self, coordinate: &Coordinate) -> Result<Artifact> {
        self.requested.lock().unwrap().push(coordinate.clone());
        if !self.available.contains(&coordinate.key()) {
            return Err(MdepError::Resolution {
                coordinate: coordinate.to_string(),
                details: "not in mock repository".to_string(),
            }
            .into());
        }
        Ok(coordinate
            .to_artifact()
            .with_file(PathBuf::from("/mock-repo").join(coordinate.key().replace(':', "/"))))
    }
}
