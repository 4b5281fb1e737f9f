use crate::dependency_graph::domain::{Artifact, Coordinate};
use crate::shared::Result;

/// ArtifactResolver port for turning coordinates into files
pub trait ArtifactResolver {
    /// Resolves a coordinate to an artifact bound to a local file
    ///
    /// # Arguments
    /// * `coordinate` - Artifact address to resolve
    ///
    /// # Returns
    /// The artifact with its file path set
    ///
    /// # Errors
    /// Returns a resolution error naming the coordinate when no file can be found
    fn resolve(&self, coordinate: &Coordinate) -> Result<Artifact>;
}
