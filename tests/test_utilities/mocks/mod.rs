/// Mock implementations for testing
mod mock_artifact_resolver;
mod mock_dependency_collector;
mod mock_progress_reporter;

pub use mock_artifact_resolver::MockArtifactResolver;
pub use mock_dependency_collector::MockDependencyCollector;
pub use mock_progress_reporter::MockProgressReporter;
