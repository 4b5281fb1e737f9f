/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to obtain dependency graphs, resolve artifacts, order versions and
/// present rendered output.
pub mod artifact_resolver;
pub mod dependency_collector;
pub mod output_presenter;
pub mod progress_reporter;
pub mod tree_formatter;
pub mod version_scheme;

pub use artifact_resolver::ArtifactResolver;
pub use dependency_collector::{CollectRequest, DependencyCollector};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use tree_formatter::TreeFormatter;
pub use version_scheme::VersionScheme;
