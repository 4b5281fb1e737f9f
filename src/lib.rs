//! mdep - dependency tree filtering, pruning and rendering
//!
//! This library filters Maven-style dependency graphs, prunes them while
//! keeping the ancestors of every match, renders them as text, DOT, GraphML
//! or TGF, and computes destination names for resolved artifacts. It follows
//! a hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_graph`): Graph model, filters and pure services
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```
//! use mdep::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let root = Node::new(Artifact::new("com.example", "app", "1.0"))
//!     .with_child(
//!         Node::new(Artifact::new("com.example", "core", "1.0"))
//!             .with_scope(Scope::Compile)
//!             .with_child(
//!                 Node::new(Artifact::new("org.apache.commons", "commons-lang3", "3.12.0"))
//!                     .with_scope(Scope::Compile),
//!             ),
//!     )
//!     .with_child(Node::new(Artifact::new("junit", "junit", "4.13.2")).with_scope(Scope::Test));
//!
//! // Keep Apache artifacts and the path leading to them
//! let versions = MavenVersionScheme::new();
//! let filter = StrictPatternArtifactFilter::from_list("org.apache.*", true, &versions);
//! let pruned = TreePruner::prune(&root, Some(&filter as &dyn Filter<Node>));
//!
//! let output = TextFormatter::default().format(&pruned)?;
//! assert_eq!(
//!     output,
//!     "com.example:app:jar:1.0\n\
//!      \\- com.example:core:jar:1.0:compile\n   \
//!      \\- org.apache.commons:commons-lang3:jar:3.12.0:compile\n"
//! );
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod dependency_graph;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, GraphFileReader, LocalRepositoryResolver, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        DotFormatter, GraphmlFormatter, TextFormatter, TgfFormatter,
    };
    pub use crate::adapters::outbound::versioning::MavenVersionScheme;
    pub use crate::application::dto::{
        FilterSettings, OutputType, ResolveRequest, TreeRequest, TreeResponse,
    };
    pub use crate::application::use_cases::{RenderTreeUseCase, ResolveDependenciesUseCase};
    pub use crate::dependency_graph::domain::{
        Artifact, Coordinate, DependencyStatusSets, GraphTokens, Node, NodeVisitor, ParentIndex,
        Scope, TokenStyle, VersionRange,
    };
    pub use crate::dependency_graph::filters::{
        ExcludeReactorProjectsFilter, Filter, FilterChain, IncludeExcludeFilter, ScopeFilter,
        StrictPatternArtifactFilter,
    };
    pub use crate::dependency_graph::services::{
        formatted_file_name, formatted_output_directory, DestFileFilter, NamingOptions,
        TreePruner,
    };
    pub use crate::ports::outbound::{
        ArtifactResolver, CollectRequest, DependencyCollector, OutputPresenter, ProgressReporter,
        TreeFormatter, VersionScheme,
    };
    pub use crate::shared::error::{ExitCode, MdepError};
    pub use crate::shared::Result;
}
