pub mod artifact;
pub mod graph_tokens;
pub mod node;
pub mod parent_index;
pub mod scope;
pub mod status_sets;
pub mod version_range;

pub use artifact::{to_snapshot_version, Artifact, Coordinate};
pub use graph_tokens::{GraphTokens, TokenStyle};
pub use node::{Node, NodeVisitor, PreOrder};
pub use parent_index::{Ancestors, ParentIndex};
pub use scope::Scope;
pub use status_sets::DependencyStatusSets;
pub use version_range::{Bound, Restriction, VersionRange};
