mod artifact_naming;
mod dest_file_filter;
mod tree_pruner;

pub use artifact_naming::{
    dependency_id, formatted_file_name, formatted_output_directory, NamingOptions,
};
pub use dest_file_filter::{ArtifactItem, DestFileFilter};
pub use tree_pruner::TreePruner;
