use clap::{Args as ClapArgs, Parser, Subcommand};
use mdep::dependency_graph::services::NamingOptions;
use std::path::PathBuf;

/// Filter, prune and render Maven-style dependency graphs
#[derive(Parser, Debug)]
#[command(name = "mdep")]
#[command(version)]
#[command(about = "Filter, prune and render Maven-style dependency graphs", long_about = None)]
pub struct Args {
    /// Configuration file (defaults to ./mdep.config.yml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging (overrides MDEP_LOG)
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the dependency tree as text, DOT, GraphML or TGF
    Tree(TreeArgs),
    /// Resolve the filtered dependencies against a local repository
    Resolve(ResolveArgs),
    /// Print the destination path computed for an artifact coordinate
    Name(NameArgs),
}

#[derive(ClapArgs, Debug, Default)]
pub struct TreeArgs {
    /// Dependency graph JSON file
    #[arg(short, long, value_name = "FILE")]
    pub graph: Option<PathBuf>,

    /// Output type: text, dot, graphml or tgf
    #[arg(short = 't', long, value_name = "TYPE")]
    pub output_type: Option<String>,

    /// Text indentation style: whitespace, standard or extended
    #[arg(long, value_name = "STYLE")]
    pub tokens: Option<String>,

    /// Comma-separated groupId:artifactId:type:version patterns to show
    #[arg(short, long, value_name = "PATTERNS")]
    pub includes: Option<String>,

    /// Comma-separated groupId:artifactId:type:version patterns to hide
    #[arg(short, long, value_name = "PATTERNS")]
    pub excludes: Option<String>,

    /// Keep nodes omitted by version mediation
    #[arg(long)]
    pub verbose: bool,

    /// Output encoding (only UTF-8 is supported)
    #[arg(long, value_name = "ENCODING")]
    pub encoding: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(ClapArgs, Debug, Default)]
pub struct ResolveArgs {
    /// Dependency graph JSON file
    #[arg(short, long, value_name = "FILE")]
    pub graph: Option<PathBuf>,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Fail on the first artifact that cannot be resolved
    #[arg(long)]
    pub stop_on_failure: bool,

    /// Resolve this classifier of every dependency instead of the main artifact
    #[arg(long, value_name = "CLASSIFIER")]
    pub classifier: Option<String>,

    /// Type used together with --classifier
    #[arg(long = "type", value_name = "TYPE")]
    pub artifact_type: Option<String>,

    /// Local repository (defaults to ~/.m2/repository)
    #[arg(long, value_name = "DIR")]
    pub local_repository: Option<PathBuf>,

    /// Report artifacts whose copy in this directory is up to date as skipped
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(flatten)]
    pub naming: NamingArgs,

    /// Always replace existing release artifacts
    #[arg(long)]
    pub overwrite_releases: bool,

    /// Always replace existing snapshot artifacts
    #[arg(long)]
    pub overwrite_snapshots: bool,

    /// Replace existing artifacts only when the source is newer (default: true)
    #[arg(long, value_name = "BOOL")]
    pub overwrite_if_newer: Option<bool>,

    /// Print the resolved file of every artifact
    #[arg(long)]
    pub with_file_names: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(ClapArgs, Debug, Default)]
pub struct NameArgs {
    /// groupId:artifactId:version[:packaging[:classifier]]
    pub coordinate: String,

    /// Base output directory
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Dependency scope, used with --use-sub-directory-per-scope
    #[arg(long, value_name = "SCOPE")]
    pub scope: Option<String>,

    #[command(flatten)]
    pub naming: NamingArgs,
}

#[derive(ClapArgs, Debug, Default)]
pub struct FilterArgs {
    /// Keep only the direct dependencies
    #[arg(long)]
    pub exclude_transitive: bool,

    /// Scope threshold to include: runtime, compile, test, provided or system
    #[arg(long, value_name = "SCOPE")]
    pub include_scope: Option<String>,

    /// Scope threshold to exclude
    #[arg(long, value_name = "SCOPE")]
    pub exclude_scope: Option<String>,

    #[arg(long, value_name = "LIST")]
    pub include_types: Option<String>,

    #[arg(long, value_name = "LIST")]
    pub exclude_types: Option<String>,

    #[arg(long, value_name = "LIST")]
    pub include_classifiers: Option<String>,

    #[arg(long, value_name = "LIST")]
    pub exclude_classifiers: Option<String>,

    /// Comma-separated group id prefixes
    #[arg(long, value_name = "LIST")]
    pub include_group_ids: Option<String>,

    /// Comma-separated group id prefixes
    #[arg(long, value_name = "LIST")]
    pub exclude_group_ids: Option<String>,

    #[arg(long, value_name = "LIST")]
    pub include_artifact_ids: Option<String>,

    #[arg(long, value_name = "LIST")]
    pub exclude_artifact_ids: Option<String>,

    /// Drop dependencies built in the same reactor (default: true)
    #[arg(long, value_name = "BOOL")]
    pub exclude_reactor: Option<bool>,

    /// groupId:artifactId:version of a reactor module; may be repeated
    #[arg(long = "reactor-project", value_name = "COORDINATE")]
    pub reactor_projects: Vec<String>,
}

#[derive(ClapArgs, Debug, Default, Clone, Copy)]
pub struct NamingArgs {
    #[arg(long)]
    pub remove_version: bool,

    #[arg(long)]
    pub remove_classifier: bool,

    #[arg(long)]
    pub remove_type: bool,

    #[arg(long)]
    pub prepend_group_id: bool,

    /// Use the -SNAPSHOT base version in file names
    #[arg(long)]
    pub use_base_version: bool,

    #[arg(long)]
    pub use_sub_directory_per_artifact: bool,

    #[arg(long)]
    pub use_sub_directory_per_type: bool,

    #[arg(long)]
    pub use_sub_directory_per_scope: bool,

    /// Lay files out like a Maven repository
    #[arg(long)]
    pub use_repository_layout: bool,
}

impl NamingArgs {
    /// Flags set on the command line, OR-ed into `base`
    pub fn apply_to(&self, base: NamingOptions) -> NamingOptions {
        NamingOptions {
            remove_version: base.remove_version || self.remove_version,
            remove_classifier: base.remove_classifier || self.remove_classifier,
            remove_type: base.remove_type || self.remove_type,
            prepend_group_id: base.prepend_group_id || self.prepend_group_id,
            use_base_version: base.use_base_version || self.use_base_version,
            use_sub_directory_per_artifact: base.use_sub_directory_per_artifact
                || self.use_sub_directory_per_artifact,
            use_sub_directory_per_type: base.use_sub_directory_per_type
                || self.use_sub_directory_per_type,
            use_sub_directory_per_scope: base.use_sub_directory_per_scope
                || self.use_sub_directory_per_scope,
            use_repository_layout: base.use_repository_layout || self.use_repository_layout,
        }
    }
}

/// Output sink selection
#[derive(ClapArgs, Debug, Default)]
pub struct OutputArgs {
    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Append to the output file instead of replacing it
    #[arg(long)]
    pub append: bool,
}

impl Args {
    /// Parses the process arguments, leaving the exit to the caller
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
