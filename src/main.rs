mod cli;
mod config;

use cli::{Args, Command, FilterArgs, NameArgs, ResolveArgs, TreeArgs};
use config::{discover_config, join_list, load_config_from_path, ConfigFile};
use mdep::adapters::outbound::console::StderrProgressReporter;
use mdep::adapters::outbound::filesystem::{GraphFileReader, LocalRepositoryResolver};
use mdep::adapters::outbound::versioning::MavenVersionScheme;
use mdep::application::dto::{
    validate_encoding, FilterSettings, OutputType, ResolveRequest, TreeRequest,
};
use mdep::application::factories::{PresenterFactory, PresenterType};
use mdep::application::use_cases::{RenderTreeUseCase, ResolveDependenciesUseCase};
use mdep::dependency_graph::domain::{Coordinate, Scope, TokenStyle};
use mdep::shared::error::{ExitCode, MdepError};
use mdep::shared::Result;
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "MDEP_LOG";

fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    init_tracing(args.debug);

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            print_error(&e);
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Installs the stderr subscriber; `--debug` wins over `MDEP_LOG`
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn print_error(error: &anyhow::Error) {
    let banner = "❌ An error occurred:";
    if std::io::stderr().is_terminal() {
        eprintln!("\n{}\n", banner.red().bold());
    } else {
        eprintln!("\n{}\n", banner);
    }
    eprintln!("{}", error);

    for cause in error.chain().skip(1) {
        eprintln!("\nCaused by: {}", cause);
    }
    eprintln!();
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::Tree(tree) => run_tree(tree, &config),
        Command::Resolve(resolve) => run_resolve(resolve, &config),
        Command::Name(name) => run_name(name, &config),
    }
}

fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => load_config_from_path(path),
        None => Ok(discover_config(Path::new("."))?.unwrap_or_default()),
    }
}

fn run_tree(args: TreeArgs, config: &ConfigFile) -> Result<ExitCode> {
    let graph = graph_path(args.graph.clone(), config)?;
    let request = tree_request(&args, config)?;

    let use_case = RenderTreeUseCase::new(
        GraphFileReader::new(graph),
        MavenVersionScheme::new(),
        StderrProgressReporter::new(),
    );
    let response = use_case.execute(&request)?;
    debug!(
        collected = response.collected_nodes,
        rendered = response.rendered_nodes,
        "Dependency tree rendered"
    );

    let presenter_type = PresenterType::from_output_file(args.output.output_file, args.output.append);
    let mut rendered = response.rendered;
    if presenter_type == PresenterType::Stdout && !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    PresenterFactory::create(presenter_type).present(&rendered)?;

    Ok(ExitCode::Success)
}

fn tree_request(args: &TreeArgs, config: &ConfigFile) -> Result<TreeRequest> {
    let output_type: OutputType = args
        .output_type
        .as_deref()
        .or(config.output_type.as_deref())
        .map(str::parse)
        .transpose()?
        .unwrap_or_default();
    let tokens: TokenStyle = args
        .tokens
        .as_deref()
        .or(config.tokens.as_deref())
        .map(str::parse)
        .transpose()?
        .unwrap_or_default();

    if let Some(encoding) = args.encoding.as_deref().or(config.encoding.as_deref()) {
        validate_encoding(encoding)?;
    }

    Ok(TreeRequest::new(output_type, tokens)
        .with_includes(pick(&args.includes, &config.includes))
        .with_excludes(pick(&args.excludes, &config.excludes))
        .with_verbose(args.verbose || config.verbose.unwrap_or_default()))
}

fn run_resolve(args: ResolveArgs, config: &ConfigFile) -> Result<ExitCode> {
    let graph = graph_path(args.graph.clone(), config)?;
    let request = resolve_request(&args, config)?;
    let repository = args
        .local_repository
        .clone()
        .or_else(|| config.local_repository.clone())
        .unwrap_or_else(LocalRepositoryResolver::default_repository);
    debug!(repository = %repository.display(), "Using local repository");

    let use_case = ResolveDependenciesUseCase::new(
        GraphFileReader::new(graph),
        LocalRepositoryResolver::new(repository),
        StderrProgressReporter::new(),
    );
    let status = use_case.execute(&request)?;

    let presenter_type = PresenterType::from_output_file(args.output.output_file, args.output.append);
    PresenterFactory::create(presenter_type).present(&status.output(args.with_file_names))?;

    Ok(if status.has_unresolved() {
        ExitCode::UnresolvedDependencies
    } else {
        ExitCode::Success
    })
}

fn resolve_request(args: &ResolveArgs, config: &ConfigFile) -> Result<ResolveRequest> {
    let mut request = ResolveRequest::new(filter_settings(&args.filters, config)?);
    request.stop_on_failure = args.stop_on_failure || config.stop_on_failure.unwrap_or_default();
    request.classifier = args.classifier.clone().or_else(|| config.classifier.clone());
    request.artifact_type = args
        .artifact_type
        .clone()
        .or_else(|| config.artifact_type.clone());
    request.output_directory = args.output_dir.clone().or_else(|| config.output_dir.clone());
    request.naming = args.naming.apply_to(config.naming_options());
    request.overwrite_releases =
        args.overwrite_releases || config.overwrite_releases.unwrap_or_default();
    request.overwrite_snapshots =
        args.overwrite_snapshots || config.overwrite_snapshots.unwrap_or_default();
    request.overwrite_if_newer = args
        .overwrite_if_newer
        .or(config.overwrite_if_newer)
        .unwrap_or(true);
    Ok(request)
}

fn filter_settings(args: &FilterArgs, config: &ConfigFile) -> Result<FilterSettings> {
    let reactor_projects = if args.reactor_projects.is_empty() {
        config.reactor_projects.clone().unwrap_or_default()
    } else {
        args.reactor_projects.clone()
    };
    let reactor_projects = reactor_projects
        .iter()
        .map(|project| Coordinate::parse(project))
        .collect::<Result<Vec<_>>>()?;

    let scope = |cli: &Option<String>, file: &Option<String>| {
        cli.clone().or_else(|| file.clone()).unwrap_or_default()
    };

    Ok(FilterSettings {
        exclude_transitive: args.exclude_transitive
            || config.exclude_transitive.unwrap_or_default(),
        include_scope: scope(&args.include_scope, &config.include_scope),
        exclude_scope: scope(&args.exclude_scope, &config.exclude_scope),
        include_types: pick(&args.include_types, &config.include_types),
        exclude_types: pick(&args.exclude_types, &config.exclude_types),
        include_classifiers: pick(&args.include_classifiers, &config.include_classifiers),
        exclude_classifiers: pick(&args.exclude_classifiers, &config.exclude_classifiers),
        include_group_ids: pick(&args.include_group_ids, &config.include_group_ids),
        exclude_group_ids: pick(&args.exclude_group_ids, &config.exclude_group_ids),
        include_artifact_ids: pick(&args.include_artifact_ids, &config.include_artifact_ids),
        exclude_artifact_ids: pick(&args.exclude_artifact_ids, &config.exclude_artifact_ids),
        exclude_reactor: args
            .exclude_reactor
            .or(config.exclude_reactor)
            .unwrap_or(true),
        reactor_projects,
    })
}

fn run_name(args: NameArgs, config: &ConfigFile) -> Result<ExitCode> {
    let scope = args.scope.as_deref().map(str::parse::<Scope>).transpose()?;
    let artifact = Coordinate::parse(&args.coordinate)?
        .to_artifact()
        .with_scope(scope);
    let naming = args.naming.apply_to(config.naming_options());
    let base_dir = args
        .output_dir
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    let destination = naming.destination(&base_dir, &artifact);
    PresenterFactory::create(PresenterType::Stdout)
        .present(&format!("{}\n", destination.display()))?;

    Ok(ExitCode::Success)
}

/// Graph file from the command line or the config file
fn graph_path(cli: Option<PathBuf>, config: &ConfigFile) -> Result<PathBuf> {
    cli.or_else(|| config.graph.clone()).ok_or_else(|| {
        MdepError::configuration(
            "graph",
            "",
            "A dependency graph file is required; pass --graph or set 'graph' in the config file",
        )
        .into()
    })
}

/// Command-line list when given, else the config list joined with commas
fn pick(cli: &Option<String>, file: &Option<Vec<String>>) -> String {
    cli.clone().or_else(|| join_list(file)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_path_prefers_cli() {
        let config = ConfigFile {
            graph: Some(PathBuf::from("from-config.json")),
            ..ConfigFile::default()
        };
        let path = graph_path(Some(PathBuf::from("from-cli.json")), &config).unwrap();
        assert_eq!(path, PathBuf::from("from-cli.json"));

        let path = graph_path(None, &config).unwrap();
        assert_eq!(path, PathBuf::from("from-config.json"));
    }

    #[test]
    fn test_graph_path_missing() {
        let err = graph_path(None, &ConfigFile::default()).unwrap_err();
        let mdep = err.downcast_ref::<MdepError>().unwrap();
        assert!(mdep.is_configuration());
        assert!(err.to_string().contains("graph"));
    }

    #[test]
    fn test_tree_request_merges_config() {
        let config = ConfigFile {
            output_type: Some("dot".to_string()),
            tokens: Some("extended".to_string()),
            includes: Some(vec!["org.apache.*".to_string(), "junit".to_string()]),
            ..ConfigFile::default()
        };
        let args = TreeArgs {
            output_type: Some("tgf".to_string()),
            ..TreeArgs::default()
        };

        let request = tree_request(&args, &config).unwrap();
        assert_eq!(request.output_type, OutputType::Tgf);
        assert_eq!(request.tokens, TokenStyle::Extended);
        assert_eq!(request.includes, "org.apache.*,junit");
        assert!(request.excludes.is_empty());
    }

    #[test]
    fn test_tree_request_rejects_encoding() {
        let args = TreeArgs {
            encoding: Some("latin1".to_string()),
            ..TreeArgs::default()
        };
        let err = tree_request(&args, &ConfigFile::default()).unwrap_err();
        assert!(err.to_string().contains("encoding"));
    }

    #[test]
    fn test_filter_settings_defaults_and_overrides() {
        let config = ConfigFile {
            include_scope: Some("compile".to_string()),
            exclude_types: Some(vec!["pom".to_string(), "war".to_string()]),
            reactor_projects: Some(vec!["g:a:1.0".to_string()]),
            ..ConfigFile::default()
        };
        let args = FilterArgs {
            include_scope: Some("runtime".to_string()),
            ..FilterArgs::default()
        };

        let settings = filter_settings(&args, &config).unwrap();
        assert_eq!(settings.include_scope, "runtime");
        assert_eq!(settings.exclude_types, "pom,war");
        assert!(settings.exclude_reactor);
        assert_eq!(settings.reactor_projects.len(), 1);
        assert_eq!(settings.reactor_projects[0].key(), "g:a:1.0");
    }

    #[test]
    fn test_filter_settings_rejects_bad_reactor_coordinate() {
        let args = FilterArgs {
            reactor_projects: vec!["g:a".to_string()],
            ..FilterArgs::default()
        };
        let err = filter_settings(&args, &ConfigFile::default()).unwrap_err();
        let mdep = err.downcast_ref::<MdepError>().unwrap();
        assert!(matches!(mdep, MdepError::InvalidCoordinate { .. }));
    }

    #[test]
    fn test_resolve_request_overwrite_if_newer_defaults_true() {
        let request = resolve_request(&ResolveArgs::default(), &ConfigFile::default()).unwrap();
        assert!(request.overwrite_if_newer);

        let config = ConfigFile {
            overwrite_if_newer: Some(false),
            ..ConfigFile::default()
        };
        let request = resolve_request(&ResolveArgs::default(), &config).unwrap();
        assert!(!request.overwrite_if_newer);
    }
}
