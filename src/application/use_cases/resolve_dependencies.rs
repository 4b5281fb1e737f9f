use crate::application::dto::{FilterSettings, ResolveRequest};
use crate::dependency_graph::domain::{Artifact, Coordinate, DependencyStatusSets, Node};
use crate::dependency_graph::filters::{
    DirectDependencyFilter, ExcludeReactorProjectsFilter, Filter, FilterChain,
    IncludeExcludeFilter, ScopeFilter,
};
use crate::dependency_graph::services::DestFileFilter;
use crate::ports::outbound::{
    ArtifactResolver, CollectRequest, DependencyCollector, ProgressReporter,
};
use crate::shared::error::MdepError;
use crate::shared::Result;
use std::collections::HashSet;
use tracing::debug;

/// ResolveDependenciesUseCase - Computes the resolved/unresolved/skipped dependency sets
///
/// The collected tree is filtered node by node (transitivity, scope, reactor),
/// then artifact by artifact (type, classifier, group id, artifact id). The
/// surviving artifacts are resolved one at a time; failures either abort the
/// run or are recorded as unresolved depending on the request.
///
/// # Type Parameters
/// * `C` - DependencyCollector implementation
/// * `R` - ArtifactResolver implementation
/// * `PR` - ProgressReporter implementation
pub struct ResolveDependenciesUseCase<C, R, PR> {
    collector: C,
    resolver: R,
    progress_reporter: PR,
}

impl<C, R, PR> ResolveDependenciesUseCase<C, R, PR>
where
    C: DependencyCollector,
    R: ArtifactResolver,
    PR: ProgressReporter,
{
    pub fn new(collector: C, resolver: R, progress_reporter: PR) -> Self {
        Self {
            collector,
            resolver,
            progress_reporter,
        }
    }

    /// Executes the dependency resolution use case
    ///
    /// # Arguments
    /// * `request` - Filter settings, resolution policy and destination options
    ///
    /// # Returns
    /// The three dependency sets, each in first-seen order
    ///
    /// # Errors
    /// Returns a configuration error before anything is collected when the
    /// scope settings are invalid, and a resolution error on the first
    /// failure when `stop_on_failure` is set.
    pub fn execute(&self, request: &ResolveRequest) -> Result<DependencyStatusSets> {
        // Step 1: Validate the scope settings before touching the graph
        let scope_filter = ScopeFilter::for_nodes(
            &request.filters.include_scope,
            &request.filters.exclude_scope,
        )?;

        // Step 2: Collect the dependency graph
        let root = self.collector.collect(&CollectRequest::default())?;

        // Step 3: Select dependencies through the node and artifact filters
        let node_filter = Self::node_filter(&root, &request.filters, scope_filter);
        let artifact_filter = Self::artifact_filter(&request.filters);
        let artifacts: Vec<Artifact> = select_artifacts(&root, &node_filter)
            .into_iter()
            .filter(|artifact| artifact_filter.test(artifact))
            .collect();
        self.progress_reporter
            .report(&format!("✅ Selected {} dependency(ies)", artifacts.len()));

        // Step 4: Resolve, translating classifiers when requested
        let mut status = self.resolve_all(&artifacts, request)?;

        // Step 5: Skip artifacts whose destination is already up to date
        if let Some(output_directory) = &request.output_directory {
            let dest_filter = DestFileFilter {
                naming: request.naming,
                output_directory: output_directory.clone(),
                overwrite_releases: request.overwrite_releases,
                overwrite_snapshots: request.overwrite_snapshots,
                overwrite_if_newer: request.overwrite_if_newer,
            };
            status.skip_resolved_unless(|artifact| dest_filter.should_copy_artifact(artifact))?;
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Resolved {}, skipped {}, unresolved {}",
            status.resolved().len(),
            status.skipped().len(),
            status.unresolved().len()
        ));

        Ok(status)
    }

    /// Node filters in fixed order: transitivity, scope, reactor
    fn node_filter<'a>(
        root: &Node,
        settings: &FilterSettings,
        scope_filter: ScopeFilter<Node>,
    ) -> FilterChain<'a, Node> {
        let mut chain = FilterChain::new();

        if settings.exclude_transitive {
            chain.push(DirectDependencyFilter::from_root(root));
        }

        chain.push(scope_filter);

        if settings.exclude_reactor && !settings.reactor_projects.is_empty() {
            chain.push(ExcludeReactorProjectsFilter::new(&settings.reactor_projects));
        }

        chain
    }

    /// Artifact filters in fixed order: types, classifiers, group ids, artifact ids
    fn artifact_filter<'a>(settings: &FilterSettings) -> FilterChain<'a, Artifact> {
        FilterChain::new()
            .with(IncludeExcludeFilter::types(
                &settings.include_types,
                &settings.exclude_types,
            ))
            .with(IncludeExcludeFilter::classifiers(
                &settings.include_classifiers,
                &settings.exclude_classifiers,
            ))
            .with(IncludeExcludeFilter::group_ids(
                &settings.include_group_ids,
                &settings.exclude_group_ids,
            ))
            .with(IncludeExcludeFilter::artifact_ids(
                &settings.include_artifact_ids,
                &settings.exclude_artifact_ids,
            ))
    }

    fn resolve_all(
        &self,
        artifacts: &[Artifact],
        request: &ResolveRequest,
    ) -> Result<DependencyStatusSets> {
        if let Some(classifier) = request.classifier() {
            debug!(
                classifier,
                artifact_type = request.artifact_type().unwrap_or_default(),
                "Translating artifacts using classifier"
            );
        }

        let mut status = DependencyStatusSets::new();
        let total = artifacts.len();

        for (index, artifact) in artifacts.iter().enumerate() {
            let coordinate = translate(artifact, request);
            self.progress_reporter
                .report_progress(index + 1, total, Some(&coordinate.to_string()));

            match self.resolver.resolve(&coordinate) {
                Ok(resolved) => status.add_resolved(resolved.with_scope(artifact.scope())),
                Err(error) => {
                    debug!(error = %error, "error resolving: {}", coordinate);
                    if request.stop_on_failure {
                        return Err(into_resolution_error(&coordinate, error));
                    }
                    self.progress_reporter
                        .report_error(&format!("Could not resolve {}", coordinate));
                    status.add_unresolved(artifact.clone());
                }
            }
        }

        Ok(status)
    }
}

/// Artifacts of every node except the root project, de-duplicated in first-seen order
fn select_artifacts(root: &Node, node_filter: &dyn Filter<Node>) -> Vec<Artifact> {
    let mut seen = HashSet::new();
    root.iter()
        .filter(|node| !node.artifact().same_identity(root.artifact()))
        .filter(|node| node_filter.test(node))
        .map(Node::scoped_artifact)
        .filter(|artifact| seen.insert(artifact.coordinate()))
        .collect()
}

/// Coordinate to resolve for `artifact`, swapping in the requested classifier and type
fn translate(artifact: &Artifact, request: &ResolveRequest) -> Coordinate {
    match request.classifier() {
        Some(classifier) => {
            let artifact_type = request
                .artifact_type()
                .unwrap_or(artifact.artifact_type());
            artifact
                .clone()
                .with_type(artifact_type)
                .with_classifier(classifier)
                .coordinate()
        }
        None => artifact.coordinate(),
    }
}

fn into_resolution_error(coordinate: &Coordinate, error: anyhow::Error) -> anyhow::Error {
    match error.downcast::<MdepError>() {
        Ok(resolution @ MdepError::Resolution { .. }) => resolution.into(),
        Ok(other) => MdepError::Resolution {
            coordinate: coordinate.to_string(),
            details: other.to_string(),
        }
        .into(),
        Err(error) => MdepError::Resolution {
            coordinate: coordinate.to_string(),
            details: error.to_string(),
        }
        .into(),
    }
}
