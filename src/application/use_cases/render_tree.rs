use crate::application::dto::{TreeRequest, TreeResponse};
use crate::application::factories::FormatterFactory;
use crate::dependency_graph::domain::Node;
use crate::dependency_graph::filters::{
    split_list, Filter, FilterChain, StrictPatternArtifactFilter,
};
use crate::dependency_graph::services::TreePruner;
use crate::ports::outbound::{
    CollectRequest, DependencyCollector, ProgressReporter, VersionScheme,
};
use crate::shared::Result;
use tracing::debug;

/// RenderTreeUseCase - Collects, prunes and serializes a dependency tree
///
/// # Type Parameters
/// * `C` - DependencyCollector implementation
/// * `V` - VersionScheme implementation used by range patterns
/// * `PR` - ProgressReporter implementation
pub struct RenderTreeUseCase<C, V, PR> {
    collector: C,
    versions: V,
    progress_reporter: PR,
}

impl<C, V, PR> RenderTreeUseCase<C, V, PR>
where
    C: DependencyCollector,
    V: VersionScheme,
    PR: ProgressReporter,
{
    pub fn new(collector: C, versions: V, progress_reporter: PR) -> Self {
        Self {
            collector,
            versions,
            progress_reporter,
        }
    }

    /// Executes the tree rendering use case
    ///
    /// # Arguments
    /// * `request` - Output type, token style and strict include/exclude patterns
    ///
    /// # Returns
    /// TreeResponse holding the serialized tree
    ///
    /// # Errors
    /// Returns an error if the graph cannot be collected or rendered
    pub fn execute(&self, request: &TreeRequest) -> Result<TreeResponse> {
        // Step 1: Collect the dependency graph
        let root = self.collector.collect(&CollectRequest::new(request.verbose))?;
        let collected_nodes = root.len();
        self.progress_reporter
            .report(&format!("✅ Collected {} node(s)", collected_nodes));

        // Step 2: Prune with the pattern filters, keeping ancestors of matches
        let filter = self.node_filter(request);
        let pruned = TreePruner::prune(&root, filter.as_ref().map(|f| f as &dyn Filter<Node>));

        // Step 3: Serialize
        self.progress_reporter
            .report(FormatterFactory::progress_message(request.output_type));
        debug!(output_type = %request.output_type, tokens = %request.tokens, "Rendering dependency tree");
        let formatter = FormatterFactory::create(request.output_type, request.tokens);
        let rendered = formatter.format(&pruned)?;

        Ok(TreeResponse {
            output_type: request.output_type,
            rendered,
            collected_nodes,
            rendered_nodes: pruned.len(),
        })
    }

    /// Builds the conjunction of the include and exclude pattern filters
    ///
    /// Returns `None` when neither list has a pattern, so pruning is skipped.
    fn node_filter(&self, request: &TreeRequest) -> Option<FilterChain<'_, Node>> {
        let mut chain = FilterChain::new();

        let includes = split_list(&request.includes);
        if !includes.is_empty() {
            debug!(patterns = ?includes, "Filtering dependency tree by artifact include patterns");
            chain.push(StrictPatternArtifactFilter::new(includes, true, &self.versions));
        }

        let excludes = split_list(&request.excludes);
        if !excludes.is_empty() {
            debug!(patterns = ?excludes, "Filtering dependency tree by artifact exclude patterns");
            chain.push(StrictPatternArtifactFilter::new(excludes, false, &self.versions));
        }

        (!chain.is_empty()).then_some(chain)
    }
}
