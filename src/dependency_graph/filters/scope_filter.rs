use super::Filter;
use crate::dependency_graph::domain::{Artifact, Node, Scope};
use crate::shared::error::MdepError;
use crate::shared::Result;
use std::collections::BTreeSet;

/// Include/exclude test on the dependency scope
///
/// The configured scopes are expanded before matching: `compile`, `runtime`
/// and `test` stand for every scope visible at that resolution threshold.
pub struct ScopeFilter<T: ?Sized> {
    includes: BTreeSet<Scope>,
    excludes: BTreeSet<Scope>,
    extractor: fn(&T) -> Option<Scope>,
}

impl<T: ?Sized> ScopeFilter<T> {
    /// Creates a scope filter
    ///
    /// # Arguments
    /// * `include_scope` - Scope to keep, empty for no restriction
    /// * `exclude_scope` - Scope to drop, empty for no restriction
    /// * `extractor` - Reads the scope of a value
    ///
    /// # Errors
    /// Returns a configuration error for an unknown scope keyword or when
    /// `exclude_scope` is `test`, which would exclude every dependency.
    pub fn new(
        include_scope: &str,
        exclude_scope: &str,
        extractor: fn(&T) -> Option<Scope>,
    ) -> Result<Self> {
        if exclude_scope.trim() == Scope::Test.as_str() {
            return Err(MdepError::configuration(
                "excludeScope",
                exclude_scope.trim(),
                "Excluding every artifact inside 'test' resolution scope means excluding everything: \
                 you probably want includeScope='compile', read parameters documentation for detailed explanations",
            )
            .into());
        }

        Ok(Self {
            includes: expand(include_scope, "includeScope")?,
            excludes: expand(exclude_scope, "excludeScope")?,
            extractor,
        })
    }

    pub fn includes(&self) -> &BTreeSet<Scope> {
        &self.includes
    }

    pub fn excludes(&self) -> &BTreeSet<Scope> {
        &self.excludes
    }
}

impl ScopeFilter<Node> {
    pub fn for_nodes(include_scope: &str, exclude_scope: &str) -> Result<Self> {
        Self::new(include_scope, exclude_scope, Node::scope)
    }
}

impl ScopeFilter<Artifact> {
    pub fn for_artifacts(include_scope: &str, exclude_scope: &str) -> Result<Self> {
        Self::new(include_scope, exclude_scope, Artifact::scope)
    }
}

impl<T: ?Sized> Filter<T> for ScopeFilter<T> {
    fn test(&self, value: &T) -> bool {
        let scope = (self.extractor)(value);
        let included = self.includes.is_empty() || scope.is_some_and(|s| self.includes.contains(&s));
        let excluded = scope.is_some_and(|s| self.excludes.contains(&s));
        included && !excluded
    }
}

fn expand(value: &str, field: &str) -> Result<BTreeSet<Scope>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(BTreeSet::new());
    }
    let scope: Scope = value.parse().map_err(|_| {
        MdepError::configuration(
            field,
            value,
            "Invalid scope; expected one of compile, provided, runtime, system, test",
        )
    })?;
    Ok(scope.mediated_scopes())
}
