use super::Filter;
use crate::dependency_graph::domain::Artifact;

/// Splits a comma separated list, trimming entries and dropping empty ones
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Include/exclude test on one string field of `T`
///
/// A value passes when it matches at least one include (or the include list
/// is empty) and matches none of the excludes. Matching uses equality unless
/// another comparator is installed.
pub struct IncludeExcludeFilter<T: ?Sized> {
    includes: Vec<String>,
    excludes: Vec<String>,
    extractor: fn(&T) -> &str,
    comparator: fn(&str, &str) -> bool,
}

impl<T: ?Sized> IncludeExcludeFilter<T> {
    /// Creates a filter from two comma separated lists
    ///
    /// # Arguments
    /// * `includes` - Comma separated values to keep; empty keeps everything
    /// * `excludes` - Comma separated values to drop
    /// * `extractor` - Selects the compared field
    pub fn new(includes: &str, excludes: &str, extractor: fn(&T) -> &str) -> Self {
        Self {
            includes: split_list(includes),
            excludes: split_list(excludes),
            extractor,
            comparator: |value, pattern| value == pattern,
        }
    }

    /// Replaces the equality comparator; called as `comparator(value, pattern)`
    pub fn with_comparator(mut self, comparator: fn(&str, &str) -> bool) -> Self {
        self.comparator = comparator;
        self
    }

    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    pub fn excludes(&self) -> &[String] {
        &self.excludes
    }

    /// True when neither list has entries
    pub fn is_pass_through(&self) -> bool {
        self.includes.is_empty() && self.excludes.is_empty()
    }
}

impl IncludeExcludeFilter<Artifact> {
    pub fn types(includes: &str, excludes: &str) -> Self {
        Self::new(includes, excludes, Artifact::artifact_type)
    }

    pub fn classifiers(includes: &str, excludes: &str) -> Self {
        Self::new(includes, excludes, Artifact::classifier)
    }

    /// Group ids match by prefix, so `org.apache` also covers `org.apache.maven`
    pub fn group_ids(includes: &str, excludes: &str) -> Self {
        Self::new(includes, excludes, Artifact::group_id)
            .with_comparator(|value, pattern| value.starts_with(pattern))
    }

    pub fn artifact_ids(includes: &str, excludes: &str) -> Self {
        Self::new(includes, excludes, Artifact::artifact_id)
    }
}

impl<T: ?Sized> Filter<T> for IncludeExcludeFilter<T> {
    fn test(&self, value: &T) -> bool {
        let field = (self.extractor)(value);
        let included = self.includes.is_empty()
            || self
                .includes
                .iter()
                .any(|pattern| (self.comparator)(field, pattern));
        included
            && !self
                .excludes
                .iter()
                .any(|pattern| (self.comparator)(field, pattern))
    }
}
