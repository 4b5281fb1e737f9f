//! Predicates over dependency nodes and artifacts
//!
//! Every filter is a pure `test(value) -> bool`. Filters are combined with
//! [`FilterChain`], which applies them in insertion order and stops at the
//! first rejection.

mod direct_dependency;
mod include_exclude;
mod reactor;
mod scope_filter;
mod strict_pattern;

pub use direct_dependency::DirectDependencyFilter;
pub use include_exclude::{split_list, IncludeExcludeFilter};
pub use reactor::ExcludeReactorProjectsFilter;
pub use scope_filter::ScopeFilter;
pub use strict_pattern::StrictPatternArtifactFilter;

/// Boolean predicate over `T`
pub trait Filter<T: ?Sized> {
    fn test(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Filter<T> for F
where
    F: Fn(&T) -> bool,
{
    fn test(&self, value: &T) -> bool {
        self(value)
    }
}

/// Ordered conjunction of filters
pub struct FilterChain<'a, T: ?Sized> {
    filters: Vec<Box<dyn Filter<T> + 'a>>,
}

impl<'a, T: ?Sized> FilterChain<'a, T> {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    pub fn push(&mut self, filter: impl Filter<T> + 'a) {
        self.filters.push(Box::new(filter));
    }

    pub fn with(mut self, filter: impl Filter<T> + 'a) -> Self {
        self.push(filter);
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl<T: ?Sized> Default for FilterChain<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Filter<T> for FilterChain<'_, T> {
    fn test(&self, value: &T) -> bool {
        self.filters.iter().all(|filter| filter.test(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_empty_chain_accepts_everything() {
        let chain: FilterChain<str> = FilterChain::new();
        assert!(chain.is_empty());
        assert!(chain.test("anything"));
    }

    #[test]
    fn test_chain_is_conjunction() {
        let chain: FilterChain<i32> = FilterChain::new()
            .with(|v: &i32| *v > 0)
            .with(|v: &i32| v % 2 == 0);
        assert_eq!(chain.len(), 2);
        assert!(chain.test(&4));
        assert!(!chain.test(&3));
        assert!(!chain.test(&-2));
    }

    #[test]
    fn test_chain_stops_at_first_rejection() {
        let calls = Cell::new(0);
        let chain: FilterChain<i32> = FilterChain::new().with(|_: &i32| false).with(|_: &i32| {
            calls.set(calls.get() + 1);
            true
        });
        assert!(!chain.test(&1));
        assert_eq!(calls.get(), 0);
    }
}
