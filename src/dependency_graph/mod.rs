//! Dependency graph core: the node model, predicate filters and the
//! pruning and naming services built on top of them.

pub mod domain;
pub mod filters;
pub mod services;
