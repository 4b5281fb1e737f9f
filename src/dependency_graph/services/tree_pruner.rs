use crate::dependency_graph::domain::{Node, ParentIndex};
use crate::dependency_graph::filters::Filter;
use std::borrow::Cow;
use std::collections::HashSet;
use tracing::debug;

/// TreePruner - Reduces a tree to the matching nodes and their ancestors
pub struct TreePruner;

impl TreePruner {
    /// Prunes `root` with a node filter
    ///
    /// # Arguments
    /// * `root` - Tree to prune; never modified
    /// * `filter` - Node predicate, `None` to skip pruning
    ///
    /// # Returns
    /// The original tree when `filter` is `None`, otherwise a new tree holding
    /// every matching node plus all of its ancestors in their original order.
    /// The root is always present, even when nothing matches.
    pub fn prune<'a>(root: &'a Node, filter: Option<&dyn Filter<Node>>) -> Cow<'a, Node> {
        let Some(filter) = filter else {
            return Cow::Borrowed(root);
        };

        let index = ParentIndex::build(root);
        let matched: Vec<&Node> = root.iter().filter(|node| filter.test(node)).collect();

        let mut keep: HashSet<*const Node> = HashSet::new();
        for &node in &matched {
            for ancestor in index.ancestors_or_self(node) {
                // an already kept node has its whole chain kept
                if !keep.insert(ancestor as *const Node) {
                    break;
                }
            }
        }

        debug!(
            matched = matched.len(),
            kept = keep.len(),
            total = root.len(),
            "Pruned dependency tree"
        );

        Cow::Owned(root.filter(&|node: &Node| keep.contains(&(node as *const Node))))
    }
}
