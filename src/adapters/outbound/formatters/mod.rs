/// Formatter adapters for the supported tree output types
mod dot_formatter;
mod graphml_formatter;
mod text_formatter;
mod tgf_formatter;

pub use dot_formatter::DotFormatter;
pub use graphml_formatter::GraphmlFormatter;
pub use text_formatter::TextFormatter;
pub use tgf_formatter::TgfFormatter;

use crate::dependency_graph::domain::Node;
use std::collections::HashMap;

/// Per-pass node ids, keyed by node address
///
/// Ids are assigned from 1 in first-seen order, so two equal subtrees at
/// different positions still get distinct ids.
#[derive(Default)]
struct NodeIds {
    ids: HashMap<*const Node, u64>,
    next: u64,
}

impl NodeIds {
    fn id(&mut self, node: &Node) -> u64 {
        let next = &mut self.next;
        *self.ids.entry(node as *const Node).or_insert_with(|| {
            *next += 1;
            *next
        })
    }
}
