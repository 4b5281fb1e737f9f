use mdep::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock DependencyCollector returning a fixed tree and recording requests
#[derive(Clone)]
pub struct MockDependencyCollector {
    pub root: Node,
    pub should_fail: bool,
    pub requests: Arc<Mutex<Vec<CollectRequest>>>,
}

impl MockDependencyCollector {
    pub fn new(root: Node) -> Self {
        Self {
            root,
            should_fail: false,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new(Node::new(Artifact::new("mock", "root", "0")))
        }
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl DependencyCollector for MockDependencyCollector {
    fn collect(&self, request: &CollectRequest) -> Result<Node> {
        self.requests.lock().unwrap().push(*request);
        if self.should_fail {
            anyhow::bail!("Mock dependency collection failure");
        }
        Ok(self.root.clone())
    }
}
