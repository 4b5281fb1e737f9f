use super::{Artifact, Scope};

/// Callbacks driven by [`Node::accept`]
///
/// `enter` runs before a node's children, `leave` after all of them.
/// Returning `false` from `enter` skips the node's children; returning
/// `false` from `leave` skips the node's remaining siblings.
pub trait NodeVisitor<'a> {
    fn enter(&mut self, node: &'a Node) -> bool;

    fn leave(&mut self, node: &'a Node) -> bool;
}

/// One vertex of a resolved dependency tree
///
/// Children are owned and ordered. A node is assembled once through the
/// `with_*` builders and only read afterwards; derived trees are new values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node {
    artifact: Artifact,
    scope: Option<Scope>,
    optional: bool,
    children: Vec<Node>,
}

impl Node {
    pub fn new(artifact: Artifact) -> Self {
        Self {
            artifact,
            scope: None,
            optional: false,
            children: Vec::new(),
        }
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn artifact(&self) -> &Artifact {
        &self.artifact
    }

    /// Relationship scope; `None` for the root project
    pub fn scope(&self) -> Option<Scope> {
        self.scope
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// The node's artifact with the node's scope attached
    pub fn scoped_artifact(&self) -> Artifact {
        self.artifact.clone().with_scope(self.scope)
    }

    /// `groupId:artifactId:type[:classifier]:version[:scope][ (optional)]`
    pub fn as_string(&self) -> String {
        let mut out = self.artifact.to_string();
        if let Some(scope) = self.scope {
            out.push(':');
            out.push_str(scope.as_str());
        }
        if self.optional {
            out.push_str(" (optional)");
        }
        out
    }

    /// Pre-order iterator over this node and all of its descendants
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }

    /// Number of nodes in this tree, including the root
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// A tree always holds at least its root
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Walks the tree depth-first, calling `enter`/`leave` on the visitor
    ///
    /// Uses an explicit frame stack so very deep graphs do not grow the call stack.
    /// Returns the result of the root's `leave`.
    pub fn accept<'a>(&'a self, visitor: &mut dyn NodeVisitor<'a>) -> bool {
        struct Frame<'a> {
            node: &'a Node,
            next: usize,
        }

        if !visitor.enter(self) {
            return visitor.leave(self);
        }

        let mut stack = vec![Frame { node: self, next: 0 }];

        while let Some(frame) = stack.last_mut() {
            let parent = frame.node;
            if let Some(child) = parent.children.get(frame.next) {
                frame.next += 1;
                if visitor.enter(child) {
                    stack.push(Frame { node: child, next: 0 });
                } else if !visitor.leave(child) {
                    frame.next = parent.children.len();
                }
                continue;
            }

            stack.pop();
            let proceed = visitor.leave(parent);
            match stack.last_mut() {
                Some(grand_parent) if !proceed => {
                    grand_parent.next = grand_parent.node.children.len();
                }
                Some(_) => {}
                None => return proceed,
            }
        }

        true
    }

    /// Rebuilds the tree keeping only nodes accepted by `keep`
    ///
    /// The root is always kept. A rejected node drops its whole subtree;
    /// retained children keep their original order.
    pub fn filter<F>(&self, keep: &F) -> Node
    where
        F: Fn(&Node) -> bool,
    {
        struct Frame<'a> {
            source: &'a Node,
            next: usize,
            built: Node,
        }

        let mut stack = vec![Frame {
            source: self,
            next: 0,
            built: self.shallow_copy(),
        }];

        while let Some(frame) = stack.last_mut() {
            let source = frame.source;
            if let Some(child) = source.children.get(frame.next) {
                frame.next += 1;
                if keep(child) {
                    stack.push(Frame {
                        source: child,
                        next: 0,
                        built: child.shallow_copy(),
                    });
                }
                continue;
            }

            let Some(done) = stack.pop() else { break };
            match stack.last_mut() {
                Some(parent) => parent.built.children.push(done.built),
                None => return done.built,
            }
        }

        self.shallow_copy()
    }

    fn shallow_copy(&self) -> Node {
        Node {
            artifact: self.artifact.clone(),
            scope: self.scope,
            optional: self.optional,
            children: Vec::new(),
        }
    }
}

/// Lazy pre-order traversal returned by [`Node::iter`]
pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(artifact_id: &str) -> Node {
        Node::new(Artifact::new("org.example", artifact_id, "1.0")).with_scope(Scope::Compile)
    }

    /// a -> (b -> c), d
    fn sample_tree() -> Node {
        Node::new(Artifact::new("org.example", "a", "1.0"))
            .with_child(node("b").with_child(node("c")))
            .with_child(node("d"))
    }

    struct Recorder {
        events: Vec<String>,
        stop_entering: Option<&'static str>,
        stop_leaving: Option<&'static str>,
    }

    impl Recorder {
        fn new() -> Self {
            Self {
                events: Vec::new(),
                stop_entering: None,
                stop_leaving: None,
            }
        }
    }

    impl<'a> NodeVisitor<'a> for Recorder {
        fn enter(&mut self, node: &'a Node) -> bool {
            let id = node.artifact().artifact_id();
            self.events.push(format!("+{}", id));
            self.stop_entering != Some(id)
        }

        fn leave(&mut self, node: &'a Node) -> bool {
            let id = node.artifact().artifact_id();
            self.events.push(format!("-{}", id));
            self.stop_leaving != Some(id)
        }
    }

    #[test]
    fn test_iter_is_pre_order() {
        let tree = sample_tree();
        let ids: Vec<&str> = tree.iter().map(|n| n.artifact().artifact_id()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_accept_enter_leave_order() {
        let tree = sample_tree();
        let mut recorder = Recorder::new();
        assert!(tree.accept(&mut recorder));
        assert_eq!(
            recorder.events,
            vec!["+a", "+b", "+c", "-c", "-b", "+d", "-d", "-a"]
        );
    }

    #[test]
    fn test_accept_skips_children_when_enter_false() {
        let tree = sample_tree();
        let mut recorder = Recorder::new();
        recorder.stop_entering = Some("b");
        tree.accept(&mut recorder);
        assert_eq!(recorder.events, vec!["+a", "+b", "-b", "+d", "-d", "-a"]);
    }

    #[test]
    fn test_accept_skips_siblings_when_leave_false() {
        let tree = sample_tree();
        let mut recorder = Recorder::new();
        recorder.stop_leaving = Some("b");
        assert!(tree.accept(&mut recorder));
        assert_eq!(recorder.events, vec!["+a", "+b", "+c", "-c", "-b", "-a"]);
    }

    #[test]
    fn test_accept_handles_deep_chain() {
        let mut tree = node("leaf");
        for i in 0..2_000 {
            tree = node(&format!("n{}", i)).with_child(tree);
        }

        struct Counter(usize);
        impl<'a> NodeVisitor<'a> for Counter {
            fn enter(&mut self, _node: &'a Node) -> bool {
                self.0 += 1;
                true
            }
            fn leave(&mut self, _node: &'a Node) -> bool {
                true
            }
        }

        let mut counter = Counter(0);
        tree.accept(&mut counter);
        assert_eq!(counter.0, 2_001);
    }

    #[test]
    fn test_filter_handles_deep_chain() {
        let mut tree = node("leaf");
        for i in 0..2_000 {
            tree = node(&format!("n{}", i)).with_child(tree);
        }

        let filtered = tree.filter(&|n: &Node| n.artifact().artifact_id() != "n10");
        assert_eq!(filtered.len(), 1_989);
        assert_eq!(filtered.iter().last().unwrap().artifact().artifact_id(), "n11");

        let kept = tree.filter(&|_: &Node| true);
        assert_eq!(kept.len(), 2_001);
    }

    #[test]
    fn test_as_string_with_scope_and_optional() {
        let n = Node::new(Artifact::new("org.example", "lib", "2.0").with_classifier("tests"))
            .with_scope(Scope::Test)
            .with_optional(true);
        assert_eq!(n.as_string(), "org.example:lib:jar:tests:2.0:test (optional)");
        assert_eq!(
            Node::new(Artifact::new("org.example", "root", "1.0")).as_string(),
            "org.example:root:jar:1.0"
        );
    }

    #[test]
    fn test_filter_keeps_root_and_order() {
        let tree = sample_tree();
        let filtered = tree.filter(&|n: &Node| n.artifact().artifact_id() != "b");
        let ids: Vec<&str> = filtered.iter().map(|n| n.artifact().artifact_id()).collect();
        assert_eq!(ids, vec!["a", "d"]);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_scoped_artifact() {
        let tree = sample_tree();
        assert_eq!(tree.children()[0].scoped_artifact().scope(), Some(Scope::Compile));
        assert_eq!(tree.scoped_artifact().scope(), None);
    }
}
