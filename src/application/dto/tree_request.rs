use super::OutputType;
use crate::dependency_graph::domain::TokenStyle;

/// TreeRequest - Internal request DTO for the tree rendering use case
#[derive(Debug, Clone, Default)]
pub struct TreeRequest {
    pub output_type: OutputType,
    /// Indentation style, only used by the text output type
    pub tokens: TokenStyle,
    /// Comma-separated strict patterns a node must match to be shown
    pub includes: String,
    /// Comma-separated strict patterns hiding matching nodes
    pub excludes: String,
    /// Keep nodes omitted by version mediation
    pub verbose: bool,
}

impl TreeRequest {
    pub fn new(output_type: OutputType, tokens: TokenStyle) -> Self {
        Self {
            output_type,
            tokens,
            ..Self::default()
        }
    }

    pub fn with_includes(mut self, includes: impl Into<String>) -> Self {
        self.includes = includes.into();
        self
    }

    pub fn with_excludes(mut self, excludes: impl Into<String>) -> Self {
        self.excludes = excludes.into();
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
