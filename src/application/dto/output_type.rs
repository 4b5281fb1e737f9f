use crate::shared::error::MdepError;
use crate::shared::Result;

/// Output type enumeration for tree rendering
///
/// This enum represents the supported serializations of a dependency tree.
/// It belongs in the application layer as both the CLI and the formatter
/// factory need to understand it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputType {
    /// Indented tree (default)
    #[default]
    Text,
    /// Graphviz digraph
    Dot,
    /// yEd-compatible GraphML document
    Graphml,
    /// Trivial Graph Format
    Tgf,
}

impl std::str::FromStr for OutputType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputType::Text),
            "dot" => Ok(OutputType::Dot),
            "graphml" => Ok(OutputType::Graphml),
            "tgf" => Ok(OutputType::Tgf),
            _ => Err(MdepError::configuration(
                "outputType",
                s,
                "Invalid output type; expected one of text, dot, graphml, tgf",
            )
            .into()),
        }
    }
}

impl std::fmt::Display for OutputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputType::Text => write!(f, "text"),
            OutputType::Dot => write!(f, "dot"),
            OutputType::Graphml => write!(f, "graphml"),
            OutputType::Tgf => write!(f, "tgf"),
        }
    }
}

/// Checks that the requested output encoding is supported
///
/// Rendered output is always written as UTF-8; the usual spellings of that
/// encoding are accepted and anything else is rejected.
///
/// # Errors
/// Returns a configuration error naming `encoding` for other encodings
pub fn validate_encoding(encoding: &str) -> Result<()> {
    match encoding.trim().to_ascii_uppercase().as_str() {
        "UTF-8" | "UTF8" => Ok(()),
        _ => Err(MdepError::configuration(
            "encoding",
            encoding,
            "Only UTF-8 output is supported",
        )
        .into()),
    }
}
