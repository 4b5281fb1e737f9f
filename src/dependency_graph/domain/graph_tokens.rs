use crate::shared::error::MdepError;
use crate::shared::Result;
use std::fmt;
use std::str::FromStr;

/// Indentation alphabet used by the text tree renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphTokens {
    pub node_indent: &'static str,
    pub last_node_indent: &'static str,
    pub fill_indent: &'static str,
    pub last_fill_indent: &'static str,
}

impl GraphTokens {
    pub const WHITESPACE: GraphTokens = GraphTokens {
        node_indent: "   ",
        last_node_indent: "   ",
        fill_indent: "   ",
        last_fill_indent: "   ",
    };

    pub const STANDARD: GraphTokens = GraphTokens {
        node_indent: "+- ",
        last_node_indent: "\\- ",
        fill_indent: "|  ",
        last_fill_indent: "   ",
    };

    pub const EXTENDED: GraphTokens = GraphTokens {
        node_indent: "\u{251c}\u{2500} ",
        last_node_indent: "\u{2514}\u{2500} ",
        fill_indent: "\u{2502}  ",
        last_fill_indent: "   ",
    };

    /// Token placed right before a node's label
    pub fn node_indent(&self, last: bool) -> &'static str {
        if last {
            self.last_node_indent
        } else {
            self.node_indent
        }
    }

    /// Token drawn for an ancestor level
    pub fn fill_indent(&self, last: bool) -> &'static str {
        if last {
            self.last_fill_indent
        } else {
            self.fill_indent
        }
    }
}

/// Named token preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenStyle {
    Whitespace,
    #[default]
    Standard,
    Extended,
}

impl TokenStyle {
    pub fn tokens(&self) -> GraphTokens {
        match self {
            TokenStyle::Whitespace => GraphTokens::WHITESPACE,
            TokenStyle::Standard => GraphTokens::STANDARD,
            TokenStyle::Extended => GraphTokens::EXTENDED,
        }
    }
}

impl FromStr for TokenStyle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "whitespace" => Ok(TokenStyle::Whitespace),
            "standard" => Ok(TokenStyle::Standard),
            "extended" => Ok(TokenStyle::Extended),
            _ => Err(MdepError::configuration(
                "tokens",
                s,
                "Invalid token style; expected one of whitespace, standard, extended",
            )
            .into()),
        }
    }
}

impl fmt::Display for TokenStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenStyle::Whitespace => write!(f, "whitespace"),
            TokenStyle::Standard => write!(f, "standard"),
            TokenStyle::Extended => write!(f, "extended"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_style_from_str() {
        assert_eq!("whitespace".parse::<TokenStyle>().unwrap(), TokenStyle::Whitespace);
        assert_eq!("STANDARD".parse::<TokenStyle>().unwrap(), TokenStyle::Standard);
        assert_eq!("Extended".parse::<TokenStyle>().unwrap(), TokenStyle::Extended);
        assert!("fancy".parse::<TokenStyle>().is_err());
    }

    #[test]
    fn test_default_style_is_standard() {
        assert_eq!(TokenStyle::default().tokens(), GraphTokens::STANDARD);
    }

    #[test]
    fn test_token_selection() {
        let tokens = GraphTokens::STANDARD;
        assert_eq!(tokens.node_indent(false), "+- ");
        assert_eq!(tokens.node_indent(true), "\\- ");
        assert_eq!(tokens.fill_indent(false), "|  ");
        assert_eq!(tokens.fill_indent(true), "   ");
        assert_eq!(GraphTokens::EXTENDED.node_indent(true), "└─ ");
    }
}
