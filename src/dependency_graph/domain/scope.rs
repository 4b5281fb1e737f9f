use crate::shared::error::MdepError;
use crate::shared::Result;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Dependency scope
///
/// The vocabulary is closed: `compile`, `provided`, `runtime`, `system`, `test`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scope {
    Compile,
    Provided,
    Runtime,
    System,
    Test,
}

impl Scope {
    pub const ALL: [Scope; 5] = [
        Scope::Compile,
        Scope::Provided,
        Scope::Runtime,
        Scope::System,
        Scope::Test,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Compile => "compile",
            Scope::Provided => "provided",
            Scope::Runtime => "runtime",
            Scope::System => "system",
            Scope::Test => "test",
        }
    }

    /// Expands a selected scope into the set of scopes it stands for
    ///
    /// `compile`, `runtime` and `test` are resolution thresholds and widen to
    /// every scope visible at that threshold; `provided` and `system` only
    /// select themselves.
    pub fn mediated_scopes(&self) -> BTreeSet<Scope> {
        let scopes: &[Scope] = match self {
            Scope::Compile => &[Scope::Compile, Scope::Provided, Scope::System],
            Scope::Runtime => &[Scope::Compile, Scope::Runtime],
            Scope::Test => &[
                Scope::Compile,
                Scope::Provided,
                Scope::Runtime,
                Scope::System,
                Scope::Test,
            ],
            Scope::Provided => &[Scope::Provided],
            Scope::System => &[Scope::System],
        };
        scopes.iter().copied().collect()
    }
}

impl FromStr for Scope {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "compile" => Ok(Scope::Compile),
            "provided" => Ok(Scope::Provided),
            "runtime" => Ok(Scope::Runtime),
            "system" => Ok(Scope::System),
            "test" => Ok(Scope::Test),
            other => Err(MdepError::configuration(
                "scope",
                other,
                "Invalid scope; expected one of compile, provided, runtime, system, test",
            )
            .into()),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
