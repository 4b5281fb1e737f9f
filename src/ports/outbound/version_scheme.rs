use crate::dependency_graph::domain::VersionRange;
use crate::shared::Result;
use std::cmp::Ordering;

/// VersionScheme port for ordering versions and evaluating version ranges
///
/// Strict-pattern filters consult this port for range segments such as
/// `[1.0,2.0)`. Implementations only have to define the ordering.
pub trait VersionScheme {
    /// Total order between two version strings
    fn compare_versions(&self, a: &str, b: &str) -> Ordering;

    /// Parses a range specification
    ///
    /// # Errors
    /// Returns `MdepError::VersionParse` for malformed range syntax
    fn parse_version_range(&self, spec: &str) -> Result<VersionRange> {
        VersionRange::parse(spec)
    }

    /// True when `version` lies inside `range` under this scheme's ordering
    fn contains(&self, range: &VersionRange, version: &str) -> bool {
        range.contains(version, |a, b| self.compare_versions(a, b))
    }
}
