use crate::shared::error::MdepError;
use crate::shared::Result;
use std::cmp::Ordering;
use std::fmt;

/// One bound of a [`Restriction`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bound {
    pub version: String,
    pub inclusive: bool,
}

/// A single bracketed interval such as `[1.0,2.0)` or `[1.5]`
///
/// A missing bound is unbounded on that side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restriction {
    pub lower: Option<Bound>,
    pub upper: Option<Bound>,
}

impl Restriction {
    /// Checks `version` against both bounds using `compare`
    pub fn contains<F>(&self, version: &str, compare: &F) -> bool
    where
        F: Fn(&str, &str) -> Ordering,
    {
        let above_lower = self.lower.as_ref().is_none_or(|bound| {
            match compare(version, &bound.version) {
                Ordering::Greater => true,
                Ordering::Equal => bound.inclusive,
                Ordering::Less => false,
            }
        });
        let below_upper = self.upper.as_ref().is_none_or(|bound| {
            match compare(version, &bound.version) {
                Ordering::Less => true,
                Ordering::Equal => bound.inclusive,
                Ordering::Greater => false,
            }
        });
        above_lower && below_upper
    }
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(lower), Some(upper)) = (&self.lower, &self.upper) {
            if lower.inclusive && upper.inclusive && lower.version == upper.version {
                return write!(f, "[{}]", lower.version);
            }
        }
        let open = match &self.lower {
            Some(bound) if bound.inclusive => '[',
            _ => '(',
        };
        let close = match &self.upper {
            Some(bound) if bound.inclusive => ']',
            _ => ')',
        };
        write!(
            f,
            "{}{},{}{}",
            open,
            self.lower.as_ref().map_or("", |b| b.version.as_str()),
            self.upper.as_ref().map_or("", |b| b.version.as_str()),
            close
        )
    }
}

/// Version range in bracket notation
///
/// A range is a union of restrictions, e.g. `(,1.0],[1.2,)`. Ordering of
/// versions is not known here; callers pass the comparison of their
/// version scheme to [`VersionRange::contains`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    restrictions: Vec<Restriction>,
}

impl VersionRange {
    /// Parses bracket notation
    ///
    /// # Errors
    /// Returns [`MdepError::VersionParse`] for unbalanced brackets, empty
    /// restrictions, an exact version with exclusive bounds, or text that is
    /// not enclosed in brackets.
    pub fn parse(spec: &str) -> Result<Self> {
        let mut rest = spec.trim();
        let mut restrictions = Vec::new();

        while !rest.is_empty() {
            if !rest.starts_with(['[', '(']) {
                return Err(parse_error(spec, "expected '[' or '(' to open a restriction"));
            }
            let close = rest
                .find([']', ')'])
                .ok_or_else(|| parse_error(spec, "unbounded restriction"))?;

            restrictions.push(parse_restriction(spec, &rest[..=close])?);

            rest = rest[close + 1..].trim_start();
            if let Some(after_comma) = rest.strip_prefix(',') {
                rest = after_comma.trim_start();
                if rest.is_empty() {
                    return Err(parse_error(spec, "trailing ','"));
                }
            } else if !rest.is_empty() {
                return Err(parse_error(spec, "restrictions must be separated by ','"));
            }
        }

        if restrictions.is_empty() {
            return Err(parse_error(spec, "empty range"));
        }

        Ok(Self { restrictions })
    }

    pub fn restrictions(&self) -> &[Restriction] {
        &self.restrictions
    }

    /// True when any restriction contains `version`
    pub fn contains<F>(&self, version: &str, compare: F) -> bool
    where
        F: Fn(&str, &str) -> Ordering,
    {
        self.restrictions
            .iter()
            .any(|restriction| restriction.contains(version, &compare))
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, restriction) in self.restrictions.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", restriction)?;
        }
        Ok(())
    }
}

/// `text` includes its brackets
fn parse_restriction(spec: &str, text: &str) -> Result<Restriction> {
    let lower_inclusive = text.starts_with('[');
    let upper_inclusive = text.ends_with(']');
    let inner = text[1..text.len() - 1].trim();

    match inner.split_once(',') {
        None => {
            if inner.is_empty() {
                return Err(parse_error(spec, "empty restriction"));
            }
            if !lower_inclusive || !upper_inclusive {
                return Err(parse_error(
                    spec,
                    "a single version must be enclosed in '[' and ']'",
                ));
            }
            let bound = Bound {
                version: inner.to_string(),
                inclusive: true,
            };
            Ok(Restriction {
                lower: Some(bound.clone()),
                upper: Some(bound),
            })
        }
        Some((lower, upper)) => {
            if upper.contains(',') {
                return Err(parse_error(spec, "a restriction holds at most two bounds"));
            }
            let bound = |version: &str, inclusive: bool| {
                let version = version.trim();
                (!version.is_empty()).then(|| Bound {
                    version: version.to_string(),
                    inclusive,
                })
            };
            Ok(Restriction {
                lower: bound(lower, lower_inclusive),
                upper: bound(upper, upper_inclusive),
            })
        }
    }
}

fn parse_error(spec: &str, details: &str) -> anyhow::Error {
    MdepError::VersionParse {
        value: spec.to_string(),
        details: details.to_string(),
    }
    .into()
}
