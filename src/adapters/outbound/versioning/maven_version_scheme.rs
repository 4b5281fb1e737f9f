use crate::ports::outbound::VersionScheme;
use std::cmp::Ordering;

/// MavenVersionScheme adapter ordering Maven-style version strings
///
/// Versions are split on `.`, `-` and every switch between digits and
/// letters. Numeric items compare numerically and sort above qualifiers.
/// Known qualifiers rank `alpha < beta < milestone < rc < snapshot < release < sp`;
/// a missing item counts as `0` or as the release, so `1.0` == `1.0.0`
/// and `1.0-SNAPSHOT` < `1.0`. Unknown qualifiers sort after `sp`,
/// lexicographically among themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct MavenVersionScheme;

impl MavenVersionScheme {
    pub fn new() -> Self {
        Self
    }
}

impl VersionScheme for MavenVersionScheme {
    fn compare_versions(&self, a: &str, b: &str) -> Ordering {
        let a_items = split_version(a);
        let b_items = split_version(b);

        let max_len = a_items.len().max(b_items.len());
        for i in 0..max_len {
            let ord = compare_item(a_items.get(i), b_items.get(i));
            if ord != Ordering::Equal {
                return ord;
            }
        }

        Ordering::Equal
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Item {
    Number(u64),
    Qualifier(String),
}

/// Rank of the release itself; every missing item compares against it
const RELEASE_RANK: u8 = 5;

const UNKNOWN_RANK: u8 = 7;

fn qualifier_rank(qualifier: &str) -> u8 {
    match qualifier {
        "alpha" | "a" => 0,
        "beta" | "b" => 1,
        "milestone" | "m" => 2,
        "rc" | "cr" => 3,
        "snapshot" => 4,
        "" | "ga" | "final" | "release" => RELEASE_RANK,
        "sp" => 6,
        _ => UNKNOWN_RANK,
    }
}

fn split_version(v: &str) -> Vec<Item> {
    let mut items = Vec::new();
    for part in v.trim().split(['.', '-']).filter(|s| !s.is_empty()) {
        let mut start = 0;
        let bytes = part.as_bytes();
        for i in 1..=bytes.len() {
            let boundary =
                i == bytes.len() || bytes[i].is_ascii_digit() != bytes[i - 1].is_ascii_digit();
            if boundary {
                items.push(to_item(&part[start..i]));
                start = i;
            }
        }
    }
    items
}

fn to_item(token: &str) -> Item {
    match token.parse::<u64>() {
        Ok(n) => Item::Number(n),
        Err(_) => Item::Qualifier(token.to_ascii_lowercase()),
    }
}

fn compare_item(a: Option<&Item>, b: Option<&Item>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (Some(item), None) => compare_to_missing(item),
        (None, Some(item)) => compare_to_missing(item).reverse(),
        (Some(Item::Number(x)), Some(Item::Number(y))) => x.cmp(y),
        (Some(Item::Number(_)), Some(Item::Qualifier(_))) => Ordering::Greater,
        (Some(Item::Qualifier(_)), Some(Item::Number(_))) => Ordering::Less,
        (Some(Item::Qualifier(x)), Some(Item::Qualifier(y))) => {
            let (rx, ry) = (qualifier_rank(x), qualifier_rank(y));
            if rx == UNKNOWN_RANK && ry == UNKNOWN_RANK {
                x.cmp(y)
            } else {
                rx.cmp(&ry)
            }
        }
    }
}

fn compare_to_missing(item: &Item) -> Ordering {
    match item {
        Item::Number(n) => n.cmp(&0),
        Item::Qualifier(q) => qualifier_rank(q).cmp(&RELEASE_RANK),
    }
}
