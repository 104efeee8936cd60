//! Property-name matching: loose equality and a name → [`CodepointSet`]
//! resolver for composed properties like `"L"` or `"graphical"`.

use crate::codepointset::{CodepointSet, CODESPACE_END};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Unknown(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Unknown(name) => write!(f, "unknown property name: {name}"),
        }
    }
}

impl std::error::Error for Error {}

/// Strip whitespace, `-`, and `_`, and lowercase ASCII letters, so
/// `"Old_Italic"`, `"old italic"`, and `"OLD-ITALIC"` all compare equal.
#[must_use]
pub fn normalize_name(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[must_use]
pub fn loose_eq(a: &str, b: &str) -> bool {
    normalize_name(a) == normalize_name(b)
}

/// The named property sets a resolver knows how to hand back, keyed
/// loosely (case/space/`-`/`_` insensitive).
#[derive(Default)]
pub struct NameResolver {
    entries: Vec<(String, CodepointSet)>,
}

impl NameResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a base property set under `name`.
    pub fn insert(&mut self, name: &str, set: CodepointSet) {
        self.entries.push((normalize_name(name), set));
    }

    fn lookup(&self, normalized: &str) -> Option<&CodepointSet> {
        self.entries.iter().find(|(n, _)| n == normalized).map(|(_, s)| s)
    }

    /// Resolve a requested name to a set: a registered base property, a
    /// built-in (`"any"`, `"ascii"`), or a fixed composition over
    /// registered base properties (`"L"`, `"graphical"`).
    pub fn resolve(&self, name: &str) -> Result<CodepointSet, Error> {
        let normalized = normalize_name(name);
        match normalized.as_str() {
            "any" => return Ok(CodepointSet::from_intervals(&[(0, CODESPACE_END)])),
            "ascii" => return Ok(CodepointSet::from_intervals(&[(0, 0x80)])),
            _ => {}
        }
        if let Some(set) = self.lookup(&normalized) {
            return Ok(set.clone());
        }
        if let Some(components) = composed_property(&normalized) {
            let mut result = CodepointSet::new();
            for component in components {
                let part = self
                    .lookup(&normalize_name(component))
                    .ok_or_else(|| Error::Unknown(name.to_string()))?;
                result = result.union(part);
            }
            return Ok(result);
        }
        Err(Error::Unknown(name.to_string()))
    }
}

/// Fixed compositions of base General_Category-style properties, per the
/// two named examples: `"L"` (all letter subcategories) and `"graphical"`
/// (alphabetic, marks, numbers, punctuation, space separator, symbols).
fn composed_property(normalized: &str) -> Option<&'static [&'static str]> {
    match normalized {
        "l" => Some(&["lu", "ll", "lt", "lo", "lm"]),
        "graphical" => Some(&["alphabetic", "mark", "number", "punctuation", "zs", "symbol"]),
        _ => None,
    }
}
