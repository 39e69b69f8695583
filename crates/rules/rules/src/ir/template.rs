use std::fmt;

use serde::{Deserialize, Serialize};

const PLACEHOLDER_PREFIX: &str = "{predicate";

/// Output text with `{predicateN}` placeholders bound to capture groups.
///
/// `N` is the 1-based index of a capture group in the rule pattern. No other
/// placeholder syntax is recognized; any other braces are literal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Template(String);

impl Template {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The unrendered template text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substitute captures into the template.
    ///
    /// `captures[0]` fills `{predicate1}`, `captures[1]` fills `{predicate2}`
    /// and so on, one index at a time in ascending order. A placeholder whose
    /// index has no capture, or whose group did not participate in the match,
    /// stays in the output verbatim.
    pub fn render(&self, captures: &[Option<&str>]) -> String {
        let mut out = self.0.clone();
        for (i, capture) in captures.iter().enumerate() {
            if let Some(text) = capture {
                out = out.replace(&placeholder(i + 1), text);
            }
        }
        out
    }

    /// Placeholder indices referenced by the template, ascending and unique.
    pub fn placeholders(&self) -> Vec<usize> {
        let mut found = Vec::new();
        let mut rest = self.0.as_str();
        while let Some(start) = rest.find(PLACEHOLDER_PREFIX) {
            rest = &rest[start + PLACEHOLDER_PREFIX.len()..];
            let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
            if digits > 0
                && rest[digits..].starts_with('}')
                && let Ok(n) = rest[..digits].parse::<usize>()
            {
                found.push(n);
            }
        }
        found.sort_unstable();
        found.dedup();
        found
    }

    /// Highest placeholder index referenced, or 0 when there is none.
    pub fn max_placeholder(&self) -> usize {
        self.placeholders().last().copied().unwrap_or(0)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Template {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Template {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

fn placeholder(index: usize) -> String {
    format!("{PLACEHOLDER_PREFIX}{index}}}")
}
