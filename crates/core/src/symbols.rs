use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Symbol names and glyphs of the standard table, in iteration order.
const STANDARD_SYMBOLS: [(&str, &str); 9] = [
    ("forall", "∀"),
    ("exists", "∃"),
    ("and", "∧"),
    ("or", "∨"),
    ("not", "¬"),
    ("implies", "→"),
    ("equivalent", "↔"),
    ("therefore", "∴"),
    ("because", "∵"),
];

/// A single entry of a [`SymbolTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Identifier of the symbol (e.g. `"implies"`).
    pub name: String,
    /// The logical glyph displayed for it (e.g. `"→"`).
    pub glyph: String,
}

/// Ordered mapping from symbol name to logical glyph.
///
/// The table is immutable once built. Iteration order is the insertion
/// order, and it is the order in which glyphs are reported by
/// [`SymbolTable::glyphs_in`]. On the wire the table is a JSON object whose
/// keys appear in that same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    entries: Vec<Symbol>,
}

impl SymbolTable {
    /// Build a table from `(name, glyph)` pairs, keeping their order.
    ///
    /// A name that appears twice keeps its first position and its last glyph.
    pub fn from_pairs<I, N, G>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, G)>,
        N: Into<String>,
        G: Into<String>,
    {
        let mut entries: Vec<Symbol> = Vec::new();
        for (name, glyph) in pairs {
            let name = name.into();
            let glyph = glyph.into();
            match entries.iter_mut().find(|s| s.name == name) {
                Some(existing) => existing.glyph = glyph,
                None => entries.push(Symbol { name, glyph }),
            }
        }
        Self { entries }
    }

    /// The first-order logic table used by the translator.
    pub fn standard() -> Self {
        Self::from_pairs(STANDARD_SYMBOLS)
    }

    /// Look up the glyph for a symbol name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.glyph.as_str())
    }

    /// Iterate over the entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.entries.iter()
    }

    /// All glyphs in table order.
    pub fn glyphs(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.glyph.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Glyphs of this table that occur as literal substrings of `text`.
    ///
    /// The walk is over table entries, not over occurrences in `text`: each
    /// entry contributes at most once and the result follows table order.
    pub fn glyphs_in(&self, text: &str) -> Vec<String> {
        self.glyphs()
            .filter(|glyph| text.contains(glyph))
            .map(str::to_owned)
            .collect()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for SymbolTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for symbol in &self.entries {
            map.serialize_entry(&symbol.name, &symbol.glyph)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SymbolTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = SymbolTable;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of symbol names to glyphs")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut pairs: Vec<(String, String)> =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, glyph)) = access.next_entry::<String, String>()? {
                    pairs.push((name, glyph));
                }
                Ok(SymbolTable::from_pairs(pairs))
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}
