//! Component-type alias table.
//!
//! Maps raw type tokens (the `Part` field of a record) to canonical
//! tokens, so that `res`, `resistor` and `r_small` all group together.
//! The table is consulted only while building group keys; stored field
//! values are never rewritten.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Alias table mapping raw type tokens to canonical tokens.
///
/// All lookups are case-insensitive; canonical tokens are stored
/// lowercased because group keys compare case-insensitively anyway.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AliasTable {
    alias_to_canonical: HashMap<String, String>,
}

/// One alias family, as serialized to and from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AliasEntry {
    canonical: String,
    aliases: Vec<String>,
}

impl AliasTable {
    /// Create a new empty alias table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an alias table with the built-in component families
    pub fn with_builtins() -> Self {
        let mut table = Self::new();
        table.add_aliases("r", &["res", "resistor", "r_small"]);
        table.add_aliases("c", &["cap", "capacitor", "c_small"]);
        table.add_aliases("l", &["inductor", "l_small"]);
        table.add_aliases("d", &["diode", "d_small"]);
        table.add_aliases("sw", &["switch"]);
        table.add_aliases("zener", &["zenersmall"]);
        table
    }

    /// Add aliases for a canonical token
    pub fn add_aliases(&mut self, canonical: &str, aliases: &[&str]) {
        let canonical_lower = canonical.to_lowercase();
        self.alias_to_canonical
            .insert(canonical_lower.clone(), canonical_lower.clone());
        for alias in aliases {
            self.alias_to_canonical
                .insert(alias.to_lowercase(), canonical_lower.clone());
        }
    }

    /// Resolve a token to its canonical form, lowercased.
    ///
    /// Unknown tokens resolve to themselves.
    pub fn canonical(&self, token: &str) -> String {
        let lower = token.to_lowercase();
        self.alias_to_canonical
            .get(&lower)
            .cloned()
            .unwrap_or(lower)
    }

    /// True when the table holds no mappings
    pub fn is_empty(&self) -> bool {
        self.alias_to_canonical.is_empty()
    }

    /// Load alias families from a JSON array of `{canonical, aliases}` objects
    pub fn load_json(&mut self, json: &str) -> Result<(), serde_json::Error> {
        let entries: Vec<AliasEntry> = serde_json::from_str(json)?;
        for entry in entries {
            let aliases: Vec<&str> = entry.aliases.iter().map(String::as_str).collect();
            self.add_aliases(&entry.canonical, &aliases);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_families() {
        let table = AliasTable::with_builtins();
        assert_eq!(table.canonical("resistor"), "r");
        assert_eq!(table.canonical("RES"), "r");
        assert_eq!(table.canonical("r"), "r");
        assert_eq!(table.canonical("C_Small"), "c");
        assert_eq!(table.canonical("switch"), "sw");
    }

    #[test]
    fn test_unknown_token_resolves_to_itself() {
        let table = AliasTable::with_builtins();
        assert_eq!(table.canonical("Conn_01x02"), "conn_01x02");
        assert_eq!(AliasTable::new().canonical("R"), "r");
    }

    #[test]
    fn test_load_json() {
        let mut table = AliasTable::new();
        table
            .load_json(r#"[{"canonical": "x", "aliases": ["xtal", "crystal"]}]"#)
            .unwrap();
        assert_eq!(table.canonical("Crystal"), "x");
        assert_eq!(table.canonical("xtal"), "x");
    }
}
