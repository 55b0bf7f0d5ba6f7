//! Design token and component catalog.
//!
//! The catalog is an immutable, in-memory table built once at startup,
//! either from the embedded default dataset or from a user-supplied
//! JSON file. Engine functions borrow it; nothing mutates it after
//! construction, so it is safe to share across threads.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::models::{Component, DesignToken, TokenCategory};

/// Token dataset schema from tokens.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TokenDataset {
    version: String,
    tokens: Vec<DesignToken>,
}

/// Component dataset schema from components.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ComponentDataset {
    version: String,
    components: Vec<Component>,
}

/// User catalog file schema: a single JSON document with a token list
/// and an optional component list.
#[derive(Debug, Clone, Deserialize)]
struct UserCatalog {
    tokens: Vec<DesignToken>,
    #[serde(default)]
    components: Vec<Component>,
}

/// Immutable design token catalog with fast lookup and search.
///
/// The default dataset is embedded in the binary at compile time.
/// Token and component order is preserved from the source data; several
/// engine operations (validation replacement, contrast alternatives)
/// depend on that order.
#[derive(Debug, Clone)]
pub struct TokenCatalog {
    /// All tokens, in catalog order
    tokens: Vec<DesignToken>,
    /// All components, in catalog order
    components: Vec<Component>,
    /// Fast token lookup by name
    token_lookup: HashMap<String, usize>,
    /// Fast component lookup by name
    component_lookup: HashMap<String, usize>,
}

impl TokenCatalog {
    /// Loads the embedded default catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded JSON cannot be parsed.
    pub fn load() -> Result<Self> {
        let token_data: TokenDataset = serde_json::from_str(include_str!("tokens.json"))
            .context("Failed to parse embedded tokens.json")?;
        let component_data: ComponentDataset = serde_json::from_str(include_str!("components.json"))
            .context("Failed to parse embedded components.json")?;

        Self::from_parts(token_data.tokens, component_data.components)
    }

    /// Loads a catalog from a user-supplied JSON file.
    ///
    /// The file holds `{"tokens": [...], "components": [...]}` with the
    /// component list optional.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if it
    /// contains duplicate token names.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .context(format!("Failed to read catalog file: {}", path.display()))?;
        let user: UserCatalog = serde_json::from_str(&contents)
            .context(format!("Failed to parse catalog file: {}", path.display()))?;

        Self::from_parts(user.tokens, user.components)
    }

    /// Builds a catalog from already-parsed token and component lists.
    ///
    /// # Errors
    ///
    /// Returns an error if a token or component name appears twice.
    pub fn from_parts(tokens: Vec<DesignToken>, components: Vec<Component>) -> Result<Self> {
        let mut token_lookup = HashMap::new();
        for (idx, token) in tokens.iter().enumerate() {
            if token_lookup.insert(token.name.clone(), idx).is_some() {
                anyhow::bail!("Duplicate token name '{}' in catalog", token.name);
            }
        }

        let mut component_lookup = HashMap::new();
        for (idx, component) in components.iter().enumerate() {
            if component_lookup.insert(component.name.clone(), idx).is_some() {
                anyhow::bail!("Duplicate component name '{}' in catalog", component.name);
            }
        }

        Ok(Self {
            tokens,
            components,
            token_lookup,
            component_lookup,
        })
    }

    /// Gets a token by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DesignToken> {
        let idx = self.token_lookup.get(name)?;
        self.tokens.get(*idx)
    }

    /// All tokens in catalog order.
    #[must_use]
    pub fn tokens(&self) -> &[DesignToken] {
        &self.tokens
    }

    /// All components in catalog order.
    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Gets a component by name.
    #[must_use]
    pub fn get_component(&self, name: &str) -> Option<&Component> {
        let idx = self.component_lookup.get(name)?;
        self.components.get(*idx)
    }

    /// All tokens of one category, in catalog order.
    #[must_use]
    pub fn tokens_in_category(&self, category: TokenCategory) -> Vec<&DesignToken> {
        self.tokens
            .iter()
            .filter(|t| t.category == category)
            .collect()
    }

    /// Searches tokens by substring match on name, value, or
    /// description (case-insensitive), sorted by relevance.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&DesignToken> {
        if query.is_empty() {
            return self.tokens.iter().collect();
        }

        let query_lower = query.to_lowercase();
        let mut results: Vec<(&DesignToken, i32)> = self
            .tokens
            .iter()
            .filter_map(|token| {
                let name_lower = token.name.to_lowercase();
                let value_lower = token.value.to_lowercase();
                let desc_lower = token
                    .description
                    .as_ref()
                    .map(|d| d.to_lowercase())
                    .unwrap_or_default();

                // Exact match (highest priority)
                if name_lower == query_lower || value_lower == query_lower {
                    return Some((token, 100));
                }

                // Starts with query (high priority)
                if name_lower.starts_with(&query_lower) {
                    return Some((token, 50));
                }

                // Contains query in name or value (medium priority)
                if name_lower.contains(&query_lower) || value_lower.contains(&query_lower) {
                    return Some((token, 10));
                }

                // Contains query in description (lower priority)
                if desc_lower.contains(&query_lower) {
                    return Some((token, 5));
                }

                None
            })
            .collect();

        // Sort by relevance (descending, stable)
        results.sort_by(|a, b| b.1.cmp(&a.1));

        results.into_iter().map(|(token, _)| token).collect()
    }

    /// Gets the total number of tokens.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Gets the total number of components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }
}
