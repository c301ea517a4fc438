//! Cover Catalog - Lookup Tables as Injected Configuration
//!
//! Category styles and author details are configuration, not module globals:
//! the catalog is built (or loaded from JSON) once at startup and passed into
//! the pipeline, so tests can swap in alternate tables.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Category tag used when a post omits the field entirely.
/// An unknown tag is still a hard lookup failure - only absence defaults.
pub const DEFAULT_CATEGORY: &str = "dev";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStyle {
    /// 6-hex-digit base color, no `#` prefix.
    pub color: String,
    /// Short display glyph rendered in the badge overlay.
    pub symbol: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDetails {
    pub name: String,
    /// CDN public id of the author's portrait asset.
    pub public_id: String,
}

/// Cover catalog - the read-only tables every recipe is built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverCatalog {
    categories: HashMap<String, CategoryStyle>,
    authors: HashMap<u32, AuthorDetails>,
    /// Public id of the shared background asset, terminal segment of every
    /// generated URL.
    pub background_id: String,
}

impl CoverCatalog {
    pub fn new(background_id: impl Into<String>) -> Self {
        Self {
            categories: HashMap::new(),
            authors: HashMap::new(),
            background_id: background_id.into(),
        }
    }

    /// The demo tables shipped with this repository.
    pub fn demo() -> Self {
        let mut catalog = Self::new("demo blog cover images/cover-image-bg");
        catalog.register_category(
            "dev",
            CategoryStyle {
                color: "ff9900".into(),
                symbol: " < > ".into(),
            },
        );
        catalog.register_category(
            "life",
            CategoryStyle {
                color: "f463f4".into(),
                symbol: " ~ ".into(),
            },
        );
        catalog.register_author(
            1,
            AuthorDetails {
                name: "Marla Peterson".into(),
                public_id: "demo blog cover images/author-avatar-1".into(),
            },
        );
        catalog.register_author(
            2,
            AuthorDetails {
                name: "David Nix".into(),
                public_id: "demo blog cover images/author-avatar-2".into(),
            },
        );
        catalog
    }

    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = fs::read_to_string(path)?;
        let catalog: Self = serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        log::debug!(
            "loaded cover catalog from {}: {} categories, {} authors",
            path.display(),
            catalog.categories.len(),
            catalog.authors.len()
        );
        Ok(catalog)
    }

    pub fn register_category(&mut self, tag: impl Into<String>, style: CategoryStyle) {
        self.categories.insert(tag.into(), style);
    }

    pub fn register_author(&mut self, id: u32, details: AuthorDetails) {
        self.authors.insert(id, details);
    }

    /// Resolve a category tag. `None` falls back to [`DEFAULT_CATEGORY`];
    /// an unknown tag returns `None` and the caller reports it.
    pub fn get_category(&self, tag: Option<&str>) -> Option<&CategoryStyle> {
        self.categories.get(tag.unwrap_or(DEFAULT_CATEGORY))
    }

    pub fn get_author(&self, id: u32) -> Option<&AuthorDetails> {
        self.authors.get(&id)
    }

    pub fn category_tags(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }
}

impl Default for CoverCatalog {
    fn default() -> Self {
        Self::demo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_complete() {
        let catalog = CoverCatalog::demo();
        for tag in ["dev", "life"] {
            let style = catalog.get_category(Some(tag)).unwrap();
            assert_eq!(style.color.len(), 6);
            assert!(!style.symbol.is_empty());
        }
        assert!(catalog.get_author(1).is_some());
        assert!(catalog.get_author(2).is_some());
    }

    #[test]
    fn test_absent_category_defaults_to_dev() {
        let catalog = CoverCatalog::demo();
        let style = catalog.get_category(None).unwrap();
        assert_eq!(style.color, "ff9900");
        assert_eq!(style.symbol, " < > ");
    }

    #[test]
    fn test_unknown_lookups_miss() {
        let catalog = CoverCatalog::demo();
        assert!(catalog.get_category(Some("sports")).is_none());
        assert!(catalog.get_author(99).is_none());
    }

    #[test]
    fn test_catalog_json_round_trip() {
        let catalog = CoverCatalog::demo();
        let json = serde_json::to_string(&catalog).unwrap();
        let back: CoverCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back.background_id, catalog.background_id);
        assert_eq!(
            back.get_category(Some("life")),
            catalog.get_category(Some("life"))
        );
        assert_eq!(back.get_author(2), catalog.get_author(2));
    }
}
