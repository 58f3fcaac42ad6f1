// src/services/catalog.rs

//! Tool catalog: loading, validation, filtering and sorting.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{MAX_STARS, ToolRecord};
use crate::utils::with_query_param;

/// Sort order for tool listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Highest rating first
    #[default]
    Rating,
    /// Shortest price string first
    Price,
}

impl FromStr for SortKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "rating" => Ok(SortKey::Rating),
            "price" => Ok(SortKey::Price),
            other => Err(AppError::validation(format!(
                "unknown sort key '{other}' (expected 'rating' or 'price')"
            ))),
        }
    }
}

/// Sort tools in place. Ties keep their catalog order.
pub fn sort_tools(tools: &mut [ToolRecord], key: SortKey) {
    match key {
        SortKey::Rating => tools.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Price => tools.sort_by_key(|t| t.price.chars().count()),
    }
}

/// On-disk catalog layout.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    tools: Vec<ToolRecord>,
}

/// The set of reviewed tools.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tools: Vec<ToolRecord>,
}

impl Catalog {
    /// Build a catalog from records, deriving missing slugs.
    pub fn new(mut tools: Vec<ToolRecord>) -> Self {
        for tool in &mut tools {
            tool.normalize();
        }
        Self { tools }
    }

    /// Load a catalog from a TOML file with `[[tools]]` entries.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        Ok(Self::new(file.tools))
    }

    /// Check ratings, names, outbound URLs and slug uniqueness.
    pub fn validate(&self) -> Result<()> {
        let mut slugs = HashSet::new();
        for tool in &self.tools {
            if tool.name.trim().is_empty() {
                return Err(AppError::validation("tool with empty name"));
            }
            if !(0.0..=MAX_STARS as f32).contains(&tool.rating) {
                return Err(AppError::validation(format!(
                    "tool '{}' has rating {} outside 0-{}",
                    tool.name, tool.rating, MAX_STARS
                )));
            }
            if let Some(link) = tool.url.as_deref().filter(|u| !u.trim().is_empty()) {
                if let Err(e) = Url::parse(link) {
                    return Err(AppError::validation(format!(
                        "tool '{}' has invalid url '{}': {}",
                        tool.name, link, e
                    )));
                }
            }
            if tool.slug.is_empty() {
                return Err(AppError::validation(format!(
                    "tool '{}' has no usable slug",
                    tool.name
                )));
            }
            if !slugs.insert(tool.slug.as_str()) {
                return Err(AppError::validation(format!(
                    "duplicate tool slug '{}'",
                    tool.slug
                )));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// All tools in catalog order.
    pub fn tools(&self) -> &[ToolRecord] {
        &self.tools
    }

    /// Look up one tool by slug.
    pub fn get(&self, slug: &str) -> Option<&ToolRecord> {
        self.tools.iter().find(|t| t.slug == slug)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.tools
            .iter()
            .map(|t| t.category.as_str())
            .filter(|c| seen.insert(c.to_lowercase()))
            .collect()
    }

    /// Tools in a category (case-insensitive), or all tools.
    pub fn filter(&self, category: Option<&str>) -> Vec<ToolRecord> {
        match category.map(str::trim).filter(|c| !c.is_empty()) {
            Some(category) => self
                .tools
                .iter()
                .filter(|t| t.category.eq_ignore_ascii_case(category))
                .cloned()
                .collect(),
            None => self.tools.clone(),
        }
    }

    /// Filtered and sorted listing.
    pub fn listing(&self, category: Option<&str>, sort: SortKey) -> Vec<ToolRecord> {
        let mut tools = self.filter(category);
        sort_tools(&mut tools, sort);
        tools
    }
}

/// Outbound link for a tool, tagged when an affiliate tag is configured.
pub fn affiliate_url(tool: &ToolRecord, param: &str, tag: Option<&str>) -> Result<Option<String>> {
    let Some(url) = tool.url.as_deref().filter(|u| !u.trim().is_empty()) else {
        return Ok(None);
    };
    match tag.filter(|t| !t.trim().is_empty()) {
        Some(tag) => with_query_param(url, param, tag).map(Some),
        None => Ok(Some(url.to_string())),
    }
}
