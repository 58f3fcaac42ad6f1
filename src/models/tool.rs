//! Tool review record.

use serde::{Deserialize, Serialize};

use crate::utils::slugify;

/// One reviewed AI product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolRecord {
    /// Display key; derived from `name` when the data file omits it
    #[serde(default)]
    pub slug: String,

    pub name: String,

    /// Logo path relative to the site's static assets
    #[serde(default)]
    pub logo: String,

    /// Review score on a 0-5 scale
    pub rating: f32,

    pub category: String,

    #[serde(default)]
    pub description: String,

    /// Promotional label, e.g. "Editor's Choice"
    #[serde(default)]
    pub badge: Option<String>,

    /// Headline price string, e.g. "$20/mo"
    #[serde(default)]
    pub price: String,

    /// Plan-by-plan pricing lines
    #[serde(default)]
    pub pricing: Vec<String>,

    /// Outbound product URL
    #[serde(default)]
    pub url: Option<String>,
}

impl ToolRecord {
    /// Fill in the slug from the name if it is missing.
    pub fn normalize(&mut self) {
        if self.slug.trim().is_empty() {
            self.slug = slugify(&self.name);
        }
    }
}
