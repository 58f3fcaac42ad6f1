// src/pipeline/tools.rs

//! Catalog listing for the terminal.

use crate::models::{StarRating, ToolRecord};
use crate::services::{Catalog, SortKey};

/// Format one tool as a listing line.
pub fn format_tool_line(tool: &ToolRecord) -> String {
    let stars = StarRating::from_score(tool.rating).render();
    let badge = tool
        .badge
        .as_deref()
        .map(|b| format!(" [{b}]"))
        .unwrap_or_default();

    format!(
        "{stars} {:.1}  {} ({}){badge}  {}",
        tool.rating,
        tool.name,
        tool.category,
        if tool.price.is_empty() { "-" } else { tool.price.as_str() }
    )
}

/// Listing lines for a category (or all tools) in the given order.
pub fn run_tools(catalog: &Catalog, category: Option<&str>, sort: SortKey) -> Vec<String> {
    let tools = catalog.listing(category, sort);
    log::debug!("Listing {} of {} tool(s)", tools.len(), catalog.len());
    tools.iter().map(format_tool_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_line_with_badge() {
        let catalog = Catalog::from_toml(
            r#"
            [[tools]]
            name = "Pixel Forge"
            rating = 4.5
            category = "Image"
            badge = "Editor's Choice"
            price = "$10/mo"
            "#,
        )
        .unwrap();

        let lines = run_tools(&catalog, None, SortKey::Rating);
        assert_eq!(
            lines,
            vec!["★★★★½ 4.5  Pixel Forge (Image) [Editor's Choice]  $10/mo"]
        );
    }

    #[test]
    fn test_missing_price_shows_dash() {
        let catalog = Catalog::from_toml(
            r#"
            [[tools]]
            name = "Quiet Tool"
            rating = 3.0
            category = "Audio"
            "#,
        )
        .unwrap();

        let lines = run_tools(&catalog, Some("audio"), SortKey::Price);
        assert_eq!(lines, vec!["★★★☆☆ 3.0  Quiet Tool (Audio)  -"]);
    }
}
