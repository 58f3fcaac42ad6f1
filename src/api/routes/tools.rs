//! Tool catalog endpoints.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::error::{AppError, Result};
use crate::models::{CatalogConfig, StarRating, ToolRecord};
use crate::services::{SortKey, affiliate_url};

/// Query parameters for `GET /api/tools`.
#[derive(Debug, Default, Deserialize)]
pub struct ToolQuery {
    pub category: Option<String>,
    pub sort: Option<String>,
}

/// A tool with its star breakdown and outbound link.
#[derive(Debug, Serialize)]
pub struct ToolView {
    #[serde(flatten)]
    pub tool: ToolRecord,
    pub stars: StarRating,
    pub link: Option<String>,
}

impl ToolView {
    /// A link that cannot be built is shown as missing rather than failing
    /// the whole response.
    fn build(tool: ToolRecord, config: &CatalogConfig) -> Self {
        let link = affiliate_url(
            &tool,
            &config.tracking_param,
            config.affiliate_tag.as_deref(),
        )
        .unwrap_or_else(|e| {
            log::warn!("No outbound link for tool '{}': {}", tool.slug, e);
            None
        });
        Self {
            stars: StarRating::from_score(tool.rating),
            tool,
            link,
        }
    }
}

/// Listing response.
#[derive(Debug, Serialize)]
pub struct ToolListResponse {
    pub count: usize,
    pub categories: Vec<String>,
    pub tools: Vec<ToolView>,
}

/// `GET /api/tools?category=&sort=rating|price`
pub async fn list_tools(
    State(state): State<AppState>,
    Query(query): Query<ToolQuery>,
) -> Result<Json<ToolListResponse>> {
    let sort = match query.sort.as_deref() {
        Some(s) => s.parse::<SortKey>()?,
        None => SortKey::default(),
    };

    let tools = state
        .catalog
        .listing(query.category.as_deref(), sort)
        .into_iter()
        .map(|tool| ToolView::build(tool, &state.catalog_config))
        .collect::<Vec<_>>();

    Ok(Json(ToolListResponse {
        count: tools.len(),
        categories: state
            .catalog
            .categories()
            .into_iter()
            .map(String::from)
            .collect(),
        tools,
    }))
}

/// `GET /api/tools/{slug}`
pub async fn get_tool(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ToolView>> {
    let tool = state
        .catalog
        .get(&slug)
        .cloned()
        .ok_or_else(|| AppError::not_found(format!("tool '{slug}'")))?;
    Ok(Json(ToolView::build(tool, &state.catalog_config)))
}

/// `GET /go/{slug}` - redirect to the tool's outbound link.
pub async fn go(State(state): State<AppState>, Path(slug): Path<String>) -> Result<Response> {
    let tool = state
        .catalog
        .get(&slug)
        .ok_or_else(|| AppError::not_found(format!("tool '{slug}'")))?;

    let target = affiliate_url(
        tool,
        &state.catalog_config.tracking_param,
        state.catalog_config.affiliate_tag.as_deref(),
    )?
    .ok_or_else(|| AppError::not_found(format!("outbound link for '{slug}'")))?;

    log::debug!("Redirecting {} to {}", slug, target);
    Ok((StatusCode::FOUND, [(header::LOCATION, target)]).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool(url: Option<&str>) -> ToolRecord {
        let mut tool: ToolRecord = toml::from_str(
            r#"
            name = "Relative Link"
            rating = 4.5
            category = "Writing"
            "#,
        )
        .unwrap();
        tool.url = url.map(String::from);
        tool.normalize();
        tool
    }

    fn tagged() -> CatalogConfig {
        CatalogConfig {
            affiliate_tag: Some("toolscope".to_string()),
            ..CatalogConfig::default()
        }
    }

    #[test]
    fn test_view_tags_outbound_link() {
        let view = ToolView::build(tool(Some("https://writer.example/")), &tagged());
        assert_eq!(
            view.link.as_deref(),
            Some("https://writer.example/?ref=toolscope")
        );
        assert_eq!(view.stars.half, 1);
    }

    #[test]
    fn test_view_with_unusable_link_has_none() {
        let view = ToolView::build(tool(Some("/tools/relative")), &tagged());
        assert_eq!(view.link, None);
        assert_eq!(view.tool.slug, "relative-link");
    }
}
