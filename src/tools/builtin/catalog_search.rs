use crate::catalog::{CatalogClient, ContentType};
use crate::tools::Tool;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct CatalogSearchTool {
    catalog: Arc<CatalogClient>,
}

impl CatalogSearchTool {
    pub fn new(catalog: Arc<CatalogClient>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Tool for CatalogSearchTool {
    fn name(&self) -> &str {
        "pandora_search_catalog"
    }

    fn description(&self) -> &str {
        "Searches the Pandora catalog for artists, stations, albums, tracks, or podcasts. \
         Use this tool to discover new content based on a user's search query. \
         Infer the most relevant content_type (e.g. 'ARTIST', 'STATION', 'PODCAST') from the user's request. \
         Returns the search results (names, IDs, and descriptions), or an error message."
    }

    fn parameters_schema(&self) -> Value {
        let content_types: Vec<&str> = ContentType::ALL.iter().map(|c| c.label()).collect();
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search term (e.g. \"new alternative rock\" or \"podcast about space\")"
                },
                "content_type": {
                    "type": "string",
                    "enum": content_types,
                    "description": "The specific content type to search for"
                }
            },
            "required": ["query", "content_type"]
        })
    }

    async fn execute(&self, params: Value) -> anyhow::Result<Value> {
        let query = params["query"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("Missing query"))?;
        let content_type = params["content_type"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("Missing content_type"))?;

        Ok(self
            .catalog
            .search_catalog(query, content_type)
            .await
            .into_value())
    }
}
