pub mod catalog;
pub mod config;
pub mod llm;
pub mod system_prompt;
pub mod tools;

use std::sync::Arc;

/// Shared handles built once at startup.
pub struct Data {
    pub config: config::Config,
    pub catalog: Arc<catalog::CatalogClient>,
    pub tools: Arc<tools::ToolRegistry>,
}

impl Data {
    pub fn new(config: config::Config) -> anyhow::Result<Self> {
        let catalog = Arc::new(catalog::CatalogClient::from_config(&config)?);
        let tools = Arc::new(tools::ToolRegistry::content_discovery(catalog.clone()));
        Ok(Self {
            config,
            catalog,
            tools,
        })
    }

    pub fn agent(&self) -> llm::Agent {
        llm::Agent::new(
            Arc::new(llm::LlmClient::new(&self.config)),
            self.tools.clone(),
            &self.config,
        )
    }
}
