use crate::tools::ToolRegistry;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info};

pub struct ToolExecutor {
    registry: Arc<ToolRegistry>,
}

impl ToolExecutor {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    pub async fn execute(&self, name: &str, params: Value) -> anyhow::Result<Value> {
        let tool = self.registry.get(name).ok_or_else(|| {
            error!("Tool not found: {}", name);
            anyhow::anyhow!("Tool not found: {}", name)
        })?;

        info!("Executing tool: {} with arguments: {}", name, params);
        let result = tool.execute(params).await;
        match &result {
            Ok(v) => debug!("Tool {} returned: {}", name, v),
            Err(e) => error!("Tool {} failed: {}", name, e),
        }
        result
    }
}
