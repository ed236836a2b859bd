use crate::catalog::client::{PANDORA_GRAPHQL_URL, REQUEST_TIMEOUT};
use crate::system_prompt::CONTENT_DISCOVERY_INSTRUCTION;
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;

#[derive(Clone, Deserialize)]
pub struct Config {
    pub pandora_access_token: String,
    pub pandora_graphql_url: String,
    pub pandora_timeout_secs: u64,
    pub llm_url: String,
    pub llm_model: String,
    pub llm_api_key: Option<String>,
    pub llm_timeout_secs: u64,
    pub system_prompt: String,
    pub agent_max_iterations: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok();
        Self::build()
    }

    fn build() -> anyhow::Result<Self> {
        Ok(Config {
            pandora_access_token: env::var("PANDORA_ACCESS_TOKEN")
                .map_err(|_| anyhow::anyhow!("PANDORA_ACCESS_TOKEN must be set"))?,
            pandora_graphql_url: env::var("PANDORA_GRAPHQL_URL")
                .unwrap_or_else(|_| PANDORA_GRAPHQL_URL.to_string()),
            pandora_timeout_secs: env::var("PANDORA_TIMEOUT_SECS")
                .ok()
                .and_then(|secs| secs.parse().ok())
                .unwrap_or(REQUEST_TIMEOUT.as_secs()),
            llm_url: env::var("LLM_URL").unwrap_or_else(|_| "http://localhost:8080/v1".to_string()),
            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| "local-model".to_string()),
            llm_api_key: env::var("LLM_API_KEY").ok(),
            llm_timeout_secs: env::var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse()
                .unwrap_or(120),
            system_prompt: env::var("SYSTEM_PROMPT")
                .unwrap_or_else(|_| CONTENT_DISCOVERY_INSTRUCTION.to_string()),
            agent_max_iterations: env::var("AGENT_MAX_ITERATIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),
        })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("pandora_access_token", &"[REDACTED]")
            .field("pandora_graphql_url", &self.pandora_graphql_url)
            .field("pandora_timeout_secs", &self.pandora_timeout_secs)
            .field("llm_url", &self.llm_url)
            .field("llm_model", &self.llm_model)
            .field("llm_api_key", &self.llm_api_key.as_ref().map(|_| "[REDACTED]"))
            .field("llm_timeout_secs", &self.llm_timeout_secs)
            .field("system_prompt", &self.system_prompt)
            .field("agent_max_iterations", &self.agent_max_iterations)
            .finish()
    }
}
