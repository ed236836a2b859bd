use crate::config::Config;
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionTool, CreateChatCompletionRequestArgs,
        CreateChatCompletionResponse,
    },
    Client,
};
use serde_json::Value;
use std::time::Duration;

pub struct LlmClient {
    chat_client: Client<OpenAIConfig>,
    chat_model: String,
    timeout: Duration,
}

impl LlmClient {
    pub fn new(config: &Config) -> Self {
        let chat_config = OpenAIConfig::new()
            .with_api_base(&config.llm_url)
            .with_api_key(config.llm_api_key.as_deref().unwrap_or("unused"));

        Self {
            chat_client: Client::with_config(chat_config),
            chat_model: config.llm_model.clone(),
            timeout: Duration::from_secs(config.llm_timeout_secs),
        }
    }

    /// One chat completion round, offering the given function definitions.
    pub async fn chat_with_tools(
        &self,
        messages: Vec<ChatCompletionRequestMessage>,
        tool_definitions: Option<Vec<Value>>,
    ) -> anyhow::Result<CreateChatCompletionResponse> {
        let mut request = CreateChatCompletionRequestArgs::default();
        request.model(&self.chat_model).messages(messages);

        if let Some(definitions) = tool_definitions.filter(|defs| !defs.is_empty()) {
            let tools = definitions
                .into_iter()
                .map(serde_json::from_value::<ChatCompletionTool>)
                .collect::<Result<Vec<_>, _>>()?;
            request.tools(tools);
        }

        let request = request.build()?;

        let response = tokio::time::timeout(self.timeout, self.chat_client.chat().create(request))
            .await
            .map_err(|_| {
                tracing::error!("LLM request timed out after {}s", self.timeout.as_secs());
                anyhow::anyhow!("LLM request timed out after {}s", self.timeout.as_secs())
            })??;

        Ok(response)
    }
}
