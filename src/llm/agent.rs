use crate::config::Config;
use crate::llm::client::LlmClient;
use crate::system_prompt::build_system_message;
use crate::tools::{ToolExecutor, ToolRegistry};
use async_openai::types::{
    ChatCompletionMessageToolCall, ChatCompletionRequestAssistantMessageArgs,
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestToolMessageArgs, ChatCompletionRequestUserMessageArgs,
};
use serde_json::{json, Value};
use std::sync::Arc;

/// Tool-calling loop for the content discovery agent.
pub struct Agent {
    llm: Arc<LlmClient>,
    executor: ToolExecutor,
    instruction: String,
    max_iterations: usize,
}

impl Agent {
    pub fn new(llm: Arc<LlmClient>, tools: Arc<ToolRegistry>, config: &Config) -> Self {
        Self {
            llm,
            executor: ToolExecutor::new(tools),
            instruction: config.system_prompt.clone(),
            max_iterations: config.agent_max_iterations.max(1),
        }
    }

    /// Fresh history holding only the system message.
    pub fn start_conversation(&self) -> anyhow::Result<Vec<ChatCompletionRequestMessage>> {
        Ok(vec![ChatCompletionRequestSystemMessageArgs::default()
            .content(build_system_message(&self.instruction))
            .build()?
            .into()])
    }

    /// Append the user's prompt to `messages` and run until the model answers in text.
    ///
    /// The answer is appended to `messages` as well, so the history can be reused
    /// for the next turn.
    pub async fn ask(
        &self,
        messages: &mut Vec<ChatCompletionRequestMessage>,
        prompt: &str,
    ) -> anyhow::Result<String> {
        messages.push(
            ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()?
                .into(),
        );
        self.run(messages).await
    }

    pub async fn run(&self, messages: &mut Vec<ChatCompletionRequestMessage>) -> anyhow::Result<String> {
        let tool_definitions = self.executor.registry().get_definitions();

        for i in 0..self.max_iterations {
            tracing::info!("Agent iteration {}/{}", i + 1, self.max_iterations);

            let response = self
                .llm
                .chat_with_tools(messages.clone(), Some(tool_definitions.clone()))
                .await?;
            let choice = response
                .choices
                .first()
                .ok_or_else(|| anyhow::anyhow!("No response from LLM"))?;
            let assistant_message = &choice.message;

            match assistant_message.tool_calls.as_ref().filter(|calls| !calls.is_empty()) {
                Some(tool_calls) => {
                    tracing::info!("LLM requested {} tool calls", tool_calls.len());
                    messages.push(
                        ChatCompletionRequestAssistantMessageArgs::default()
                            .tool_calls(tool_calls.clone())
                            .build()?
                            .into(),
                    );

                    for tool_call in tool_calls {
                        let result = self.execute_tool_call(tool_call).await;
                        messages.push(
                            ChatCompletionRequestToolMessageArgs::default()
                                .tool_call_id(tool_call.id.clone())
                                .content(result.to_string())
                                .build()?
                                .into(),
                        );
                    }
                    // Continue the loop to let the LLM see the results
                }
                None => {
                    let content = assistant_message.content.clone().unwrap_or_default();
                    messages.push(
                        ChatCompletionRequestAssistantMessageArgs::default()
                            .content(content.clone())
                            .build()?
                            .into(),
                    );
                    tracing::info!("Agent task completed after {} iterations", i + 1);
                    return Ok(content);
                }
            }
        }

        tracing::warn!(
            "Agent exceeded max iterations ({}) - potential runaway loop or recursive tool calls",
            self.max_iterations
        );
        Err(anyhow::anyhow!(
            "I've reached my reasoning limit for this task ({} steps). Try a narrower request.",
            self.max_iterations
        ))
    }

    /// Run one requested tool call. Failures come back as `{"error": ...}` for the model to read.
    pub async fn execute_tool_call(&self, tool_call: &ChatCompletionMessageToolCall) -> Value {
        let name = &tool_call.function.name;
        let arguments: Value = match serde_json::from_str(&tool_call.function.arguments) {
            Ok(arguments) => arguments,
            Err(e) => {
                tracing::error!("Tool {} called with malformed arguments: {}", name, e);
                return json!({ "error": format!("Malformed arguments for {}: {}", name, e) });
            }
        };

        match self.executor.execute(name, arguments).await {
            Ok(value) => value,
            Err(e) => json!({ "error": e.to_string() }),
        }
    }
}
