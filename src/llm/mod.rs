pub mod agent;
pub mod client;

pub use agent::Agent;
pub use client::LlmClient;
