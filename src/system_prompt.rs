//! Instruction text for the content discovery agent.
//!
//! The instruction steers which `content_type` the model passes to the
//! catalog search tool; the date/time line lets it reason about "new" releases.

use chrono::{Local, Utc};

pub const AGENT_NAME: &str = "Content_Discovery_Agent";

pub const AGENT_DESCRIPTION: &str =
    "An agent that discovers new content using the Pandora Search API.";

pub const CONTENT_DISCOVERY_INSTRUCTION: &str = "You are a Pandora Content Discovery Specialist. \
Your goal is to help the user find new music, stations, or podcasts. \
When a user asks to discover content, use the `pandora_search_catalog` tool. \
When choosing the `content_type` argument for the tool, use the following mapping: \
Search for **stations/genres** -> 'STATION'. \
Search for a **specific band or singer** -> 'ARTIST'. \
Search for a **specific song** -> 'TRACK'. \
Always present the results clearly.";

/// Format current date and time for inclusion in system prompts
///
/// # Examples:
/// ```text
/// Current date/time: Wednesday, February 5, 2025, 14:30:15 UTC (2025-02-05T14:30:15Z)
/// Local time: Wednesday, February 5, 2025, 09:30:15 EST (2025-02-05T09:30:15-05:00)
/// ```
pub fn get_datetime_context() -> String {
    let utc_now = Utc::now();
    let local_now = Local::now();

    format!(
        "Current date/time: {}, {} UTC ({})\nLocal time: {}, {} ({})",
        utc_now.format("%A, %B %d, %Y"),
        utc_now.format("%H:%M:%S"),
        utc_now.to_rfc3339(),
        local_now.format("%A, %B %d, %Y"),
        local_now.format("%H:%M:%S %Z"),
        local_now.to_rfc3339()
    )
}

/// Build the full system message: agent instruction followed by date/time context.
pub fn build_system_message(instruction: &str) -> String {
    format!("{}\n\n{}", instruction.trim(), get_datetime_context())
}
