use clap::{Parser, Subcommand};
use pandora_discovery::system_prompt::{AGENT_DESCRIPTION, AGENT_NAME};
use pandora_discovery::{config::Config, Data};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pandora-discovery", about = AGENT_DESCRIPTION)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run one catalog search and print the raw result as JSON
    Search {
        /// ARTIST, STATION, ALBUM, TRACK or PODCAST (any case)
        #[arg(short = 't', long)]
        content_type: String,
        /// Search text
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// Talk to the discovery agent, one prompt per line on stdin
    Chat,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;
    let data = Data::new(config)?;

    match cli.command.unwrap_or(Command::Chat) {
        Command::Search {
            content_type,
            query,
        } => {
            let result = data
                .catalog
                .search_catalog(&query.join(" "), &content_type)
                .await;
            println!("{}", serde_json::to_string_pretty(&result.into_value())?);
        }
        Command::Chat => chat(&data).await?,
    }

    Ok(())
}

async fn chat(data: &Data) -> anyhow::Result<()> {
    let agent = data.agent();
    let mut messages = agent.start_conversation()?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    info!("{} ready, model {}", AGENT_NAME, data.config.llm_model);
    while let Some(line) = lines.next_line().await? {
        let prompt = line.trim();
        if prompt.is_empty() {
            continue;
        }

        match agent.ask(&mut messages, prompt).await {
            Ok(answer) => println!("{}\n", answer),
            Err(e) => {
                error!("Agent error: {:?}", e);
                println!("Sorry, something went wrong: {}\n", e);
            }
        }
    }

    Ok(())
}
