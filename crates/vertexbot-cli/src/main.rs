mod cli;
mod setup;

use std::path::Path;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use vertexbot_ai::Bot;

#[tokio::main]
async fn main() -> vertexbot_common::Result<()> {
    // Load .env file before anything else
    setup::load_dotenv(Path::new(".env"));

    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or("vertexbot=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "vertexbot=info".parse().unwrap()),
            ),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Vertexbot v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = setup::resolve_config(&args);
    if args.print_config {
        println!("{}", vertexbot_config::config_to_json(&config));
        return Ok(());
    }

    let mut bot = Bot::new(config)?;

    if let Some(ref message) = args.message {
        println!("{}", bot.chat(message).await);
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let reply = bot.chat(line.trim_end()).await;
        if !reply.is_empty() {
            println!("{reply}");
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
