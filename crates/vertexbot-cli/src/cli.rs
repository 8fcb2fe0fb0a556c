use clap::Parser;

/// Vertexbot: chat with a Vertex AI model from the terminal.
#[derive(Parser, Debug)]
#[command(name = "vertexbot", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Model id override (e.g. gemini-pro, text-bison).
    #[arg(short, long)]
    pub model: Option<String>,

    /// Send a single message and exit instead of reading stdin.
    #[arg(short = 'M', long)]
    pub message: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
