//! wavcast CLI - assemble base64 PCM chunks into playable WAV audio.

use clap::{Parser, Subcommand};

mod commands;

use commands::{CastCommand, SilenceCommand};

/// wavcast - assemble base64 PCM chunks into playable WAV audio.
///
/// The cast subcommand decodes one or more base64-encoded raw PCM
/// sources, frames each as WAV, and writes the merged result. The
/// silence subcommand generates an all-zero WAV payload for testing
/// playback pipelines.
#[derive(Parser)]
#[command(name = "wavcast")]
#[command(about = "PCM to WAV assembly tool")]
#[command(version)]
pub struct Cli {
    /// Output file (default: stdout)
    #[arg(short = 'o', long, global = true)]
    pub output: Option<String>,

    /// Input request file (YAML or JSON)
    #[arg(short = 'f', long = "file", global = true)]
    pub input: Option<String>,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assemble base64 PCM sources into WAV audio
    Cast(CastCommand),
    /// Generate a silent WAV payload
    Silence(SilenceCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Cast(cmd) => cmd.run(&cli).await,
        Commands::Silence(cmd) => cmd.run(&cli),
    }
}
