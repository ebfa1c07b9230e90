//! Assemble base64 PCM sources into WAV audio.

use clap::Args;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use wavcast_player::{Assembler, AssemblerConfig, FramingMode};

use super::util::{load_request, output_bytes, print_verbose, FormatArgs};
use crate::Cli;

/// Request document for the cast command.
#[derive(Debug, Deserialize)]
pub struct CastRequest {
    /// Base64 sources, in playback order.
    pub sources: Vec<String>,
}

#[derive(Debug, Args)]
pub struct CastCommand {
    /// Base64 sources, in playback order (stdin when absent)
    pub sources: Vec<String>,

    /// Derive one header over all chunks instead of framing each
    #[arg(long)]
    pub single_header: bool,

    #[command(flatten)]
    pub format: FormatArgs,
}

impl CastCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let sources = self.gather_sources(cli)?;
        debug!(count = sources.len(), "assembling audio sources");

        let config = AssemblerConfig {
            format: self.format.format()?,
            mode: if self.single_header {
                FramingMode::SingleHeader
            } else {
                FramingMode::PerChunk
            },
        };

        let cancel = CancellationToken::new();
        let signal_cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                signal_cancel.cancel();
            }
        });

        let assembler = Assembler::new(config);
        print_verbose(
            cli,
            &format!(
                "casting {} sources at {} Hz",
                sources.len(),
                assembler.format().sample_rate
            ),
        );

        let audio = assembler.cast(sources, cancel).await?;
        print_verbose(
            cli,
            &format!("assembled {} bytes of {}", audio.len(), audio.media_type()),
        );

        output_bytes(audio.as_bytes(), cli.output.as_deref())?;
        audio.release();
        Ok(())
    }

    /// Sources come from the request file, positional args, or stdin
    /// lines, in that priority order.
    fn gather_sources(&self, cli: &Cli) -> anyhow::Result<Vec<String>> {
        if let Some(path) = cli.input.as_deref() {
            let request: CastRequest = load_request(path)?;
            return Ok(request.sources);
        }
        if !self.sources.is_empty() {
            return Ok(self.sources.clone());
        }

        let text = std::io::read_to_string(std::io::stdin())?;
        Ok(text
            .split_whitespace()
            .map(|s| s.to_string())
            .collect())
    }
}
