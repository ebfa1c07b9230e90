//! Generate a silent WAV payload.

use std::time::Duration;

use clap::Args;

use wavcast_audio::codec::wav::WavWriter;
use wavcast_audio::pcm::{Chunk, SilenceChunk};

use super::util::{output_bytes, print_verbose, FormatArgs};
use crate::Cli;

#[derive(Debug, Args)]
pub struct SilenceCommand {
    /// Duration of silence in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub ms: u64,

    #[command(flatten)]
    pub format: FormatArgs,
}

impl SilenceCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let format = self.format.format()?;
        let chunk = SilenceChunk::new(format, Duration::from_millis(self.ms));

        let mut pcm = Vec::new();
        chunk.write_to(&mut pcm)?;

        let mut out = Vec::new();
        let mut writer = WavWriter::new(&mut out, format);
        writer.write_chunk(&pcm);
        let written = writer.close()?;

        print_verbose(
            cli,
            &format!("{}ms of silence, {} bytes of audio/wav", self.ms, written),
        );

        output_bytes(&out, cli.output.as_deref())?;
        Ok(())
    }
}
