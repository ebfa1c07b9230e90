//! Utility functions for CLI commands.

use std::io::Write;
use std::path::Path;

use wavcast_audio::pcm::Format;

use crate::Cli;

/// PCM format flags shared by commands. Defaults follow the 16kHz
/// mono 16-bit reference preset.
#[derive(Debug, clap::Args)]
pub struct FormatArgs {
    /// Sample rate in Hz
    #[arg(long, default_value_t = Format::L16_MONO_16K.sample_rate)]
    pub sample_rate: u32,

    /// Number of channels
    #[arg(long, default_value_t = Format::L16_MONO_16K.channels)]
    pub channels: u16,

    /// Bits per sample
    #[arg(long, default_value_t = Format::L16_MONO_16K.bits_per_sample)]
    pub bits: u16,
}

impl FormatArgs {
    /// Builds the PCM format from the flags.
    pub fn format(&self) -> anyhow::Result<Format> {
        if self.sample_rate == 0 || self.channels == 0 || self.bits == 0 {
            anyhow::bail!("sample rate, channels, and bits must be positive");
        }
        if self.bits % 8 != 0 {
            anyhow::bail!("bits per sample must be a multiple of 8, got {}", self.bits);
        }
        Ok(Format::new(self.sample_rate, self.channels, self.bits))
    }
}

/// Loads a request from a YAML or JSON file.
pub fn load_request<T: serde::de::DeserializeOwned>(path: &str) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)?;
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("yaml");

    let result = match ext.to_lowercase().as_str() {
        "json" => serde_json::from_str(&content)?,
        _ => serde_yaml::from_str(&content)?,
    };

    Ok(result)
}

/// Writes binary data to the output file, or stdout when none is set.
pub fn output_bytes(data: &[u8], output_path: Option<&str>) -> anyhow::Result<()> {
    match output_path {
        Some(path) => std::fs::write(path, data)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Prints verbose output if enabled.
pub fn print_verbose(cli: &Cli, msg: &str) {
    if cli.verbose {
        eprintln!("[verbose] {}", msg);
    }
}
