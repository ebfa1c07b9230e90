//! Stream assembly: decode each source, frame it, emit it.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use wavcast_audio::codec::wav;
use wavcast_audio::pcm::{DataChunk, Format};
use wavcast_encoding::Base64Data;

use crate::concat::concat;
use crate::error::AssembleError;
use crate::resource::PlayableAudio;

/// One self-describing WAV buffer: 44-byte header followed by the
/// chunk's raw PCM payload.
pub type FramedUnit = Vec<u8>;

/// How framed units are merged into the final buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FramingMode {
    /// Every chunk keeps its own header, so multi-chunk output carries
    /// one embedded header per chunk. Not compliant for more than one
    /// chunk, but common decoders accept the dominant single-chunk
    /// case.
    #[default]
    PerChunk,
    /// One header is derived over the total payload length and chunk
    /// payloads follow it. Compliant for any chunk count.
    SingleHeader,
}

/// Configuration for an assembly run.
#[derive(Debug, Clone)]
pub struct AssemblerConfig {
    /// PCM format every source decodes to. Fixed per deployment.
    pub format: Format,
    /// How the final buffer is laid out.
    pub mode: FramingMode,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            format: Format::L16_MONO_16K,
            mode: FramingMode::PerChunk,
        }
    }
}

/// Assembles Base64-encoded PCM sources into framed WAV units.
pub struct Assembler {
    config: AssemblerConfig,
}

impl Assembler {
    /// Creates an assembler with the given configuration.
    pub fn new(config: AssemblerConfig) -> Self {
        Self { config }
    }

    /// Returns the PCM format sources are expected to decode to.
    pub fn format(&self) -> Format {
        self.config.format
    }

    /// Starts an assembly run over the given sources.
    ///
    /// Returns a finite sequence of framed units in source order; the
    /// run is not restartable. A token cancelled before the run starts
    /// ends the sequence cleanly with zero items; cancellation mid-run
    /// stops before the next source without interrupting the one in
    /// flight. A source that fails to decode terminates the sequence
    /// with [`AssembleError::Decode`] and emits nothing for that item.
    pub fn assemble(&self, sources: Vec<String>, cancel: CancellationToken) -> FrameStream {
        let (tx, rx) = mpsc::channel(32);
        let format = self.config.format;

        tokio::spawn(async move {
            for (index, source) in sources.into_iter().enumerate() {
                if cancel.is_cancelled() {
                    debug!(index, "assembly cancelled, stopping before next source");
                    return;
                }
                if source.is_empty() {
                    debug!(index, "skipping empty source");
                    continue;
                }

                let chunk = match Base64Data::decode(&source) {
                    Ok(data) => DataChunk::new(format, data.into_bytes()),
                    Err(e) => {
                        warn!(index, error = %e, "audio source failed to decode");
                        let _ = tx.send(Err(AssembleError::Decode(e))).await;
                        return;
                    }
                };

                let unit = wav::frame(chunk.as_bytes(), format);
                debug!(index, payload = chunk.as_bytes().len(), "framed audio chunk");
                if tx.send(Ok(unit)).await.is_err() {
                    // Receiver dropped, nobody is listening anymore.
                    return;
                }
            }
        });

        FrameStream { rx }
    }

    /// Runs one assembly to completion: drains the frame sequence,
    /// merges the units per the configured [`FramingMode`], and hands
    /// the result over as a playable `audio/wav` resource.
    ///
    /// Zero framed units, whether from an empty source list or from
    /// cancellation before any work, report [`AssembleError::Empty`].
    pub async fn cast(
        &self,
        sources: Vec<String>,
        cancel: CancellationToken,
    ) -> Result<PlayableAudio, AssembleError> {
        let mut stream = self.assemble(sources, cancel);

        let mut units = Vec::new();
        while let Some(unit) = stream.next().await? {
            units.push(unit);
        }
        if units.is_empty() {
            return Err(AssembleError::Empty);
        }

        let data = match self.config.mode {
            FramingMode::PerChunk => concat(&units),
            FramingMode::SingleHeader => {
                let payloads: Vec<&[u8]> =
                    units.iter().map(|u| &u[wav::HEADER_SIZE..]).collect();
                wav::frame(&concat(&payloads), self.config.format)
            }
        };

        Ok(PlayableAudio::new(data))
    }
}

/// Ordered, finite sequence of framed units from one assembly run.
pub struct FrameStream {
    rx: mpsc::Receiver<Result<FramedUnit, AssembleError>>,
}

impl FrameStream {
    /// Receives the next framed unit; `None` after the last one. A
    /// decode failure ends the sequence with its error.
    pub async fn next(&mut self) -> Result<Option<FramedUnit>, AssembleError> {
        match self.rx.recv().await {
            Some(Ok(unit)) => Ok(Some(unit)),
            Some(Err(e)) => Err(e),
            None => Ok(None),
        }
    }

    /// Closes the receiving side; the producer stops at its next send.
    pub fn close(&mut self) {
        self.rx.close();
    }
}
