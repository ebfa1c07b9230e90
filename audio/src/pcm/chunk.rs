//! Audio chunk types.

use super::Format;
use std::io::{self, Write};
use std::time::Duration;

/// A block of audio data.
pub trait Chunk: Send + Sync {
    /// Returns the length of the audio data in bytes.
    fn len(&self) -> u64;

    /// Returns true if the chunk carries no audio data.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the PCM format of this chunk.
    fn format(&self) -> Format;

    /// Writes the audio data to the writer.
    fn write_to(&self, w: &mut dyn Write) -> io::Result<u64>;
}

/// A decoded, headerless block of interleaved PCM samples.
#[derive(Debug, Clone)]
pub struct DataChunk {
    format: Format,
    data: Vec<u8>,
}

impl DataChunk {
    /// Creates a data chunk from raw sample bytes.
    pub fn new(format: Format, data: Vec<u8>) -> Self {
        Self { format, data }
    }

    /// Creates a data chunk from 16-bit samples, laid out little-endian.
    pub fn from_samples(format: Format, samples: &[i16]) -> Self {
        let mut data = Vec::with_capacity(samples.len() * 2);
        for sample in samples {
            data.extend_from_slice(&sample.to_le_bytes());
        }
        Self { format, data }
    }

    /// Returns the sample bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the chunk and returns the sample bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

impl Chunk for DataChunk {
    fn len(&self) -> u64 {
        self.data.len() as u64
    }

    fn format(&self) -> Format {
        self.format
    }

    fn write_to(&self, w: &mut dyn Write) -> io::Result<u64> {
        w.write_all(&self.data)?;
        Ok(self.data.len() as u64)
    }
}

/// A chunk producing all-zero PCM of a given duration.
#[derive(Debug, Clone)]
pub struct SilenceChunk {
    format: Format,
    duration: Duration,
    len: u64,
}

/// Zero block for writing silence without per-call allocation.
static ZERO_BYTES: [u8; 8192] = [0u8; 8192];

impl SilenceChunk {
    /// Creates a silence chunk covering the given duration, rounded
    /// down to a whole sample frame.
    pub fn new(format: Format, duration: Duration) -> Self {
        let len = format.bytes_in_duration(duration);
        Self {
            format,
            duration,
            len,
        }
    }

    /// Returns the duration of the silence.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Renders the silence into an owned byte buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        vec![0u8; self.len as usize]
    }
}

impl Chunk for SilenceChunk {
    fn len(&self) -> u64 {
        self.len
    }

    fn format(&self) -> Format {
        self.format
    }

    fn write_to(&self, w: &mut dyn Write) -> io::Result<u64> {
        let mut remaining = self.len;
        while remaining > 0 {
            let n = remaining.min(ZERO_BYTES.len() as u64) as usize;
            w.write_all(&ZERO_BYTES[..n])?;
            remaining -= n as u64;
        }
        Ok(self.len)
    }
}
