//! PCM (Pulse Code Modulation) audio handling.
//!
//! # Key Types
//!
//! - [`Format`]: sample rate, channel count, and bit depth of a raw
//!   PCM stream, with the derived byte-rate and block-align values
//! - [`Chunk`]: trait for blocks of audio data
//! - [`DataChunk`]: a decoded, headerless block of interleaved samples
//! - [`SilenceChunk`]: all-zero PCM of a given duration

mod chunk;
mod format;

pub use chunk::{Chunk, DataChunk, SilenceChunk};
pub use format::Format;
