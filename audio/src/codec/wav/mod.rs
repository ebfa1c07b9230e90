//! WAV container format.
//!
//! Frames raw PCM audio as RIFF/WAVE data a generic decoder can play.
//! Two shapes are provided:
//!
//! - [`encode_header`] / [`frame`]: pure per-chunk framing, each chunk
//!   carrying its own 44-byte header
//! - [`WavWriter`]: a single-header writer that collects payload bytes
//!   and emits one header over the total on close

mod header;
mod writer;

pub use header::{encode_header, frame, HEADER_SIZE};
pub use writer::WavWriter;
