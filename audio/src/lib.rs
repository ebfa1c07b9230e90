//! PCM audio handling and WAV container framing.
//!
//! This crate provides the byte-level pieces for turning raw PCM audio
//! into playable WAV data:
//!
//! - `pcm`: PCM format descriptions and audio chunks
//! - `codec::wav`: WAV (RIFF/WAVE) container header encoding
//!
//! # Example
//!
//! ```rust
//! use wavcast_audio::pcm::Format;
//! use wavcast_audio::codec::wav;
//!
//! // One second of 16kHz mono 16-bit PCM
//! let format = Format::L16_MONO_16K;
//! let pcm = vec![0u8; format.byte_rate() as usize];
//!
//! // Frame it as a self-describing WAV buffer
//! let framed = wav::frame(&pcm, format);
//! assert_eq!(framed.len(), wav::HEADER_SIZE + pcm.len());
//! assert_eq!(&framed[..4], b"RIFF");
//! ```

pub mod codec;
pub mod pcm;

pub use pcm::Format;
