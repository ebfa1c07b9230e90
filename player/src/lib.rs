//! Incremental assembly of PCM audio sources into playable WAV data.
//!
//! Sources arrive as Base64 text, each decoding to one headerless
//! block of raw PCM. The [`Assembler`] decodes every source, wraps it
//! with a WAV header into one framed unit, and emits the units in
//! arrival order through a [`FrameStream`]; [`Assembler::cast`] drains
//! the stream, merges the units, and hands the caller a
//! [`PlayableAudio`] resource with media type `audio/wav`.
//!
//! # Example
//!
//! ```rust
//! use tokio_util::sync::CancellationToken;
//! use wavcast_encoding::Base64Data;
//! use wavcast_player::{Assembler, AssemblerConfig};
//!
//! # tokio_test::block_on(async {
//! // 100ms of silence at the 16kHz mono reference format
//! let source = Base64Data::from(vec![0u8; 3200]).encode();
//!
//! let assembler = Assembler::new(AssemblerConfig::default());
//! let audio = assembler
//!     .cast(vec![source], CancellationToken::new())
//!     .await
//!     .unwrap();
//!
//! assert_eq!(audio.media_type(), "audio/wav");
//! assert_eq!(audio.len(), 44 + 3200);
//! # });
//! ```

mod assembler;
mod concat;
mod error;
mod resource;

pub use assembler::{Assembler, AssemblerConfig, FrameStream, FramedUnit, FramingMode};
pub use concat::concat;
pub use error::AssembleError;
pub use resource::{PlayableAudio, MEDIA_TYPE_WAV};
