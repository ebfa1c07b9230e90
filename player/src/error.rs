//! Error types for stream assembly.

use thiserror::Error;

/// Error type for assembling audio sources into WAV data.
///
/// Cancellation is not represented here: a run cancelled before any
/// work ends its frame sequence cleanly with zero items, and only the
/// top-level cast maps that zero-unit outcome to [`Empty`](Self::Empty).
#[derive(Debug, Error)]
pub enum AssembleError {
    /// A source was not valid Base64 transport text. Fatal for the
    /// whole run; a corrupt chunk cannot be length-framed.
    #[error("invalid audio source encoding: {0}")]
    Decode(#[from] base64::DecodeError),

    /// Assembly finished with zero framed units.
    #[error("no audio data was received")]
    Empty,
}
