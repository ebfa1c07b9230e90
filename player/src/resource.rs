//! Playable audio resources.

/// Media type declared for assembled WAV buffers.
pub const MEDIA_TYPE_WAV: &str = "audio/wav";

/// An assembled audio buffer ready for playback.
///
/// Exclusively owns the merged bytes handed over by the assembler,
/// which keeps no reference once the handle exists. The holder decides
/// when the resource goes away: call [`release`](Self::release) (or
/// drop the handle) on teardown, including error paths.
#[derive(Debug)]
pub struct PlayableAudio {
    data: Vec<u8>,
    media_type: &'static str,
}

impl PlayableAudio {
    /// Wraps a merged WAV buffer.
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            media_type: MEDIA_TYPE_WAV,
        }
    }

    /// Returns the declared media type.
    pub fn media_type(&self) -> &'static str {
        self.media_type
    }

    /// Returns the audio bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns the buffer length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consumes the handle and returns the audio bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Releases the resource and its buffer.
    pub fn release(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playable_audio_ownership() {
        let audio = PlayableAudio::new(vec![1, 2, 3]);
        assert_eq!(audio.media_type(), "audio/wav");
        assert_eq!(audio.len(), 3);
        assert!(!audio.is_empty());
        assert_eq!(audio.as_bytes(), &[1, 2, 3]);
        assert_eq!(audio.into_bytes(), vec![1, 2, 3]);
    }

    #[test]
    fn test_playable_audio_release() {
        let audio = PlayableAudio::new(vec![0u8; 44]);
        audio.release();
    }
}
