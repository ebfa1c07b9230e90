//! PCM format descriptions.

use std::time::Duration;

/// Describes a raw PCM sample stream.
///
/// `bits_per_sample` must be a multiple of 8; the derived byte-rate
/// and block-align values assume whole bytes per sample. Validation is
/// the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Format {
    /// Sample rate in Hz (e.g., 16000, 48000).
    pub sample_rate: u32,
    /// Number of interleaved channels.
    pub channels: u16,
    /// Bits per sample (multiple of 8).
    pub bits_per_sample: u16,
}

impl Format {
    /// Creates a format with the given sample rate, channel count,
    /// and bit depth.
    pub const fn new(sample_rate: u32, channels: u16, bits_per_sample: u16) -> Self {
        Self {
            sample_rate,
            channels,
            bits_per_sample,
        }
    }

    /// Creates a 16-bit mono format with the given sample rate.
    pub const fn mono(sample_rate: u32) -> Self {
        Self::new(sample_rate, 1, 16)
    }

    /// Creates a 16-bit stereo format with the given sample rate.
    pub const fn stereo(sample_rate: u32) -> Self {
        Self::new(sample_rate, 2, 16)
    }

    /// Bytes of audio per second: `sample_rate * channels * bits / 8`.
    pub const fn byte_rate(&self) -> u32 {
        self.sample_rate * self.channels as u32 * self.bits_per_sample as u32 / 8
    }

    /// Bytes per sample frame across all channels:
    /// `channels * bits / 8`.
    pub const fn block_align(&self) -> u16 {
        self.channels * self.bits_per_sample / 8
    }

    /// Number of bytes covering the given duration, rounded down to a
    /// whole sample frame.
    pub fn bytes_in_duration(&self, duration: Duration) -> u64 {
        let frames = duration.as_nanos() * self.sample_rate as u128 / 1_000_000_000;
        frames as u64 * self.block_align() as u64
    }

    /// Playback duration of the given number of payload bytes.
    pub fn duration(&self, bytes: u64) -> Duration {
        let nanos = bytes as u128 * 1_000_000_000 / self.byte_rate() as u128;
        Duration::from_nanos(nanos as u64)
    }
}

// Common format presets
impl Format {
    /// 16kHz mono 16-bit (common for TTS output)
    pub const L16_MONO_16K: Format = Format::mono(16000);
    /// 24kHz mono 16-bit
    pub const L16_MONO_24K: Format = Format::mono(24000);
    /// 48kHz mono 16-bit
    pub const L16_MONO_48K: Format = Format::mono(48000);
    /// 44.1kHz stereo 16-bit (CD quality)
    pub const L16_STEREO_44K: Format = Format::stereo(44100);
    /// 48kHz stereo 16-bit
    pub const L16_STEREO_48K: Format = Format::stereo(48000);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_derived_values() {
        let format = Format::L16_MONO_16K;
        assert_eq!(format.sample_rate, 16000);
        assert_eq!(format.channels, 1);
        assert_eq!(format.bits_per_sample, 16);
        assert_eq!(format.byte_rate(), 32000);
        assert_eq!(format.block_align(), 2);
    }

    #[test]
    fn test_format_stereo_derived_values() {
        let format = Format::L16_STEREO_48K;
        assert_eq!(format.byte_rate(), 192000);
        assert_eq!(format.block_align(), 4);
    }

    #[test]
    fn test_format_arbitrary_depth() {
        let format = Format::new(8000, 1, 8);
        assert_eq!(format.byte_rate(), 8000);
        assert_eq!(format.block_align(), 1);

        let format = Format::new(96000, 2, 24);
        assert_eq!(format.byte_rate(), 576000);
        assert_eq!(format.block_align(), 6);
    }

    #[test]
    fn test_bytes_in_duration() {
        let format = Format::L16_MONO_16K;
        // 1 second at 16kHz mono 16-bit = 16000 frames * 2 bytes
        assert_eq!(format.bytes_in_duration(Duration::from_secs(1)), 32000);
        // 100ms = 1600 frames * 2 bytes
        assert_eq!(format.bytes_in_duration(Duration::from_millis(100)), 3200);
    }

    #[test]
    fn test_bytes_in_duration_whole_frames() {
        let format = Format::L16_STEREO_44K;
        let bytes = format.bytes_in_duration(Duration::from_millis(333));
        assert_eq!(bytes % format.block_align() as u64, 0);
    }

    #[test]
    fn test_duration() {
        let format = Format::L16_MONO_16K;
        assert_eq!(format.duration(32000), Duration::from_secs(1));
        assert_eq!(format.duration(3200), Duration::from_millis(100));
    }

    #[test]
    fn test_format_presets() {
        assert_eq!(Format::L16_MONO_16K, Format::new(16000, 1, 16));
        assert_eq!(Format::L16_MONO_24K.sample_rate, 24000);
        assert_eq!(Format::L16_MONO_48K.sample_rate, 48000);
        assert_eq!(Format::L16_STEREO_44K.channels, 2);
        assert_eq!(Format::L16_STEREO_48K.channels, 2);
    }
}
