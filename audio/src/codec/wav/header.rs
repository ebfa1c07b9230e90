//! WAV header encoding.

use crate::pcm::Format;

/// Size of a WAV (RIFF/WAVE) header in bytes.
pub const HEADER_SIZE: usize = 44;

const RIFF_ID: &[u8; 4] = b"RIFF";
const WAVE_ID: &[u8; 4] = b"WAVE";
const FMT_ID: &[u8; 4] = b"fmt ";
const DATA_ID: &[u8; 4] = b"data";

/// Audio format tag for uncompressed PCM.
const FORMAT_PCM: u16 = 1;
/// Size of the fmt subchunk for PCM.
const FMT_SIZE: u32 = 16;

/// Encodes the 44-byte header describing `payload_len` bytes of raw
/// PCM in the given format.
///
/// Pure and deterministic. Assumes a well-formed format
/// (`bits_per_sample` a multiple of 8); validation is the caller's
/// responsibility. All multi-byte fields are little-endian.
pub fn encode_header(payload_len: u32, format: Format) -> [u8; HEADER_SIZE] {
    let mut h = [0u8; HEADER_SIZE];

    h[..4].copy_from_slice(RIFF_ID);
    h[4..8].copy_from_slice(&(36 + payload_len).to_le_bytes());
    h[8..12].copy_from_slice(WAVE_ID);

    h[12..16].copy_from_slice(FMT_ID);
    h[16..20].copy_from_slice(&FMT_SIZE.to_le_bytes());
    h[20..22].copy_from_slice(&FORMAT_PCM.to_le_bytes());
    h[22..24].copy_from_slice(&format.channels.to_le_bytes());
    h[24..28].copy_from_slice(&format.sample_rate.to_le_bytes());
    h[28..32].copy_from_slice(&format.byte_rate().to_le_bytes());
    h[32..34].copy_from_slice(&format.block_align().to_le_bytes());
    h[34..36].copy_from_slice(&format.bits_per_sample.to_le_bytes());

    h[36..40].copy_from_slice(DATA_ID);
    h[40..44].copy_from_slice(&payload_len.to_le_bytes());

    h
}

/// Frames one raw PCM chunk as a self-describing WAV buffer, header
/// followed by payload.
pub fn frame(payload: &[u8], format: Format) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
    out.extend_from_slice(&encode_header(payload.len() as u32, format));
    out.extend_from_slice(payload);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u32_at(buf: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes(buf[offset..offset + 4].try_into().unwrap())
    }

    fn u16_at(buf: &[u8], offset: usize) -> u16 {
        u16::from_le_bytes(buf[offset..offset + 2].try_into().unwrap())
    }

    #[test]
    fn test_header_layout() {
        let h = encode_header(32000, Format::L16_MONO_16K);
        assert_eq!(h.len(), HEADER_SIZE);

        assert_eq!(&h[..4], b"RIFF");
        assert_eq!(u32_at(&h, 4), 36 + 32000);
        assert_eq!(&h[8..12], b"WAVE");
        assert_eq!(&h[12..16], b"fmt ");
        assert_eq!(u32_at(&h, 16), 16);
        assert_eq!(u16_at(&h, 20), 1);
        assert_eq!(u16_at(&h, 22), 1);
        assert_eq!(u32_at(&h, 24), 16000);
        assert_eq!(u32_at(&h, 28), 32000);
        assert_eq!(u16_at(&h, 32), 2);
        assert_eq!(u16_at(&h, 34), 16);
        assert_eq!(&h[36..40], b"data");
        assert_eq!(u32_at(&h, 40), 32000);
    }

    #[test]
    fn test_header_payload_lengths() {
        for len in [0u32, 1, 44, 100000] {
            let h = encode_header(len, Format::L16_MONO_16K);
            assert_eq!(u32_at(&h, 4), 36 + len);
            assert_eq!(u32_at(&h, 40), len);
        }
    }

    #[test]
    fn test_header_stereo_derived_fields() {
        let h = encode_header(0, Format::L16_STEREO_48K);
        assert_eq!(u32_at(&h, 24), 48000);
        assert_eq!(u16_at(&h, 22), 2);
        // 48000 * 2 * 16 / 8
        assert_eq!(u32_at(&h, 28), 192000);
        assert_eq!(u16_at(&h, 32), 4);
    }

    #[test]
    fn test_header_deterministic() {
        let a = encode_header(1234, Format::L16_MONO_24K);
        let b = encode_header(1234, Format::L16_MONO_24K);
        assert_eq!(a, b);
    }

    #[test]
    fn test_frame_roundtrip() {
        for len in [0usize, 1, 44, 100000] {
            let payload = vec![0x5a; len];
            let framed = frame(&payload, Format::L16_MONO_16K);
            assert_eq!(framed.len(), HEADER_SIZE + len);
            assert_eq!(u32_at(&framed, 40), len as u32);
            assert_eq!(&framed[HEADER_SIZE..], &payload[..]);
        }
    }

    #[test]
    fn test_frame_silence_second() {
        // One second of silence at the 16k mono reference format
        let payload = vec![0u8; 32000];
        let framed = frame(&payload, Format::L16_MONO_16K);
        assert_eq!(framed.len(), 32044);
        assert_eq!(&framed[..4], b"RIFF");
        assert_eq!(u32_at(&framed, 40), 32000);
    }
}
