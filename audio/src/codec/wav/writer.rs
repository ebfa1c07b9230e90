//! Single-header WAV writer.

use std::io::{self, Write};

use super::header::{encode_header, HEADER_SIZE};
use crate::pcm::Format;

/// Writes one WAV stream with a single header over the whole payload.
///
/// Payload chunks are collected in memory; the header needs the total
/// payload length, so nothing reaches the underlying writer until
/// [`close`](WavWriter::close). Use this when concatenating several
/// chunks into a strictly compliant single-header file instead of
/// framing each chunk on its own.
pub struct WavWriter<W: Write> {
    writer: W,
    format: Format,
    payload: Vec<u8>,
}

impl<W: Write> WavWriter<W> {
    /// Creates a writer producing WAV data in the given format.
    pub fn new(writer: W, format: Format) -> Self {
        Self {
            writer,
            format,
            payload: Vec::new(),
        }
    }

    /// Appends one raw PCM chunk to the payload.
    pub fn write_chunk(&mut self, chunk: &[u8]) {
        self.payload.extend_from_slice(chunk);
    }

    /// Returns the number of payload bytes collected so far.
    pub fn payload_len(&self) -> usize {
        self.payload.len()
    }

    /// Writes the header and payload, returning the total bytes
    /// written. Fails if the payload exceeds what a WAV length field
    /// can describe.
    pub fn close(mut self) -> io::Result<u64> {
        let payload_len = u32::try_from(self.payload.len()).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                "payload exceeds WAV 32-bit length limit",
            )
        })?;

        self.writer
            .write_all(&encode_header(payload_len, self.format))?;
        self.writer.write_all(&self.payload)?;
        self.writer.flush()?;
        Ok(HEADER_SIZE as u64 + payload_len as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_single_header() {
        let mut buf = Vec::new();
        let mut writer = WavWriter::new(&mut buf, Format::L16_MONO_16K);

        writer.write_chunk(&[1u8; 100]);
        writer.write_chunk(&[2u8; 200]);
        assert_eq!(writer.payload_len(), 300);

        let written = writer.close().unwrap();
        assert_eq!(written, 344);
        assert_eq!(buf.len(), 344);
        assert_eq!(&buf[..4], b"RIFF");
        // One data subchunk spanning both input chunks
        let data_len = u32::from_le_bytes(buf[40..44].try_into().unwrap());
        assert_eq!(data_len, 300);
        assert_eq!(&buf[44..144], &[1u8; 100]);
        assert_eq!(&buf[144..344], &[2u8; 200]);
    }

    #[test]
    fn test_writer_empty_payload() {
        let mut buf = Vec::new();
        let writer = WavWriter::new(&mut buf, Format::L16_MONO_16K);
        let written = writer.close().unwrap();
        assert_eq!(written, HEADER_SIZE as u64);
        let data_len = u32::from_le_bytes(buf[40..44].try_into().unwrap());
        assert_eq!(data_len, 0);
    }
}
