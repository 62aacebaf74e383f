use std::io::{Read, Result};

use super::{Decoder, ReadState};

/// A high-level decoder that wraps a [`Read`] and implements [`Read`], yielding decoded bytes
///
/// ```rust
/// use std::io;
///
/// use runlength_rs::DecoderReader;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // a one byte literal run followed by the End-Of-Data sentinel
/// let encoded: &[u8] = &[0, b'A', 128];
/// let mut output = Vec::new();
///
/// let mut reader = DecoderReader::new(encoded);
/// io::copy(&mut reader, &mut output)?;
///
/// assert_eq!(output, b"A");
/// # Ok(())
/// # }
/// ```
pub struct DecoderReader<R> {
    decoder: Decoder,

    reader: R,
}

impl<R> DecoderReader<R> {
    /// Construct a new decoder from something implementing [`Read`]
    ///
    /// The underlying reader is owned for the decoder's lifetime.
    pub fn new(reader: R) -> Self {
        Self {
            decoder: Decoder::new(),

            reader,
        }
    }
}

impl<R: Read> Read for DecoderReader<R> {
    /// Decode run length data from the underlying reader
    ///
    /// A truncated stream is not an error: it decodes to whatever
    /// complete blocks precede the cut, followed by a clean `Ok(0)`.
    /// Errors returned by the underlying reader propagate unchanged.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut tmp_buf = [0; 1024];

        loop {
            match self.decoder.read(buf) {
                ReadState::NeedsWrite => {
                    let n = self.reader.read(&mut tmp_buf)?;
                    self.decoder.write(&tmp_buf[..n]);
                }
                ReadState::Read(n) => return Ok(n),
                ReadState::Eof => return Ok(0),
            }
        }
    }
}
