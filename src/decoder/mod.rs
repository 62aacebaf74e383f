//! Run length decoding APIs

use tinyvec::ArrayVec;

pub use self::reader::DecoderReader;
pub use self::state::ReadState;
use crate::block::{Run, MAX_BLOCK};

mod reader;
mod state;

/// Outcome of one block refill attempt
enum Fill {
    Filled,
    NeedsWrite,
    Eod,
}

/// A low-level **Sans I/O** decoder implementation
///
/// This decoder does no IO by itself, instead enough data
/// has to be written to it in order for it to be able
/// to decode the next block. After that the decoded content
/// of the block can be read until all of the data from the block
/// has been exhausted.
/// Repeating this process for every block in sequence will result
/// into the entire stream being decoded.
///
/// ```rust
/// use runlength_rs::decoder::{Decoder, ReadState};
///
/// // "hello" as a literal run, '!' replicated three times,
/// // then the End-Of-Data sentinel
/// let mut encoded: &[u8] = &[4, b'h', b'e', b'l', b'l', b'o', 254, b'!', 128];
/// let mut output = Vec::new();
///
/// let mut decoder = Decoder::new();
///
/// let mut buf = [0; 1024];
/// loop {
///     match decoder.read(&mut buf) {
///         ReadState::NeedsWrite => {
///             // `Decoder` needs more data to be written to it before
///             // it can decode the next block. Once the input runs out,
///             // the empty write tells the `Decoder` that a truncated
///             // stream won't be completed by a later write.
///             decoder.write(encoded);
///             encoded = &[];
///         }
///         ReadState::Read(n) => {
///             // `n` decoded bytes have been read into `buf`
///             output.extend_from_slice(&buf[..n]);
///         }
///         ReadState::Eof => {
///             // we reached the end of the stream
///             break;
///         }
///     }
/// }
///
/// assert_eq!(output, b"hello!!!");
/// ```
pub struct Decoder {
    /// The decoded bytes of the current block, replaced wholesale
    /// on every refill
    block: ArrayVec<[u8; MAX_BLOCK]>,
    /// Position of the next undelivered byte within `block`
    index: usize,

    in_buf: Vec<u8>,
    read_pos: usize,

    eof: bool,
    write_eof: bool,
}

impl Decoder {
    /// Construct a new [`Decoder`], ready to decode a new run length stream
    pub fn new() -> Self {
        Self {
            block: ArrayVec::new(),
            index: 0,

            in_buf: Vec::new(),
            read_pos: 0,

            eof: false,
            write_eof: false,
        }
    }

    /// Write more encoded data into this [`Decoder`]
    ///
    /// Writing an empty `buf` signals that the encoded input has
    /// reached its end.
    pub fn write(&mut self, buf: &[u8]) {
        if !buf.is_empty() {
            if self.read_pos > 1024 {
                self.in_buf.drain(..self.read_pos);
                self.read_pos = 0;
            }

            self.in_buf.extend_from_slice(buf);
        } else {
            self.write_eof = true;
        }
    }

    /// Read more decoded data from this [`Decoder`]
    ///
    /// See the documentation for [`ReadState`] to decide
    /// what to do next.
    ///
    /// Once [`ReadState::Eof`] has been returned the decoder is
    /// permanently exhausted and every subsequent call returns
    /// [`ReadState::Eof`] again.
    pub fn read(&mut self, buf: &mut [u8]) -> ReadState {
        if self.eof {
            return ReadState::Eof;
        }
        if buf.is_empty() {
            return ReadState::Read(0);
        }

        let mut read = 0;
        while read < buf.len() {
            if self.index == self.block.len() {
                match self.fill_block() {
                    Fill::Filled => {}
                    Fill::NeedsWrite => break,
                    Fill::Eod => {
                        self.eof = true;
                        break;
                    }
                }
            }

            let pending = &self.block[self.index..];
            let n = pending.len().min(buf.len() - read);
            buf[read..read + n].copy_from_slice(&pending[..n]);
            self.index += n;
            read += n;
        }

        if read > 0 {
            ReadState::Read(read)
        } else if self.eof {
            ReadState::Eof
        } else {
            ReadState::NeedsWrite
        }
    }

    /// Decode the next block out of the staged input, replacing the
    /// exhausted block buffer
    fn fill_block(&mut self) -> Fill {
        let staged = &self.in_buf[self.read_pos..];

        let (&control, payload) = match staged.split_first() {
            Some(split) => split,
            None => return self.starved(),
        };

        match Run::from_control(control) {
            Run::EndOfData => Fill::Eod,
            Run::Literal(len) => {
                if payload.len() < len {
                    // truncated stream: no partial block is delivered
                    return self.starved();
                }

                self.block.clear();
                self.block.extend_from_slice(&payload[..len]);
                self.index = 0;
                self.read_pos += 1 + len;
                Fill::Filled
            }
            Run::Repeat(len) => {
                let byte = match payload.first() {
                    Some(&byte) => byte,
                    None => return self.starved(),
                };

                self.block.clear();
                self.block.resize(len, byte);
                self.index = 0;
                self.read_pos += 2;
                Fill::Filled
            }
        }
    }

    /// Ran out of staged input mid-block: end of data if the input is
    /// known to be over, otherwise more has to be written first
    fn starved(&self) -> Fill {
        if self.write_eof {
            Fill::Eod
        } else {
            Fill::NeedsWrite
        }
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}
