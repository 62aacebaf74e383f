//! `runlength_rs` is a pure Rust PostScript run length decoder.
//!
//! The encoding decoded here is the Run Length scheme defined by the
//! PostScript Language Reference (3rd ed.) chapter 3.13.3: a stream of
//! blocks, each a control byte followed by either literal bytes or a
//! single byte to replicate, terminated by the End-Of-Data sentinel.
//!
//! ## Main APIs
//!
//! * [`Decoder`]: low-level, Sans I/O, run length decoder
//! * [`DecoderReader`]: high-level synchronous run length decoder
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::fs::File;
//! use std::io;
//!
//! use runlength_rs::DecoderReader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let encoded_file = File::open("input.rle")?;
//! let mut decoded_output = File::create("output")?;
//!
//! let mut reader = DecoderReader::new(encoded_file);
//! io::copy(&mut reader, &mut decoded_output)?;
//! # Ok(())
//! # }
//! ```
//!
//! [`Decoder`]: crate::decoder::Decoder

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    rust_2018_idioms,
    clippy::cast_lossless,
    clippy::doc_markdown,
    missing_docs,
    rustdoc::broken_intra_doc_links
)]
#![forbid(unsafe_code)]

#[doc(no_inline)]
pub use self::decoder::DecoderReader;

pub mod block;
pub mod decoder;
