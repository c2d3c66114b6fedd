/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A raw Portable Graymap decoder and encoder
//!
//! This crate reads and writes the binary `P5` flavour of the
//! [PGM format](http://netpbm.sourceforge.net/doc/pgm.html), restricted to 8 bit samples
//!
//! ```text
//! P5
//! # comments may appear before each number
//! <width> <height>
//! <maxval><single whitespace byte><width*height raw samples>
//! ```
//!
//! # Example
//! - Decode an in-memory image
//! ```
//! use graymap_core::bytestream::ZCursor;
//! use graymap_pgm::PGMDecoder;
//!
//! let mut decoder = PGMDecoder::new(ZCursor::new(b"P5\n2 1\n255\n\x10\x20"));
//! let pixels = decoder.decode().unwrap();
//!
//! assert_eq!(decoder.dimensions(), Some((2, 1)));
//! assert_eq!(pixels, [0x10, 0x20]);
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::inline_always,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

pub use decoder::*;
pub use encoder::*;

mod decoder;
mod encoder;

/// Largest sample value an 8 bit PGM can declare
pub const PIX_MAX: u8 = 255;

/// Whitespace as understood by the header grammar,
/// the C `isspace` set which includes vertical tab
#[inline]
pub(crate) const fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}
