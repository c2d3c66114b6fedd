/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Traits for reading and writing images in graymap
//!
//!
//! This exposes the traits and implementations for readers
//! and writers used by the graymap decoders and encoders.

use crate::bytestream::reader::ZByteIoError;

/// The Input trait implemented for readers.
///
/// Implemented for [`ZCursor`](crate::bytestream::ZCursor) over in-memory data
/// and for [`BufReader`](std::io::BufReader) over any `std::io::Read` source.
/// The buffered reader is what allows peeking a byte without a `Seek` bound.
pub trait ZByteReaderTrait {
    /// Read a single byte, returning `None` at the end of the stream
    fn read_byte(&mut self) -> Result<Option<u8>, ZByteIoError>;
    /// Return the next byte without consuming it, `None` at the end of the stream
    fn peek_byte(&mut self) -> Result<Option<u8>, ZByteIoError>;
    /// Read bytes into `buf` until it is full or the stream ends
    ///
    /// ## Returns
    ///  - `Ok(usize)` - Actual bytes read into the buffer, less than `buf.len()` only at the end of the stream
    ///  - `Err()` - The error encountered when reading bytes for which we couldn't recover
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError>;
    /// Report whether we are at the end of a stream.
    ///
    /// ## Warning
    /// For buffered readers this may have to refill the buffer,
    /// causing a read on the underlying source
    fn is_eof(&mut self) -> Result<bool, ZByteIoError>;
}

impl<T: ZByteReaderTrait + ?Sized> ZByteReaderTrait for &mut T {
    #[inline(always)]
    fn read_byte(&mut self) -> Result<Option<u8>, ZByteIoError> {
        (**self).read_byte()
    }

    #[inline(always)]
    fn peek_byte(&mut self) -> Result<Option<u8>, ZByteIoError> {
        (**self).peek_byte()
    }

    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        (**self).read_bytes(buf)
    }

    #[inline(always)]
    fn is_eof(&mut self) -> Result<bool, ZByteIoError> {
        (**self).is_eof()
    }
}

/// The writer trait implemented for the graymap encoders
///
/// Anything that implements this trait can be used as a sink
/// for writing encoded images
pub trait ZByteWriterTrait {
    /// Write all bytes to the buffer or return an error if something occurred
    ///
    /// This will always write all bytes, if it can't fully write all bytes, it will
    /// error out
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ZByteIoError>;
    /// Ensure bytes are written to the sink.
    fn flush_bytes(&mut self) -> Result<(), ZByteIoError>;
    /// A hint to tell the implementation how big of a size we expect the image to be
    /// An implementation like in memory `Vec` can use this to reserve additional memory to
    /// prevent reallocation when encoding
    ///
    /// This is just a hint, akin to calling `Vec::reserve` and should be treated as such.
    fn reserve_capacity(&mut self, size: usize) -> Result<(), ZByteIoError>;
}
