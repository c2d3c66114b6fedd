/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{BufWriter, Write};

use crate::bytestream::{ZByteIoError, ZByteWriterTrait};

impl<T: ZByteWriterTrait + ?Sized> ZByteWriterTrait for &mut T {
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ZByteIoError> {
        (**self).write_all_bytes(buf)
    }

    fn flush_bytes(&mut self) -> Result<(), ZByteIoError> {
        (**self).flush_bytes()
    }

    fn reserve_capacity(&mut self, size: usize) -> Result<(), ZByteIoError> {
        (**self).reserve_capacity(size)
    }
}

impl ZByteWriterTrait for Vec<u8> {
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ZByteIoError> {
        self.extend_from_slice(buf);
        Ok(())
    }

    fn flush_bytes(&mut self) -> Result<(), ZByteIoError> {
        // no need to do anything
        Ok(())
    }

    fn reserve_capacity(&mut self, size: usize) -> Result<(), ZByteIoError> {
        self.try_reserve(size)
            .map_err(|_| ZByteIoError::Generic("Cannot reserve space for output"))
    }
}

impl<W: Write> ZByteWriterTrait for BufWriter<W> {
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ZByteIoError> {
        self.write_all(buf).map_err(ZByteIoError::StdIoError)
    }

    fn flush_bytes(&mut self) -> Result<(), ZByteIoError> {
        self.flush().map_err(ZByteIoError::StdIoError)
    }

    fn reserve_capacity(&mut self, _: usize) -> Result<(), ZByteIoError> {
        Ok(())
    }
}

/// Encapsulates a byte sink counting
/// how many bytes went through it
pub struct ZWriter<T: ZByteWriterTrait> {
    buffer:        T,
    bytes_written: usize
}

impl<T: ZByteWriterTrait> ZWriter<T> {
    /// Create a new writer for the stream
    pub fn new(data: T) -> ZWriter<T> {
        ZWriter {
            buffer:        data,
            bytes_written: 0
        }
    }
    /// Write all of `buf` or fail
    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), ZByteIoError> {
        self.buffer.write_all_bytes(buf)?;
        self.bytes_written += buf.len();
        Ok(())
    }
    /// Flush the underlying sink
    pub fn flush(&mut self) -> Result<(), ZByteIoError> {
        self.buffer.flush_bytes()
    }
    /// Forward a size hint to the sink
    pub fn reserve(&mut self, size: usize) -> Result<(), ZByteIoError> {
        self.buffer.reserve_capacity(size)
    }
    /// Return the number of bytes the writer has written
    pub const fn bytes_written(&self) -> usize {
        self.bytes_written
    }}
