/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io::{BufRead, BufReader, ErrorKind, Read};

use crate::bytestream::ZByteReaderTrait;

/// Errors raised by the byte stream readers and writers
pub enum ZByteIoError {
    /// An error from the underlying `std::io` object,
    /// the OS error code, if any, is kept inside
    StdIoError(std::io::Error),
    // requested, read
    NotEnoughBytes(usize, usize),
    Generic(&'static str)
}

impl ZByteIoError {
    /// Return the OS error code of the underlying I/O error, if any
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            ZByteIoError::StdIoError(err) => err.raw_os_error(),
            _ => None
        }
    }
}

impl Debug for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ZByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {err}")
            }
            ZByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ZByteIoError::Generic(err) => {
                writeln!(f, "Generic I/O error: {err}")
            }
        }
    }
}

impl Display for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ZByteIoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ZByteIoError::StdIoError(err) => Some(err),
            _ => None
        }
    }
}

impl From<std::io::Error> for ZByteIoError {
    fn from(value: std::io::Error) -> Self {
        ZByteIoError::StdIoError(value)
    }
}

impl From<&'static str> for ZByteIoError {
    fn from(value: &'static str) -> Self {
        ZByteIoError::Generic(value)
    }
}

/// An in-memory reader
///
/// Prefer this over [`Cursor`](std::io::Cursor) for data already in memory,
/// it never fails and never allocates.
pub struct ZCursor<T: AsRef<[u8]>> {
    stream:   T,
    position: usize
}

impl<T: AsRef<[u8]>> ZCursor<T> {
    /// Create a new cursor reading from the start of `buffer`
    pub fn new(buffer: T) -> ZCursor<T> {
        ZCursor {
            stream:   buffer,
            position: 0
        }
    }
    /// Current read position
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl<T: AsRef<[u8]>> ZByteReaderTrait for ZCursor<T> {
    #[inline(always)]
    fn read_byte(&mut self) -> Result<Option<u8>, ZByteIoError> {
        let byte = self.stream.as_ref().get(self.position).copied();
        if byte.is_some() {
            self.position += 1;
        }
        Ok(byte)
    }

    #[inline(always)]
    fn peek_byte(&mut self) -> Result<Option<u8>, ZByteIoError> {
        Ok(self.stream.as_ref().get(self.position).copied())
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        let stream = self.stream.as_ref();
        let start = self.position.min(stream.len());
        let end = start.saturating_add(buf.len()).min(stream.len());
        let bytes = &stream[start..end];

        buf[..bytes.len()].copy_from_slice(bytes);
        self.position = end;

        Ok(bytes.len())
    }

    #[inline(always)]
    fn is_eof(&mut self) -> Result<bool, ZByteIoError> {
        Ok(self.position >= self.stream.as_ref().len())
    }
}

impl<R: Read> ZByteReaderTrait for BufReader<R> {
    fn read_byte(&mut self) -> Result<Option<u8>, ZByteIoError> {
        let byte = self.peek_byte()?;
        if byte.is_some() {
            BufRead::consume(self, 1);
        }
        Ok(byte)
    }

    fn peek_byte(&mut self) -> Result<Option<u8>, ZByteIoError> {
        loop {
            match self.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(ZByteIoError::from(e))
            }
        }
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        let mut total = 0;

        while total < buf.len() {
            match self.read(&mut buf[total..]) {
                Ok(0) => break,
                Ok(n) => total += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(ZByteIoError::from(e))
            }
        }
        Ok(total)
    }

    fn is_eof(&mut self) -> Result<bool, ZByteIoError> {
        Ok(self.peek_byte()?.is_none())
    }
}

/// The reader used by the decoders
///
/// Wraps a [`ZByteReaderTrait`] source and keeps track of how many
/// bytes were consumed, which the decoders use in error messages.
pub struct ZReader<T: ZByteReaderTrait> {
    inner:    T,
    position: u64
}

impl<T: ZByteReaderTrait> ZReader<T> {
    pub fn new(source: T) -> ZReader<T> {
        ZReader {
            inner:    source,
            position: 0
        }
    }
    /// Number of bytes consumed so far
    #[inline(always)]
    pub const fn position(&self) -> u64 {
        self.position
    }
    /// Read a single byte, `None` at the end of the stream
    #[inline(always)]
    pub fn get_u8(&mut self) -> Result<Option<u8>, ZByteIoError> {
        let byte = self.inner.read_byte()?;
        if byte.is_some() {
            self.position += 1;
        }
        Ok(byte)
    }
    /// Look at the next byte without consuming it
    #[inline(always)]
    pub fn peek_u8(&mut self) -> Result<Option<u8>, ZByteIoError> {
        self.inner.peek_byte()
    }
    /// Consume bytes for as long as `func` returns true
    pub fn skip_until_false<F: Fn(u8) -> bool>(&mut self, func: F) -> Result<(), ZByteIoError> {
        while let Some(byte) = self.peek_u8()? {
            if !(func)(byte) {
                break;
            }
            self.get_u8()?;
        }
        Ok(())
    }
    /// Fill `buf` from the stream, returning how many bytes were available.
    pub fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        let read = self.inner.read_bytes(buf)?;
        self.position += read as u64;
        Ok(read)
    }
    /// Fill `buf` completely or return [`ZByteIoError::NotEnoughBytes`]
    pub fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError> {
        let read = self.read_bytes(buf)?;
        if read != buf.len() {
            return Err(ZByteIoError::NotEnoughBytes(buf.len(), read));
        }
        Ok(())
    }
    #[inline(always)]
    pub fn eof(&mut self) -> Result<bool, ZByteIoError> {
        self.inner.is_eof()
    }
}

#[cfg(test)]
mod tests {
    use std::io::BufReader;

    use crate::bytestream::{ZByteReaderTrait, ZCursor, ZReader};

    #[test]
    fn cursor_reads_to_end() {
        let mut cursor = ZCursor::new([1_u8, 2, 3]);
        let mut buf = [0; 5];

        assert_eq!(cursor.peek_byte().unwrap(), Some(1));
        assert_eq!(cursor.read_byte().unwrap(), Some(1));
        assert_eq!(cursor.read_bytes(&mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], &[2, 3]);
        assert!(cursor.is_eof().unwrap());
        assert_eq!(cursor.read_byte().unwrap(), None);
    }

    #[test]
    fn buf_reader_peeks_without_consuming() {
        let data: &[u8] = b"ab";
        let mut reader = BufReader::new(data);

        assert_eq!(reader.peek_byte().unwrap(), Some(b'a'));
        assert_eq!(reader.read_byte().unwrap(), Some(b'a'));
        assert_eq!(reader.read_byte().unwrap(), Some(b'b'));
        assert!(reader.is_eof().unwrap());
    }

    #[test]
    fn reader_tracks_position() {
        let mut reader = ZReader::new(ZCursor::new(b"   x12"));

        reader.skip_until_false(|x| x == b' ').unwrap();
        assert_eq!(reader.position(), 3);
        assert_eq!(reader.get_u8().unwrap(), Some(b'x'));

        let mut buf = [0; 4];
        assert!(reader.read_exact_bytes(&mut buf).is_err());
        assert_eq!(reader.position(), 6);
    }
}
