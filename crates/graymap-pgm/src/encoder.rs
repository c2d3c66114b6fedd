/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use graymap_core::bytestream::{ZByteIoError, ZByteWriterTrait, ZWriter};

/// Errors occurring during encoding
pub enum PGMEncodeErrors {
    Static(&'static str),
    IoErrors(ZByteIoError)
}

impl From<ZByteIoError> for PGMEncodeErrors {
    fn from(err: ZByteIoError) -> Self {
        PGMEncodeErrors::IoErrors(err)
    }
}

impl Debug for PGMEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PGMEncodeErrors::Static(ref errors) => {
                writeln!(f, "{errors}")
            }
            PGMEncodeErrors::IoErrors(ref err) => {
                writeln!(f, "{err:?}")
            }
        }
    }
}

impl Display for PGMEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PGMEncodeErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoErrors(err) => Some(err),
            Self::Static(_) => None
        }
    }
}

/// A PGM encoder
///
/// # Example
/// ```
/// use graymap_pgm::PGMEncoder;
///
/// let pixels = [0_u8, 128, 255, 64];
/// let mut sink = vec![];
///
/// let written = PGMEncoder::new(&pixels, 2, 2, 255).encode(&mut sink).unwrap();
///
/// assert_eq!(written, sink.len());
/// assert!(sink.starts_with(b"P5\n2 2\n255\n"));
/// ```
pub struct PGMEncoder<'a> {
    data:   &'a [u8],
    width:  usize,
    height: usize,
    maxval: u8
}

impl<'a> PGMEncoder<'a> {
    /// Create a new encoder for `width*height` samples
    /// in raster order
    pub const fn new(data: &'a [u8], width: usize, height: usize, maxval: u8) -> PGMEncoder<'a> {
        PGMEncoder {
            data,
            width,
            height,
            maxval
        }
    }

    fn write_headers<T: ZByteWriterTrait>(
        &self, writer: &mut ZWriter<T>
    ) -> Result<(), PGMEncodeErrors> {
        let header = format!("P5\n{} {}\n{}\n", self.width, self.height, self.maxval);

        writer.write_all(header.as_bytes())?;

        Ok(())
    }

    /// Encode the samples into `sink`, returning how many
    /// bytes were written
    ///
    /// The sink is flushed before returning.
    pub fn encode<T: ZByteWriterTrait>(&self, sink: T) -> Result<usize, PGMEncodeErrors> {
        let expected = self
            .width
            .checked_mul(self.height)
            .ok_or(PGMEncodeErrors::Static("Image dimensions overflow"))?;

        if expected != self.data.len() {
            return Err(PGMEncodeErrors::Static(
                "Data length does not match image dimensions"
            ));
        }
        if self.maxval == 0 {
            return Err(PGMEncodeErrors::Static("maxval must be greater than zero"));
        }
        let mut writer = ZWriter::new(sink);
        // header is at most a few dozen bytes
        writer.reserve(self.data.len() + 32)?;

        self.write_headers(&mut writer)?;
        writer.write_all(self.data)?;
        writer.flush()?;

        Ok(writer.bytes_written())
    }
}
