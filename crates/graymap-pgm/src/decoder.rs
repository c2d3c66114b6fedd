/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use graymap_core::bytestream::{ZByteIoError, ZByteReaderTrait, ZReader};
use graymap_core::instrument::Counter;
use graymap_core::log::{info, warn};
use graymap_core::options::DecoderOptions;

use crate::{is_space, PIX_MAX};

/// The numeric header fields of a PGM file
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum HeaderField {
    Width,
    Height,
    Maxval
}

impl Display for HeaderField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Width => write!(f, "width"),
            Self::Height => write!(f, "height"),
            Self::Maxval => write!(f, "maxval")
        }
    }
}

/// Errors that can occur while decoding a PGM file
pub enum PGMDecodeErrors {
    /// The stream does not start with the `P5` token
    InvalidMagic(String),
    /// A numeric header field is missing, malformed or out of range
    InvalidHeader(HeaderField, String),
    /// Dimensions above the configured limits, (limit, found)
    LargeDimensions(usize, usize),
    /// The byte following maxval is not whitespace, `None` at end of stream
    WhitespaceExpected(Option<u8>),
    /// Fewer sample bytes than the header promised
    TruncatedData { expected: usize, found: usize },
    /// Could not allocate the output buffer of the given size
    AllocationFailed(usize),
    GenericStatic(&'static str),
    IoErrors(ZByteIoError)
}

impl Debug for PGMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMagic(found) => {
                writeln!(f, "Invalid file format, expected P5 but found {found}")
            }
            Self::InvalidHeader(field, reason) => {
                writeln!(f, "Invalid {field}, reason: {reason}")
            }
            Self::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value of at most {expected} but found {found}"
                )
            }
            Self::WhitespaceExpected(Some(byte)) => {
                writeln!(f, "Whitespace expected after maxval but found {byte:#04x}")
            }
            Self::WhitespaceExpected(None) => {
                writeln!(f, "Whitespace expected after maxval but the stream ended")
            }
            Self::TruncatedData { expected, found } => {
                writeln!(f, "Expected {expected} pixel bytes but found {found}")
            }
            Self::AllocationFailed(size) => {
                writeln!(f, "Could not allocate {size} bytes for pixels")
            }
            Self::GenericStatic(val) => writeln!(f, "{val}"),
            Self::IoErrors(err) => writeln!(f, "{err:?}")
        }
    }
}

impl Display for PGMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PGMDecodeErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoErrors(err) => Some(err),
            _ => None
        }
    }
}

impl From<ZByteIoError> for PGMDecodeErrors {
    fn from(err: ZByteIoError) -> Self {
        PGMDecodeErrors::IoErrors(err)
    }
}

/// An instance of a PGM decoder
///
/// The decoder accepts raw (`P5`) 8 bit graymaps
pub struct PGMDecoder<T: ZByteReaderTrait> {
    width:           usize,
    height:          usize,
    maxval:          u8,
    decoded_headers: bool,
    reader:          ZReader<T>,
    options:         DecoderOptions
}

impl<T: ZByteReaderTrait> PGMDecoder<T> {
    /// Create a new pgm decoder with default options
    ///
    /// # Arguments
    /// - data: PGM encoded pixels
    ///
    /// # Example
    /// ```
    /// use graymap_core::bytestream::ZCursor;
    /// use graymap_pgm::PGMDecoder;
    /// let mut decoder = PGMDecoder::new(ZCursor::new(b"NOT VALID PGM"));
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: T) -> PGMDecoder<T> {
        PGMDecoder::new_with_options(DecoderOptions::default(), data)
    }
    /// Create a new PGM decoder with the specified options
    ///
    /// # Arguments
    /// - options: Modified options for the decoder
    /// - data: PGM encoded data.
    pub fn new_with_options(options: DecoderOptions, data: T) -> PGMDecoder<T> {
        PGMDecoder {
            width: 0,
            height: 0,
            maxval: 0,
            decoded_headers: false,
            reader: ZReader::new(data),
            options
        }
    }
    /// Read PGM headers and store them in internal state
    ///
    /// Calling it again after a successful read does nothing.
    pub fn read_headers(&mut self) -> Result<(), PGMDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        let p = self.reader.get_u8()?;
        let version = self.reader.get_u8()?;

        if p != Some(b'P') || version != Some(b'5') {
            let found = [p, version]
                .iter()
                .flatten()
                .map(|x| char::from(*x))
                .collect::<String>();

            return Err(PGMDecodeErrors::InvalidMagic(format!("'{found}'")));
        }
        // the magic is a token of its own
        if let Some(byte) = self.reader.peek_u8()? {
            if !is_space(byte) && byte != b'#' {
                return Err(PGMDecodeErrors::InvalidMagic(format!(
                    "'P5{}'",
                    char::from(byte)
                )));
            }
        }

        self.skip_spaces()?;
        let width = self.get_dimension(HeaderField::Width, self.options.max_width())?;

        self.skip_spaces()?;
        let height = self.get_dimension(HeaderField::Height, self.options.max_height())?;

        if width.checked_mul(height).is_none() {
            return Err(PGMDecodeErrors::GenericStatic(
                "Image dimensions overflow the address space"
            ));
        }
        info!("Width: {}, height: {}", width, height);

        self.skip_spaces()?;
        let maxval = self.get_integer(HeaderField::Maxval)?;

        let maxval = match u8::try_from(maxval) {
            Ok(val) if val > 0 => val,
            _ => {
                let msg = format!("{maxval} is not in the range 1..={PIX_MAX}");
                return Err(PGMDecodeErrors::InvalidHeader(HeaderField::Maxval, msg));
            }
        };
        info!("Maxval: {}", maxval);

        // exactly one whitespace byte separates the header from the raster
        match self.reader.get_u8()? {
            Some(byte) if is_space(byte) => (),
            other => return Err(PGMDecodeErrors::WhitespaceExpected(other))
        }

        self.width = width;
        self.height = height;
        self.maxval = maxval;
        self.decoded_headers = true;

        Ok(())
    }

    fn get_dimension(&mut self, field: HeaderField, limit: usize) -> Result<usize, PGMDecodeErrors> {
        let value = self.get_integer(field)?;

        let value = usize::try_from(value).map_err(|_| {
            PGMDecodeErrors::InvalidHeader(field, format!("{value} is negative"))
        })?;

        if value > limit {
            return Err(PGMDecodeErrors::LargeDimensions(limit, value));
        }
        Ok(value)
    }

    /// Parse a decimal integer with an optional sign
    fn get_integer(&mut self, field: HeaderField) -> Result<i64, PGMDecodeErrors> {
        let negative = match self.reader.peek_u8()? {
            Some(sign @ (b'+' | b'-')) => {
                self.reader.get_u8()?;
                sign == b'-'
            }
            _ => false
        };
        let mut value = 0_i64;
        let mut digits = 0;

        while let Some(byte) = self.reader.peek_u8()? {
            if !byte.is_ascii_digit() {
                break;
            }
            self.reader.get_u8()?;
            digits += 1;

            value = value
                .checked_mul(10)
                .and_then(|x| x.checked_add(i64::from(byte - b'0')))
                .ok_or_else(|| {
                    PGMDecodeErrors::InvalidHeader(field, "value is too large".to_string())
                })?;
        }
        if digits == 0 {
            let msg = match self.reader.peek_u8()? {
                Some(byte) => format!("expected a digit but found {:?}", char::from(byte)),
                None => "stream ended".to_string()
            };
            return Err(PGMDecodeErrors::InvalidHeader(field, msg));
        }
        Ok(if negative { -value } else { value })
    }

    /// Skip all whitespace characters and comments
    /// until one hits a character that isn't a space or
    /// we reach eof
    fn skip_spaces(&mut self) -> Result<(), PGMDecodeErrors> {
        loop {
            self.reader.skip_until_false(is_space)?;

            if self.reader.peek_u8()? != Some(b'#') {
                return Ok(());
            }
            // the newline ending the comment goes with the next round
            self.reader.skip_until_false(|x| x != b'\n')?;
        }
    }

    /// Return image dimensions or none if headers aren't decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }
    /// Return the declared maximum sample value or none if
    /// headers aren't decoded
    pub const fn maxval(&self) -> Option<u8> {
        if self.decoded_headers {
            Some(self.maxval)
        } else {
            None
        }
    }
    /// Number of bytes needed to hold the decoded samples
    /// or none if headers aren't decoded
    pub const fn output_buffer_size(&self) -> Option<usize> {
        if self.decoded_headers {
            // checked when reading headers
            Some(self.width * self.height)
        } else {
            None
        }
    }

    /// Decode samples into `out`, which must be exactly
    /// `width*height` bytes long
    ///
    /// Headers are read first if that hasn't happened yet.
    pub fn decode_into(&mut self, out: &mut [u8]) -> Result<(), PGMDecodeErrors> {
        self.read_headers()?;

        let size = self.width * self.height;

        if out.len() != size {
            return Err(PGMDecodeErrors::GenericStatic(
                "Output buffer does not match image dimensions"
            ));
        }
        let found = self.reader.read_bytes(out)?;

        if let Some(counter) = self.options.counter() {
            counter.record(Counter::PixelMemory, found as u64);
        }
        if found != size {
            return Err(PGMDecodeErrors::TruncatedData {
                expected: size,
                found
            });
        }
        if !self.reader.eof()? {
            warn!("Trailing bytes after {} pixels, ignoring them", size);
        }
        Ok(())
    }

    /// Decode a pgm encoded file and return the samples in raster order
    pub fn decode(&mut self) -> Result<Vec<u8>, PGMDecodeErrors> {
        self.read_headers()?;

        let size = self.width * self.height;
        let mut data = Vec::new();

        data.try_reserve_exact(size)
            .map_err(|_| PGMDecodeErrors::AllocationFailed(size))?;
        data.resize(size, 0);

        self.decode_into(&mut data)?;

        Ok(data)
    }
}
