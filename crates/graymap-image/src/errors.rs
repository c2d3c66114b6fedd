/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image processing
use std::fmt::{Debug, Display, Formatter};

use graymap_core::bytestream::ZByteIoError;
use graymap_pgm::{HeaderField, PGMDecodeErrors, PGMEncodeErrors};

/// Broad classes an [`ImageErrors`] falls into
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// Memory for pixels could not be obtained
    Allocation,
    /// The operating system reported a failure
    Io,
    /// The input is not a valid PGM file
    Format,
    /// The input ended before all pixels were read
    Truncated,
    /// Anything else
    Other
}

/// All possible image errors that can occur.
///
/// This is the grandfather of image errors and contains
/// all decoding, processing and encoding errors possible
pub enum ImageErrors {
    /// Could not allocate this many bytes
    AllocationFailed(usize),
    IoErrors(std::io::Error),
    ImageDecodeErrors(PGMDecodeErrors),
    EncodeErrors(PGMEncodeErrors),
    GenericStr(&'static str)
}

impl ImageErrors {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AllocationFailed(_) => ErrorKind::Allocation,
            Self::IoErrors(_) => ErrorKind::Io,
            Self::ImageDecodeErrors(err) => match err {
                PGMDecodeErrors::AllocationFailed(_) => ErrorKind::Allocation,
                PGMDecodeErrors::TruncatedData { .. }
                | PGMDecodeErrors::IoErrors(ZByteIoError::NotEnoughBytes(..)) => {
                    ErrorKind::Truncated
                }
                PGMDecodeErrors::IoErrors(_) => ErrorKind::Io,
                _ => ErrorKind::Format
            },
            Self::EncodeErrors(PGMEncodeErrors::IoErrors(_)) => ErrorKind::Io,
            Self::EncodeErrors(_) | Self::GenericStr(_) => ErrorKind::Other
        }
    }

    /// A short human readable cause, e.g. `"Invalid width"`
    pub fn cause(&self) -> &'static str {
        match self {
            Self::AllocationFailed(_) => "Memory allocation failed",
            Self::IoErrors(_) => "Open failed",
            Self::ImageDecodeErrors(err) => match err {
                PGMDecodeErrors::InvalidMagic(_) => "Invalid file format",
                PGMDecodeErrors::InvalidHeader(HeaderField::Width, _) => "Invalid width",
                PGMDecodeErrors::InvalidHeader(HeaderField::Height, _) => "Invalid height",
                PGMDecodeErrors::InvalidHeader(HeaderField::Maxval, _) => "Invalid maxval",
                PGMDecodeErrors::LargeDimensions(..) => "Dimensions too large",
                PGMDecodeErrors::WhitespaceExpected(_) => "Whitespace expected",
                PGMDecodeErrors::TruncatedData { .. } | PGMDecodeErrors::IoErrors(_) => {
                    "Reading pixels"
                }
                PGMDecodeErrors::AllocationFailed(_) => "Memory allocation failed",
                PGMDecodeErrors::GenericStatic(_) => "Invalid file format"
            },
            Self::EncodeErrors(PGMEncodeErrors::IoErrors(_)) => "Writing pixels failed",
            Self::EncodeErrors(_) => "Invalid image for encoding",
            Self::GenericStr(_) => "Operation failed"
        }
    }

    /// The operating system error code behind this error, if any
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            Self::IoErrors(err) => err.raw_os_error(),
            Self::ImageDecodeErrors(PGMDecodeErrors::IoErrors(err))
            | Self::EncodeErrors(PGMEncodeErrors::IoErrors(err)) => err.raw_os_error(),
            _ => None
        }
    }
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AllocationFailed(size) => {
                writeln!(f, "Could not allocate {size} bytes")
            }
            Self::IoErrors(err) => writeln!(f, "I/O error: {err}"),
            Self::ImageDecodeErrors(err) => writeln!(f, "PGM decoding failed: {err:?}"),
            Self::EncodeErrors(err) => writeln!(f, "PGM encoding failed: {err:?}"),
            Self::GenericStr(err) => writeln!(f, "{err}")
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ImageErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoErrors(err) => Some(err),
            Self::ImageDecodeErrors(err) => Some(err),
            Self::EncodeErrors(err) => Some(err),
            _ => None
        }
    }
}

impl From<std::io::Error> for ImageErrors {
    fn from(err: std::io::Error) -> Self {
        ImageErrors::IoErrors(err)
    }
}

impl From<PGMDecodeErrors> for ImageErrors {
    fn from(from: PGMDecodeErrors) -> Self {
        // one variant for allocation failures, wherever they happen
        match from {
            PGMDecodeErrors::AllocationFailed(size) => ImageErrors::AllocationFailed(size),
            err => ImageErrors::ImageDecodeErrors(err)
        }
    }
}

impl From<PGMEncodeErrors> for ImageErrors {
    fn from(from: PGMEncodeErrors) -> Self {
        ImageErrors::EncodeErrors(from)
    }
}

impl From<&'static str> for ImageErrors {
    fn from(s: &'static str) -> ImageErrors {
        ImageErrors::GenericStr(s)
    }
}
