/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//! and writer.
//!
//! The decoders read through [`ZReader`] which wraps anything implementing
//! [`ZByteReaderTrait`], that is an in memory [`ZCursor`] or a buffered
//! `std::io` reader.
//!
//! The encoders write through [`ZWriter`] which wraps anything implementing
//! [`ZByteWriterTrait`].
pub use reader::{ZByteIoError, ZCursor, ZReader};
pub use traits::*;
pub use writer::ZWriter;

mod reader;
mod traits;
mod writer;
