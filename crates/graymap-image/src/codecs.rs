/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Loading and saving images
//!
//! Images are stored as raw PGM (`P5`) files, see [`graymap_pgm`]
//! for the format details.
//!
//! # Example
//! - Load an image from memory, negate it and encode it again
//! ```
//! use graymap_core::bytestream::ZCursor;
//! use graymap_core::options::DecoderOptions;
//! use graymap_image::image::Image;
//!
//! let mut image = Image::read(ZCursor::new(b"P5\n2 1\n255\n\x00\x10"), DecoderOptions::default()).unwrap();
//! image.pixels_mut().iter_mut().for_each(|x| *x = 255 - *x);
//!
//! let mut out = vec![];
//! image.write_to(&mut out).unwrap();
//! assert_eq!(out, b"P5\n2 1\n255\n\xff\xef");
//! ```
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use graymap_core::bytestream::{ZByteReaderTrait, ZByteWriterTrait};
use graymap_core::log::info;
use graymap_core::options::DecoderOptions;
use graymap_pgm::{PGMDecoder, PGMEncoder};

use crate::errors::ImageErrors;
use crate::image::Image;

impl Image {
    /// Open and decode the PGM file at `path` with default options
    ///
    /// # Errors
    /// - [`ImageErrors::IoErrors`] if the file can't be opened
    /// - [`ImageErrors::ImageDecodeErrors`] if it isn't a valid PGM file
    /// - [`ImageErrors::AllocationFailed`] if there is no memory for the pixels
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Image, ImageErrors> {
        Image::open_with_options(path, DecoderOptions::default())
    }

    /// Open and decode the PGM file at `path`
    ///
    /// The returned image reports to the options' counter, if any.
    ///
    /// # Errors
    /// See [`Image::open`]
    pub fn open_with_options<P: AsRef<Path>>(
        path: P, options: DecoderOptions
    ) -> Result<Image, ImageErrors> {
        let path = path.as_ref();
        info!("Opening {:?}", path);

        let file = BufReader::new(File::open(path)?);

        Image::read(file, options)
    }

    /// Decode a PGM image from any byte source
    ///
    /// Nothing is returned unless every pixel was read.
    ///
    /// # Errors
    /// - [`ImageErrors::ImageDecodeErrors`] if the source isn't a valid PGM file
    /// - [`ImageErrors::AllocationFailed`] if there is no memory for the pixels
    pub fn read<T: ZByteReaderTrait>(
        source: T, options: DecoderOptions
    ) -> Result<Image, ImageErrors> {
        let counter = options.counter().cloned();
        let mut decoder = PGMDecoder::new_with_options(options, source);

        decoder.read_headers()?;

        let (width, height) = decoder
            .dimensions()
            .ok_or(ImageErrors::GenericStr("Headers were not decoded"))?;
        let maxval = decoder
            .maxval()
            .ok_or(ImageErrors::GenericStr("Headers were not decoded"))?;

        let mut image = Image::new(width, height, maxval)?;

        decoder.decode_into(image.pixels_mut())?;

        if let Some(counter) = counter {
            image.set_counter(counter);
        }
        Ok(image)
    }

    /// Encode the image as PGM and write it to `path`,
    /// replacing any existing file
    ///
    /// A failed save may leave a partially written file behind.
    ///
    /// # Errors
    /// - [`ImageErrors::IoErrors`] if the file can't be created
    /// - [`ImageErrors::EncodeErrors`] if writing fails
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ImageErrors> {
        let path = path.as_ref();
        info!("Saving {:?}", path);

        let file = BufWriter::new(File::create(path)?);
        self.write_to(file)?;

        Ok(())
    }

    /// Encode the image as PGM into `sink`, returning the number of bytes written
    ///
    /// # Errors
    /// [`ImageErrors::EncodeErrors`] if the sink fails
    pub fn write_to<T: ZByteWriterTrait>(&self, sink: T) -> Result<usize, ImageErrors> {
        let (width, height) = self.dimensions();

        let written = PGMEncoder::new(self.pixels(), width, height, self.maxval()).encode(sink)?;
        self.record_accesses(self.pixels().len());

        Ok(written)
    }
}
