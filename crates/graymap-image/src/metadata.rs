/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image metadata
//!
//! A small, copyable description of an image, useful for
//! reporting what was loaded without dragging the pixels along

/// Image metadata
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ImageMetadata {
    // REMEMBER: If you add a field here add it's serialization
    // to serde.rs
    pub(crate) width:  usize,
    pub(crate) height: usize,
    pub(crate) maxval: u8
}

impl ImageMetadata {
    pub(crate) const fn new(width: usize, height: usize, maxval: u8) -> ImageMetadata {
        ImageMetadata {
            width,
            height,
            maxval
        }
    }
    /// Get image dimensions as a tuple of width and height
    ///
    /// # Example
    ///
    /// ```rust
    /// use graymap_image::metadata::ImageMetadata;
    /// let meta = ImageMetadata::default();
    /// // default dimensions are usually zero
    /// assert_eq!(meta.dimensions(), (0, 0));
    /// ```
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    /// Get the declared white point
    pub const fn maxval(&self) -> u8 {
        self.maxval
    }
    /// Number of samples the image holds
    pub const fn num_pixels(&self) -> usize {
        self.width * self.height
    }
}
