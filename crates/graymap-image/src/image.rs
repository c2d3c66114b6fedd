/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a single image
//!
//! An image is a rectangle of 8 bit samples stored in raster order,
//! the sample at `(x,y)` lives at index `y*width + x`.
//!
//! ```text
//!   (0,0) ──── x ────►
//!     │ ┌───────────────┐
//!     y │ 0  1  2  3  4 │
//!     │ │ 5  6  7  8  9 │
//!     ▼ └───────────────┘
//! ```
//!
//! Images optionally carry a shared access counter, see
//! [`graymap_core::instrument`]
use std::fmt::{Debug, Formatter};

use graymap_core::instrument::{Counter, SharedCounter};
use graymap_core::log::debug;

use crate::errors::ImageErrors;
use crate::metadata::ImageMetadata;

/// Largest sample value, what white means for pointwise operations
pub const PIX_MAX: u8 = graymap_pgm::PIX_MAX;

/// Represents a single grayscale image
#[derive(Clone)]
pub struct Image {
    width:   usize,
    height:  usize,
    maxval:  u8,
    pixels:  Vec<u8>,
    counter: Option<SharedCounter>
}

impl Image {
    /// Create a new black image
    ///
    /// # Arguments
    /// - width, height: Image dimensions, either may be zero
    /// - maxval: The white point declared for the image, must be non-zero
    ///
    /// # Errors
    /// [`ImageErrors::AllocationFailed`] if memory for the pixels can't be obtained
    ///
    /// # Panics
    /// If `maxval` is zero
    ///
    /// # Example
    /// ```
    /// use graymap_image::image::Image;
    ///
    /// let image = Image::new(20, 10, 255).unwrap();
    /// assert_eq!(image.dimensions(), (20, 10));
    /// assert!(image.pixels().iter().all(|x| *x == 0));
    /// ```
    pub fn new(width: usize, height: usize, maxval: u8) -> Result<Image, ImageErrors> {
        assert!(maxval > 0, "maxval must be greater than zero");

        let pixels = alloc_pixels(width, height)?;

        Ok(Image {
            width,
            height,
            maxval,
            pixels,
            counter: None
        })
    }

    /// Create an image from existing samples in raster order
    ///
    /// # Panics
    /// If `pixels.len()` is not `width*height` or if `maxval` is zero
    pub fn from_u8(pixels: &[u8], width: usize, height: usize, maxval: u8) -> Image {
        assert!(maxval > 0, "maxval must be greater than zero");
        assert_eq!(
            Some(pixels.len()),
            width.checked_mul(height),
            "Pixel length does not match image dimensions"
        );
        Image {
            width,
            height,
            maxval,
            pixels: pixels.to_vec(),
            counter: None
        }
    }

    /// Create a black image of the given dimensions that
    /// shares this image's maxval and counter
    ///
    /// # Errors
    /// [`ImageErrors::AllocationFailed`] if memory for the pixels can't be obtained
    pub fn new_like(&self, width: usize, height: usize) -> Result<Image, ImageErrors> {
        let mut image = Image::new(width, height, self.maxval)?;
        image.counter.clone_from(&self.counter);

        Ok(image)
    }

    /// Release the image held in `slot`, leaving `None`
    ///
    /// Nothing happens if the slot is already empty
    pub fn destroy(slot: &mut Option<Image>) {
        slot.take();
    }

    /// Get image width
    pub const fn width(&self) -> usize {
        self.width
    }
    /// Get image height
    pub const fn height(&self) -> usize {
        self.height
    }
    /// Get image dimensions as a tuple of (width,height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    /// Get the declared white point
    pub const fn maxval(&self) -> u8 {
        self.maxval
    }
    /// Get a copy of the image's descriptive information
    pub const fn metadata(&self) -> ImageMetadata {
        ImageMetadata::new(self.width, self.height, self.maxval)
    }

    /// Return true if `(x,y)` addresses a pixel of this image
    pub const fn is_valid_position(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Return true if the `width` by `height` rectangle with its top left
    /// corner at `(x,y)` lies completely inside the image
    ///
    /// Empty rectangles are never valid.
    pub fn is_valid_rect(&self, x: usize, y: usize, width: usize, height: usize) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        match (x.checked_add(width - 1), y.checked_add(height - 1)) {
            (Some(end_x), Some(end_y)) => {
                self.is_valid_position(x, y) && self.is_valid_position(end_x, end_y)
            }
            _ => false
        }
    }

    #[inline(always)]
    #[track_caller]
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            self.is_valid_position(x, y),
            "Position ({x},{y}) is outside a {}x{} image",
            self.width,
            self.height
        );
        y * self.width + x
    }

    /// Get the sample at `(x,y)`
    ///
    /// # Panics
    /// If `(x,y)` is not a valid position
    #[track_caller]
    pub fn get_pixel(&self, x: usize, y: usize) -> u8 {
        let pos = self.index(x, y);
        self.record_accesses(1);
        self.pixels[pos]
    }

    /// Set the sample at `(x,y)` to `level`
    ///
    /// # Panics
    /// If `(x,y)` is not a valid position
    #[track_caller]
    pub fn set_pixel(&mut self, x: usize, y: usize, level: u8) {
        let pos = self.index(x, y);
        self.record_accesses(1);
        self.pixels[pos] = level;
    }

    /// Return the smallest and largest sample in the image
    ///
    /// An empty image returns `(255, 0)`
    pub fn stats(&self) -> (u8, u8) {
        let (min, max) = self
            .pixels
            .iter()
            .fold((u8::MAX, u8::MIN), |(min, max), &x| (min.min(x), max.max(x)));

        self.record_accesses(self.pixels.len());

        (min, max)
    }

    /// Return the samples in raster order
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
    /// Return a mutable view of the samples in raster order
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Report this image's pixel accesses to `counter`
    pub fn set_counter(&mut self, counter: SharedCounter) {
        self.counter = Some(counter);
    }
    /// Stop reporting pixel accesses, returning the previous counter
    pub fn remove_counter(&mut self) -> Option<SharedCounter> {
        self.counter.take()
    }
    /// The counter this image reports to, if any
    pub fn counter(&self) -> Option<&SharedCounter> {
        self.counter.as_ref()
    }
    /// Add `accesses` to the pixel memory counter, if one is attached
    #[inline]
    pub fn record_accesses(&self, accesses: usize) {
        if let Some(counter) = &self.counter {
            counter.record(Counter::PixelMemory, accesses as u64);
        }
    }
}

/// Allocate a zeroed pixel buffer without aborting on failure
pub(crate) fn alloc_pixels(width: usize, height: usize) -> Result<Vec<u8>, ImageErrors> {
    let size = width
        .checked_mul(height)
        .ok_or(ImageErrors::AllocationFailed(usize::MAX))?;

    debug!("Allocating {} bytes for a {}x{} image", size, width, height);

    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(size)
        .map_err(|_| ImageErrors::AllocationFailed(size))?;
    pixels.resize(size, 0);

    Ok(pixels)
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions()
            && self.maxval == other.maxval
            && self.pixels == other.pixels
    }
}

impl Eq for Image {}

impl Debug for Image {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("maxval", &self.maxval)
            .field("counted", &self.counter.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use graymap_core::instrument::{Counter, Instrumentation};

    use crate::image::Image;

    #[test]
    fn valid_rect_edges() {
        let image = Image::new(4, 3, 255).unwrap();

        assert!(image.is_valid_rect(0, 0, 4, 3));
        assert!(image.is_valid_rect(3, 2, 1, 1));
        assert!(!image.is_valid_rect(3, 2, 2, 1));
        assert!(!image.is_valid_rect(0, 0, 0, 3));
        assert!(!image.is_valid_rect(0, 0, 4, 0));
        assert!(!image.is_valid_rect(usize::MAX, 0, 2, 1));
        assert!(!image.is_valid_rect(0, usize::MAX, 1, usize::MAX));
    }

    #[test]
    fn get_and_set() {
        let mut image = Image::new(3, 2, 100).unwrap();

        image.set_pixel(2, 1, 77);

        assert_eq!(image.get_pixel(2, 1), 77);
        assert_eq!(image.pixels()[5], 77);
    }

    #[test]
    #[should_panic]
    fn get_out_of_bounds() {
        let image = Image::new(3, 2, 255).unwrap();
        image.get_pixel(3, 0);
    }

    #[test]
    #[should_panic]
    fn zero_maxval() {
        let _ = Image::new(3, 2, 0);
    }

    #[test]
    fn new_image_is_black() {
        for (width, height, maxval) in [(1, 1, 1), (4, 3, 255), (17, 2, 100)] {
            let image = Image::new(width, height, maxval).unwrap();

            assert_eq!(image.stats(), (0, 0));
        }
    }

    #[test]
    fn empty_stats() {
        let image = Image::new(0, 7, 255).unwrap();

        assert_eq!(image.stats(), (255, 0));
    }

    #[test]
    fn dimension_overflow_is_allocation_failure() {
        let err = Image::new(usize::MAX, 2, 255).unwrap_err();

        assert_eq!(err.kind(), crate::errors::ErrorKind::Allocation);
    }

    #[test]
    fn single_accesses_are_counted() {
        let instr = Arc::new(Instrumentation::new());
        let mut image = Image::new(2, 2, 255).unwrap();
        image.set_counter(instr.clone());

        image.set_pixel(0, 0, 1);
        image.get_pixel(1, 1);
        image.stats();

        assert_eq!(instr.get(Counter::PixelMemory), 2 + 4);
    }

    #[test]
    fn counter_is_not_part_of_equality() {
        let mut counted = Image::from_u8(&[1, 2], 2, 1, 255);
        counted.set_counter(Arc::new(Instrumentation::new()));

        assert_eq!(counted, Image::from_u8(&[1, 2], 2, 1, 255));
    }
}
