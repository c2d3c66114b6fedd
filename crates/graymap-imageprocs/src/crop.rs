/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Crop an image
//!
//!  # Algorithm
//!
//! We can take cropping as a view into a sub-image
//! which means
//!
//! ```text
//!    width ──────────────────────────────►
//! │ ┌─────────────────────────────────────┐
//! │ │                                     │
//! │ │   (x,y)     out width               │
//! │ │     ┌────────────────────┐          │
//! │ │   o │                    │          │
//! │ │   u │                    │          │
//! │ │   t │  CROPPED IMAGE     │          │
//! │ │   h │                    │          │
//! │ │   e │                    │          │
//! │ │   i └────────────────────┘          │
//! │ │   g                                 │
//! ▼ │   h                                 │
//!   └─────────────────────────────────────┘
//! ```
//! So a crop is a memory copy of `out height` row slices, each
//! starting `x` samples into the rows from `y` downwards.
use graymap_image::errors::ImageErrors;
use graymap_image::image::Image;
use graymap_image::traits::OperationsTrait;

/// Crop out a part of an image
///
/// This creates a smaller image from a bigger image
///
/// # Example
/// Cut the centre 100x100 out of a 1000x1000 image
/// ```
/// use graymap_image::image::Image;
/// use graymap_image::errors::ImageErrors;
/// use graymap_imageprocs::crop::Crop;
///
/// fn main() -> Result<(), ImageErrors> {
///     let image = Image::new(1000, 1000, 255)?;
///
///     let (w, h) = image.dimensions();
///     let (crop_w, crop_h) = (100, 100);
///
///     let start_x = (w / 2) - (crop_w / 2);
///     let start_y = (h / 2) - (crop_h / 2);
///
///     let cropped = Crop::new(start_x, start_y, crop_w, crop_h).transform(&image)?;
///     assert_eq!(cropped.dimensions(), (100, 100));
///
///     Ok(())
/// }
/// ```
#[derive(Copy, Clone)]
pub struct Crop {
    x:      usize,
    y:      usize,
    width:  usize,
    height: usize
}

impl Crop {
    /// Create a new crop operation
    ///
    /// # Arguments
    /// - x: How far from the x origin the crop should start from
    /// - y: How far from the y origin the crop should start from
    /// - width: The width of the new cropped out image
    /// - height: The height of the new cropped out image.
    ///
    /// Origin is defined as the image top left corner.
    #[must_use]
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Crop {
        Crop {
            x,
            y,
            width,
            height
        }
    }

    /// Return the cropped region of `image` as a new image
    ///
    /// # Errors
    /// [`ImageErrors::AllocationFailed`] if there is no memory for the copy
    ///
    /// # Panics
    /// If the rectangle is empty or doesn't lie completely inside `image`
    pub fn transform(&self, image: &Image) -> Result<Image, ImageErrors> {
        assert!(
            image.is_valid_rect(self.x, self.y, self.width, self.height),
            "Crop rectangle {}x{} at ({},{}) is not inside a {:?} image",
            self.width,
            self.height,
            self.x,
            self.y,
            image.dimensions()
        );
        let mut out = image.new_like(self.width, self.height)?;

        crop(
            image.pixels(),
            image.width(),
            self.x,
            self.y,
            out.pixels_mut(),
            self.width
        );
        image.record_accesses(2 * out.pixels().len());

        Ok(out)
    }
}

impl OperationsTrait for Crop {
    fn name(&self) -> &'static str {
        "Crop"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        *image = self.transform(image)?;

        Ok(())
    }
}

/// Copy the `out_width` wide window of `in_image` with its top left
/// corner at `(x,y)` into `out_image`
///
/// `in_image` is `in_width` samples wide, the window is as tall as
/// `out_image` has rows.
///
/// # Panics
/// If the window reads past the end of `in_image`. Callers make sure it
/// lies inside the image with
/// [`is_valid_rect`](graymap_image::image::Image::is_valid_rect)
pub fn crop(
    in_image: &[u8], in_width: usize, x: usize, y: usize, out_image: &mut [u8], out_width: usize
) {
    if out_width == 0 {
        return;
    }
    for (row, out_row) in out_image.chunks_exact_mut(out_width).enumerate() {
        let start = (y + row) * in_width + x;

        out_row.copy_from_slice(&in_image[start..start + out_width]);
    }
}
