/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Rotate an image by 90 degrees counter-clockwise
//!
//! A 90 degree rotation is a bit cache unfriendly,
//! since widths become heights
//!
//! ```text
//!                    ┌──────┐
//! ┌─────────┐        │ ◄─── │
//! │ ▲       │        │ 90   │
//! │ │       │        │      │
//! └─┴───────┘        │      │
//!                    └──────┘
//! ```
//!
//! The right most column becomes the top row
//!
//! ```text
//! [1,2,3]    [3,6,9]
//! [4,5,6] -> [2,5,8]
//! [7,8,9]    [1,4,7]
//! ```
use graymap_image::errors::ImageErrors;
use graymap_image::image::Image;
use graymap_image::traits::OperationsTrait;

/// Rotate an image 90 degrees counter-clockwise
///
/// The rotated image is `height` pixels wide and `width` pixels tall
#[derive(Default, Copy, Clone)]
pub struct Rotate90;

impl Rotate90 {
    /// Create a new rotate operation
    #[must_use]
    pub fn new() -> Rotate90 {
        Self
    }

    /// Return a rotated copy of `image`, leaving it untouched
    ///
    /// # Errors
    /// [`ImageErrors::AllocationFailed`] if there is no memory for the copy
    pub fn transform(&self, image: &Image) -> Result<Image, ImageErrors> {
        let (width, height) = image.dimensions();
        let mut out = image.new_like(height, width)?;

        rotate_90_ccw(image.pixels(), out.pixels_mut(), width, height);
        image.record_accesses(2 * out.pixels().len());

        Ok(out)
    }
}

impl OperationsTrait for Rotate90 {
    fn name(&self) -> &'static str {
        "Rotate 90"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        *image = self.transform(image)?;

        Ok(())
    }
}

/// Rotate `in_image` counter-clockwise into `out_image`
///
/// Sample `(x,y)` of the `width` by `height` input lands on
/// `(y, width-1-x)` of the `height` by `width` output.
pub fn rotate_90_ccw(in_image: &[u8], out_image: &mut [u8], width: usize, height: usize) {
    if width == 0 || height == 0 {
        // these generate panic paths for chunks_exact so just eliminate them
        return;
    }
    // output row `r` is input column `width-1-r` read top to bottom
    for (out_row, column) in out_image
        .chunks_exact_mut(height)
        .zip((0..width).rev())
    {
        for (out, pix) in out_row
            .iter_mut()
            .zip(in_image[column..].iter().step_by(width))
        {
            *out = *pix;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::rotate::rotate_90_ccw;

    #[test]
    fn rotate_square() {
        let input = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        let mut output = [0; 9];

        rotate_90_ccw(&input, &mut output, 3, 3);

        assert_eq!(output, [3, 6, 9, 2, 5, 8, 1, 4, 7]);
    }

    #[test]
    fn rotate_wide() {
        // 3x2 becomes 2x3
        let input = [1, 2, 3, 4, 5, 6];
        let mut output = [0; 6];

        rotate_90_ccw(&input, &mut output, 3, 2);

        assert_eq!(output, [3, 6, 2, 5, 1, 4]);
    }
}
