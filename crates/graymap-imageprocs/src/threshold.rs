/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Binary thresholding
use graymap_image::errors::ImageErrors;
use graymap_image::image::{Image, PIX_MAX};
use graymap_image::traits::OperationsTrait;

/// Turn an image into black and white
///
/// Samples below `threshold` become 0, everything else becomes 255
#[derive(Copy, Clone)]
pub struct Threshold {
    threshold: u8
}

impl Threshold {
    /// Create a new threshold operation
    ///
    /// # Arguments
    /// - threshold: The smallest sample value that becomes white
    #[must_use]
    pub fn new(threshold: u8) -> Threshold {
        Threshold { threshold }
    }
}

impl OperationsTrait for Threshold {
    fn name(&self) -> &'static str {
        "Threshold"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        threshold(image.pixels_mut(), self.threshold);
        image.record_accesses(2 * image.pixels().len());

        Ok(())
    }
}

/// Threshold samples in place
///
/// `pixel[x,y] = if pixel[x,y] < threshold { 0 } else { 255 }`
pub fn threshold(in_channel: &mut [u8], threshold: u8) {
    for x in in_channel.iter_mut() {
        *x = if *x < threshold { 0 } else { PIX_MAX };
    }
}

#[cfg(test)]
mod tests {
    use crate::threshold::threshold;

    #[test]
    fn threshold_boundary_is_white() {
        let mut pixels = [0, 99, 100, 101, 255];

        threshold(&mut pixels, 100);

        assert_eq!(pixels, [0, 0, 255, 255, 255]);
    }

    #[test]
    fn zero_threshold_whitens_everything() {
        let mut pixels = [0, 1, 2];

        threshold(&mut pixels, 0);

        assert_eq!(pixels, [255; 3]);
    }
}
