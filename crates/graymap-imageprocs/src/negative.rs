/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Photographic negative of an image
use graymap_image::errors::ImageErrors;
use graymap_image::image::{Image, PIX_MAX};
use graymap_image::traits::OperationsTrait;

/// Replace every sample with its negative
///
/// The negative is taken against 255, not against the image's
/// maxval, so images with a lower white point go out of range.
#[derive(Default, Copy, Clone)]
pub struct Negative;

impl Negative {
    /// Create a new negative operation
    #[must_use]
    pub fn new() -> Negative {
        Self
    }
}

impl OperationsTrait for Negative {
    fn name(&self) -> &'static str {
        "Negative"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        negative(image.pixels_mut());
        image.record_accesses(2 * image.pixels().len());

        Ok(())
    }
}

/// Negate samples
///
/// The formula for negating an 8 bit sample
///  is `pixel[x,y] = 255-pixel[x,y]`
pub fn negative(in_out_image: &mut [u8]) {
    in_out_image.iter_mut().for_each(|x| *x = PIX_MAX - *x);
}
