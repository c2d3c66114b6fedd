/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Brighten or darken an image by scaling its samples
use graymap_image::errors::ImageErrors;
use graymap_image::image::Image;
use graymap_image::traits::OperationsTrait;

/// Multiply every sample by a factor, saturating at 255
///
/// Factors below one darken the image.
///
/// # Example
/// ```
/// use graymap_image::image::Image;
/// use graymap_image::traits::OperationsTrait;
/// use graymap_imageprocs::brighten::Brighten;
///
/// let mut image = Image::from_u8(&[10, 100, 200], 3, 1, 255);
/// Brighten::new(1.5).execute(&mut image).unwrap();
///
/// assert_eq!(image.pixels(), &[15, 150, 255]);
/// ```
#[derive(Copy, Clone)]
pub struct Brighten {
    factor: f64
}

impl Brighten {
    /// Create a new brighten operation
    ///
    /// # Panics
    /// If `factor` is negative or NaN
    #[must_use]
    pub fn new(factor: f64) -> Brighten {
        assert!(factor >= 0.0, "Brighten factor must be non-negative, got {factor}");

        Brighten { factor }
    }
}

impl OperationsTrait for Brighten {
    fn name(&self) -> &'static str {
        "Brighten"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        brighten(image.pixels_mut(), self.factor);
        image.record_accesses(2 * image.pixels().len());

        Ok(())
    }
}

/// Scale samples in place
///
/// `pixel[x,y] = min(trunc(pixel[x,y] * factor), 255)`
///
/// # Panics
/// If `factor` is negative or NaN
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn brighten(in_out_image: &mut [u8], factor: f64) {
    assert!(factor >= 0.0, "Brighten factor must be non-negative, got {factor}");

    for x in in_out_image.iter_mut() {
        // float to int casts truncate and saturate
        *x = (f64::from(*x) * factor) as u8;
    }
}

#[cfg(test)]
mod tests {
    use crate::brighten::{brighten, Brighten};

    #[test]
    fn brighten_truncates_and_saturates() {
        let mut pixels = [0, 1, 3, 100, 128, 255];

        brighten(&mut pixels, 1.5);

        assert_eq!(pixels, [0, 1, 4, 150, 192, 255]);
    }

    #[test]
    fn darken() {
        let mut pixels = [0, 3, 255];

        brighten(&mut pixels, 0.5);

        assert_eq!(pixels, [0, 1, 127]);
    }

    #[test]
    fn unit_factor_is_identity() {
        let original: Vec<u8> = (0..=255).collect();
        let mut pixels = original.clone();

        brighten(&mut pixels, 1.0);

        assert_eq!(pixels, original);
    }

    #[test]
    #[should_panic]
    fn negative_factor() {
        let _ = Brighten::new(-0.5);
    }

    #[test]
    #[should_panic]
    fn nan_factor() {
        let _ = Brighten::new(f64::NAN);
    }

    #[test]
    #[should_panic]
    fn kernel_rejects_negative_factor() {
        let mut pixels = [10, 20];

        brighten(&mut pixels, -1.0);
    }
}
