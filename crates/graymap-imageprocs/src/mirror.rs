/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use graymap_image::errors::ImageErrors;
use graymap_image::image::Image;
use graymap_image::traits::OperationsTrait;

/// Creates a horizontal mirror image by reflecting the pixels around the central y-axis
///```text
///old image     new image
///┌─────────┐   ┌─────────┐
///│a b c d e│   │e d c b a│
///│f g h i j│   │j i h g f│
///└─────────┘   └─────────┘
///```
#[derive(Default, Copy, Clone)]
pub struct Mirror;

impl Mirror {
    /// Create a new mirror operation
    #[must_use]
    pub fn new() -> Mirror {
        Self
    }

    /// Return a mirrored copy of `image`, leaving it untouched
    ///
    /// # Errors
    /// [`ImageErrors::AllocationFailed`] if there is no memory for the copy
    pub fn transform(&self, image: &Image) -> Result<Image, ImageErrors> {
        let (width, height) = image.dimensions();
        let mut out = image.new_like(width, height)?;

        mirror_horizontal(image.pixels(), out.pixels_mut(), width);
        image.record_accesses(2 * out.pixels().len());

        Ok(out)
    }
}

impl OperationsTrait for Mirror {
    fn name(&self) -> &'static str {
        "Mirror"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let width = image.width();

        // rows reverse in place
        mirror_in_place(image.pixels_mut(), width);
        image.record_accesses(2 * image.pixels().len());

        Ok(())
    }
}

/// Mirror `in_image` into `out_image`, both `width` samples wide
pub fn mirror_horizontal(in_image: &[u8], out_image: &mut [u8], width: usize) {
    if width == 0 {
        return;
    }
    for (in_row, out_row) in in_image
        .chunks_exact(width)
        .zip(out_image.chunks_exact_mut(width))
    {
        for (out, pix) in out_row.iter_mut().zip(in_row.iter().rev()) {
            *out = *pix;
        }
    }
}

/// Mirror an image in place
///
/// Each row is reversed, the middle column of odd widths stays put
pub fn mirror_in_place(in_out_image: &mut [u8], width: usize) {
    if width == 0 {
        return;
    }
    for row in in_out_image.chunks_exact_mut(width) {
        row.reverse();
    }
}

#[cfg(test)]
mod tests {
    use crate::mirror::{mirror_horizontal, mirror_in_place};

    #[test]
    fn odd_width_keeps_middle_column() {
        let input = [1, 2, 3, 4, 5, 6];
        let mut output = [0; 6];

        mirror_horizontal(&input, &mut output, 3);

        assert_eq!(output, [3, 2, 1, 6, 5, 4]);
    }

    #[test]
    fn copy_and_in_place_agree() {
        let input: Vec<u8> = (0..40).collect();
        let mut copied = vec![0; 40];
        let mut in_place = input.clone();

        mirror_horizontal(&input, &mut copied, 8);
        mirror_in_place(&mut in_place, 8);

        assert_eq!(copied, in_place);
    }
}
