/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Mix an image into another
use graymap_image::errors::ImageErrors;
use graymap_image::image::Image;
use graymap_image::traits::OperationsTrait;

/// Create a blend image filter which
/// mixes an image into the destination at `(x,y)`
/// based on a configurable alpha
///
/// Each covered destination sample becomes
/// `alpha*src + (1-alpha)*dest`, clamped to `0..=255` and truncated.
/// Alphas outside `0..=1` are accepted and over or under expose.
pub struct Blend<'src> {
    image: &'src Image,
    x:     usize,
    y:     usize,
    alpha: f64
}

impl<'src> Blend<'src> {
    /// Create a new blend filter
    ///
    /// # Arguments
    /// - image: The source image
    /// - x, y: Where the source's top left corner lands in the destination
    /// - alpha: Weight of the source, `1.0` copies it, `0.0` leaves the destination as is
    #[must_use]
    pub fn new(image: &'src Image, x: usize, y: usize, alpha: f64) -> Blend<'src> {
        Blend { image, x, y, alpha }
    }
}

impl OperationsTrait for Blend<'_> {
    fn name(&self) -> &'static str {
        "Blend"
    }

    /// # Panics
    /// If the source doesn't fit at `(x,y)`
    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (src_width, src_height) = self.image.dimensions();

        assert!(
            image.is_valid_rect(self.x, self.y, src_width, src_height),
            "A {}x{} image does not fit at ({},{}) of a {:?} image",
            src_width,
            src_height,
            self.x,
            self.y,
            image.dimensions()
        );
        let dst_width = image.width();

        blend(
            self.image.pixels(),
            src_width,
            image.pixels_mut(),
            dst_width,
            self.x,
            self.y,
            self.alpha
        );
        image.record_accesses(3 * self.image.pixels().len());

        Ok(())
    }
}

/// Blend `src` into `dest` with its top left corner at `(start_x, start_y)`
///
/// Parts of `src` falling outside `dest` are ignored.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn blend(
    src: &[u8], width_src: usize, dest: &mut [u8], width_dest: usize, start_x: usize,
    start_y: usize, src_alpha: f64
) {
    if width_src == 0 || width_dest == 0 {
        return;
    }
    let dest_alpha = 1.0 - src_alpha;

    for (dst_width, src_width) in dest
        .chunks_exact_mut(width_dest)
        .skip(start_y)
        .zip(src.chunks_exact(width_src))
    {
        let Some(dst_width) = dst_width.get_mut(start_x..) else {
            continue;
        };
        for (dest, src) in dst_width.iter_mut().zip(src_width) {
            // formula is (src_alpha) * src  + (dest_alpha) * dest
            let mixed = (src_alpha * f64::from(*src)) + (dest_alpha * f64::from(*dest));
            *dest = mixed.clamp(0.0, 255.0) as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::blend::blend;

    #[test]
    fn half_blend_truncates() {
        let src = [10, 255];
        let mut dest = [21, 0];

        blend(&src, 2, &mut dest, 2, 0, 0, 0.5);

        // 15.5 and 127.5
        assert_eq!(dest, [15, 127]);
    }

    #[test]
    fn out_of_range_alpha_clamps() {
        let src = [200, 10];
        let mut dest = [100, 100];

        blend(&src, 2, &mut dest, 2, 0, 0, 2.0);

        // 300 and -80
        assert_eq!(dest, [255, 0]);
    }

    #[test]
    fn zero_alpha_keeps_destination() {
        let src = [1, 2, 3, 4];
        let mut dest = [9, 8, 7, 6, 5, 4];

        blend(&src, 2, &mut dest, 3, 1, 0, 0.0);

        assert_eq!(dest, [9, 8, 7, 6, 5, 4]);
    }
}
