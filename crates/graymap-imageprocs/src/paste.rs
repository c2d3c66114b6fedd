/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Copy one image on top of another
use graymap_image::errors::ImageErrors;
use graymap_image::image::Image;
use graymap_image::traits::OperationsTrait;

/// Paste an image into the destination image with its top left
/// corner at `(x,y)`
///
/// The pasted image must fit completely inside the destination
pub struct Paste<'src> {
    image: &'src Image,
    x:     usize,
    y:     usize
}

impl<'src> Paste<'src> {
    /// Create a new paste operation
    ///
    /// # Arguments
    /// - image: The source image, this will be copied on top of the destination image
    /// - x, y: Where the source's top left corner lands in the destination
    #[must_use]
    pub fn new(image: &'src Image, x: usize, y: usize) -> Paste<'src> {
        Paste { image, x, y }
    }
}

impl OperationsTrait for Paste<'_> {
    fn name(&self) -> &'static str {
        "Paste"
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

        paste(
            self.image.pixels(),
            src_width,
            image.pixels_mut(),
            dst_width,
            self.x,
            self.y
        );
        image.record_accesses(2 * self.image.pixels().len());

        Ok(())
    }
}

/// Copy `src`, a `width_src` wide image, into `dest`, a `width_dest`
/// wide image, with its top left corner at `(start_x, start_y)`
///
/// # Panics
/// If `src` runs past the end of `dest`. Callers make sure it fits with
/// [`is_valid_rect`](graymap_image::image::Image::is_valid_rect)
pub fn paste(
    src: &[u8], width_src: usize, dest: &mut [u8], width_dest: usize, start_x: usize,
    start_y: usize
) {
    if width_src == 0 {
        return;
    }
    for (row, src_row) in src.chunks_exact(width_src).enumerate() {
        let start = (start_y + row) * width_dest + start_x;

        dest[start..start + width_src].copy_from_slice(src_row);
    }
}

#[cfg(test)]
mod tests {
    use crate::paste::paste;

    #[test]
    fn paste_corner() {
        let src = [1, 2, 3, 4];
        let mut dest = [0; 9];

        paste(&src, 2, &mut dest, 3, 1, 1);

        assert_eq!(dest, [0, 0, 0, 0, 1, 2, 0, 3, 4]);
    }

    #[test]
    #[should_panic]
    fn source_past_the_last_row() {
        let mut dest = [0; 4];

        paste(&[1, 2, 3, 4], 2, &mut dest, 2, 0, 1);
    }
}
