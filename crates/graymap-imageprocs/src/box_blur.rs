/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Box blur filter
//!
//! Every sample becomes the mean of the samples in the
//! `(2*dx+1)` by `(2*dy+1)` box centred on it. Near the edges the box
//! is clipped to the image and the mean is taken over the samples that remain.
//!
//! The box is separable, so we first compute horizontal window sums of each
//! row and then slide a vertical window over those sums, which makes the cost
//! independent of the box size.
use graymap_core::log::debug;
use graymap_image::errors::ImageErrors;
use graymap_image::image::Image;
use graymap_image::traits::OperationsTrait;

/// Perform a box blur
///
/// `dx` and `dy` are the horizontal and vertical radii of the box,
/// the greater they are, the more pronounced the blur.
///
/// # Example
/// ```
/// use graymap_image::image::Image;
/// use graymap_image::traits::OperationsTrait;
/// use graymap_imageprocs::box_blur::BoxBlur;
///
/// let mut image = Image::from_u8(&[0, 30, 90], 3, 1, 255);
/// BoxBlur::new(1, 0).execute(&mut image).unwrap();
///
/// // (0+30)/2, (0+30+90)/3, (30+90)/2
/// assert_eq!(image.pixels(), &[15, 40, 60]);
/// ```
#[derive(Default, Copy, Clone)]
pub struct BoxBlur {
    dx: usize,
    dy: usize
}

impl BoxBlur {
    /// Create a new blur operation.
    ///
    /// # Arguments
    /// - dx: Horizontal radius of the box
    /// - dy: Vertical radius of the box
    #[must_use]
    pub fn new(dx: usize, dy: usize) -> BoxBlur {
        BoxBlur { dx, dy }
    }
}

impl OperationsTrait for BoxBlur {
    fn name(&self) -> &'static str {
        "Box blur"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, height) = image.dimensions();

        if (self.dx == 0 && self.dy == 0) || width == 0 || height == 0 {
            return Ok(());
        }
        // every temporary is allocated before the image is touched
        let mut sums = try_alloc::<u64>(width * height)?;
        let mut column_sums = try_alloc::<u64>(width)?;
        let mut blurred = try_alloc::<u8>(width * height)?;

        box_blur(
            image.pixels(),
            &mut sums,
            &mut column_sums,
            &mut blurred,
            width,
            height,
            self.dx,
            self.dy
        );
        image.pixels_mut().copy_from_slice(&blurred);
        image.record_accesses(image.pixels().len().saturating_mul(4));

        Ok(())
    }
}

fn try_alloc<T: Copy + Default>(len: usize) -> Result<Vec<T>, ImageErrors> {
    let bytes = len.saturating_mul(std::mem::size_of::<T>());
    debug!("Allocating {} bytes of blur scratch space", bytes);

    let mut scratch = Vec::new();
    scratch
        .try_reserve_exact(len)
        .map_err(|_| ImageErrors::AllocationFailed(bytes))?;
    scratch.resize(len, T::default());

    Ok(scratch)
}

/// Number of positions of `0..len` within `radius` of `pos`
#[inline]
fn window_len(pos: usize, radius: usize, len: usize) -> usize {
    let start = pos.saturating_sub(radius);
    let end = pos.saturating_add(radius).min(len - 1);

    end - start + 1
}

/// Blur `in_image` into `out_image`
///
/// # Arguments
/// - in_image: The `width` by `height` input
/// - sums: Scratch space of `width*height` elements
/// - column_sums: Scratch space of `width` elements
/// - out_image: The output, `width*height` samples
/// - dx, dy: Horizontal and vertical radius of the box
#[allow(clippy::too_many_arguments, clippy::cast_possible_truncation)]
pub fn box_blur(
    in_image: &[u8], sums: &mut [u64], column_sums: &mut [u64], out_image: &mut [u8],
    width: usize, height: usize, dx: usize, dy: usize
) {
    if width == 0 || height == 0 {
        // these generate panic paths for chunks_exact so just eliminate them
        return;
    }
    horizontal_sums(in_image, sums, width, dx);

    // prime the vertical window with rows 0..=dy
    column_sums.fill(0);
    for row in sums.chunks_exact(width).take(dy.saturating_add(1)) {
        for (acc, s) in column_sums.iter_mut().zip(row) {
            *acc += *s;
        }
    }

    for (y, out_row) in out_image.chunks_exact_mut(width).enumerate() {
        let rows = window_len(y, dy, height);

        for (x, (out, sum)) in out_row.iter_mut().zip(column_sums.iter()).enumerate() {
            let count = (window_len(x, dx, width) * rows) as u64;
            // the mean of u8 samples fits in a u8
            *out = (*sum / count) as u8;
        }
        // slide the window one row down
        if let Some(entering) = y
            .checked_add(dy)
            .and_then(|p| p.checked_add(1))
            .filter(|p| *p < height)
        {
            let row = &sums[entering * width..(entering + 1) * width];
            for (acc, s) in column_sums.iter_mut().zip(row) {
                *acc += *s;
            }
        }
        if y >= dy {
            let leaving = y - dy;
            let row = &sums[leaving * width..(leaving + 1) * width];
            for (acc, s) in column_sums.iter_mut().zip(row) {
                *acc -= *s;
            }
        }
    }
}

/// Sum every sample within `radius` of each position along rows
fn horizontal_sums(in_image: &[u8], sums: &mut [u64], width: usize, radius: usize) {
    for (in_row, out_row) in in_image
        .chunks_exact(width)
        .zip(sums.chunks_exact_mut(width))
    {
        let mut sum: u64 = in_row
            .iter()
            .take(radius.saturating_add(1))
            .map(|x| u64::from(*x))
            .sum();

        for (x, out) in out_row.iter_mut().enumerate() {
            *out = sum;

            if let Some(entering) = x
                .checked_add(radius)
                .and_then(|p| p.checked_add(1))
                .and_then(|p| in_row.get(p))
            {
                sum += u64::from(*entering);
            }
            if x >= radius {
                sum -= u64::from(in_row[x - radius]);
            }
        }
    }
}
