/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Sub-image matching
//!
//! A sub-image matches at `(x,y)` when every sample of it equals the
//! destination sample it would cover if pasted there.
//!
//! Searching is brute force, every top left position is tried in
//! raster order and the first match wins.
use graymap_image::image::Image;

/// Return the raster index (into `src`) of the first sample of `src`
/// that differs from `dest` when `src` is placed at `(start_x, start_y)`,
/// or `None` if all samples agree
///
/// Samples are compared in raster order of `src` and comparison stops
/// at the first difference.
///
/// # Panics
/// If `src` doesn't fit inside `dest` at `(start_x, start_y)`
pub fn first_mismatch(
    dest: &[u8], width_dest: usize, src: &[u8], width_src: usize, start_x: usize,
    start_y: usize
) -> Option<usize> {
    if width_src == 0 || src.is_empty() {
        return None;
    }
    let mut index = 0;

    for (src_row, dst_row) in src
        .chunks_exact(width_src)
        .zip(dest[start_y * width_dest..].chunks_exact(width_dest))
    {
        let dst_row = &dst_row[start_x..start_x + width_src];

        if let Some(pos) = src_row.iter().zip(dst_row).position(|(a, b)| a != b) {
            return Some(index + pos);
        }
        index += width_src;
    }
    None
}

/// Compare without recording, returning whether `src` matched and
/// how many samples were compared
fn compare_at(dest: &Image, x: usize, y: usize, src: &Image) -> (bool, usize) {
    let n = src.pixels().len();

    match first_mismatch(dest.pixels(), dest.width(), src.pixels(), src.width(), x, y) {
        Some(index) => (false, index + 1),
        None => (true, n)
    }
}

/// Return true if `src` matches `dest` with its top left corner at `(x,y)`
///
/// An empty `src` matches anywhere.
///
/// # Panics
/// - If `(x,y)` isn't a valid position of `dest`
/// - If `src` doesn't fit inside `dest` at `(x,y)`
///
/// # Example
/// ```
/// use graymap_image::image::Image;
/// use graymap_imageprocs::matching::matches_at;
///
/// let dest = Image::from_u8(&[1, 2, 3, 4, 5, 6], 3, 2, 255);
/// let src = Image::from_u8(&[2, 3], 2, 1, 255);
///
/// assert!(matches_at(&dest, 1, 0, &src));
/// assert!(!matches_at(&dest, 1, 1, &src));
/// ```
pub fn matches_at(dest: &Image, x: usize, y: usize, src: &Image) -> bool {
    assert!(
        dest.is_valid_position(x, y),
        "Position ({x},{y}) is outside a {:?} image",
        dest.dimensions()
    );
    let (src_width, src_height) = src.dimensions();

    if src_width == 0 || src_height == 0 {
        return true;
    }
    assert!(
        dest.is_valid_rect(x, y, src_width, src_height),
        "A {src_width}x{src_height} image does not fit at ({x},{y}) of a {:?} image",
        dest.dimensions()
    );
    let (matched, compared) = compare_at(dest, x, y, src);
    dest.record_accesses(2 * compared);

    matched
}

/// Find the first position, in raster order, where `src` matches `dest`
///
/// Returns `None` if `src` is larger than `dest` in either dimension
/// or if it matches nowhere. An empty `src` is found at `(0,0)` unless
/// `dest` is itself empty, in which case there is no position to report.
///
/// # Example
/// ```
/// use graymap_image::image::Image;
/// use graymap_imageprocs::matching::locate;
///
/// let dest = Image::from_u8(&[1, 2, 3, 4, 5, 6], 3, 2, 255);
/// let src = Image::from_u8(&[5, 6], 2, 1, 255);
///
/// assert_eq!(locate(&dest, &src), Some((1, 1)));
/// ```
pub fn locate(dest: &Image, src: &Image) -> Option<(usize, usize)> {
    let (dest_width, dest_height) = dest.dimensions();
    let (src_width, src_height) = src.dimensions();

    if src_width > dest_width || src_height > dest_height {
        return None;
    }
    if src_width == 0 || src_height == 0 {
        return dest.is_valid_position(0, 0).then_some((0, 0));
    }
    let mut compared = 0_usize;
    let mut found = None;

    'search: for y in 0..=dest_height - src_height {
        for x in 0..=dest_width - src_width {
            let (matched, count) = compare_at(dest, x, y, src);
            compared = compared.saturating_add(count);

            if matched {
                found = Some((x, y));
                break 'search;
            }
        }
    }
    dest.record_accesses(compared.saturating_mul(2));

    found
}
