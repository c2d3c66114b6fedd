/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use graymap_image::image::Image;
use graymap_image::traits::OperationsTrait;
use graymap_imageprocs::blend::Blend;
use graymap_imageprocs::box_blur::BoxBlur;
use graymap_imageprocs::brighten::Brighten;
use graymap_imageprocs::crop::Crop;
use graymap_imageprocs::matching::{locate, matches_at};
use graymap_imageprocs::mirror::Mirror;
use graymap_imageprocs::negative::Negative;
use graymap_imageprocs::paste::Paste;
use graymap_imageprocs::rotate::Rotate90;
use graymap_imageprocs::threshold::Threshold;

fn two_by_two() -> Image {
    Image::from_u8(&[10, 20, 30, 40], 2, 2, 255)
}

#[test]
fn negative_of_two_by_two() {
    let mut image = two_by_two();

    Negative::new().execute(&mut image).unwrap();

    assert_eq!(image.pixels(), &[245, 235, 225, 215]);
}

#[test]
fn rotate_two_by_two() {
    let rotated = Rotate90::new().transform(&two_by_two()).unwrap();

    assert_eq!(rotated.pixels(), &[20, 40, 10, 30]);
}

#[test]
fn negative_ignores_maxval() {
    let mut image = Image::from_u8(&[0, 5], 2, 1, 5);

    Negative::new().execute(&mut image).unwrap();

    assert_eq!(image.pixels(), &[255, 250]);
    assert_eq!(image.maxval(), 5);
}

#[test]
fn threshold_two_by_two() {
    let mut image = two_by_two();

    Threshold::new(25).execute(&mut image).unwrap();

    assert_eq!(image.pixels(), &[0, 0, 255, 255]);
}

#[test]
fn brighten_two_by_two() {
    let mut image = two_by_two();

    Brighten::new(7.0).execute(&mut image).unwrap();

    assert_eq!(image.pixels(), &[70, 140, 210, 255]);
}

#[test]
fn mirror_odd_width() {
    let image = Image::from_u8(&[1, 2, 3], 3, 1, 255);

    let mirrored = Mirror::new().transform(&image).unwrap();

    assert_eq!(mirrored.pixels(), &[3, 2, 1]);
}

#[test]
fn crop_in_place() {
    let mut image = Image::from_u8(&[1, 2, 3, 4, 5, 6, 7, 8, 9], 3, 3, 200);

    Crop::new(1, 1, 2, 2).execute(&mut image).unwrap();

    assert_eq!(image.dimensions(), (2, 2));
    assert_eq!(image.maxval(), 200);
    assert_eq!(image.pixels(), &[5, 6, 8, 9]);
}

#[test]
#[should_panic]
fn crop_outside() {
    let _ = Crop::new(1, 1, 2, 2).transform(&two_by_two());
}

#[test]
#[should_panic]
fn crop_empty() {
    let _ = Crop::new(0, 0, 0, 1).transform(&two_by_two());
}

#[test]
#[should_panic]
fn paste_outside() {
    let mut dest = two_by_two();
    let src = two_by_two();

    let _ = Paste::new(&src, 1, 0).execute(&mut dest);
}

#[test]
fn blend_region() {
    let mut dest = Image::from_u8(&[100; 6], 3, 2, 255);
    let src = Image::from_u8(&[0, 200], 2, 1, 255);

    Blend::new(&src, 1, 1, 0.25).execute(&mut dest).unwrap();

    // 0.25*0 + 0.75*100, 0.25*200 + 0.75*100
    assert_eq!(dest.pixels(), &[100, 100, 100, 100, 75, 125]);
}

#[test]
fn matching_edge_cases() {
    let dest = two_by_two();
    let empty = Image::new(0, 0, 255).unwrap();
    let bigger = Image::new(3, 1, 255).unwrap();

    assert!(matches_at(&dest, 1, 1, &empty));
    assert_eq!(locate(&dest, &empty), Some((0, 0)));
    assert_eq!(locate(&dest, &bigger), None);
    assert_eq!(locate(&dest, &Image::from_u8(&[99], 1, 1, 255)), None);
    assert_eq!(locate(&dest, &Image::from_u8(&[40], 1, 1, 255)), Some((1, 1)));

    // nothing to report in an empty destination
    let empty_dest = Image::new(0, 0, 255).unwrap();
    assert_eq!(locate(&empty_dest, &empty), None);
    assert_eq!(locate(&Image::new(3, 0, 255).unwrap(), &Image::new(2, 0, 255).unwrap()), None);
}

#[test]
fn located_position_matches() {
    let dest = two_by_two();

    for src in [Image::new(0, 0, 255).unwrap(), Image::from_u8(&[30, 40], 2, 1, 255)] {
        let (x, y) = locate(&dest, &src).unwrap();

        assert!(matches_at(&dest, x, y, &src));
    }
}

#[test]
#[should_panic]
fn match_must_fit() {
    let dest = two_by_two();

    matches_at(&dest, 1, 0, &two_by_two());
}

#[test]
#[should_panic]
fn match_position_must_be_valid() {
    let dest = two_by_two();
    let empty = Image::new(0, 0, 255).unwrap();

    matches_at(&dest, 2, 0, &empty);
}

#[test]
fn blur_three_by_three() {
    #[rustfmt::skip]
    let mut image = Image::from_u8(&[
        0,  0,  0,
        0, 90,  0,
        0,  0,  0
    ], 3, 3, 255);

    BoxBlur::new(1, 1).execute(&mut image).unwrap();

    // corners see 4 samples, edges 6, the centre all 9
    #[rustfmt::skip]
    let expected = [
        22, 15, 22,
        15, 10, 15,
        22, 15, 22
    ];
    assert_eq!(image.pixels(), &expected);
}
