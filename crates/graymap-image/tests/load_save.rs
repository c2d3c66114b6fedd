/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;
use std::sync::Arc;

use graymap_core::bytestream::ZCursor;
use graymap_core::instrument::{Counter, Instrumentation};
use graymap_core::options::DecoderOptions;
use graymap_image::errors::ErrorKind;
use graymap_image::image::Image;
use nanorand::Rng;

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("graymap-{}-{name}", std::process::id()))
}

fn random_image(rand: &mut nanorand::WyRand, width: usize, height: usize) -> Image {
    let mut pixels = vec![0_u8; width * height];
    rand.fill(&mut pixels);

    Image::from_u8(&pixels, width, height, 255)
}

#[test]
fn save_then_open() {
    let mut rand = nanorand::WyRand::new_seed(7);
    let path = temp_file("round-trip.pgm");

    for (width, height) in [(1, 1), (13, 7), (64, 3), (0, 4)] {
        let image = random_image(&mut rand, width, height);

        image.save(&path).unwrap();
        let loaded = Image::open(&path).unwrap();

        assert_eq!(loaded, image);
    }
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn maxval_survives_round_trip() {
    let path = temp_file("maxval.pgm");
    let image = Image::from_u8(&[0, 1, 2, 3, 4, 5], 3, 2, 5);

    image.save(&path).unwrap();
    let loaded = Image::open(&path).unwrap();

    assert_eq!(loaded.maxval(), 5);
    assert_eq!(loaded.pixels(), image.pixels());
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn large_dimensions_round_trip() {
    let mut rand = nanorand::WyRand::new_seed(11);
    let path = temp_file("large.pgm");

    for (width, height) in [(70_000, 1), (1, 70_000)] {
        let image = random_image(&mut rand, width, height);

        image.save(&path).unwrap();
        let loaded = Image::open(&path).unwrap();

        assert_eq!(loaded, image);
    }
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn save_into_missing_directory() {
    let path = temp_file("no-such-dir").join("image.pgm");
    let image = Image::new(2, 2, 255).unwrap();

    let err = image.save(&path).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(err.raw_os_error().is_some());
    assert!(!path.exists());
}

#[test]
fn missing_file() {
    let err = Image::open(temp_file("does-not-exist.pgm")).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Io);
    assert_eq!(err.cause(), "Open failed");
    assert!(err.raw_os_error().is_some());
}

#[test]
fn invalid_files() {
    let cases: [(&[u8], &str); 5] = [
        (b"P2\n1 1\n255\n0", "Invalid file format"),
        (b"P5\n-1 1\n255\n\0", "Invalid width"),
        (b"P5\n1 x\n255\n\0", "Invalid height"),
        (b"P5\n1 1\n300\n\0", "Invalid maxval"),
        (b"P5\n1 1\n255a", "Whitespace expected")
    ];
    for (data, cause) in cases {
        let err = Image::read(ZCursor::new(data), DecoderOptions::default()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Format);
        assert_eq!(err.cause(), cause);
    }
}

#[test]
fn truncated_file() {
    let err = Image::read(
        ZCursor::new(b"P5\n4 4\n255\n\x01\x02"),
        DecoderOptions::default()
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Truncated);
    assert_eq!(err.cause(), "Reading pixels");
}

#[test]
fn loaded_image_inherits_counter() {
    let instr = Arc::new(Instrumentation::new());
    let options = DecoderOptions::default().set_counter(instr.clone());

    let image = Image::read(ZCursor::new(b"P5\n3 2\n255\n\x01\x02\x03\x04\x05\x06"), options).unwrap();
    assert_eq!(instr.get(Counter::PixelMemory), 6);

    let mut out = vec![];
    let written = image.write_to(&mut out).unwrap();

    assert_eq!(written, out.len());
    assert_eq!(instr.get(Counter::PixelMemory), 12);
}

#[test]
fn destroy_empties_slot() {
    let mut slot = Some(Image::new(2, 2, 255).unwrap());

    Image::destroy(&mut slot);
    assert!(slot.is_none());

    // destroying nothing is fine
    Image::destroy(&mut slot);
    assert!(slot.is_none());
}

#[test]
fn derived_image_shares_counter() {
    let instr = Arc::new(Instrumentation::new());
    let mut image = Image::new(2, 2, 17).unwrap();
    image.set_counter(instr.clone());

    let mut derived = image.new_like(5, 1).unwrap();
    derived.set_pixel(4, 0, 1);

    assert_eq!(derived.maxval(), 17);
    assert_eq!(instr.get(Counter::PixelMemory), 1);
}
