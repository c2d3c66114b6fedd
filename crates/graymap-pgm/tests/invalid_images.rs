/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use graymap_core::bytestream::ZCursor;
use graymap_core::options::DecoderOptions;
use graymap_pgm::{HeaderField, PGMDecodeErrors, PGMDecoder};

fn decode_err(data: &[u8]) -> PGMDecodeErrors {
    PGMDecoder::new(ZCursor::new(data)).decode().unwrap_err()
}

#[test]
fn empty_stream() {
    let err = decode_err(b"");

    assert!(matches!(err, PGMDecodeErrors::InvalidMagic(_)));
}

#[test]
fn wrong_magic() {
    assert!(matches!(decode_err(b"P6\n1 1\n255\n\0"), PGMDecodeErrors::InvalidMagic(_)));
    assert!(matches!(decode_err(b"p5\n1 1\n255\n\0"), PGMDecodeErrors::InvalidMagic(_)));
}

#[test]
fn magic_must_be_a_token() {
    let err = decode_err(b"P51 1\n255\n\0");

    assert!(matches!(err, PGMDecodeErrors::InvalidMagic(x) if x.contains("P51")));
}

#[test]
fn negative_width() {
    let err = decode_err(b"P5\n-2 1\n255\n\0\0");

    assert!(matches!(err, PGMDecodeErrors::InvalidHeader(HeaderField::Width, _)));
}

#[test]
fn negative_height() {
    let err = decode_err(b"P5\n2 -1\n255\n\0\0");

    assert!(matches!(err, PGMDecodeErrors::InvalidHeader(HeaderField::Height, _)));
}

#[test]
fn missing_width() {
    let err = decode_err(b"P5\nx 1\n255\n\0");

    assert!(matches!(err, PGMDecodeErrors::InvalidHeader(HeaderField::Width, _)));
}

#[test]
fn width_overflow() {
    let err = decode_err(b"P5\n99999999999999999999999 1\n255\n\0");

    assert!(matches!(err, PGMDecodeErrors::InvalidHeader(HeaderField::Width, _)));
}

#[test]
fn maxval_out_of_range() {
    let zero = decode_err(b"P5\n1 1\n0\n\0");
    let big = decode_err(b"P5\n1 1\n256\n\0");
    let sixteen_bit = decode_err(b"P5\n1 1\n65535\n\0\0");

    for err in [zero, big, sixteen_bit] {
        assert!(matches!(err, PGMDecodeErrors::InvalidHeader(HeaderField::Maxval, _)));
    }
}

#[test]
fn whitespace_after_maxval() {
    let err = decode_err(b"P5\n1 1\n255x");
    assert!(matches!(err, PGMDecodeErrors::WhitespaceExpected(Some(b'x'))));

    let err = decode_err(b"P5\n1 1\n255");
    assert!(matches!(err, PGMDecodeErrors::WhitespaceExpected(None)));
}

#[test]
fn truncated_raster() {
    let err = decode_err(b"P5\n2 2\n255\n\x01\x02\x03");

    assert!(matches!(
        err,
        PGMDecodeErrors::TruncatedData {
            expected: 4,
            found:    3
        }
    ));
}

#[test]
fn dimensions_above_limit() {
    let options = DecoderOptions::default().set_max_width(10);
    let mut decoder = PGMDecoder::new_with_options(options, ZCursor::new(b"P5\n11 1\n255\n"));

    let err = decoder.decode().unwrap_err();

    assert!(matches!(err, PGMDecodeErrors::LargeDimensions(10, 11)));
    assert!(format!("{err}").contains("at most 10"));
    assert_eq!(decoder.dimensions(), None);
}

#[test]
fn dimensions_at_limit() {
    let options = DecoderOptions::default().set_max_width(2);
    let mut decoder = PGMDecoder::new_with_options(options, ZCursor::new(b"P5\n2 1\n255\n\x01\x02"));

    assert_eq!(decoder.decode().unwrap(), [1, 2]);
}

#[test]
fn no_limit_by_default() {
    let mut decoder = PGMDecoder::new(ZCursor::new(b"P5\n70000 0\n255\n"));

    decoder.read_headers().unwrap();
    assert_eq!(decoder.dimensions(), Some((70000, 0)));
}

#[test]
fn errors_are_printable() {
    let err = decode_err(b"P5\n1 1\n0\n");

    assert!(format!("{err}").contains("maxval"));
}
