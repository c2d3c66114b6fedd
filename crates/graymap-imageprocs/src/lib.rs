/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for `graymap-image`
//!
//! This implements the common grayscale processing routines to be used with `graymap-image`
//!
//! Each module exposes a plain slice kernel and an operation implementing
//! the `OperationsTrait` defined by graymap-image.
//!
//! Operations report the samples they read and write to the image's
//! access counter when one is attached.
//!
//! # Example
//! - Threshold a rotated copy of an image
//! ```
//! use graymap_image::image::Image;
//! use graymap_image::traits::OperationsTrait;
//! use graymap_imageprocs::rotate::Rotate90;
//! use graymap_imageprocs::threshold::Threshold;
//!
//! let image = Image::from_u8(&[10, 200, 30, 40], 2, 2, 255);
//!
//! let mut rotated = Rotate90::new().transform(&image).unwrap();
//! Threshold::new(35).execute(&mut rotated).unwrap();
//!
//! assert_eq!(rotated.pixels(), &[255, 255, 0, 0]);
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::inline_always,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::must_use_candidate
)]

pub mod blend;
pub mod box_blur;
pub mod brighten;
pub mod crop;
pub mod matching;
pub mod mirror;
pub mod negative;
pub mod paste;
pub mod rotate;
pub mod threshold;
