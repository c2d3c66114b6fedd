/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An 8 bit grayscale image library
//!
//! This crate provides the [`Image`](image::Image) type, a rectangle of
//! 8 bit samples, together with loading and saving it in the raw PGM
//! format and the [`OperationsTrait`](traits::OperationsTrait) that
//! image operations implement.
//!
//! The operations themselves live in the `graymap-imageprocs` crate.
//!
//! # Features
//! - `log`: Log decoding progress and executed operations through the `log` crate
//! - `serde-support`: Serialize [`ImageMetadata`](metadata::ImageMetadata)
//!
//! # Example
//! - Count pixel accesses while working on an image
//! ```
//! use std::sync::Arc;
//! use graymap_core::instrument::{Counter, Instrumentation};
//! use graymap_image::image::Image;
//!
//! let instr = Arc::new(Instrumentation::new());
//! let mut image = Image::new(4, 4, 255).unwrap();
//! image.set_counter(instr.clone());
//!
//! image.set_pixel(1, 1, 128);
//! assert_eq!(image.stats(), (0, 128));
//! // one write plus a scan of sixteen pixels
//! assert_eq!(instr.get(Counter::PixelMemory), 17);
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
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

pub mod codecs;
pub mod errors;
pub mod image;
pub mod metadata;
mod serde;
pub mod traits;
