/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all graymap libraries
//!
//! This crate provides a set of core routines shared
//! by the decoder, encoder and image processing crates
//! under the `graymap` umbrella
//!
//! It currently contains
//!
//! - A bytestream reader and writer abstraction over in-memory buffers and `std::io` types
//! - Decoder options shared by the decoders
//! - Instrumentation counters used to observe pixel memory accesses
//! - A logging shim that forwards to the `log` crate when enabled
//!
//! # Features
//!  - `log`: Forward the crate's logging macros to the `log` facade.
//!
//!  - `serde`: Enables serializing of instrumentation snapshots
//!
#![macro_use]

pub mod bytestream;
pub mod instrument;
pub mod log;
pub mod options;
