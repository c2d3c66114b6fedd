/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder options
use std::fmt::{Debug, Formatter};

use crate::instrument::SharedCounter;

/// Decoder options
///
/// Options are built by chaining setters on the default value
///
/// # Example
/// ```
/// use graymap_core::options::DecoderOptions;
///
/// let options = DecoderOptions::default().set_max_width(100).set_max_height(50);
/// assert_eq!(options.max_width(), 100);
/// assert_eq!(options.max_height(), 50);
/// ```
#[derive(Clone)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: no limit
    max_width:  usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: no limit
    max_height: usize,
    /// Counter receiving the pixel accesses made while decoding
    counter:    Option<SharedCounter>
}

impl Default for DecoderOptions {
    fn default() -> Self {
        DecoderOptions {
            max_width:  usize::MAX,
            max_height: usize::MAX,
            counter:    None
        }
    }
}

impl Debug for DecoderOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecoderOptions")
            .field("max_width", &self.max_width)
            .field("max_height", &self.max_height)
            .field("counter", &self.counter.is_some())
            .finish()
    }
}

impl DecoderOptions {
    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn max_width(&self) -> usize {
        self.max_width
    }
    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn max_height(&self) -> usize {
        self.max_height
    }
    /// The counter decoded pixels are reported to, if any
    pub fn counter(&self) -> Option<&SharedCounter> {
        self.counter.as_ref()
    }
    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    #[must_use]
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }
    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    #[must_use]
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }
    /// Report pixel accesses made while decoding to `counter`
    ///
    /// Images created by the decoder inherit the counter.
    #[must_use]
    pub fn set_counter(mut self, counter: SharedCounter) -> Self {
        self.counter = Some(counter);
        self
    }
}
