/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits implemented by image operations
use graymap_core::log::trace;

use crate::errors::ImageErrors;
use crate::image::Image;

/// This encapsulates an image operation.
///
/// All operations that modify an image implement this,
/// the processing crate provides the concrete operations
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Execute the operation on the image, without logging
    ///
    /// # Arguments
    /// - image: A mutable reference to an image which
    /// this operation will manipulate
    ///
    /// # Errors
    /// Any operations error will be propagated to the caller,
    /// the image is left untouched when that happens
    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors>;

    /// Execute the operation on the image
    ///
    /// # Errors
    /// Any operations error will be propagated to the caller
    fn execute(&self, image: &mut Image) -> Result<(), ImageErrors> {
        trace!("Running {} on a {:?} image", self.name(), image.dimensions());

        self.execute_impl(image)
    }

    /// Run the operation on a copy of the image, leaving
    /// the original unchanged
    ///
    /// # Errors
    /// Any operations error will be propagated to the caller
    fn clone_and_execute(&self, image: &Image) -> Result<Image, ImageErrors> {
        let mut copy = image.clone();
        self.execute(&mut copy)?;

        Ok(copy)
    }
}
