/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde-support")]

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::metadata::ImageMetadata;

impl Serialize for ImageMetadata {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        const STRUCT_FIELDS: usize = 4;
        let mut state = serializer.serialize_struct("Metadata", STRUCT_FIELDS)?;

        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("maxval", &self.maxval)?;
        state.serialize_field("format", "PGM")?;

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use crate::image::Image;

    #[test]
    fn metadata_to_json() {
        let image = Image::new(3, 2, 200).unwrap();

        let json = serde_json::to_string(&image.metadata()).unwrap();

        assert_eq!(
            json,
            r#"{"width":3,"height":2,"maxval":200,"format":"PGM"}"#
        );
    }
}
