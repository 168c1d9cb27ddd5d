/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixelation for `zune-image`
//!
//! This wires the block averaging from `image2pixel-core` into `zune-image`
//! by implementing the `OperationsTrait`, and converts between
//! `zune-image` images and core rasters.
//!
//! # Example
//! - Pixelate an image with 8x8 blocks
//! ```
//! use image2pixel_core::block_size::BlockSize;
//! use image2pixel_ops::pixelate::Pixelate;
//! use zune_core::colorspace::ColorSpace;
//! use zune_image::image::Image;
//! use zune_image::traits::OperationsTrait;
//!
//! let mut image = Image::fill::<u8>(233, ColorSpace::RGB, 100, 100);
//! let pixelate = Pixelate::new(BlockSize::new(8).unwrap());
//! // execute the operation
//! pixelate.execute(&mut image).unwrap();
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
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc
)]

use image2pixel_core::errors::PixelErrors;
use zune_image::errors::ImageErrors;

pub mod convert;
pub mod pixelate;

/// Surface a core error through `zune-image`'s error type
pub(crate) fn to_image_error(error: PixelErrors) -> ImageErrors {
    ImageErrors::GenericString(error.to_string())
}
