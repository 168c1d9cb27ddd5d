/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixelation of 8-bit rasters
//!
//! This crate replaces square blocks of a raster with the
//! channel-wise average of the block. It has no notion of files or image
//! formats, a codec produces a [`RasterView`](raster::RasterView) or
//! [`Raster`](raster::Raster) and gets a new `Raster` back.
//!
//! # Example
//! - Pixelate a 100x100 red image with 10x10 blocks
//! ```
//! use image2pixel_core::block_size::BlockSize;
//! use image2pixel_core::layout::PixelLayout;
//! use image2pixel_core::raster::Raster;
//!
//! let image = Raster::fill(&[255, 0, 0], 100, 100, PixelLayout::Rgb);
//! let output = image.pixelate(BlockSize::default());
//!
//! assert_eq!(output, image);
//! ```
//!
//! # Features
//! - `threads`: Fill block rows on scoped threads. Enabled by default.
//! - `log`: Emit `trace` messages through the `log` crate.
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
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

pub use block_size::BlockSize;
pub use errors::PixelErrors;
pub use layout::PixelLayout;
pub use pixelate::{pixelate, pixelate_single_threaded, try_pixelate};
pub use raster::{Raster, RasterView};

pub mod block_size;
pub mod errors;
pub mod grid;
pub mod layout;
#[cfg(not(feature = "log"))]
pub mod log;
pub mod pixelate;
pub mod raster;

#[cfg(feature = "log")]
pub use log;
