/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixelate operation
//!
//! `zune-image` stores every channel in its own plane. Since a block
//! average is computed per channel, each plane is pixelated on its own as a
//! single channel raster, which gives the same result as pixelating the
//! interleaved image.
use image2pixel_core::block_size::BlockSize;
use image2pixel_core::layout::PixelLayout;
#[cfg(not(feature = "threads"))]
use image2pixel_core::pixelate::pixelate;
#[cfg(feature = "threads")]
use image2pixel_core::pixelate::pixelate_single_threaded;
use image2pixel_core::raster::{Raster, RasterView};
use zune_core::bit_depth::BitType;
use zune_core::colorspace::ColorSpace;
use zune_core::log::trace;
use zune_image::channel::Channel;
use zune_image::errors::ImageErrors;
use zune_image::image::Image;
use zune_image::traits::OperationsTrait;

use crate::to_image_error;

/// Replace square blocks of an image with their average color
///
/// Blocks are anchored at the top left corner, blocks on the right and
/// bottom edge are truncated and averaged over the pixels they contain.
/// The alpha channel is averaged like any other channel.
///
/// This operation is multithreaded capable
#[derive(Copy, Clone, Debug, Default)]
pub struct Pixelate {
    block_size: BlockSize
}

impl Pixelate {
    /// Create a new pixelate operation
    ///
    /// # Arguments
    /// - block_size: Edge length of a block in pixels, 1 leaves the image untouched
    #[must_use]
    pub fn new(block_size: BlockSize) -> Pixelate {
        Pixelate { block_size }
    }

    pub const fn block_size(&self) -> BlockSize {
        self.block_size
    }
}

impl OperationsTrait for Pixelate {
    fn name(&self) -> &'static str {
        "Pixelate"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        if self.block_size.is_identity() {
            trace!("Block size is 1, nothing to pixelate");
            return Ok(());
        }
        let (width, height) = image.dimensions();
        let depth = image.depth().bit_type();

        if depth != BitType::U8 {
            return Err(ImageErrors::ImageOperationNotImplemented(self.name(), depth));
        }

        #[cfg(not(feature = "threads"))]
        {
            trace!("Running pixelate in single threaded mode");

            for channel in image.channels_mut(false) {
                pixelate_channel(channel, width, height, self.block_size, pixelate)?;
            }
        }
        #[cfg(feature = "threads")]
        {
            trace!("Running pixelate in multithreaded mode");

            let block_size = self.block_size;

            std::thread::scope(|s| {
                let mut errors = vec![];
                // one thread per channel, planes are pixelated on that thread
                for channel in image.channels_mut(false) {
                    let result = s.spawn(move || {
                        pixelate_channel(
                            channel,
                            width,
                            height,
                            block_size,
                            pixelate_single_threaded
                        )
                    });
                    errors.push(result);
                }
                errors
                    .into_iter()
                    .map(|x| x.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
                    .collect::<Result<Vec<()>, ImageErrors>>()
            })?;
        }
        Ok(())
    }

    fn supported_colorspaces(&self) -> &'static [ColorSpace] {
        &[
            ColorSpace::RGB,
            ColorSpace::RGBA,
            ColorSpace::Luma,
            ColorSpace::LumaA
        ]
    }

    fn supported_types(&self) -> &'static [BitType] {
        &[BitType::U8]
    }
}

/// Pixelate a single image plane in place with `transform`
fn pixelate_channel(
    channel: &mut Channel, width: usize, height: usize, block_size: BlockSize,
    transform: fn(RasterView<'_>, BlockSize) -> Raster
) -> Result<(), ImageErrors> {
    let output = {
        let plane = channel.reinterpret_as::<u8>()?;
        let view =
            RasterView::packed(plane, width, height, PixelLayout::Luma).map_err(to_image_error)?;

        transform(view, block_size)
    };
    let plane = channel.reinterpret_as_mut::<u8>()?;

    for (dst, src) in plane.iter_mut().zip(output.as_bytes()) {
        *dst = *src;
    }
    Ok(())
}
