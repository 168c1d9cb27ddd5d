/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Conversions between `zune-image` images and rasters
use image2pixel_core::layout::PixelLayout;
use image2pixel_core::raster::Raster;
use zune_core::colorspace::ColorSpace;
use zune_image::errors::ImageErrors;
use zune_image::image::Image;

use crate::to_image_error;

/// Raster layout matching an image colorspace
///
/// Returns `None` for colorspaces a raster cannot describe, e.g `CMYK`
/// or `YCbCr`, those have to be converted to RGB first.
pub const fn layout_for_colorspace(colorspace: ColorSpace) -> Option<PixelLayout> {
    match colorspace {
        ColorSpace::RGB => Some(PixelLayout::Rgb),
        ColorSpace::RGBA => Some(PixelLayout::Rgba),
        ColorSpace::Luma => Some(PixelLayout::Luma),
        ColorSpace::LumaA => Some(PixelLayout::LumaA),
        _ => None
    }
}

/// Image colorspace matching a raster layout
pub const fn colorspace_for_layout(layout: PixelLayout) -> ColorSpace {
    match layout {
        PixelLayout::Rgb => ColorSpace::RGB,
        PixelLayout::Rgba => ColorSpace::RGBA,
        PixelLayout::Luma => ColorSpace::Luma,
        PixelLayout::LumaA => ColorSpace::LumaA
    }
}

/// Interleave the first frame of `image` into an 8-bit raster
///
/// Images with a higher bit depth are scaled down to 8 bits.
///
/// # Errors
/// - If the image colorspace has no raster layout
/// - If the image has no frames
pub fn raster_from_image(image: &Image) -> Result<Raster, ImageErrors> {
    let colorspace = image.colorspace();
    let layout = layout_for_colorspace(colorspace).ok_or_else(|| {
        ImageErrors::GenericString(format!(
            "Colorspace {colorspace:?} cannot be represented as a raster"
        ))
    })?;
    let (width, height) = image.dimensions();

    let pixels = image
        .flatten_to_u8()
        .into_iter()
        .next()
        .ok_or_else(|| ImageErrors::GenericString("Image contains no frames".to_string()))?;

    Raster::packed(pixels, width, height, layout).map_err(to_image_error)
}

/// Create an 8-bit image from a raster
pub fn image_from_raster(raster: &Raster) -> Image {
    let (width, height) = raster.dimensions();

    Image::from_u8(
        &raster.to_packed_vec(),
        width,
        height,
        colorspace_for_layout(raster.layout())
    )
}
