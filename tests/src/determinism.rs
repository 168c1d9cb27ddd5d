/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use image2pixel_core::block_size::BlockSize;
use image2pixel_core::layout::PixelLayout;
use image2pixel_core::raster::{Raster, RasterView};
use image2pixel_ops::convert::{image_from_raster, raster_from_image};
use image2pixel_ops::pixelate::Pixelate;
use zune_image::traits::OperationsTrait;

use crate::{hash, pattern};

const WIDTH: usize = 257;
const HEIGHT: usize = 131;

fn source(layout: PixelLayout) -> Raster {
    let pixels = pattern(WIDTH, HEIGHT, layout.num_components());
    Raster::packed(pixels, WIDTH, HEIGHT, layout).unwrap()
}

#[test]
fn repeated_runs_hash_the_same() {
    let image = source(PixelLayout::Rgba);

    for size in [2, 3, 10, 64, 100] {
        let block_size = BlockSize::new(size).unwrap();
        let first = hash(image.pixelate(block_size).as_bytes());

        for _ in 0..4 {
            assert_eq!(hash(image.pixelate(block_size).as_bytes()), first);
        }
    }
}

#[test]
fn block_size_one_preserves_hash() {
    let image = source(PixelLayout::Rgb);
    let output = image.pixelate(BlockSize::new(1).unwrap());

    assert_eq!(hash(output.as_bytes()), hash(image.as_bytes()));
}

#[test]
fn padded_rows_do_not_change_output() {
    let layout = PixelLayout::Rgb;
    let packed = source(layout);
    let stride = WIDTH * layout.num_components() + 5;

    let mut padded = vec![0xAB_u8; stride * HEIGHT];
    for (dst, src) in padded.chunks_exact_mut(stride).zip(packed.rows()) {
        dst[..src.len()].copy_from_slice(src);
    }
    let view = RasterView::new(&padded, WIDTH, HEIGHT, layout, stride).unwrap();

    for size in [2, 7, 16] {
        let block_size = BlockSize::new(size).unwrap();

        let expected = hash(&packed.pixelate(block_size).to_packed_vec());
        let found = hash(&image2pixel_core::pixelate(view, block_size).to_packed_vec());

        assert_eq!(expected, found, "block size {size}");
    }
}

#[test]
fn planar_operation_matches_interleaved_core() {
    for layout in [
        PixelLayout::Luma,
        PixelLayout::LumaA,
        PixelLayout::Rgb,
        PixelLayout::Rgba
    ] {
        let raster = source(layout);

        for size in [2, 5, 10, 33] {
            let block_size = BlockSize::new(size).unwrap();
            let expected = hash(raster.pixelate(block_size).as_bytes());

            let mut image = image_from_raster(&raster);
            Pixelate::new(block_size).execute(&mut image).unwrap();
            let found = hash(raster_from_image(&image).unwrap().as_bytes());

            assert_eq!(expected, found, "{layout:?} with block size {size}");
        }
    }
}
