/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use image2pixel_benches::{noise, HEIGHT, WIDTH};
use image2pixel_core::block_size::BlockSize;
use image2pixel_core::layout::PixelLayout;
use image2pixel_core::raster::Raster;
use image2pixel_ops::convert::image_from_raster;
use image2pixel_ops::pixelate::Pixelate;
use zune_image::image::Image;
use zune_image::traits::OperationsTrait;

const BLOCK_SIZES: [usize; 4] = [2, 10, 32, 100];

fn core_pixelate_bench(input: &Raster, block_size: BlockSize) {
    let output = input.pixelate(block_size);
    black_box(output);
}

fn zune_pixelate_bench(input: &Image, block_size: BlockSize) {
    let im = Pixelate::new(block_size).clone_and_execute(input).unwrap();
    black_box(im);
}

fn bench_inner<T>(c: &mut Criterion, name: &str, layout: PixelLayout, func: T)
where
    T: Fn(&Raster, BlockSize)
{
    let data = noise(WIDTH, HEIGHT, layout.num_components());
    let raster = Raster::packed(data, WIDTH, HEIGHT, layout).unwrap();

    let mut group = c.benchmark_group(name);

    group.throughput(Throughput::Bytes(raster.as_bytes().len() as u64));

    for size in BLOCK_SIZES {
        let block_size = BlockSize::new(size).unwrap();

        group.bench_function(format!("block size {size}"), |b| {
            b.iter(|| {
                func(&raster, block_size);
                black_box(());
            })
        });
    }
}

fn bench_core_rgb(c: &mut Criterion) {
    bench_inner(c, "pixelate: core rgb", PixelLayout::Rgb, core_pixelate_bench);
}

fn bench_core_rgba(c: &mut Criterion) {
    bench_inner(c, "pixelate: core rgba", PixelLayout::Rgba, core_pixelate_bench);
}

fn bench_zune_rgb(c: &mut Criterion) {
    let data = noise(WIDTH, HEIGHT, 3);
    let raster = Raster::packed(data, WIDTH, HEIGHT, PixelLayout::Rgb).unwrap();
    let image = image_from_raster(&raster);

    let mut group = c.benchmark_group("pixelate: zune-image rgb");

    group.throughput(Throughput::Bytes(raster.as_bytes().len() as u64));

    for size in BLOCK_SIZES {
        let block_size = BlockSize::new(size).unwrap();

        group.bench_function(format!("block size {size}"), |b| {
            b.iter(|| {
                zune_pixelate_bench(&image, block_size);
                black_box(());
            })
        });
    }
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(10))
      };
    targets=bench_core_rgb,bench_core_rgba,bench_zune_rgb);

criterion_main!(benches);
