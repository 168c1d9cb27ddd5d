/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;

use image2pixel_core::pixelate::try_pixelate;
use image2pixel_core::raster::RasterView;

use crate::{sample_path, TestEntry};

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_pixelate_cases() {
    let file = sample_path().join("pixelate.json");

    let json_file = read(file).unwrap();

    let entries: Vec<TestEntry> = serde_json::from_slice(&json_file).unwrap();

    assert!(!entries.is_empty());

    let mut error = false;
    let mut failed = Vec::new();

    for entry in &entries {
        let layout = entry.layout.to_layout();
        let stride = entry
            .stride
            .unwrap_or(entry.width * layout.num_components());

        let source =
            RasterView::new(&entry.pixels, entry.width, entry.height, layout, stride).unwrap();
        let output = try_pixelate(source, entry.block_size).unwrap();

        assert_eq!(output.dimensions(), (entry.width, entry.height));
        assert_eq!(output.layout(), layout);

        let pixels = output.to_packed_vec();

        if pixels != entry.expected {
            error = true;
            failed.push(entry.name.clone());
            let err = format!(
                "Pixel mismatch for case {}\nExpected {:?} but found {:?}\nConfig:{:#?}",
                entry.name, entry.expected, pixels, entry
            );
            eprintln!("{}\n", err);
        }
    }
    if error {
        panic!("Cases failed: {:?}", failed);
    }
}

#[test]
fn zero_block_size_is_rejected() {
    let pixels = [0_u8; 12];
    let source = RasterView::packed(&pixels, 2, 2, image2pixel_core::PixelLayout::Rgb).unwrap();

    assert!(try_pixelate(source, 0).is_err());
}
