/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::path::{Path, PathBuf};

use image2pixel_core::layout::PixelLayout;
use serde::Deserialize;
use xxhash_rust::xxh3::xxh3_128;

mod determinism;
mod pixelate;

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonLayout {
    Luma,
    LumaA,
    RGB,
    RGBA
}

impl JsonLayout {
    pub fn to_layout(self) -> PixelLayout {
        match self {
            Self::Luma => PixelLayout::Luma,
            Self::LumaA => PixelLayout::LumaA,
            Self::RGB => PixelLayout::Rgb,
            Self::RGBA => PixelLayout::Rgba
        }
    }
}

/// A hand computed pixelation case
#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:       String,
    pub width:      usize,
    pub height:     usize,
    pub layout:     JsonLayout,
    /// Row stride in bytes, packed rows if absent
    pub stride:     Option<usize>,
    pub block_size: usize,
    pub pixels:     Vec<u8>,
    /// Expected packed output
    pub expected:   Vec<u8>,
    pub comment:    Option<String>
}

pub fn sample_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests")
}

fn hash(contents: &[u8]) -> u128 {
    xxh3_128(contents)
}

/// A deterministic test pattern that is not uniform within any block
pub fn pattern(width: usize, height: usize, components: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * height * components);

    for y in 0..height {
        for x in 0..width {
            for c in 0..components {
                let value = (x * 7 + y * 13 + c * 61 + (x * y) % 17) % 256;
                pixels.push(value as u8);
            }
        }
    }
    pixels
}
