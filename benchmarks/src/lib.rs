/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::{Rng, WyRand};

/// Benchmark image width
pub const WIDTH: usize = 1920;
/// Benchmark image height
pub const HEIGHT: usize = 1080;

/// Create `width * height * components` bytes of noise
///
/// The seed is fixed so every run sees the same pixels
pub fn noise(width: usize, height: usize, components: usize) -> Vec<u8> {
    let mut rng = WyRand::new_seed(0x1234_5678);
    let mut pixels = vec![0_u8; width * height * components];
    rng.fill(&mut pixels);
    pixels
}
