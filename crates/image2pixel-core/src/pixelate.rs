/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixelate a raster
//!
//! # Algorithm
//!
//! The raster is cut into square blocks anchored at the top left pixel,
//! see [`BlockGrid`]. For every block we sum each channel over the pixels the
//! block actually contains, divide by that pixel count (truncating) and write
//! the resulting color to the whole block.
//!
//! ```text
//!  source (block size 2)     output
//! ┌─────┬─────┬───┐        ┌─────┬─────┬───┐
//! │ a b │ c d │ e │        │ A A │ B B │ C │
//! │ f g │ h i │ j │  ───►  │ A A │ B B │ C │
//! ├─────┼─────┼───┤        ├─────┼─────┼───┤
//! │ k l │ m n │ o │        │ D D │ E E │ F │
//! └─────┴─────┴───┘        └─────┴─────┴───┘
//!  A = (a+b+f+g)/4, C = (e+j)/2, F = o
//! ```
//!
//! Blocks are independent, a block row only ever writes to its own rows of
//! the output. With the `threads` feature the output is split into bands of
//! block rows which are filled on scoped threads.
use crate::block_size::BlockSize;
use crate::errors::PixelErrors;
use crate::grid::{Block, BlockGrid};
use crate::log::trace;
use crate::raster::{Raster, RasterView};

/// Pixelate `source`, returning a new raster of the same
/// dimensions and layout
///
/// The source is never modified. A block size of 1 returns a copy of the source.
///
/// # Example
/// ```
/// use image2pixel_core::block_size::BlockSize;
/// use image2pixel_core::errors::PixelErrors;
/// use image2pixel_core::layout::PixelLayout;
/// use image2pixel_core::pixelate::pixelate;
/// use image2pixel_core::raster::RasterView;
///
/// fn main() -> Result<(), PixelErrors> {
///     // a black and a white pixel per row
///     let pixels = [0, 0, 0, 255, 255, 255, 0, 0, 0, 255, 255, 255];
///     let source = RasterView::packed(&pixels, 2, 2, PixelLayout::Rgb)?;
///
///     let output = pixelate(source, BlockSize::new(2)?);
///     // 510/4 truncates to 127
///     assert!(output.as_bytes().iter().all(|x| *x == 127));
///     Ok(())
/// }
/// ```
pub fn pixelate(source: RasterView<'_>, block_size: BlockSize) -> Raster {
    #[cfg(feature = "threads")]
    {
        pixelate_with(source, block_size, fill_bands_threaded)
    }
    #[cfg(not(feature = "threads"))]
    {
        pixelate_with(source, block_size, fill_bands)
    }
}

/// Pixelate `source` on the calling thread
///
/// Output is identical to [`pixelate`]. Use this when the caller already
/// runs several pixelations in parallel.
pub fn pixelate_single_threaded(source: RasterView<'_>, block_size: BlockSize) -> Raster {
    pixelate_with(source, block_size, fill_bands)
}

fn pixelate_with(
    source: RasterView<'_>, block_size: BlockSize,
    fill: fn(RasterView<'_>, BlockGrid, BlockSize, &mut Raster)
) -> Raster {
    let (width, height) = source.dimensions();

    if block_size.is_identity() {
        trace!("Block size is 1, copying source");
        return source.to_owned_raster();
    }
    let mut output = Raster::new(width, height, source.layout());

    if width == 0 || height == 0 {
        return output;
    }
    let grid = BlockGrid::new(width, height, block_size);

    trace!(
        "Pixelating {width}x{height} raster into {}x{} blocks of size {block_size}",
        grid.columns(),
        grid.rows()
    );

    fill(source, grid, block_size, &mut output);

    output
}

/// Pixelate `source` with a block size that has not been validated yet
///
/// # Errors
/// [`PixelErrors::InvalidBlockSize`] if `block_size` is zero
pub fn try_pixelate(source: RasterView<'_>, block_size: usize) -> Result<Raster, PixelErrors> {
    Ok(pixelate(source, BlockSize::new(block_size)?))
}

impl Raster {
    /// Pixelate this raster into a new one, see [`pixelate`]
    #[must_use]
    pub fn pixelate(&self, block_size: BlockSize) -> Raster {
        pixelate(self.view(), block_size)
    }
}

/// Number of output bytes covered by one block row
///
/// A band never extends past the output, which also bounds huge block sizes.
fn band_length(output: &Raster, block_size: BlockSize) -> usize {
    output
        .stride()
        .saturating_mul(block_size.get())
        .min(output.as_bytes().len())
}

fn fill_bands(source: RasterView<'_>, grid: BlockGrid, block_size: BlockSize, output: &mut Raster) {
    let stride = output.stride();
    let band_length = band_length(output, block_size);

    for (row, band) in output.as_bytes_mut().chunks_mut(band_length).enumerate() {
        fill_band(source, &grid, row, band, stride);
    }
}

#[cfg(feature = "threads")]
fn fill_bands_threaded(
    source: RasterView<'_>, grid: BlockGrid, block_size: BlockSize, output: &mut Raster
) {
    let threads = std::thread::available_parallelism().map_or(1, core::num::NonZeroUsize::get);
    let block_rows = grid.rows();

    if threads < 2 || block_rows < 2 {
        trace!("Running pixelate in single threaded mode");
        return fill_bands(source, grid, block_size, output);
    }
    let rows_per_thread = block_rows.div_ceil(threads);
    let stride = output.stride();
    let band_length = band_length(output, block_size);

    trace!("Running pixelate on {threads} threads, {rows_per_thread} block rows each");

    std::thread::scope(|s| {
        for (chunk_index, chunk) in output
            .as_bytes_mut()
            .chunks_mut(band_length.saturating_mul(rows_per_thread))
            .enumerate()
        {
            let grid = &grid;
            s.spawn(move || {
                let first_row = chunk_index * rows_per_thread;

                for (offset, band) in chunk.chunks_mut(band_length).enumerate() {
                    fill_band(source, grid, first_row + offset, band, stride);
                }
            });
        }
    });
}

/// Fill the output rows of block row `row`
///
/// `band` starts at the first output row of the block row and
/// holds up to block size rows, `stride` bytes each.
fn fill_band(source: RasterView<'_>, grid: &BlockGrid, row: usize, band: &mut [u8], stride: usize) {
    let components = source.layout().num_components();

    for block in grid.blocks_in_row(row) {
        let average = block_average(source, block);
        let start = block.x * components;
        let end = (block.x + block.width) * components;

        for out_row in band.chunks_exact_mut(stride).take(block.height) {
            for pixel in out_row[start..end].chunks_exact_mut(components) {
                pixel.copy_from_slice(&average[..components]);
            }
        }
    }
}

/// Average every channel of the pixels inside `block`
///
/// Channels beyond the layout's channel count are left at zero.
/// Sums are kept in `u64` as blocks have no upper size.
#[allow(clippy::cast_possible_truncation)]
fn block_average(source: RasterView<'_>, block: Block) -> [u8; 4] {
    let components = source.layout().num_components();
    let start = block.x * components;
    let end = (block.x + block.width) * components;

    let mut sums = [0_u64; 4];

    for y in block.y..block.y + block.height {
        for pixel in source.row(y)[start..end].chunks_exact(components) {
            for (sum, value) in sums.iter_mut().zip(pixel) {
                *sum += u64::from(*value);
            }
        }
    }
    let mut average = [0_u8; 4];
    let count = block.pixel_count() as u64;

    if count == 0 {
        return average;
    }
    for (avg, sum) in average.iter_mut().zip(sums).take(components) {
        // an average of u8 values always fits in a u8
        *avg = (sum / count) as u8;
    }
    average
}
