/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Partitioning of a raster into pixelation blocks
//!
//! Blocks are anchored at the top left pixel and laid out
//! without overlap. Blocks touching the right or bottom edge
//! are truncated to what remains of the raster.
//!
//! ```text
//!  width = 5, block size = 2
//! ┌────┬────┬──┐
//! │ 0  │ 1  │2 │
//! ├────┼────┼──┤
//! │ 3  │ 4  │5 │
//! ├────┼────┼──┤
//! │ 6  │ 7  │8 │ height = 5
//! └────┴────┴──┘
//! ```
use crate::block_size::BlockSize;

/// A rectangular region of the raster averaged as one unit
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Block {
    /// Left column of the block
    pub x:      usize,
    /// Top row of the block
    pub y:      usize,
    /// Columns covered, less than the block size for truncated blocks
    pub width:  usize,
    /// Rows covered, less than the block size for truncated blocks
    pub height: usize
}

impl Block {
    /// Number of pixels contained in the block
    pub const fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

/// Row major iterator over the blocks of a `width x height` raster
#[derive(Copy, Clone, Debug)]
pub struct BlockGrid {
    width:      usize,
    height:     usize,
    block_size: usize,
    position:   usize
}

impl BlockGrid {
    pub fn new(width: usize, height: usize, block_size: BlockSize) -> BlockGrid {
        BlockGrid {
            width,
            height,
            block_size: block_size.get(),
            position: 0
        }
    }

    /// Number of blocks in a block row
    pub const fn columns(&self) -> usize {
        self.width.div_ceil(self.block_size)
    }

    /// Number of block rows
    pub const fn rows(&self) -> usize {
        self.height.div_ceil(self.block_size)
    }

    /// Total number of blocks, zero if either axis is empty
    pub const fn block_count(&self) -> usize {
        self.columns() * self.rows()
    }

    /// Return the block at column `column` of block row `row`
    ///
    /// Returns `None` if the position is outside the grid.
    pub fn block(&self, column: usize, row: usize) -> Option<Block> {
        if column >= self.columns() || row >= self.rows() {
            return None;
        }
        let x = column * self.block_size;
        let y = row * self.block_size;

        Some(Block {
            x,
            y,
            width: self.block_size.min(self.width - x),
            height: self.block_size.min(self.height - y)
        })
    }

    /// Iterate over the blocks of block row `row`, left to right
    pub fn blocks_in_row(&self, row: usize) -> impl Iterator<Item = Block> + '_ {
        (0..self.columns()).filter_map(move |column| self.block(column, row))
    }
}

impl Iterator for BlockGrid {
    type Item = Block;

    fn next(&mut self) -> Option<Self::Item> {
        let columns = self.columns();

        if columns == 0 {
            return None;
        }
        let block = self.block(self.position % columns, self.position / columns)?;
        self.position += 1;

        Some(block)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.block_count().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BlockGrid {}
