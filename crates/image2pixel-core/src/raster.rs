/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Owned and borrowed rasters
//!
//! A raster is a row major grid of interleaved 8-bit pixels.
//! Rows start `stride` bytes apart and the stride may be larger than
//! `width * components`, e.g when a toolkit pads rows to a 4 byte boundary.
//!
//! ```text
//!   stride ─────────────────────────────────────►
//!   width * components ──────────────►
//! ┌──────────────────────────────────┬──────────┐
//! │ R G B R G B R G B ...            │ padding  │
//! │ R G B R G B R G B ...            │ padding  │
//! └──────────────────────────────────┴──────────┘
//! ```
//!
//! Padding is never read or written by the accessors here, rows are always
//! handed out as exactly `width * components` bytes.
use core::fmt::{Debug, Formatter};

use crate::errors::PixelErrors;
use crate::layout::PixelLayout;

/// Minimum number of bytes a buffer needs to hold `height` rows
/// `stride` bytes apart, the last row not needing padding.
fn required_length(
    width: usize, height: usize, layout: PixelLayout, stride: usize
) -> Result<usize, PixelErrors> {
    let row_bytes = width.checked_mul(layout.num_components()).ok_or_else(|| {
        PixelErrors::InvalidDimensions(format!(
            "width {width} with {} channels overflows usize",
            layout.num_components()
        ))
    })?;

    if stride < row_bytes {
        return Err(PixelErrors::InvalidDimensions(format!(
            "stride {stride} is smaller than row length {row_bytes} ({width} pixels of {} channels)",
            layout.num_components()
        )));
    }
    if height == 0 {
        return Ok(0);
    }
    stride
        .checked_mul(height - 1)
        .and_then(|x| x.checked_add(row_bytes))
        .ok_or_else(|| {
            PixelErrors::InvalidDimensions(format!(
                "{height} rows of stride {stride} overflow usize"
            ))
        })
}

fn check_buffer(
    length: usize, width: usize, height: usize, layout: PixelLayout, stride: usize
) -> Result<(), PixelErrors> {
    let expected = required_length(width, height, layout, stride)?;

    if length < expected {
        return Err(PixelErrors::InvalidDimensions(format!(
            "buffer of {length} bytes is too small for a {width}x{height} {layout:?} raster with stride {stride}, expected at least {expected} bytes"
        )));
    }
    Ok(())
}

/// A read only view into pixels owned by someone else
///
/// Construction checks the geometry against the buffer, so every
/// accessor on a view stays in bounds of the underlying slice.
#[derive(Copy, Clone)]
pub struct RasterView<'a> {
    data:   &'a [u8],
    width:  usize,
    height: usize,
    layout: PixelLayout,
    stride: usize
}

impl<'a> RasterView<'a> {
    /// Create a view over `data`
    ///
    /// # Arguments
    /// - data: Pixel buffer, rows start `stride` bytes apart
    /// - width: Number of pixels in a row
    /// - height: Number of rows
    /// - layout: Channels in a pixel
    /// - stride: Distance in bytes between the start of two rows
    ///
    /// # Errors
    /// [`PixelErrors::InvalidDimensions`] if stride is smaller than a row or
    /// `data` cannot hold the described raster.
    pub fn new(
        data: &'a [u8], width: usize, height: usize, layout: PixelLayout, stride: usize
    ) -> Result<RasterView<'a>, PixelErrors> {
        check_buffer(data.len(), width, height, layout, stride)?;

        Ok(RasterView {
            data,
            width,
            height,
            layout,
            stride
        })
    }

    /// Create a view over rows with no padding between them
    ///
    /// # Errors
    /// See [`RasterView::new`]
    pub fn packed(
        data: &'a [u8], width: usize, height: usize, layout: PixelLayout
    ) -> Result<RasterView<'a>, PixelErrors> {
        let stride = width.checked_mul(layout.num_components()).ok_or_else(|| {
            PixelErrors::InvalidDimensions(format!("width {width} overflows usize"))
        })?;

        RasterView::new(data, width, height, layout, stride)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Width and height of the raster
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn layout(&self) -> PixelLayout {
        self.layout
    }

    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Number of bytes of pixel data in a row, padding excluded
    pub const fn row_bytes(&self) -> usize {
        self.width * self.layout.num_components()
    }

    /// Return row `y` or `None` if it is out of bounds
    pub fn get_row(&self, y: usize) -> Option<&'a [u8]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.stride;
        self.data.get(start..start + self.row_bytes())
    }

    /// Return the pixels of row `y` without its padding
    ///
    /// # Panics
    /// If `y` is not less than the raster height
    #[allow(clippy::panic)]
    pub fn row(&self, y: usize) -> &'a [u8] {
        match self.get_row(y) {
            Some(row) => row,
            None => panic!("row {y} out of bounds for raster of height {}", self.height)
        }
    }

    /// Return the channels of pixel `(x, y)`
    ///
    /// # Panics
    /// If the coordinate lies outside the raster
    pub fn pixel(&self, x: usize, y: usize) -> &'a [u8] {
        assert!(
            x < self.width,
            "column {x} out of bounds for raster of width {}",
            self.width
        );
        let components = self.layout.num_components();
        let start = x * components;

        &self.row(y)[start..start + components]
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &'a [u8]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    /// Copy the visible pixels into a new, tightly packed raster
    pub fn to_owned_raster(&self) -> Raster {
        let mut data = Vec::with_capacity(self.row_bytes() * self.height);

        for row in self.rows() {
            data.extend_from_slice(row);
        }
        Raster {
            data,
            width: self.width,
            height: self.height,
            layout: self.layout,
            stride: self.row_bytes()
        }
    }
}

impl Debug for RasterView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RasterView")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("layout", &self.layout)
            .field("stride", &self.stride)
            .finish_non_exhaustive()
    }
}

/// An owned raster
///
/// # Example
/// ```
/// use image2pixel_core::layout::PixelLayout;
/// use image2pixel_core::raster::Raster;
///
/// let mut raster = Raster::new(2, 2, PixelLayout::Rgb);
/// raster.pixel_mut(1, 0).copy_from_slice(&[255, 0, 0]);
///
/// assert_eq!(raster.row(0), &[0, 0, 0, 255, 0, 0]);
/// ```
#[derive(Clone)]
pub struct Raster {
    data:   Vec<u8>,
    width:  usize,
    height: usize,
    layout: PixelLayout,
    stride: usize
}

impl Raster {
    /// Create a tightly packed raster with every channel set to zero
    ///
    /// # Panics
    /// If `width * height * components` overflows a `usize`
    pub fn new(width: usize, height: usize, layout: PixelLayout) -> Raster {
        let stride = width
            .checked_mul(layout.num_components())
            .expect("raster row length overflows usize");
        let length = stride
            .checked_mul(height)
            .expect("raster length overflows usize");

        Raster {
            data: vec![0; length],
            width,
            height,
            layout,
            stride
        }
    }

    /// Create a tightly packed raster where every pixel is `color`
    ///
    /// # Panics
    /// - If `color` does not have exactly `layout.num_components()` channels
    /// - If the raster length overflows a `usize`
    pub fn fill(color: &[u8], width: usize, height: usize, layout: PixelLayout) -> Raster {
        assert_eq!(
            color.len(),
            layout.num_components(),
            "Color has {} channels but layout {layout:?} needs {}",
            color.len(),
            layout.num_components()
        );
        let mut raster = Raster::new(width, height, layout);

        if !color.is_empty() {
            for pixel in raster.data.chunks_exact_mut(color.len()) {
                pixel.copy_from_slice(color);
            }
        }
        raster
    }

    /// Take ownership of a pixel buffer with rows `stride` bytes apart
    ///
    /// # Errors
    /// [`PixelErrors::InvalidDimensions`] if the geometry does not fit `data`
    pub fn from_raw(
        data: Vec<u8>, width: usize, height: usize, layout: PixelLayout, stride: usize
    ) -> Result<Raster, PixelErrors> {
        check_buffer(data.len(), width, height, layout, stride)?;

        Ok(Raster {
            data,
            width,
            height,
            layout,
            stride
        })
    }

    /// Take ownership of a tightly packed pixel buffer
    ///
    /// # Errors
    /// [`PixelErrors::InvalidDimensions`] if `data` is not exactly
    /// `width * height * components` bytes long
    pub fn packed(
        data: Vec<u8>, width: usize, height: usize, layout: PixelLayout
    ) -> Result<Raster, PixelErrors> {
        let stride = width.checked_mul(layout.num_components()).ok_or_else(|| {
            PixelErrors::InvalidDimensions(format!("width {width} overflows usize"))
        })?;
        let expected = required_length(width, height, layout, stride)?;

        if data.len() != expected {
            return Err(PixelErrors::InvalidDimensions(format!(
                "expected {expected} bytes for a packed {width}x{height} {layout:?} raster, found {}",
                data.len()
            )));
        }
        Raster::from_raw(data, width, height, layout, stride)
    }

    /// Borrow this raster as a view
    pub fn view(&self) -> RasterView<'_> {
        RasterView {
            data:   &self.data,
            width:  self.width,
            height: self.height,
            layout: self.layout,
            stride: self.stride
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Width and height of the raster
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn layout(&self) -> PixelLayout {
        self.layout
    }

    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Number of bytes of pixel data in a row, padding excluded
    pub const fn row_bytes(&self) -> usize {
        self.width * self.layout.num_components()
    }

    /// Return the pixels of row `y` without its padding
    ///
    /// # Panics
    /// If `y` is not less than the raster height
    pub fn row(&self, y: usize) -> &[u8] {
        self.view().row(y)
    }

    /// Return the pixels of row `y` without its padding
    ///
    /// # Panics
    /// If `y` is not less than the raster height
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        assert!(
            y < self.height,
            "row {y} out of bounds for raster of height {}",
            self.height
        );
        let start = y * self.stride;
        let end = start + self.row_bytes();

        &mut self.data[start..end]
    }

    /// Return the channels of pixel `(x, y)`
    ///
    /// # Panics
    /// If the coordinate lies outside the raster
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        self.view().pixel(x, y)
    }

    /// Return the channels of pixel `(x, y)` for modification
    ///
    /// # Panics
    /// If the coordinate lies outside the raster
    pub fn pixel_mut(&mut self, x: usize, y: usize) -> &mut [u8] {
        assert!(
            x < self.width,
            "column {x} out of bounds for raster of width {}",
            self.width
        );
        let components = self.layout.num_components();
        let start = x * components;

        &mut self.row_mut(y)[start..start + components]
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    /// The whole underlying buffer, row padding included
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the raster returning the underlying buffer
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Copy visible pixels into a vector with no row padding
    pub fn to_packed_vec(&self) -> Vec<u8> {
        self.view().to_owned_raster().into_raw()
    }
}

impl Debug for Raster {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Raster")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("layout", &self.layout)
            .field("stride", &self.stride)
            .finish_non_exhaustive()
    }
}

/// Two rasters are equal when they have the same geometry and the same
/// visible pixels, row padding is ignored.
impl PartialEq for Raster {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions()
            && self.layout == other.layout
            && self.rows().zip(other.rows()).all(|(a, b)| a == b)
    }
}

impl Eq for Raster {}

#[cfg(test)]
mod tests {
    use crate::errors::PixelErrors;
    use crate::layout::PixelLayout;
    use crate::raster::{Raster, RasterView};

    #[test]
    fn stride_smaller_than_row_is_rejected() {
        let data = [0_u8; 64];
        let err = RasterView::new(&data, 4, 2, PixelLayout::Rgb, 11).unwrap_err();

        assert!(matches!(err, PixelErrors::InvalidDimensions(_)));
    }

    #[test]
    fn short_buffer_is_rejected() {
        // 3 rows, stride 16, last row needs 12 bytes => 44 bytes
        let data = vec![0_u8; 43];
        assert!(Raster::from_raw(data, 4, 3, PixelLayout::Rgb, 16).is_err());

        let data = vec![0_u8; 44];
        assert!(Raster::from_raw(data, 4, 3, PixelLayout::Rgb, 16).is_ok());
    }

    #[test]
    fn packed_requires_exact_length() {
        assert!(Raster::packed(vec![0; 13], 2, 2, PixelLayout::Rgb).is_err());
        assert!(Raster::packed(vec![0; 12], 2, 2, PixelLayout::Rgb).is_ok());
    }

    #[test]
    fn overflowing_geometry_is_rejected() {
        let data = [0_u8; 4];
        assert!(RasterView::new(&data, usize::MAX, 1, PixelLayout::Rgba, usize::MAX).is_err());
        assert!(RasterView::new(&data, 1, usize::MAX, PixelLayout::Luma, 2).is_err());
    }

    #[test]
    fn empty_rasters_need_no_data() {
        let view = RasterView::new(&[], 0, 0, PixelLayout::Rgb, 0).unwrap();
        assert_eq!(view.rows().count(), 0);

        let view = RasterView::new(&[], 0, 5, PixelLayout::Rgb, 0).unwrap();
        assert!(view.rows().all(<[u8]>::is_empty));
    }

    #[test]
    fn rows_skip_padding() {
        // 2x2 rgb with two bytes of padding per row
        let data = [1, 2, 3, 4, 5, 6, 99, 99, 7, 8, 9, 10, 11, 12];
        let view = RasterView::new(&data, 2, 2, PixelLayout::Rgb, 8).unwrap();

        assert_eq!(view.row(0), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(view.row(1), &[7, 8, 9, 10, 11, 12]);
        assert_eq!(view.pixel(1, 1), &[10, 11, 12]);
        assert!(view.get_row(2).is_none());

        let owned = view.to_owned_raster();
        assert_eq!(owned.stride(), 6);
        assert_eq!(owned.as_bytes(), &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn equality_ignores_padding() {
        let padded = Raster::from_raw(
            vec![1, 2, 3, 0, 4, 5, 6, 0],
            1,
            2,
            PixelLayout::Rgb,
            4
        )
        .unwrap();
        let packed = Raster::packed(vec![1, 2, 3, 4, 5, 6], 1, 2, PixelLayout::Rgb).unwrap();

        assert_eq!(padded, packed);
        assert_eq!(padded.to_packed_vec(), packed.as_bytes());
    }

    #[test]
    fn pixel_mut_writes_only_its_pixel() {
        let mut raster = Raster::fill(&[1, 1, 1, 1], 3, 2, PixelLayout::Rgba);
        raster.pixel_mut(2, 1).copy_from_slice(&[9, 8, 7, 6]);

        assert_eq!(raster.pixel(2, 1), &[9, 8, 7, 6]);
        assert_eq!(raster.pixel(1, 1), &[1, 1, 1, 1]);
        assert_eq!(raster.pixel(2, 0), &[1, 1, 1, 1]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn pixel_outside_raster_panics() {
        let raster = Raster::new(2, 2, PixelLayout::Luma);
        let _ = raster.pixel(2, 0);
    }
}
