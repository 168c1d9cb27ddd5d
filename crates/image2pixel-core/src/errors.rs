/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when describing rasters and block sizes
use core::fmt::{Debug, Display, Formatter};

/// Errors returned when a raster or block size is malformed
///
/// The transform itself never fails, every error here is raised
/// while constructing its inputs.
pub enum PixelErrors {
    /// Width, height, stride and channel count do not describe
    /// the buffer handed in.
    InvalidDimensions(String),
    /// A block size of zero was requested
    InvalidBlockSize(usize),
    /// A pixel with this many channels cannot be represented,
    /// only 1 to 4 channels are supported
    UnsupportedChannels(usize)
}

impl Debug for PixelErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDimensions(reason) => {
                write!(f, "Invalid raster dimensions: {reason}")
            }
            Self::InvalidBlockSize(size) => {
                write!(f, "Invalid block size {size}, block size must be at least 1")
            }
            Self::UnsupportedChannels(channels) => {
                write!(
                    f,
                    "Unsupported number of channels {channels}, expected between 1 and 4"
                )
            }
        }
    }
}

impl Display for PixelErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PixelErrors {}
