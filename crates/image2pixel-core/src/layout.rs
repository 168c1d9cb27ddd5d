/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Channel layout of raster pixels
use crate::errors::PixelErrors;

/// Channels making up a single pixel
///
/// Channels are stored interleaved, i.e an `Rgba` pixel is
/// `[R,G,B,A]` and each channel is a `u8`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PixelLayout {
    /// Grayscale
    Luma,
    /// Grayscale with alpha
    LumaA,
    /// Red, Green, Blue
    Rgb,
    /// Red, Green, Blue, Alpha
    Rgba
}

impl PixelLayout {
    /// Number of channels stored per pixel
    pub const fn num_components(self) -> usize {
        match self {
            Self::Luma => 1,
            Self::LumaA => 2,
            Self::Rgb => 3,
            Self::Rgba => 4
        }
    }

    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::LumaA | Self::Rgba)
    }

    /// Layout for a pixel with `components` channels
    ///
    /// Returns `None` if no layout has that many channels.
    pub const fn from_components(components: usize) -> Option<PixelLayout> {
        match components {
            1 => Some(Self::Luma),
            2 => Some(Self::LumaA),
            3 => Some(Self::Rgb),
            4 => Some(Self::Rgba),
            _ => None
        }
    }
}

impl TryFrom<usize> for PixelLayout {
    type Error = PixelErrors;

    fn try_from(components: usize) -> Result<Self, Self::Error> {
        PixelLayout::from_components(components)
            .ok_or(PixelErrors::UnsupportedChannels(components))
    }
}

#[test]
fn components_round_trip_through_layout() {
    for layout in [
        PixelLayout::Luma,
        PixelLayout::LumaA,
        PixelLayout::Rgb,
        PixelLayout::Rgba
    ] {
        assert_eq!(
            PixelLayout::from_components(layout.num_components()),
            Some(layout)
        );
    }
    assert!(PixelLayout::Rgba.has_alpha());
    assert!(!PixelLayout::Rgb.has_alpha());
    assert!(matches!(
        PixelLayout::try_from(5),
        Err(PixelErrors::UnsupportedChannels(5))
    ));
    assert!(PixelLayout::try_from(0).is_err());
}
