/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Edge length of the square blocks averaged during pixelation
use core::fmt::{Display, Formatter};
use core::num::NonZeroUsize;
use core::str::FromStr;

use crate::errors::PixelErrors;

/// Edge length of a pixelation block in source pixels
///
/// A block size of 1 leaves the image untouched, there is no
/// upper bound, blocks larger than the image simply cover all of it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct BlockSize(NonZeroUsize);

impl BlockSize {
    /// Smallest block size a front end should offer
    pub const MIN: usize = 1;
    /// Largest block size a front end should offer
    pub const MAX: usize = 100;
    /// Block size a front end should start with
    pub const DEFAULT: usize = 10;

    /// Create a new block size
    ///
    /// # Errors
    /// [`PixelErrors::InvalidBlockSize`] if `size` is zero
    pub fn new(size: usize) -> Result<BlockSize, PixelErrors> {
        NonZeroUsize::new(size)
            .map(BlockSize)
            .ok_or(PixelErrors::InvalidBlockSize(size))
    }

    /// Clamp a user supplied value into `MIN..=MAX`
    ///
    /// This is meant for sliders and spin boxes which may hand in
    /// negative or overly large values.
    #[must_use]
    pub fn clamped(size: i64) -> BlockSize {
        #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
        let size = size.clamp(Self::MIN as i64, Self::MAX as i64) as usize;

        BlockSize(NonZeroUsize::MIN.saturating_add(size - 1))
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Whether pixelating with this size leaves an image unchanged
    pub const fn is_identity(self) -> bool {
        self.0.get() == 1
    }
}

impl Default for BlockSize {
    fn default() -> Self {
        BlockSize(NonZeroUsize::MIN.saturating_add(Self::DEFAULT - 1))
    }
}

impl TryFrom<usize> for BlockSize {
    type Error = PixelErrors;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        BlockSize::new(size)
    }
}

impl From<BlockSize> for usize {
    fn from(size: BlockSize) -> Self {
        size.get()
    }
}

impl FromStr for BlockSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let size = s
            .trim()
            .parse::<usize>()
            .map_err(|x| format!("Invalid block size {s:?}: {x}"))?;

        BlockSize::new(size).map_err(|x| x.to_string())
    }
}

impl Display for BlockSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::block_size::BlockSize;
    use crate::errors::PixelErrors;

    #[test]
    fn zero_is_rejected() {
        assert!(matches!(
            BlockSize::new(0),
            Err(PixelErrors::InvalidBlockSize(0))
        ));
        assert!("0".parse::<BlockSize>().is_err());
        assert!("ten".parse::<BlockSize>().is_err());
    }

    #[test]
    fn clamping_follows_front_end_range() {
        assert_eq!(BlockSize::clamped(-4).get(), 1);
        assert_eq!(BlockSize::clamped(0).get(), 1);
        assert_eq!(BlockSize::clamped(37).get(), 37);
        assert_eq!(BlockSize::clamped(5000).get(), 100);
    }

    #[test]
    fn defaults_and_parsing() {
        assert_eq!(BlockSize::default().get(), 10);
        assert_eq!(" 16 ".parse::<BlockSize>().unwrap().get(), 16);
        assert!(BlockSize::new(1).unwrap().is_identity());
        assert_eq!(BlockSize::new(250).unwrap().to_string(), "250");
    }
}
