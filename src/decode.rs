use alloc::vec::Vec;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use enough::Stop;

use crate::error::BmpError;
use crate::info::ImageInfo;
use crate::limits::Limits;
use crate::progress::{NoProgress, Progress};

/// A fully decoded image: every row, top to bottom, packed RGB.
#[derive(Clone, Debug)]
pub struct DecodeOutput {
    pixels: Vec<u8>,
    pub info: ImageInfo,
}

impl DecodeOutput {
    pub(crate) fn new(pixels: Vec<u8>, info: ImageInfo) -> Self {
        Self { pixels, info }
    }

    /// Access the pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel data.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    pub fn width(&self) -> u32 {
        self.info.width
    }

    pub fn height(&self) -> u32 {
        self.info.height
    }

    /// One row of packed RGB, empty for a zero-width image.
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= self.info.height as usize {
            return None;
        }
        let stride = self.info.row_bytes();
        self.pixels.get(y * stride..(y + 1) * stride)
    }

    /// Reinterpret pixel data as typed RGB pixels.
    #[cfg(feature = "rgb")]
    pub fn as_pixels(&self) -> &[rgb::RGB8] {
        self.pixels.as_pixels()
    }

    /// Convert to an [`imgref::ImgVec`] of RGB pixels.
    ///
    /// `None` for an image with no pixels, which `ImgVec` cannot describe.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> Option<imgref::ImgVec<rgb::RGB8>> {
        if self.pixels.is_empty() {
            return None;
        }
        Some(imgref::ImgVec::new(
            self.as_pixels().to_vec(),
            self.info.width as usize,
            self.info.height as usize,
        ))
    }
}

/// Builder for a one-shot decode of an in-memory BMP.
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    progress: Option<&'a mut dyn Progress>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            progress: None,
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_progress(mut self, progress: &'a mut dyn Progress) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Decode every row.
    pub fn decode(self, stop: impl Stop) -> Result<DecodeOutput, BmpError> {
        match self.progress {
            Some(progress) => crate::bmp::decode(self.data, self.limits, progress, &stop),
            None => crate::bmp::decode(self.data, self.limits, &mut NoProgress, &stop),
        }
    }
}

/// Decode an in-memory BMP with default settings.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<DecodeOutput, BmpError> {
    DecodeRequest::new(data).decode(stop)
}
