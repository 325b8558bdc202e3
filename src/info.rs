use crate::error::BmpError;

/// Color space of the delivered samples.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ColorSpace {
    #[default]
    Unknown,
    /// Monochrome.
    Grayscale,
    Rgb,
    /// YCbCr (also known as YUV).
    YCbCr,
    Cmyk,
    /// YCbCr plus K.
    Ycck,
}

impl ColorSpace {
    /// Components per pixel, or `None` for [`ColorSpace::Unknown`].
    pub fn components(self) -> Option<u8> {
        match self {
            Self::Unknown => None,
            Self::Grayscale => Some(1),
            Self::Rgb | Self::YCbCr => Some(3),
            Self::Cmyk | Self::Ycck => Some(4),
        }
    }
}

/// Unit of a [`Density`] pair.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DensityUnit {
    /// Only the aspect ratio is meaningful.
    #[default]
    Unspecified,
    DotsPerInch,
    DotsPerCm,
}

/// Physical pixel density.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Density {
    pub x: u16,
    pub y: u16,
    pub unit: DensityUnit,
}

/// Image metadata handed to the consumer before any rows are delivered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub color_space: ColorSpace,
    /// Components per delivered pixel.
    pub components: u8,
    /// Bits per component sample.
    pub precision: u8,
    pub density: Option<Density>,
}

impl ImageInfo {
    /// Read the headers of a BMP without reading pixel data.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BmpError> {
        crate::bmp::read_info(data)
    }

    /// Bytes in one delivered row.
    pub fn row_bytes(&self) -> usize {
        self.width as usize * usize::from(self.components)
    }
}
