//! BMP file header and info header parsing.

use alloc::format;

use crate::error::BmpError;
use crate::info::{ColorSpace, Density, DensityUnit, ImageInfo};
use crate::source::ByteSource;

const FILE_HEADER_SIZE: usize = 14;
const MAX_INFO_HEADER_SIZE: usize = 64;
const SIGNATURE: u16 = 0x4D42; // "BM"

/// Which info header layout the file uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeaderKind {
    /// OS/2 1.x `BITMAPCOREHEADER`, 12 bytes.
    Os2Core,
    /// Windows 3.x `BITMAPINFOHEADER`, 40 bytes.
    WindowsV3,
    /// OS/2 2.x header, 64 bytes. Fields past the first 40 bytes are ignored.
    Os2V2,
}

impl HeaderKind {
    /// Size of the info header in bytes.
    pub fn size(self) -> u32 {
        match self {
            Self::Os2Core => 12,
            Self::WindowsV3 => 40,
            Self::Os2V2 => 64,
        }
    }

    fn from_size(size: u32) -> Option<Self> {
        match size {
            12 => Some(Self::Os2Core),
            40 => Some(Self::WindowsV3),
            64 => Some(Self::Os2V2),
            _ => None,
        }
    }
}

/// Parsed and validated BMP metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitmapDescriptor {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) bits_per_pixel: u16,
    pub(crate) header_kind: HeaderKind,
    pub(crate) pixel_data_offset: u32,
    pub(crate) colormap_entry_size: u8,
    pub(crate) color_count: u16,
    pub(crate) density: Option<Density>,
    pub(crate) row_width: usize,
    pub(crate) pad: usize,
}

impl BitmapDescriptor {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// 8 (palette) or 24 (BGR).
    pub fn bits_per_pixel(&self) -> u16 {
        self.bits_per_pixel
    }

    pub fn header_kind(&self) -> HeaderKind {
        self.header_kind
    }

    /// Byte offset of the pixel data from the start of the file.
    pub fn pixel_data_offset(&self) -> u32 {
        self.pixel_data_offset
    }

    /// Bytes per colormap entry: 0 (no colormap), 3 (BGR) or 4 (BGR0).
    pub fn colormap_entry_size(&self) -> u8 {
        self.colormap_entry_size
    }

    /// Number of colormap entries stored in the file.
    pub fn color_count(&self) -> u16 {
        self.color_count
    }

    pub fn density(&self) -> Option<Density> {
        self.density
    }

    /// Bytes per stored row, including padding to a 4-byte boundary.
    pub fn row_width(&self) -> usize {
        self.row_width
    }

    /// Bytes between the end of the colormap and the pixel data.
    pub fn pad(&self) -> usize {
        self.pad
    }

    /// Metadata for the consumer. Rows are always delivered as 8-bit RGB.
    pub fn info(&self) -> ImageInfo {
        ImageInfo {
            width: self.width,
            height: self.height,
            color_space: ColorSpace::Rgb,
            components: 3,
            precision: 8,
            density: self.density,
        }
    }
}

fn get_u16(buf: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([buf[at], buf[at + 1]])
}

fn get_u32(buf: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([buf[at], buf[at + 1], buf[at + 2], buf[at + 3]])
}

fn get_i32(buf: &[u8], at: usize) -> i32 {
    get_u32(buf, at) as i32
}

/// Validate a signed dimension from a 40/64-byte header.
fn dimension(value: i32, what: &str) -> Result<u32, BmpError> {
    if value < 0 {
        // Negative height marks top-down storage; only bottom-up is supported.
        return Err(BmpError::BadHeader(format!("negative BMP {what} ({value})")));
    }
    Ok(value as u32)
}

fn check_depth(bpp: u16) -> Result<(), BmpError> {
    match bpp {
        8 | 24 => Ok(()),
        other => Err(BmpError::BadDepth(other)),
    }
}

/// Read the file header and info header from `src`.
///
/// On success the source is positioned at the colormap (8-bit) or at the
/// pad bytes preceding the pixel data (24-bit).
pub(crate) fn parse_header<S: ByteSource>(src: &mut S) -> Result<BitmapDescriptor, BmpError> {
    let mut file_header = [0u8; FILE_HEADER_SIZE];
    src.read_exact(&mut file_header)?;

    if get_u16(&file_header, 0) != SIGNATURE {
        return Err(BmpError::NotABitmap);
    }
    // File size and reserved fields are ignored.
    let pixel_data_offset = get_u32(&file_header, 10);

    let mut info = [0u8; MAX_INFO_HEADER_SIZE];
    src.read_exact(&mut info[..4])?;
    let header_size = get_u32(&info, 0);
    if !(12..=MAX_INFO_HEADER_SIZE as u32).contains(&header_size) {
        return Err(BmpError::BadHeader(format!(
            "info header size {header_size} out of range"
        )));
    }
    src.read_exact(&mut info[4..header_size as usize])?;

    let header_kind = HeaderKind::from_size(header_size).ok_or_else(|| {
        BmpError::BadHeader(format!("unknown BMP info header size: {header_size}"))
    })?;

    let (width, height, bits_per_pixel, colors_used, density);
    match header_kind {
        HeaderKind::Os2Core => {
            width = u32::from(get_u16(&info, 4));
            height = u32::from(get_u16(&info, 6));
            let planes = get_u16(&info, 8);
            bits_per_pixel = get_u16(&info, 10);
            check_depth(bits_per_pixel)?;
            if bits_per_pixel == 8 {
                log::trace!("OS/2 colormapped BMP, {width}x{height}");
            } else {
                log::trace!("OS/2 RGB BMP, {width}x{height}");
            }
            if planes != 1 {
                return Err(BmpError::BadPlanes(planes));
            }
            colors_used = 0;
            density = None;
        }
        HeaderKind::WindowsV3 | HeaderKind::Os2V2 => {
            width = dimension(get_i32(&info, 4), "width")?;
            height = dimension(get_i32(&info, 8), "height")?;
            let planes = get_u16(&info, 12);
            bits_per_pixel = get_u16(&info, 14);
            let compression = get_u32(&info, 16);
            // biSizeImage (20) and biClrImportant (36) are ignored.
            let x_pels_per_meter = get_i32(&info, 24);
            let y_pels_per_meter = get_i32(&info, 28);
            colors_used = get_i32(&info, 32);

            check_depth(bits_per_pixel)?;
            if bits_per_pixel == 8 {
                log::trace!("colormapped BMP, {width}x{height}");
            } else {
                log::trace!("RGB BMP, {width}x{height}");
            }
            if planes != 1 {
                return Err(BmpError::BadPlanes(planes));
            }
            if compression != 0 {
                return Err(BmpError::CompressedNotSupported(compression));
            }

            density = if x_pels_per_meter > 0 && y_pels_per_meter > 0 {
                // 100 cm per meter
                Some(Density {
                    x: u16::try_from(x_pels_per_meter / 100).unwrap_or(u16::MAX),
                    y: u16::try_from(y_pels_per_meter / 100).unwrap_or(u16::MAX),
                    unit: DensityUnit::DotsPerCm,
                })
            } else {
                None
            };
        }
    }

    let (colormap_entry_size, color_count) = if bits_per_pixel == 8 {
        let entry_size = match header_kind {
            HeaderKind::Os2Core => 3u8,
            HeaderKind::WindowsV3 | HeaderKind::Os2V2 => 4u8,
        };
        let count = match colors_used {
            n if n <= 0 => 256,
            n if n > 256 => {
                return Err(BmpError::BadColormap(format!(
                    "color count {n} exceeds 256"
                )));
            }
            n => n as u16,
        };
        (entry_size, count)
    } else {
        (0, 0)
    };

    let pad = i64::from(pixel_data_offset)
        - (FILE_HEADER_SIZE as i64 + i64::from(header_size))
        - i64::from(color_count) * i64::from(colormap_entry_size);
    if pad < 0 {
        return Err(BmpError::BadHeader(format!(
            "pixel data offset {pixel_data_offset} overlaps headers or colormap"
        )));
    }
    // offset is a u32, so the remainder always fits
    let pad = pad as usize;

    let row_bytes = if bits_per_pixel == 24 {
        (width as usize)
            .checked_mul(3)
            .ok_or(BmpError::DimensionsTooLarge { width, height })?
    } else {
        width as usize
    };
    let row_width = row_bytes
        .checked_add(3)
        .map(|r| r & !3)
        .ok_or(BmpError::DimensionsTooLarge { width, height })?;

    Ok(BitmapDescriptor {
        width,
        height,
        bits_per_pixel,
        header_kind,
        pixel_data_offset,
        colormap_entry_size,
        color_count,
        density,
        row_width,
        pad,
    })
}
