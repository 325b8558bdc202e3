//! Two-phase BMP decode session.
//!
//! [`BmpSource::start`] reads the headers and colormap. [`BmpSource::prepare`]
//! reads every stored row into the row store and yields [`BmpRows`], which
//! hands out expanded RGB rows from the top of the image down.

use alloc::vec;
use alloc::vec::Vec;

use enough::Stop;

use super::colormap::Colormap;
use super::header::{BitmapDescriptor, parse_header};
use super::row_store::{RowStore, TopDown};
use crate::error::BmpError;
use crate::info::ImageInfo;
use crate::limits::Limits;
use crate::progress::Progress;
use crate::source::ByteSource;

/// How stored row bytes become RGB. Chosen once per image.
#[derive(Debug)]
enum Expansion {
    /// One palette index per pixel.
    Palette(Colormap),
    /// Three bytes per pixel in B, G, R order.
    Reorder,
}

impl Expansion {
    fn select(desc: &BitmapDescriptor, colormap: Option<Colormap>) -> Result<Self, BmpError> {
        match (desc.bits_per_pixel, colormap) {
            (8, Some(map)) => Ok(Self::Palette(map)),
            (8, None) => Err(BmpError::BadColormap("8-bit BMP without colormap".into())),
            (24, _) => Ok(Self::Reorder),
            (other, _) => Err(BmpError::BadDepth(other)),
        }
    }

    /// Expand one stored row into `out` (`width * 3` bytes).
    fn expand(&self, raw: &[u8], out: &mut [u8]) {
        match self {
            Self::Palette(map) => {
                for (px, &index) in out.chunks_exact_mut(3).zip(raw) {
                    px.copy_from_slice(&map.get(index));
                }
            }
            Self::Reorder => {
                for (px, bgr) in out.chunks_exact_mut(3).zip(raw.chunks_exact(3)) {
                    px[0] = bgr[2];
                    px[1] = bgr[1];
                    px[2] = bgr[0];
                }
            }
        }
    }
}

/// A decode session whose headers are read but whose pixel data is not.
#[derive(Debug)]
pub struct BmpSource<S> {
    src: S,
    descriptor: BitmapDescriptor,
    colormap: Option<Colormap>,
    store: RowStore,
}

impl<S: ByteSource> BmpSource<S> {
    /// Read the headers and colormap and skip to the pixel data.
    ///
    /// `src` must be positioned at the start of the file. Registers the
    /// preload as one extra pass with `progress`.
    pub fn start(
        mut src: S,
        limits: Option<&Limits>,
        progress: &mut dyn Progress,
    ) -> Result<Self, BmpError> {
        let descriptor = parse_header(&mut src)?;
        let store_bytes = limits.unwrap_or(&Limits::NONE).admit(
            descriptor.width,
            descriptor.height,
            descriptor.row_width,
        )?;

        let colormap = if descriptor.colormap_entry_size > 0 {
            Some(Colormap::read(
                &mut src,
                usize::from(descriptor.color_count),
                descriptor.colormap_entry_size,
            )?)
        } else {
            None
        };

        if descriptor.pad > 0 {
            log::debug!("skipping {} pad bytes before pixel data", descriptor.pad);
            src.skip(descriptor.pad)?;
        }

        log::trace!("row store admitted at {store_bytes} bytes");
        let store = RowStore::new(descriptor.row_width, descriptor.height as usize);
        progress.add_extra_pass();

        Ok(Self {
            src,
            descriptor,
            colormap,
            store,
        })
    }

    pub fn descriptor(&self) -> &BitmapDescriptor {
        &self.descriptor
    }

    pub fn info(&self) -> ImageInfo {
        self.descriptor.info()
    }

    /// The colormap, for 8-bit images.
    pub fn colormap(&self) -> Option<&Colormap> {
        self.colormap.as_ref()
    }

    /// Read all pixel data into the row store.
    ///
    /// Consumes exactly `row_width * height` bytes from the source, which is
    /// released afterwards. Reports `(rows read, height)` after every row.
    pub fn prepare(
        mut self,
        progress: &mut dyn Progress,
        stop: &dyn Stop,
    ) -> Result<BmpRows, BmpError> {
        let height = self.store.height();
        for row in 0..height {
            if row % 16 == 0 {
                stop.check()?;
            }
            self.store.fill_next(&mut self.src)?;
            progress.report(row as u64 + 1, height as u64);
        }
        progress.complete_extra_pass();
        log::debug!(
            "preloaded {height} rows of {} bytes",
            self.descriptor.row_width
        );

        let expansion = Expansion::select(&self.descriptor, self.colormap)?;
        let order = self.store.top_down();
        // a zero-height image never reads a row, so its width is unbacked
        let buffer = if self.store.height() == 0 {
            Vec::new()
        } else {
            vec![0u8; self.descriptor.width as usize * 3]
        };

        Ok(BmpRows {
            descriptor: self.descriptor,
            store: self.store,
            order,
            expansion,
            buffer,
        })
    }
}

/// A decode session ready to deliver rows.
///
/// Rows come out top to bottom as packed RGB, `width * 3` bytes each.
#[derive(Debug)]
pub struct BmpRows {
    descriptor: BitmapDescriptor,
    store: RowStore,
    order: TopDown,
    expansion: Expansion,
    buffer: Vec<u8>,
}

impl BmpRows {
    /// Expand the next row, or `None` once all `height` rows were delivered.
    ///
    /// The returned slice is overwritten by the following call.
    pub fn next_row(&mut self) -> Option<&[u8]> {
        let index = self.order.next()?;
        self.expansion.expand(self.store.row(index), &mut self.buffer);
        Some(&self.buffer)
    }

    /// [`Self::next_row`] as typed pixels.
    #[cfg(feature = "rgb")]
    pub fn next_row_pixels(&mut self) -> Option<&[rgb::RGB8]> {
        use rgb::AsPixels as _;

        self.next_row().map(|row| row.as_pixels())
    }

    /// Rows not yet delivered.
    pub fn rows_remaining(&self) -> usize {
        self.order.len()
    }

    pub fn descriptor(&self) -> &BitmapDescriptor {
        &self.descriptor
    }

    pub fn info(&self) -> ImageInfo {
        self.descriptor.info()
    }

    /// End the session and release the row store.
    pub fn finish(self) -> BitmapDescriptor {
        let undelivered = self.order.len();
        if undelivered != 0 {
            log::debug!("finishing with {undelivered} rows undelivered");
        }
        self.descriptor
    }
}
