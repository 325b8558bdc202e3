//! BMP scanline source: 8-bit palette and 24-bit uncompressed BMPs with
//! OS/2 1.x, Windows 3.x and OS/2 2.x info headers.

mod colormap;
mod header;
mod reader;
mod row_store;

pub use colormap::Colormap;
pub use header::{BitmapDescriptor, HeaderKind};
pub use reader::{BmpRows, BmpSource};

use crate::decode::DecodeOutput;
use crate::error::BmpError;
use crate::info::ImageInfo;
use crate::limits::Limits;
use crate::progress::Progress;
use crate::source::SliceSource;
use alloc::vec::Vec;
use enough::Stop;

/// Parse headers only.
pub(crate) fn read_info(data: &[u8]) -> Result<ImageInfo, BmpError> {
    let desc = header::parse_header(&mut SliceSource::new(data))?;
    Ok(desc.info())
}

/// Run a whole session and collect every row.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    progress: &mut dyn Progress,
    stop: &dyn Stop,
) -> Result<DecodeOutput, BmpError> {
    let source = BmpSource::start(SliceSource::new(data), limits, progress)?;
    let info = source.info();
    stop.check()?;
    let mut rows = source.prepare(progress, stop)?;

    let mut pixels = Vec::with_capacity(info.row_bytes() * info.height as usize);
    while let Some(row) = rows.next_row() {
        pixels.extend_from_slice(row);
    }
    rows.finish();
    Ok(DecodeOutput::new(pixels, info))
}
