//! # zenbmp
//!
//! BMP scanline source: decodes uncompressed 8-bit palette and 24-bit BMP
//! files into top-to-bottom rows of packed RGB, ready for an encoder that
//! pulls one scanline at a time.
//!
//! ## Supported Input
//!
//! - OS/2 1.x (12-byte core header), Windows 3.x (40-byte) and OS/2 2.x
//!   (64-byte) info headers
//! - 8-bit colormapped and 24-bit BGR pixel data, bottom-up row order
//!
//! ## Non-Goals
//!
//! - RLE or other compressed BMPs
//! - 1, 4, 16 and 32-bit depths
//! - Top-down (negative height) BMPs
//! - Writing BMP files
//!
//! ## Decode Sessions
//!
//! A session has two states. [`BmpSource::start`] reads the headers and
//! colormap and exposes the image metadata. [`BmpSource::prepare`] reads the
//! pixel data into a whole-image row store (BMP stores rows bottom-up, so
//! nothing can be delivered until the last stored row has been read) and
//! returns [`BmpRows`], which expands one row per call.
//!
//! ```no_run
//! use zenbmp::{BmpSource, NoProgress, SliceSource, Unstoppable};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//! let source = BmpSource::start(SliceSource::new(data), None, &mut NoProgress)?;
//! println!("{}x{}", source.info().width, source.info().height);
//!
//! let mut rows = source.prepare(&mut NoProgress, &Unstoppable)?;
//! while let Some(rgb) = rows.next_row() {
//!     // hand `rgb` (width * 3 bytes) to the encoder
//!     let _ = rgb;
//! }
//! # Ok::<(), zenbmp::BmpError>(())
//! ```
//!
//! For a one-shot decode into a single buffer use [`decode`] or
//! [`DecodeRequest`].

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod info;
mod limits;
mod progress;
mod source;

pub mod bmp;

mod decode;

// Re-exports
pub use bmp::{BitmapDescriptor, BmpRows, BmpSource, Colormap, HeaderKind};
pub use decode::{DecodeOutput, DecodeRequest, decode};
pub use enough::{Stop, Unstoppable};
pub use error::BmpError;
pub use info::{ColorSpace, Density, DensityUnit, ImageInfo};
pub use limits::Limits;
pub use progress::{NoProgress, Progress};
#[cfg(feature = "std")]
pub use source::IoSource;
pub use source::{ByteSource, SliceSource};
