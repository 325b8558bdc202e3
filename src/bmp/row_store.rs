//! Whole-image buffer of raw scanlines, indexed in file order.
//!
//! Index 0 is the first row stored in the file, which for a bottom-up BMP
//! is the bottom row of the image. Delivery walks the indices in reverse.

use alloc::vec::Vec;

use crate::error::BmpError;
use crate::source::ByteSource;

/// Upper bound on how far the buffer grows ahead of bytes actually read.
const READ_CHUNK: usize = 64 * 1024;

#[derive(Debug)]
pub(crate) struct RowStore {
    data: Vec<u8>,
    row_width: usize,
    height: usize,
    filled: usize,
}

impl RowStore {
    /// `row_width * height` must already be checked for overflow.
    ///
    /// Storage grows as bytes arrive, reading at most 64 KiB at a time.
    /// Capacity at most doubles ahead of the bytes read and never exceeds
    /// `row_width * height`, the size [`Limits`](crate::Limits) admits.
    pub(crate) fn new(row_width: usize, height: usize) -> Self {
        Self {
            data: Vec::new(),
            row_width,
            height,
            filled: 0,
        }
    }

    pub(crate) fn height(&self) -> usize {
        self.height
    }

    /// Rows filled so far.
    pub(crate) fn filled(&self) -> usize {
        self.filled
    }

    pub(crate) fn is_full(&self) -> bool {
        self.filled() == self.height
    }

    /// Read the next row in file order from `src`.
    pub(crate) fn fill_next<S: ByteSource>(&mut self, src: &mut S) -> Result<(), BmpError> {
        debug_assert!(!self.is_full());
        let end = self.data.len() + self.row_width;
        while self.data.len() < end {
            let start = self.data.len();
            let chunk = (end - start).min(READ_CHUNK);
            if self.data.capacity() - start < chunk {
                let total = self.row_width * self.height;
                self.data.reserve_exact(start.max(chunk).min(total - start));
            }
            self.data.resize(start + chunk, 0);
            if let Err(e) = src.read_exact(&mut self.data[start..]) {
                self.data.truncate(start);
                return Err(e);
            }
        }
        self.filled += 1;
        Ok(())
    }

    pub(crate) fn row(&self, index: usize) -> &[u8] {
        let start = index * self.row_width;
        &self.data[start..start + self.row_width]
    }

    /// Store indices from the last stored row to the first.
    pub(crate) fn top_down(&self) -> TopDown {
        TopDown {
            remaining: self.height,
        }
    }
}

/// Reverse walk over row store indices.
#[derive(Clone, Debug)]
pub(crate) struct TopDown {
    remaining: usize,
}

impl Iterator for TopDown {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.remaining = self.remaining.checked_sub(1)?;
        Some(self.remaining)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for TopDown {}
