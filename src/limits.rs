use alloc::format;

use crate::error::BmpError;

/// Caps applied when a session starts, before any pixel data is read.
///
/// Every field defaults to `None`, meaning unbounded.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Cap on `width * height`.
    pub max_pixels: Option<u64>,
    /// Cap on the row store: padded row width times height.
    ///
    /// This is the most the row store ever allocates, so it bounds the
    /// session's memory apart from one expanded output row.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    pub(crate) const NONE: Self = Self {
        max_width: None,
        max_height: None,
        max_pixels: None,
        max_memory_bytes: None,
    };

    /// Admit an image of `height` rows, each `row_width` bytes once padded.
    ///
    /// Returns the row store size in bytes.
    pub(crate) fn admit(
        &self,
        width: u32,
        height: u32,
        row_width: usize,
    ) -> Result<usize, BmpError> {
        let store_bytes = row_width
            .checked_mul(height as usize)
            .ok_or(BmpError::DimensionsTooLarge { width, height })?;

        within("width", u64::from(width), self.max_width)?;
        within("height", u64::from(height), self.max_height)?;
        within("pixel count", u64::from(width) * u64::from(height), self.max_pixels)?;
        within("row store bytes", store_bytes as u64, self.max_memory_bytes)?;
        Ok(store_bytes)
    }
}

fn within(what: &str, value: u64, max: Option<u64>) -> Result<(), BmpError> {
    match max {
        Some(max) if value > max => Err(BmpError::LimitExceeded(format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}
