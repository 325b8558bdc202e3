use alloc::format;

use crate::error::BmpError;
use crate::source::ByteSource;

const MAX_COLORS: usize = 256;

/// Palette of an 8-bit BMP, stored as separate red, green and blue planes.
///
/// Planes always hold 256 entries so any index byte can be looked up;
/// entries past `len()` are black.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Colormap {
    red: [u8; MAX_COLORS],
    green: [u8; MAX_COLORS],
    blue: [u8; MAX_COLORS],
    len: usize,
}

impl Colormap {
    /// Read `count` entries of `entry_size` bytes (3 = BGR, 4 = BGR0).
    pub(crate) fn read<S: ByteSource>(
        src: &mut S,
        count: usize,
        entry_size: u8,
    ) -> Result<Self, BmpError> {
        if count > MAX_COLORS {
            return Err(BmpError::BadColormap(format!(
                "color count {count} exceeds {MAX_COLORS}"
            )));
        }
        let mut map = Self {
            red: [0; MAX_COLORS],
            green: [0; MAX_COLORS],
            blue: [0; MAX_COLORS],
            len: count,
        };
        let mut raw = [0u8; 4];
        let entry = match entry_size {
            3 | 4 => &mut raw[..usize::from(entry_size)],
            other => {
                return Err(BmpError::BadColormap(format!(
                    "unsupported colormap entry size {other}"
                )));
            }
        };
        for i in 0..count {
            src.read_exact(entry)?;
            map.blue[i] = entry[0];
            map.green[i] = entry[1];
            map.red[i] = entry[2];
        }
        Ok(map)
    }

    /// Number of entries read from the file.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `[r, g, b]` for a palette index.
    #[inline]
    pub fn get(&self, index: u8) -> [u8; 3] {
        let i = usize::from(index);
        [self.red[i], self.green[i], self.blue[i]]
    }

    pub fn red(&self) -> &[u8] {
        &self.red[..self.len]
    }

    pub fn green(&self) -> &[u8] {
        &self.green[..self.len]
    }

    pub fn blue(&self) -> &[u8] {
        &self.blue[..self.len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SliceSource;

    #[test]
    fn bgr_triples() {
        let data = [1u8, 2, 3, 10, 20, 30];
        let map = Colormap::read(&mut SliceSource::new(&data), 2, 3).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(0), [3, 2, 1]);
        assert_eq!(map.get(1), [30, 20, 10]);
        assert_eq!(map.red(), &[3, 30]);
        assert_eq!(map.blue(), &[1, 10]);
    }

    #[test]
    fn bgr0_quads_skip_padding() {
        let data = [1u8, 2, 3, 99, 10, 20, 30, 99, 7];
        let mut src = SliceSource::new(&data);
        let map = Colormap::read(&mut src, 2, 4).unwrap();
        assert_eq!(map.get(0), [3, 2, 1]);
        assert_eq!(map.get(1), [30, 20, 10]);
        assert_eq!(src.remaining(), &[7]);
    }

    #[test]
    fn unused_entries_are_black() {
        let data = [1u8, 2, 3];
        let map = Colormap::read(&mut SliceSource::new(&data), 1, 3).unwrap();
        assert_eq!(map.get(255), [0, 0, 0]);
    }

    #[test]
    fn rejects_bad_entry_size_and_count() {
        let data = [0u8; 16];
        assert!(matches!(
            Colormap::read(&mut SliceSource::new(&data), 1, 2),
            Err(BmpError::BadColormap(_))
        ));
        assert!(matches!(
            Colormap::read(&mut SliceSource::new(&data), 257, 4),
            Err(BmpError::BadColormap(_))
        ));
    }

    #[test]
    fn truncated_palette() {
        let data = [0u8; 7];
        assert!(matches!(
            Colormap::read(&mut SliceSource::new(&data), 2, 4),
            Err(BmpError::UnexpectedEof)
        ));
    }
}
