//! Synthetic BMP writer for tests.
#![allow(dead_code)]

/// Info header layout to write.
#[derive(Clone, Copy, Debug)]
pub enum Header {
    /// 12-byte OS/2 1.x core header.
    Core,
    /// 40-byte Windows 3.x header.
    V3,
    /// 64-byte OS/2 2.x header.
    V2,
}

impl Header {
    pub fn size(self) -> u32 {
        match self {
            Header::Core => 12,
            Header::V3 => 40,
            Header::V2 => 64,
        }
    }
}

fn padded(n: usize) -> usize {
    (n + 3) & !3
}

fn write_headers(
    out: &mut Vec<u8>,
    header: Header,
    width: u32,
    height: u32,
    bpp: u16,
    colors_used: u32,
    offset: usize,
    file_size: usize,
) {
    // File header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&(offset as u32).to_le_bytes());

    out.extend_from_slice(&header.size().to_le_bytes());
    match header {
        Header::Core => {
            out.extend_from_slice(&(width as u16).to_le_bytes());
            out.extend_from_slice(&(height as u16).to_le_bytes());
            out.extend_from_slice(&1u16.to_le_bytes()); // planes
            out.extend_from_slice(&bpp.to_le_bytes());
        }
        Header::V3 | Header::V2 => {
            out.extend_from_slice(&(width as i32).to_le_bytes());
            out.extend_from_slice(&(height as i32).to_le_bytes()); // positive = bottom-up
            out.extend_from_slice(&1u16.to_le_bytes()); // planes
            out.extend_from_slice(&bpp.to_le_bytes());
            out.extend_from_slice(&0u32.to_le_bytes()); // compression
            out.extend_from_slice(&0u32.to_le_bytes()); // image size
            out.extend_from_slice(&2835i32.to_le_bytes()); // h resolution (72 DPI)
            out.extend_from_slice(&2835i32.to_le_bytes()); // v resolution
            out.extend_from_slice(&colors_used.to_le_bytes());
            out.extend_from_slice(&0u32.to_le_bytes()); // important colors
            if let Header::V2 = header {
                out.extend_from_slice(&[0u8; 24]);
            }
        }
    }
}

/// 24-bit BMP from top-down packed RGB, with `gap` junk bytes before the pixels.
pub fn bmp24_with_gap(rgb: &[u8], width: u32, height: u32, header: Header, gap: usize) -> Vec<u8> {
    let w = width as usize;
    let h = height as usize;
    assert_eq!(rgb.len(), w * h * 3);
    let row_stride = padded(w * 3);
    let offset = 14 + header.size() as usize + gap;
    let file_size = offset + row_stride * h;

    let mut out = Vec::with_capacity(file_size);
    write_headers(&mut out, header, width, height, 24, 0, offset, file_size);
    out.extend(std::iter::repeat_n(0xEEu8, gap));
    for row in rgb.chunks_exact(w * 3).rev() {
        for px in row.chunks_exact(3) {
            out.extend_from_slice(&[px[2], px[1], px[0]]);
        }
        out.extend(std::iter::repeat_n(0u8, row_stride - w * 3));
    }
    out
}

pub fn bmp24(rgb: &[u8], width: u32, height: u32, header: Header) -> Vec<u8> {
    bmp24_with_gap(rgb, width, height, header, 0)
}

/// 8-bit BMP from top-down palette indices.
///
/// The core header has no color count field, so its palette is padded to
/// 256 entries.
pub fn bmp8(indices: &[u8], width: u32, height: u32, palette: &[[u8; 3]], header: Header) -> Vec<u8> {
    let w = width as usize;
    let h = height as usize;
    assert_eq!(indices.len(), w * h);
    let (entries, entry_size, colors_used) = match header {
        Header::Core => (256, 3, 0),
        Header::V3 | Header::V2 => (palette.len(), 4, palette.len() as u32),
    };
    let row_stride = padded(w);
    let offset = 14 + header.size() as usize + entries * entry_size;
    let file_size = offset + row_stride * h;

    let mut out = Vec::with_capacity(file_size);
    write_headers(&mut out, header, width, height, 8, colors_used, offset, file_size);
    for i in 0..entries {
        let [r, g, b] = palette.get(i).copied().unwrap_or([0, 0, 0]);
        out.extend_from_slice(&[b, g, r]);
        if entry_size == 4 {
            out.push(0);
        }
    }
    for row in indices.chunks_exact(w).rev() {
        out.extend_from_slice(row);
        out.extend(std::iter::repeat_n(0u8, row_stride - w));
    }
    out
}

pub fn put_u16(data: &mut [u8], at: usize, v: u16) {
    data[at..at + 2].copy_from_slice(&v.to_le_bytes());
}

pub fn put_u32(data: &mut [u8], at: usize, v: u32) {
    data[at..at + 4].copy_from_slice(&v.to_le_bytes());
}

pub fn noise_pattern(len: usize, seed: u32) -> Vec<u8> {
    let mut pixels = vec![0u8; len];
    let mut state: u32 = seed;
    for p in pixels.iter_mut() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *p = state as u8;
    }
    pixels
}
