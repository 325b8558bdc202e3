//! Sequential byte sources the decoder reads from.
//!
//! The decoder never seeks: it consumes the file header, colormap, pad
//! bytes and pixel data strictly in order.

use crate::error::BmpError;

/// A forward-only stream of bytes.
pub trait ByteSource {
    /// Fill `buf` completely or fail with [`BmpError::UnexpectedEof`].
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), BmpError>;

    /// Read a single byte.
    fn read_byte(&mut self) -> Result<u8, BmpError> {
        let mut b = [0u8; 1];
        self.read_exact(&mut b)?;
        Ok(b[0])
    }

    /// Discard `n` bytes.
    fn skip(&mut self, n: usize) -> Result<(), BmpError> {
        for _ in 0..n {
            self.read_byte()?;
        }
        Ok(())
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), BmpError> {
        (**self).read_exact(buf)
    }

    fn read_byte(&mut self) -> Result<u8, BmpError> {
        (**self).read_byte()
    }

    fn skip(&mut self, n: usize) -> Result<(), BmpError> {
        (**self).skip(n)
    }
}

/// Cursor over an in-memory buffer.
#[derive(Clone, Debug)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }
}

impl ByteSource for SliceSource<'_> {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), BmpError> {
        let end = self
            .pos
            .checked_add(buf.len())
            .ok_or(BmpError::UnexpectedEof)?;
        let src = self.data.get(self.pos..end).ok_or(BmpError::UnexpectedEof)?;
        buf.copy_from_slice(src);
        self.pos = end;
        Ok(())
    }

    fn read_byte(&mut self) -> Result<u8, BmpError> {
        let b = *self.data.get(self.pos).ok_or(BmpError::UnexpectedEof)?;
        self.pos += 1;
        Ok(b)
    }

    fn skip(&mut self, n: usize) -> Result<(), BmpError> {
        let new_pos = self.pos.checked_add(n).ok_or(BmpError::UnexpectedEof)?;
        if new_pos > self.data.len() {
            return Err(BmpError::UnexpectedEof);
        }
        self.pos = new_pos;
        Ok(())
    }
}

/// Adapter for any [`std::io::Read`].
///
/// Reads are issued as-is; wrap unbuffered readers in a
/// [`std::io::BufReader`] since the colormap and pad bytes are read a few
/// bytes at a time.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSource<R> {
    inner: R,
}

#[cfg(feature = "std")]
impl<R: std::io::Read> IoSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> ByteSource for IoSource<R> {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), BmpError> {
        Ok(self.inner.read_exact(buf)?)
    }

    fn skip(&mut self, n: usize) -> Result<(), BmpError> {
        use std::io::Read as _;

        let copied = std::io::copy(
            &mut (&mut self.inner).take(n as u64),
            &mut std::io::sink(),
        )?;
        if copied != n as u64 {
            return Err(BmpError::UnexpectedEof);
        }
        Ok(())
    }
}
