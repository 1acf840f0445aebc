mod error;
pub use error::Error;

/// A borrowed byte slice with a read cursor.
///
/// Every read checks the remaining length first, so a failed read never moves
/// the cursor and never touches bytes past the end of the slice.
#[derive(Clone, Debug)]
pub struct Buffer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Buffer<'a> {
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// # Description
    /// The offset of the next byte to be read.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// # Description
    /// Moves the cursor to `pos`, clamped to the length of the buffer.
    ///
    /// Decoders never rewind; this is for callers that want to retry from a
    /// known offset after a failure.
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos.min(self.data.len());
    }

    /// # Description
    /// Total length of the underlying slice.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// # Description
    /// Number of bytes between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// # Description
    /// Reads exactly `N` bytes and advances the cursor past them.
    ///
    /// # Errors
    /// [`Error::Underflow`] if fewer than `N` bytes remain. The cursor is not moved.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let bytes = self.read_slice(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// # Description
    /// Borrows the next `len` bytes and advances the cursor past them.
    ///
    /// # Errors
    /// [`Error::Underflow`] if fewer than `len` bytes remain. The cursor is not moved.
    pub fn read_slice(&mut self, len: usize) -> Result<&'a [u8], Error> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(Error::Underflow {
                offset: self.pos,
                needed: len,
                remaining,
            });
        }

        let start = self.pos;
        self.pos += len;
        Ok(&self.data[start..self.pos])
    }
}

impl<'a> From<&'a [u8]> for Buffer<'a> {
    fn from(data: &'a [u8]) -> Self {
        Self::new(data)
    }
}
