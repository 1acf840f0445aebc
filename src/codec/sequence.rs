use crate::{buffer::Buffer, Error};

use super::{primitive::read_len, Decoder, Limits};

/// A 4 byte big-endian count followed by that many back-to-back elements.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SeqDecoder<D> {
    element: D,
    max_len: u32,
}

impl<D> SeqDecoder<D>
where
    D: Decoder,
{
    #[must_use]
    pub fn new(element: D, max_len: u32) -> Self {
        Self { element, max_len }
    }

    pub fn element(&self) -> &D {
        &self.element
    }
}

/// # Description
/// Builds a decoder for a sequence of whatever `element` decodes.
///
/// # Arguments
/// * `element`: The decoder used for every element.
///
/// # Returns
/// A [`SeqDecoder`] bounded by [`Limits::DEFAULT_MAX_SEQ_LEN`].
pub fn seq<D>(element: D) -> SeqDecoder<D>
where
    D: Decoder,
{
    SeqDecoder::new(element, Limits::DEFAULT_MAX_SEQ_LEN)
}

impl<D> Decoder for SeqDecoder<D>
where
    D: Decoder,
{
    type Output = Vec<D::Output>;
    const NAME: &'static str = "seq";

    fn decode(&self, buf: &mut Buffer<'_>) -> Result<Self::Output, Error> {
        let count = read_len(Self::NAME, buf, self.max_len)?;

        // Every element takes at least one byte.
        let mut out = Vec::with_capacity(count.min(buf.remaining()));
        for _ in 0..count {
            out.push(self.element.decode(buf)?);
        }
        Ok(out)
    }
}
