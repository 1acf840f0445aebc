use std::str::Utf8Error;

use crate::buffer;

/// Every way a decode can fail.
///
/// `decoder` names the decoder that failed and `offset` is the buffer position
/// at which the failing read started.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("{decoder}: nested too deep at {offset}, max depth is {max}")]
    Depth {
        decoder: &'static str,
        offset: usize,
        max: u32,
    },

    #[error("{decoder}: invalid utf-8 at {offset}: {source}")]
    Encoding {
        decoder: &'static str,
        offset: usize,
        #[source]
        source: Utf8Error,
    },

    #[error("{decoder}: declared length {len} at {offset} is out of range 0..={max}")]
    Length {
        decoder: &'static str,
        offset: usize,
        len: i64,
        max: u32,
    },

    #[error("{remaining} trailing bytes at {offset}")]
    TrailingBytes { offset: usize, remaining: usize },

    #[error("{decoder}: underflow at {offset}, need {needed} bytes")]
    Underflow {
        decoder: &'static str,
        offset: usize,
        needed: usize,
    },

    #[error("unsupported type tag {tag:#04x} at {offset}")]
    UnsupportedType { tag: u8, offset: usize },
}

impl Error {
    /// # Description
    /// Attributes a buffer-level failure to `decoder`.
    pub(crate) fn underflow(decoder: &'static str, err: buffer::Error) -> Self {
        match err {
            buffer::Error::Underflow { offset, needed, .. } => Self::Underflow {
                decoder,
                offset,
                needed,
            },
        }
    }

    /// # Description
    /// The buffer offset at which the failure was detected.
    pub fn offset(&self) -> usize {
        match self {
            Self::Depth { offset, .. }
            | Self::Encoding { offset, .. }
            | Self::Length { offset, .. }
            | Self::TrailingBytes { offset, .. }
            | Self::Underflow { offset, .. }
            | Self::UnsupportedType { offset, .. } => *offset,
        }
    }
}
