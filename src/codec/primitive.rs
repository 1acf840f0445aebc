use std::str;

use crate::{buffer::Buffer, Error};

use super::{Decoder, Limits};

fn read<const N: usize>(decoder: &'static str, buf: &mut Buffer<'_>) -> Result<[u8; N], Error> {
    buf.read_array::<N>()
        .map_err(|err| Error::underflow(decoder, err))
}

/// Reads a big-endian signed 32-bit length or count and checks it against `max`.
///
/// The prefix is consumed even when it is rejected.
pub(crate) fn read_len(
    decoder: &'static str,
    buf: &mut Buffer<'_>,
    max: u32,
) -> Result<usize, Error> {
    let offset = buf.position();
    let len = i32::from_be_bytes(read(decoder, buf)?);
    match u32::try_from(len) {
        Ok(len) if len <= max => Ok(len as usize),
        _ => Err(Error::Length {
            decoder,
            offset,
            len: i64::from(len),
            max,
        }),
    }
}

/// One byte, `false` iff the byte is zero.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct BoolDecoder;

impl Decoder for BoolDecoder {
    type Output = bool;
    const NAME: &'static str = "bool";

    fn decode(&self, buf: &mut Buffer<'_>) -> Result<bool, Error> {
        let [byte] = read::<1>(Self::NAME, buf)?;
        Ok(byte != 0)
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct I32Decoder;

impl Decoder for I32Decoder {
    type Output = i32;
    const NAME: &'static str = "i32";

    fn decode(&self, buf: &mut Buffer<'_>) -> Result<i32, Error> {
        Ok(i32::from_be_bytes(read(Self::NAME, buf)?))
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct I64Decoder;

impl Decoder for I64Decoder {
    type Output = i64;
    const NAME: &'static str = "i64";

    fn decode(&self, buf: &mut Buffer<'_>) -> Result<i64, Error> {
        Ok(i64::from_be_bytes(read(Self::NAME, buf)?))
    }
}

/// IEEE-754 binary64, big-endian.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct F64Decoder;

impl Decoder for F64Decoder {
    type Output = f64;
    const NAME: &'static str = "f64";

    fn decode(&self, buf: &mut Buffer<'_>) -> Result<f64, Error> {
        Ok(f64::from_be_bytes(read(Self::NAME, buf)?))
    }
}

/// A 4 byte big-endian length followed by that many bytes of UTF-8.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct StringDecoder {
    max_len: u32,
}

impl StringDecoder {
    #[must_use]
    pub fn new(max_len: u32) -> Self {
        Self { max_len }
    }
}

impl Default for StringDecoder {
    fn default() -> Self {
        Self::new(Limits::DEFAULT_MAX_STRING_LEN)
    }
}

impl Decoder for StringDecoder {
    type Output = String;
    const NAME: &'static str = "string";

    fn decode(&self, buf: &mut Buffer<'_>) -> Result<String, Error> {
        let len = read_len(Self::NAME, buf, self.max_len)?;
        let offset = buf.position();
        let bytes = buf
            .read_slice(len)
            .map_err(|err| Error::underflow(Self::NAME, err))?;

        let text = str::from_utf8(bytes).map_err(|source| Error::Encoding {
            decoder: Self::NAME,
            offset: offset + source.valid_up_to(),
            source,
        })?;
        Ok(text.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use coverage_helper::test;
    use matches::assert_matches;

    use crate::{buffer::Buffer, codec::Decoder, Error};

    use super::{BoolDecoder, F64Decoder, I32Decoder, I64Decoder, StringDecoder};

    #[test]
    fn test_bool() {
        let mut buf = Buffer::new(&[0x00, 0x01, 0x7f, 0xff]);
        assert!(!BoolDecoder.decode(&mut buf).unwrap());
        assert!(BoolDecoder.decode(&mut buf).unwrap());
        assert!(BoolDecoder.decode(&mut buf).unwrap());
        assert!(BoolDecoder.decode(&mut buf).unwrap());
        assert_matches!(
            BoolDecoder.decode(&mut buf),
            Err(Error::Underflow {
                decoder: "bool",
                offset: 4,
                needed: 1
            })
        );
    }

    #[test]
    fn test_i32() {
        let mut buf = Buffer::new(&[0xff, 0xff, 0xff, 0xfe, 0x00, 0x00, 0x00, 0x2a]);
        assert_eq!(I32Decoder.decode(&mut buf).unwrap(), -2);
        assert_eq!(I32Decoder.decode(&mut buf).unwrap(), 42);
        assert_eq!(buf.remaining(), 0);
    }

    #[test]
    fn test_i64() {
        let mut bytes = i64::MIN.to_be_bytes().to_vec();
        bytes.extend_from_slice(&0x0102_0304_0506_0708i64.to_be_bytes());
        let mut buf = Buffer::new(&bytes);
        assert_eq!(I64Decoder.decode(&mut buf).unwrap(), i64::MIN);
        assert_eq!(I64Decoder.decode(&mut buf).unwrap(), 0x0102_0304_0506_0708);
    }

    #[test]
    fn test_f64() {
        let bytes = [0x40, 0x09, 0x21, 0xfb, 0x54, 0x44, 0x2d, 0x18];
        let mut buf = Buffer::new(&bytes);
        assert_eq!(F64Decoder.decode(&mut buf).unwrap(), std::f64::consts::PI);
    }

    #[test]
    fn test_f64_nan_bits_preserved() {
        let bits = 0x7ff8_0000_0000_0001u64;
        let bytes = bits.to_be_bytes();
        let mut buf = Buffer::new(&bytes);
        assert_eq!(F64Decoder.decode(&mut buf).unwrap().to_bits(), bits);
    }

    #[test]
    fn test_string() {
        let mut buf = Buffer::new(b"\x00\x00\x00\x05hello");
        assert_eq!(StringDecoder::default().decode(&mut buf).unwrap(), "hello");
        assert_eq!(buf.position(), 9);
    }

    #[test]
    fn test_string_multibyte() {
        let text = "grüße, 世界";
        let mut bytes = (text.len() as u32).to_be_bytes().to_vec();
        bytes.extend_from_slice(text.as_bytes());
        let mut buf = Buffer::new(&bytes);
        assert_eq!(StringDecoder::default().decode(&mut buf).unwrap(), text);
    }

    #[test]
    fn test_string_underflow() {
        let mut buf = Buffer::new(b"\x00\x00\x00\x06hello");
        assert_matches!(
            StringDecoder::default().decode(&mut buf),
            Err(Error::Underflow {
                decoder: "string",
                offset: 4,
                needed: 6
            })
        );
    }

    #[test]
    fn test_string_invalid_utf8() {
        let mut buf = Buffer::new(b"\x00\x00\x00\x03a\xc3\x28");
        assert_matches!(
            StringDecoder::default().decode(&mut buf),
            Err(Error::Encoding {
                decoder: "string",
                offset: 5,
                ..
            })
        );
    }

    #[test]
    fn test_string_negative_len() {
        let mut buf = Buffer::new(&[0xff, 0xff, 0xff, 0xff]);
        assert_matches!(
            StringDecoder::default().decode(&mut buf),
            Err(Error::Length {
                decoder: "string",
                offset: 0,
                len: -1,
                ..
            })
        );
    }

    #[test]
    fn test_string_len_over_limit() {
        let mut buf = Buffer::new(b"\x00\x00\x00\x05hello");
        assert_matches!(
            StringDecoder::new(4).decode(&mut buf),
            Err(Error::Length {
                len: 5,
                max: 4,
                ..
            })
        );
    }
}
