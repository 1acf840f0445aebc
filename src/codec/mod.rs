use std::any::type_name;

use log::{debug, trace};

use crate::{buffer::Buffer, shape::Shape, Error};

mod limits;
pub use limits::Limits;

mod primitive;
pub use primitive::{BoolDecoder, F64Decoder, I32Decoder, I64Decoder, StringDecoder};

mod sequence;
pub use sequence::{seq, SeqDecoder};

/// A stateless capability that reads one value of [`Decoder::Output`] from a buffer.
///
/// Decoders hold no per-call state, so one instance may be shared across
/// threads as long as each call gets its own [`Buffer`].
pub trait Decoder {
    type Output;

    /// Name reported in errors raised by this decoder.
    const NAME: &'static str;

    /// # Description
    /// Decode a value from `buf`, advancing its cursor past the bytes consumed.
    ///
    /// # Arguments
    /// * `buf`: The buffer to decode from.
    ///
    /// # Errors
    /// Fails fast on the first error. The cursor is left wherever the failing
    /// read left it; nothing is rolled back.
    /// See [`Error`] for more details.
    ///
    /// # Returns
    /// The decoded value.
    fn decode(&self, buf: &mut Buffer<'_>) -> Result<Self::Output, Error>;
}

/// Binds a type to the decoder that reads it.
///
/// Resolution happens at compile time: asking for a type with no impl does not
/// build.
///
/// ```compile_fail
/// use codex::{buffer::Buffer, decode};
///
/// let mut buf = Buffer::new(&[0, 1]);
/// let _: u16 = decode(&mut buf).unwrap();
/// ```
pub trait Decode: Sized {
    type Decoder: Decoder<Output = Self>;

    /// # Description
    /// Resolve the decoder for `Self`, bounding declared lengths by `limits`.
    fn decoder(limits: &Limits) -> Self::Decoder;

    /// # Description
    /// The tag descriptor for `Self`.
    fn shape() -> Shape;
}

impl Decode for bool {
    type Decoder = BoolDecoder;

    fn decoder(_: &Limits) -> Self::Decoder {
        BoolDecoder
    }

    fn shape() -> Shape {
        Shape::Bool
    }
}

impl Decode for i32 {
    type Decoder = I32Decoder;

    fn decoder(_: &Limits) -> Self::Decoder {
        I32Decoder
    }

    fn shape() -> Shape {
        Shape::I32
    }
}

impl Decode for i64 {
    type Decoder = I64Decoder;

    fn decoder(_: &Limits) -> Self::Decoder {
        I64Decoder
    }

    fn shape() -> Shape {
        Shape::I64
    }
}

impl Decode for f64 {
    type Decoder = F64Decoder;

    fn decoder(_: &Limits) -> Self::Decoder {
        F64Decoder
    }

    fn shape() -> Shape {
        Shape::F64
    }
}

impl Decode for String {
    type Decoder = StringDecoder;

    fn decoder(limits: &Limits) -> Self::Decoder {
        StringDecoder::new(limits.max_string_len)
    }

    fn shape() -> Shape {
        Shape::Str
    }
}

impl<T> Decode for Vec<T>
where
    T: Decode,
{
    type Decoder = SeqDecoder<T::Decoder>;

    fn decoder(limits: &Limits) -> Self::Decoder {
        SeqDecoder::new(T::decoder(limits), limits.max_seq_len)
    }

    fn shape() -> Shape {
        Shape::Seq(Box::new(T::shape()))
    }
}

/// # Description
/// Decode a `T` from `buf` using [`Limits::default`].
///
/// ```
/// use codex::{buffer::Buffer, decode};
///
/// let mut buf = Buffer::new(&[0, 0, 0, 2, 0, 0, 0, 42, 0, 0, 0, 99]);
/// let values: Vec<i32> = decode(&mut buf).unwrap();
/// assert_eq!(values, [42, 99]);
/// ```
///
/// # Errors
/// See [`Error`] for more details.
pub fn decode<T>(buf: &mut Buffer<'_>) -> Result<T, Error>
where
    T: Decode,
{
    decode_with(buf, &Limits::default())
}

/// # Description
/// Decode a `T` from `buf`, bounding declared lengths by `limits`.
///
/// # Errors
/// See [`Error`] for more details.
pub fn decode_with<T>(buf: &mut Buffer<'_>, limits: &Limits) -> Result<T, Error>
where
    T: Decode,
{
    let start = buf.position();
    trace!("decoding {} at {}", type_name::<T>(), start);

    match T::decoder(limits).decode(buf) {
        Ok(value) => {
            trace!(
                "decoded {} from {} bytes",
                type_name::<T>(),
                buf.position() - start
            );
            Ok(value)
        }
        Err(err) => {
            debug!("failed to decode {}: {}", type_name::<T>(), err);
            Err(err)
        }
    }
}

/// # Description
/// Decode a `T` that must span all of `bytes`.
///
/// # Errors
/// [`Error::TrailingBytes`] if anything is left after the value, otherwise
/// see [`Error`] for more details.
pub fn decode_exact<T>(bytes: &[u8], limits: &Limits) -> Result<T, Error>
where
    T: Decode,
{
    let mut buf = Buffer::new(bytes);
    let value = decode_with(&mut buf, limits)?;

    let remaining = buf.remaining();
    if remaining != 0 {
        debug!("{} trailing bytes after {}", remaining, type_name::<T>());
        return Err(Error::TrailingBytes {
            offset: buf.position(),
            remaining,
        });
    }
    Ok(value)
}
