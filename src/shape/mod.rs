use crate::{
    buffer::Buffer,
    codec::{
        BoolDecoder, Decode, Decoder, F64Decoder, I32Decoder, I64Decoder, Limits, SeqDecoder,
        StringDecoder,
    },
    Error,
};

mod value;
pub use value::Value;

const BOOL: u8 = 0x01;
const I32: u8 = 0x02;
const I64: u8 = 0x03;
const F64: u8 = 0x04;
const STR: u8 = 0x05;
const SEQ: u8 = 0x06;

/// The closed set of shapes the decoders understand, for callers that only
/// learn the shape at runtime.
///
/// On the wire a shape is one tag byte per level; a sequence tag is followed
/// by its element's shape.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Shape {
    Bool,
    I32,
    I64,
    F64,
    Str,
    Seq(Box<Shape>),
}

impl Shape {
    const NAME: &'static str = "shape";

    /// # Description
    /// The shape of a statically known type.
    pub fn of<T>() -> Self
    where
        T: Decode,
    {
        T::shape()
    }

    pub fn tag(&self) -> u8 {
        match self {
            Self::Bool => BOOL,
            Self::I32 => I32,
            Self::I64 => I64,
            Self::F64 => F64,
            Self::Str => STR,
            Self::Seq(_) => SEQ,
        }
    }

    /// # Description
    /// Number of sequence levels in this shape.
    pub fn depth(&self) -> u32 {
        match self {
            Self::Seq(element) => 1 + element.depth(),
            _ => 0,
        }
    }

    /// # Description
    /// Read a shape descriptor from `buf`.
    ///
    /// # Errors
    /// * [`Error::UnsupportedType`] for a tag outside the known set.
    /// * [`Error::Depth`] if sequences nest deeper than `limits.max_depth`.
    /// * [`Error::Underflow`] if the descriptor is cut short.
    pub fn read(buf: &mut Buffer<'_>, limits: &Limits) -> Result<Self, Error> {
        Self::read_nested(buf, limits.max_depth, 0)
    }

    fn read_nested(buf: &mut Buffer<'_>, max: u32, depth: u32) -> Result<Self, Error> {
        let offset = buf.position();
        let [tag] = buf
            .read_array::<1>()
            .map_err(|err| Error::underflow(Self::NAME, err))?;

        match tag {
            BOOL => Ok(Self::Bool),
            I32 => Ok(Self::I32),
            I64 => Ok(Self::I64),
            F64 => Ok(Self::F64),
            STR => Ok(Self::Str),
            SEQ => {
                if depth >= max {
                    return Err(Error::Depth {
                        decoder: Self::NAME,
                        offset,
                        max,
                    });
                }
                let element = Self::read_nested(buf, max, depth + 1)?;
                Ok(Self::Seq(Box::new(element)))
            }
            tag => Err(Error::UnsupportedType { tag, offset }),
        }
    }

    /// # Description
    /// Append this shape's descriptor bytes to `out`.
    pub fn write(&self, out: &mut Vec<u8>) {
        out.push(self.tag());
        if let Self::Seq(element) = self {
            element.write(out);
        }
    }

    /// # Description
    /// Decode a value of this shape from `buf`.
    ///
    /// Dispatches to the same decoders the static registry resolves, so
    /// `Shape::of::<T>().decode(..)` reads exactly what `decode::<T>(..)` reads.
    ///
    /// # Errors
    /// See [`Error`] for more details.
    pub fn decode(&self, buf: &mut Buffer<'_>, limits: &Limits) -> Result<Value, Error> {
        self.decoder(limits).decode(buf)
    }

    /// # Description
    /// A decoder for this shape that borrows it.
    pub fn decoder<'s>(&'s self, limits: &'s Limits) -> ShapeDecoder<'s> {
        ShapeDecoder {
            shape: self,
            limits,
        }
    }
}

/// Decodes whatever its [`Shape`] describes into a [`Value`].
#[derive(Copy, Clone, Debug)]
pub struct ShapeDecoder<'s> {
    shape: &'s Shape,
    limits: &'s Limits,
}

impl Decoder for ShapeDecoder<'_> {
    type Output = Value;
    const NAME: &'static str = Shape::NAME;

    fn decode(&self, buf: &mut Buffer<'_>) -> Result<Value, Error> {
        match self.shape {
            Shape::Bool => BoolDecoder.decode(buf).map(Value::Bool),
            Shape::I32 => I32Decoder.decode(buf).map(Value::I32),
            Shape::I64 => I64Decoder.decode(buf).map(Value::I64),
            Shape::F64 => F64Decoder.decode(buf).map(Value::F64),
            Shape::Str => StringDecoder::new(self.limits.max_string_len)
                .decode(buf)
                .map(Value::Str),
            Shape::Seq(element) => {
                SeqDecoder::new(element.decoder(self.limits), self.limits.max_seq_len)
                    .decode(buf)
                    .map(Value::Seq)
            }
        }
    }
}
