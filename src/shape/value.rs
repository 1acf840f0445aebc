use crate::{buffer::Buffer, codec::Limits, Error};

use super::Shape;

/// A decoded value whose shape was only known at runtime.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    I32(i32),
    I64(i64),
    F64(f64),
    Str(String),
    Seq(Vec<Value>),
}

impl Value {
    /// # Description
    /// Read a shape descriptor and then a value of that shape.
    ///
    /// # Errors
    /// See [`Shape::read`] and [`Shape::decode`].
    pub fn read(buf: &mut Buffer<'_>, limits: &Limits) -> Result<(Shape, Self), Error> {
        let shape = Shape::read(buf, limits)?;
        let value = shape.decode(buf, limits)?;
        Ok((shape, value))
    }
}

#[cfg(test)]
mod tests {
    use coverage_helper::test;
    use matches::assert_matches;

    use crate::{buffer::Buffer, codec::Limits, Error};

    use super::{Shape, Value};

    #[test]
    fn test_read_self_describing() {
        let mut buf = Buffer::new(&[
            0x06, 0x02, // seq of i32
            0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x2a, 0x00, 0x00, 0x00, 0x63,
        ]);
        let (shape, value) = Value::read(&mut buf, &Limits::default()).unwrap();
        assert_eq!(shape, Shape::of::<Vec<i32>>());
        assert_eq!(value, Value::Seq(vec![Value::I32(42), Value::I32(99)]));
        assert_eq!(buf.remaining(), 0);
    }

    #[test]
    fn test_read_unknown_tag_reads_no_value() {
        let mut buf = Buffer::new(&[0x07, 0x00, 0x00, 0x00, 0x00]);
        assert_matches!(
            Value::read(&mut buf, &Limits::default()),
            Err(Error::UnsupportedType { tag: 0x07, .. })
        );
        assert_eq!(buf.position(), 1);
    }

    #[test]
    fn test_serialize_untagged() {
        let value = Value::Seq(vec![
            Value::Bool(true),
            Value::I64(-3),
            Value::Str("hello".to_owned()),
        ]);
        assert_eq!(
            serde_json::to_string(&value).expect("serialize"),
            r#"[true,-3,"hello"]"#
        );
    }
}
