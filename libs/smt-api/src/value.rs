use bytes::Bytes;

use crate::buffer::ByteBuffer;

/// Runtime shape of a record's key or value.
///
/// Binary data comes in two forms:
/// - `Buffer`: a cursor-carrying handle, still to be read.
/// - `Bytes`: flat, immutable, self-contained.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    String(String),
    Bytes(Bytes),
    Buffer(ByteBuffer),
    Array(Vec<Value>),
    Map(Vec<(Value, Value)>),
}

impl From<ByteBuffer> for Value {
    fn from(buf: ByteBuffer) -> Self {
        Value::Buffer(buf)
    }
}

impl From<Bytes> for Value {
    fn from(bytes: Bytes) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}
