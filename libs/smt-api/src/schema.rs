use serde::{Deserialize, Serialize};

/// Type tag attached to a record's key or value.
///
/// A record carries `Option<Schema>`: `None` means the field is schemaless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Schema {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    String,
    /// Raw bytes. The tag every normalized binary payload ends up with.
    Bytes,
    Array,
    Map,
    Struct,
}

impl std::fmt::Display for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Schema::Bool => "bool",
            Schema::Int8 => "int8",
            Schema::Int16 => "int16",
            Schema::Int32 => "int32",
            Schema::Int64 => "int64",
            Schema::Float32 => "float32",
            Schema::Float64 => "float64",
            Schema::String => "string",
            Schema::Bytes => "bytes",
            Schema::Array => "array",
            Schema::Map => "map",
            Schema::Struct => "struct",
        };
        f.write_str(name)
    }
}
