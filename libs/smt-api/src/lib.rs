//! Plugin-facing API for single-record transform stages.
//!
//! A transform plugin implements [`transform::Transform`], is built as a
//! `cdylib`, and exports its constructor with the helpers in [`ffi`].

pub mod buffer;
pub mod config;
pub mod error;
pub mod ffi;
pub mod observe;
pub mod record;
pub mod schema;
pub mod transform;
pub mod value;

pub use buffer::{BufferError, ByteBuffer};
pub use error::{ErrorKind, PluginError};
pub use record::TopicRecord;
pub use schema::Schema;
pub use value::Value;
