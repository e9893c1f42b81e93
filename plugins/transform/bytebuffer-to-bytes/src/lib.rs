use std::sync::Arc;

use bytes::{Buf, Bytes};
use smt_api::config::ConfigValues;
use smt_api::ffi::{PluginCreateResult, config_from_ptr, create_transform};
use smt_api::observe::{RecordObserver, RewriteEvent, TracingObserver};
use smt_api::transform::Transform;
use smt_api::{ByteBuffer, PluginError, Schema, TopicRecord, Value};

pub const NAME: &str = "bytebuffer-to-bytes";

/// Normalizes buffer-handle payloads into flat bytes.
///
/// A record whose value is a [`Value::Buffer`] comes out with the handle's
/// unread bytes copied into [`Value::Bytes`] and the value schema set to
/// [`Schema::Bytes`]. Topic, partition, key, key schema and timestamp are
/// carried over as-is. Every other record is returned untouched.
///
/// Draining advances the handle's cursor to its limit. The handle moves in
/// with the record, so nobody else observes that; a clone taken earlier keeps
/// its own cursor.
pub struct ByteBufferToBytes {
    observer: Arc<dyn RecordObserver>,
}

impl ByteBufferToBytes {
    pub fn new() -> Self {
        Self::with_observer(Arc::new(TracingObserver))
    }

    pub fn with_observer(observer: Arc<dyn RecordObserver>) -> Self {
        Self { observer }
    }
}

impl Default for ByteBufferToBytes {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy exactly `remaining()` bytes out of the handle into a fresh allocation.
fn drain(buf: &mut ByteBuffer) -> Bytes {
    let mut flat = vec![0u8; buf.remaining()];
    buf.copy_to_slice(&mut flat);
    Bytes::from(flat)
}

impl Transform for ByteBufferToBytes {
    fn configure(&mut self, _config: &ConfigValues) -> Result<(), PluginError> {
        Ok(())
    }

    fn apply(&self, mut record: TopicRecord) -> TopicRecord {
        match &mut record.value {
            Value::Buffer(buf) => {
                let flat = drain(buf);
                self.observer.on_rewrite(&RewriteEvent {
                    transform: NAME,
                    topic: &record.topic,
                    field: "value",
                    bytes: flat.len(),
                });
                record.with_value(Some(Schema::Bytes), Value::Bytes(flat))
            }
            Value::Null
            | Value::Bool(_)
            | Value::Int8(_)
            | Value::Int16(_)
            | Value::Int32(_)
            | Value::Int64(_)
            | Value::Float32(_)
            | Value::Float64(_)
            | Value::String(_)
            | Value::Bytes(_)
            | Value::Array(_)
            | Value::Map(_) => record,
        }
    }
}

// ---------------------------------------------------------------------------
// FFI exports for dynamic (.so) loading
// ---------------------------------------------------------------------------

smt_api::smt_abi_version_fn!();
smt_api::smt_config_params_fn!([]);
smt_api::smt_destroy_fn!();

/// # Safety
///
/// `config_ptr` must be null or point to a valid `ConfigValues` owned by the runtime.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn smt_create_transform(config_ptr: *const ()) -> PluginCreateResult {
    let empty = ConfigValues::new();
    let config = unsafe { config_from_ptr(config_ptr) }.unwrap_or(&empty);
    create_transform(ByteBufferToBytes::new(), config)
}
