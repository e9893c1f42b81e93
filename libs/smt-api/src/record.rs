use crate::schema::Schema;
use crate::value::Value;

/// A record travelling through a transform stage.
///
/// Transforms take records by value and hand back either the same record
/// or a rebuilt one; they never edit a record they do not own.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicRecord {
    /// Origin topic.
    pub topic: String,
    pub partition: Option<i32>,
    pub key_schema: Option<Schema>,
    pub key: Value,
    pub value_schema: Option<Schema>,
    pub value: Value,
    /// Timestamp in milliseconds (Unix epoch).
    pub ts_ms: Option<i64>,
}

impl TopicRecord {
    /// Record with a schemaless null key and no partition or timestamp.
    pub fn new(topic: impl Into<String>, value_schema: Option<Schema>, value: Value) -> Self {
        Self {
            topic: topic.into(),
            partition: None,
            key_schema: None,
            key: Value::Null,
            value_schema,
            value,
            ts_ms: None,
        }
    }

    pub fn with_partition(mut self, partition: i32) -> Self {
        self.partition = Some(partition);
        self
    }

    pub fn with_key(mut self, key_schema: Option<Schema>, key: Value) -> Self {
        self.key_schema = key_schema;
        self.key = key;
        self
    }

    pub fn with_timestamp(mut self, ts_ms: i64) -> Self {
        self.ts_ms = Some(ts_ms);
        self
    }

    /// Replace the payload. Value and its schema always change together.
    pub fn with_value(mut self, value_schema: Option<Schema>, value: Value) -> Self {
        self.value_schema = value_schema;
        self.value = value;
        self
    }
}
