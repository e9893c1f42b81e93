use crate::config::ConfigValues;
use crate::error::PluginError;
use crate::record::TopicRecord;

/// Single-record transform stage.
///
/// The runtime creates the transform, calls `configure` once, then `apply`
/// for every record passing through the stage (possibly from several worker
/// threads at once), and finally `close` when the stage is retired.
pub trait Transform: Send + Sync {
    /// Apply setup-time config. Unrecognized entries are ignored.
    fn configure(&mut self, config: &ConfigValues) -> Result<(), PluginError>;

    /// Map one record. Total: every record shape yields a record.
    fn apply(&self, record: TopicRecord) -> TopicRecord;

    /// Release resources held by the stage.
    fn close(&mut self) {}
}
