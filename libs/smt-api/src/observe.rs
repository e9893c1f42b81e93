/// What a transform did to one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteEvent<'a> {
    /// Name of the transform that rewrote the record.
    pub transform: &'static str,
    /// Origin topic of the record.
    pub topic: &'a str,
    /// Which field was rewritten (`"key"` or `"value"`).
    pub field: &'static str,
    /// Size of the rewritten field in bytes.
    pub bytes: usize,
}

/// Diagnostics sink injected into a transform at construction.
///
/// Purely advisory: implementations must not influence record content.
/// Called on the hot per-record path, so keep it cheap.
pub trait RecordObserver: Send + Sync {
    fn on_rewrite(&self, event: &RewriteEvent<'_>);
}

/// Emits each rewrite as a `debug`-level tracing event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl RecordObserver for TracingObserver {
    fn on_rewrite(&self, event: &RewriteEvent<'_>) {
        tracing::debug!(
            transform = event.transform,
            topic = %event.topic,
            field = event.field,
            bytes = event.bytes,
            "record rewritten"
        );
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RecordObserver for NoopObserver {
    fn on_rewrite(&self, _event: &RewriteEvent<'_>) {}
}
