//! Progress notification seam.

use recado_protocol::LogLevel;

/// Sink for human-readable progress notifications emitted around tool
/// execution.
///
/// Implementations must be fire-and-forget: `notify` never blocks and
/// never fails. The streamed transport broadcasts to its open
/// sessions; the stream-pipe transport has no notification concept and
/// uses [`NullSink`].
pub trait ProgressSink: Send + Sync {
    /// Delivers one progress message at the given severity.
    fn notify(&self, level: LogLevel, message: &str);
}

/// Sink that discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn notify(&self, _level: LogLevel, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_sink_swallows_messages() {
        NullSink.notify(LogLevel::Info, "sending to 55");
        NullSink.notify(LogLevel::Error, "boom");
    }
}
