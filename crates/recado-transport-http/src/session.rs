//! Session table for open streamed connections.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard};

use tokio::sync::mpsc;
use tracing::{debug, trace};
use uuid::Uuid;

use recado_protocol::{JsonRpcNotification, LogLevel};
use recado_registry::ProgressSink;

/// Identifier of one open streamed session, unique for the process
/// lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Tracks currently open streamed sessions.
///
/// The table is the only component that inserts or removes entries.
/// Broadcast operates on a point-in-time snapshot of the senders taken
/// under the lock; the sends themselves happen outside it, so a slow
/// or closed channel never delays the others.
#[derive(Default)]
pub struct SessionTable {
    inner: Mutex<HashMap<SessionId, mpsc::UnboundedSender<JsonRpcNotification>>>,
}

impl SessionTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an open channel and returns its fresh session id.
    pub fn open(&self, channel: mpsc::UnboundedSender<JsonRpcNotification>) -> SessionId {
        let id = SessionId::generate();
        self.lock().insert(id.clone(), channel);
        debug!(session = %id, "session opened");
        id
    }

    /// Removes a session. Closing an unknown or already-closed id is a
    /// no-op.
    pub fn close(&self, id: &SessionId) {
        if self.lock().remove(id).is_some() {
            debug!(session = %id, "session closed");
        }
    }

    /// Delivers the notification to every currently open session.
    ///
    /// Channels whose receiver is already gone are skipped silently.
    pub fn broadcast(&self, notification: &JsonRpcNotification) {
        let targets: Vec<_> = self.lock().values().cloned().collect();
        trace!(sessions = targets.len(), method = %notification.method, "broadcasting");
        for channel in targets {
            let _ = channel.send(notification.clone());
        }
    }

    /// Number of open sessions (observability only).
    pub fn size(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, mpsc::UnboundedSender<JsonRpcNotification>>> {
        // A panic while holding this lock leaves the map itself intact.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl ProgressSink for SessionTable {
    fn notify(&self, level: LogLevel, message: &str) {
        self.broadcast(&JsonRpcNotification::message(level, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_session(table: &SessionTable) -> (SessionId, mpsc::UnboundedReceiver<JsonRpcNotification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (table.open(tx), rx)
    }

    #[test]
    fn open_assigns_distinct_ids() {
        let table = SessionTable::new();
        let (a, _rx_a) = open_session(&table);
        let (b, _rx_b) = open_session(&table);
        assert_ne!(a, b);
        assert_eq!(table.size(), 2);
    }

    #[test]
    fn close_is_idempotent() {
        let table = SessionTable::new();
        let (id, _rx) = open_session(&table);
        table.close(&id);
        table.close(&id);
        assert_eq!(table.size(), 0);
    }

    #[test]
    fn broadcast_reaches_every_open_session() {
        let table = SessionTable::new();
        let (_a, mut rx_a) = open_session(&table);
        let (_b, mut rx_b) = open_session(&table);

        table.broadcast(&JsonRpcNotification::message(LogLevel::Info, "hello"));

        assert!(rx_a.try_recv().is_ok());
        assert!(rx_b.try_recv().is_ok());
        assert!(rx_a.try_recv().is_err(), "exactly one copy each");
    }

    #[test]
    fn broadcast_skips_dropped_receivers() {
        let table = SessionTable::new();
        let (_a, rx_a) = open_session(&table);
        let (_b, mut rx_b) = open_session(&table);
        drop(rx_a);

        table.broadcast(&JsonRpcNotification::message(LogLevel::Info, "still here"));

        let got = rx_b.try_recv().expect("live session must receive");
        assert_eq!(got.method, "notifications/message");
    }

    #[test]
    fn notify_broadcasts_a_log_notification() {
        let table = SessionTable::new();
        let (_id, mut rx) = open_session(&table);
        table.notify(LogLevel::Error, "error sending to 55: boom");
        let n = rx.try_recv().expect("notification");
        let params = n.params.expect("params");
        assert_eq!(params["level"], "error");
    }
}
