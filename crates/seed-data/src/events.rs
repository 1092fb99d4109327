//! Progress event stream for seeding runs.
//!
//! Every pipeline routine receives an [`EventSink`] explicitly instead of
//! writing to an ambient logger. Events are mirrored to `tracing` and
//! forwarded fire-and-forget to an optional channel consumer; a dropped or
//! slow consumer never blocks the run.

use serde::Serialize;
use time::OffsetDateTime;
use tokio::sync::mpsc;

/// Severity of a progress event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Success,
    Error,
}

/// A single progress event, consumed live by the control surface.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressEvent {
    pub message: String,
    pub level: LogLevel,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// Message of the sentinel event that terminates a stream.
pub const COMPLETION_MESSAGE: &str = "seed:complete";

impl ProgressEvent {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level,
            timestamp: OffsetDateTime::now_utc(),
        }
    }

    /// The sentinel event emitted once after the final summary.
    pub fn completed() -> Self {
        Self::new(LogLevel::Success, COMPLETION_MESSAGE)
    }

    pub fn is_completion(&self) -> bool {
        self.message == COMPLETION_MESSAGE
    }
}

/// Cloneable sink handed to every pipeline routine.
#[derive(Debug, Clone)]
pub struct EventSink {
    tx: Option<mpsc::UnboundedSender<ProgressEvent>>,
}

impl EventSink {
    /// Sink that only mirrors to `tracing`, with no channel consumer.
    pub fn disabled() -> Self {
        Self { tx: None }
    }

    /// Sink forwarding to a channel consumer.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ProgressEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx: Some(tx) }, rx)
    }

    pub fn info(&self, message: impl Into<String>) {
        self.emit(LogLevel::Info, message.into());
    }

    pub fn success(&self, message: impl Into<String>) {
        self.emit(LogLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.emit(LogLevel::Error, message.into());
    }

    /// Emits the sentinel completion event.
    pub fn complete(&self) {
        self.send(ProgressEvent::completed());
    }

    fn emit(&self, level: LogLevel, message: String) {
        match level {
            LogLevel::Error => tracing::error!("{message}"),
            _ => tracing::info!("{message}"),
        }
        self.send(ProgressEvent::new(level, message));
    }

    /// Best-effort send; a closed channel is ignored.
    fn send(&self, event: ProgressEvent) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_events_arrive_in_order() {
        let (sink, mut rx) = EventSink::channel();
        sink.info("first");
        sink.success("second");
        sink.complete();

        assert_eq!(rx.recv().await.unwrap().message, "first");
        assert_eq!(rx.recv().await.unwrap().message, "second");
        assert!(rx.recv().await.unwrap().is_completion());
    }

    #[tokio::test]
    async fn test_dropped_receiver_does_not_fail_sends() {
        let (sink, rx) = EventSink::channel();
        drop(rx);

        // Must be silently absorbed
        sink.info("into the void");
        sink.error("also fine");
        sink.complete();
    }

    #[test]
    fn test_disabled_sink_is_inert() {
        let sink = EventSink::disabled();
        sink.info("no consumer");
    }
}
