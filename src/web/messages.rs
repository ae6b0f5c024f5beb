//! Request-scoped, one-shot user notifications.
//!
//! Handlers push messages onto a [`Messages`] queue; the next rendered page
//! drains it. Nothing outlives the request.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use std::convert::Infallible;

/// Severity of a notification, rendered as a CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    pub fn tag(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Success => "success",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }
}

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub level: Level,
    pub text: String,
}

/// Queue of notifications for the current request.
///
/// Extracting `Messages` takes whatever a middleware placed in the request
/// extensions, or starts empty. Draining consumes the queue.
#[derive(Debug, Clone, Default)]
pub struct Messages {
    queue: Vec<Message>,
}

impl Messages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, level: Level, text: impl Into<String>) -> &mut Self {
        self.queue.push(Message {
            level,
            text: text.into(),
        });
        self
    }

    pub fn info(&mut self, text: impl Into<String>) -> &mut Self {
        self.add(Level::Info, text)
    }

    pub fn error(&mut self, text: impl Into<String>) -> &mut Self {
        self.add(Level::Error, text)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Consumes the queue, returning messages in insertion order.
    pub fn drain(self) -> Vec<Message> {
        self.queue
    }
}

impl<S> FromRequestParts<S> for Messages
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.remove::<Messages>().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[test]
    fn test_add_keeps_order_and_level() {
        let mut messages = Messages::new();
        messages.info("first").error("second");

        let drained = messages.drain();
        assert_eq!(
            drained,
            vec![
                Message {
                    level: Level::Info,
                    text: "first".to_string()
                },
                Message {
                    level: Level::Error,
                    text: "second".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_level_tags() {
        assert_eq!(Level::Error.tag(), "error");
        assert_eq!(Level::Warning.tag(), "warning");
        assert_eq!(Level::Success.tag(), "success");
    }

    #[tokio::test]
    async fn test_extractor_starts_empty() {
        let (mut parts, _) = Request::new(()).into_parts();

        let messages = Messages::from_request_parts(&mut parts, &()).await.unwrap();

        assert!(messages.is_empty());
    }

    #[tokio::test]
    async fn test_extractor_takes_messages_once() {
        let (mut parts, _) = Request::new(()).into_parts();
        let mut seeded = Messages::new();
        seeded.error("from middleware");
        parts.extensions.insert(seeded);

        let first = Messages::from_request_parts(&mut parts, &()).await.unwrap();
        let second = Messages::from_request_parts(&mut parts, &()).await.unwrap();

        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
    }
}
