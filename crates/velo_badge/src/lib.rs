//! Veloclub Badge
//!
//! Best-effort app badge count for the club shell (unread notifications on
//! the installed app icon). Two independent channels are tried:
//!
//! 1. A host-level numeric badge ([`BadgeHost`])
//! 2. A message posted to the background worker ([`WorkerChannel`])
//!
//! Both are fire-and-forget. A missing channel or a channel error is
//! swallowed after a debug log line; nothing here ever surfaces a failure.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Message posted to the background worker
///
/// Serializes as `{"type":"UPDATE_BADGE","count":n}` /
/// `{"type":"CLEAR_BADGE","count":0}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BadgeMessage {
    UpdateBadge { count: u32 },
    ClearBadge { count: u32 },
}

impl BadgeMessage {
    /// Build the message for a given count (0 means clear)
    pub fn for_count(count: u32) -> Self {
        if count == 0 {
            BadgeMessage::ClearBadge { count: 0 }
        } else {
            BadgeMessage::UpdateBadge { count }
        }
    }
}

/// Error type for badge channels
#[derive(Debug, Clone, thiserror::Error)]
pub enum BadgeError {
    /// The host does not support a numeric badge
    #[error("badge capability unsupported")]
    Unsupported,
    /// The channel rejected the message
    #[error("badge channel failed: {0}")]
    ChannelFailed(String),
}

/// Host-level numeric badge (the installed-app icon count)
pub trait BadgeHost: Send + Sync {
    fn set_badge(&self, count: u32) -> Result<(), BadgeError>;
    fn clear_badge(&self) -> Result<(), BadgeError>;
}

/// Channel to the background worker
pub trait WorkerChannel: Send + Sync {
    fn post(&self, message: BadgeMessage) -> Result<(), BadgeError>;
}

/// The app badge signal
///
/// Fans a count out to whichever channels are wired up. Channels are
/// optional; an `AppBadge` with neither is a no-op.
///
/// # Example
///
/// ```ignore
/// let badge = AppBadge::new()
///     .with_host(host)
///     .with_worker(worker);
///
/// badge.update(unread_count); // 0 clears
/// ```
#[derive(Default, Clone)]
pub struct AppBadge {
    host: Option<Arc<dyn BadgeHost>>,
    worker: Option<Arc<dyn WorkerChannel>>,
}

impl AppBadge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wire up the host badge channel
    pub fn with_host(mut self, host: Arc<dyn BadgeHost>) -> Self {
        self.host = Some(host);
        self
    }

    /// Wire up the background worker channel
    pub fn with_worker(mut self, worker: Arc<dyn WorkerChannel>) -> Self {
        self.worker = Some(worker);
        self
    }

    /// Set the badge count on every available channel; 0 clears
    pub fn update(&self, count: u32) {
        if let Some(host) = &self.host {
            let result = if count == 0 {
                host.clear_badge()
            } else {
                host.set_badge(count)
            };
            if let Err(err) = result {
                tracing::debug!(count, error = %err, "host badge update skipped");
            }
        }

        if let Some(worker) = &self.worker {
            if let Err(err) = worker.post(BadgeMessage::for_count(count)) {
                tracing::debug!(count, error = %err, "worker badge message skipped");
            }
        }
    }

    /// Clear the badge on every available channel
    pub fn clear(&self) {
        self.update(0);
    }
}
