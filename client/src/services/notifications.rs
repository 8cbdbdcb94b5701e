//! # Wallet Notifications
//!
//! Push-style events about the wallet (a balance moved, a swap settled on
//! chain) fanned out to every interested component over a tokio broadcast
//! channel.
//!
//! Listeners hold a [`Subscription`]; dropping it aborts the listening task, so
//! a component that goes away stops receiving without any explicit cleanup.

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Default channel capacity.
const DEFAULT_CAPACITY: usize = 64;

/// Wallet event pushed by the backend connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletNotification {
    /// Holdings changed outside this client (deposit, another device).
    BalancesChanged,
    /// A swap transaction reached finality.
    SwapSettled { signature: String },
    /// Free-form message for the user.
    Message(String),
}

/// Broadcast hub for [`WalletNotification`]s.
#[derive(Clone)]
pub struct NotificationHub {
    tx: broadcast::Sender<WalletNotification>,
}

impl Default for NotificationHub {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl NotificationHub {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Publish to all current listeners; returns how many received it.
    pub fn publish(&self, notification: WalletNotification) -> usize {
        self.tx.send(notification).unwrap_or(0)
    }

    /// Raw receiver for callers that drive their own loop.
    pub fn subscribe(&self) -> broadcast::Receiver<WalletNotification> {
        self.tx.subscribe()
    }

    /// Spawn a task that calls `handler` for every notification.
    ///
    /// Lagging listeners skip what they missed and keep going.
    pub fn listen<F>(&self, handler: F) -> Subscription
    where
        F: Fn(WalletNotification) + Send + 'static,
    {
        let mut rx = self.tx.subscribe();
        let task = tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(notification) => handler(notification),
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!(skipped, "Notification listener lagged");
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        debug!("Notification hub closed");
                        break;
                    }
                }
            }
        });
        Subscription { task }
    }

    pub fn listener_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// Live listener; aborted on drop.
pub struct Subscription {
    task: JoinHandle<()>,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}
