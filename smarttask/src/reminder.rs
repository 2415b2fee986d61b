use std::io::IsTerminal;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use thiserror::Error;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

pub const REMINDER_TITLE: &str = "Task Reminder";

/// A notification that has come due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
    Unsupported,
}

#[derive(Debug, Error)]
pub enum ReminderError {
    #[error("notification permission not granted")]
    PermissionNotGranted,
    #[error("reminder delay must be at least one minute")]
    InvalidDelay,
    #[error("notification receiver is gone")]
    ReceiverClosed,
}

pub type ReminderTx = UnboundedSender<Reminder>;
pub type ReminderRx = UnboundedReceiver<Reminder>;

pub fn channel() -> (ReminderTx, ReminderRx) {
    mpsc::unbounded_channel()
}

/// Schedules one-shot local notifications.
pub trait ReminderScheduler: Send + Sync + 'static {
    /// Ask for permission to notify. Called once at startup.
    fn request_permission(&self) -> PermissionStatus;

    /// Fire a single notification titled [`REMINDER_TITLE`] after `delay_minutes`.
    fn schedule_one_shot(&self, delay_minutes: u32, body: &str) -> Result<(), ReminderError>;
}

/// Delivers reminders into the running UI through a channel, one tokio
/// timer per reminder. Pending reminders die with the process.
#[derive(Debug)]
pub struct LocalScheduler {
    tx: ReminderTx,
    granted: AtomicBool,
    minute: Duration,
}

impl LocalScheduler {
    pub fn new(tx: ReminderTx) -> Self {
        Self {
            tx,
            granted: AtomicBool::new(false),
            minute: Duration::from_secs(60),
        }
    }

    #[cfg(test)]
    fn with_minute(mut self, minute: Duration) -> Self {
        self.minute = minute;
        self
    }

    fn grant(&self, interactive: bool) -> PermissionStatus {
        self.granted.store(interactive, Ordering::SeqCst);
        if interactive {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        }
    }
}

impl ReminderScheduler for LocalScheduler {
    /// Granted only when attached to a terminal that can show the banner.
    fn request_permission(&self) -> PermissionStatus {
        self.grant(std::io::stdout().is_terminal())
    }

    fn schedule_one_shot(&self, delay_minutes: u32, body: &str) -> Result<(), ReminderError> {
        if !self.granted.load(Ordering::SeqCst) {
            return Err(ReminderError::PermissionNotGranted);
        }
        if delay_minutes == 0 {
            return Err(ReminderError::InvalidDelay);
        }
        if self.tx.is_closed() {
            return Err(ReminderError::ReceiverClosed);
        }

        let delay = self.minute * delay_minutes;
        let tx = self.tx.clone();
        let reminder = Reminder {
            title: REMINDER_TITLE.to_string(),
            body: body.to_string(),
        };

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(reminder).is_err() {
                tracing::debug!("reminder fired after the UI shut down");
            }
        });

        tracing::debug!(delay_minutes, "reminder scheduled");
        Ok(())
    }
}

/// Used when reminders are disabled: accepts everything, delivers nothing.
#[derive(Debug, Default)]
pub struct NoopScheduler;

impl ReminderScheduler for NoopScheduler {
    fn request_permission(&self) -> PermissionStatus {
        PermissionStatus::Unsupported
    }

    fn schedule_one_shot(&self, _delay_minutes: u32, _body: &str) -> Result<(), ReminderError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn granted_scheduler(tx: ReminderTx) -> LocalScheduler {
        let scheduler = LocalScheduler::new(tx).with_minute(Duration::from_millis(5));
        scheduler.grant(true);
        scheduler
    }

    #[tokio::test]
    async fn fires_once_with_fixed_title() {
        let (tx, mut rx) = channel();
        let scheduler = granted_scheduler(tx);

        scheduler.schedule_one_shot(2, "Buy milk").unwrap();
        let reminder = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("reminder should fire")
            .expect("channel open");

        assert_eq!(reminder.title, REMINDER_TITLE);
        assert_eq!(reminder.body, "Buy milk");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn refuses_without_permission() {
        let (tx, _rx) = channel();
        let scheduler = LocalScheduler::new(tx);
        scheduler.grant(false);

        assert!(matches!(
            scheduler.schedule_one_shot(5, "x"),
            Err(ReminderError::PermissionNotGranted)
        ));
    }

    #[tokio::test]
    async fn refuses_zero_delay() {
        let (tx, _rx) = channel();
        let scheduler = granted_scheduler(tx);
        assert!(matches!(
            scheduler.schedule_one_shot(0, "x"),
            Err(ReminderError::InvalidDelay)
        ));
    }

    #[tokio::test]
    async fn reports_closed_receiver() {
        let (tx, rx) = channel();
        let scheduler = granted_scheduler(tx);
        drop(rx);

        assert!(matches!(
            scheduler.schedule_one_shot(1, "x"),
            Err(ReminderError::ReceiverClosed)
        ));
    }

    #[test]
    fn noop_is_unsupported_and_silent() {
        let scheduler = NoopScheduler;
        assert_eq!(scheduler.request_permission(), PermissionStatus::Unsupported);
        assert!(scheduler.schedule_one_shot(5, "x").is_ok());
    }
}
