use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use std::time::Duration;

/// How long a toast stays on screen.
pub const AUTO_DISMISS: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            text: text.into(),
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Failure,
            text: text.into(),
        }
    }
}

pub type NotificationReceiver = UnboundedReceiver<Notification>;

/// Write end of the notification channel, handed to each view model.
#[derive(Clone, Debug)]
pub struct Notifier {
    tx: UnboundedSender<Notification>,
}

impl Notifier {
    pub fn send(&self, notification: Notification) {
        if let Err(err) = self.tx.unbounded_send(notification) {
            log::debug!("notification dropped: {:?}", err.into_inner());
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.send(Notification::success(text));
    }

    pub fn failure(&self, text: impl Into<String>) {
        self.send(Notification::failure(text));
    }
}

pub fn notification_channel() -> (Notifier, NotificationReceiver) {
    let (tx, rx) = unbounded();
    (Notifier { tx }, rx)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Toasts currently on screen, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, notification: Notification) -> u64 {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            notification,
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::drain;

    #[test]
    fn notifications_arrive_in_order() {
        let (notifier, mut rx) = notification_channel();
        notifier.success("saved");
        notifier.failure("boom");
        assert_eq!(
            drain(&mut rx),
            vec![Notification::success("saved"), Notification::failure("boom")]
        );
    }

    #[test]
    fn sending_without_receiver_is_harmless() {
        let (notifier, rx) = notification_channel();
        drop(rx);
        notifier.success("nobody listening");
    }

    #[test]
    fn toast_queue_assigns_ids_and_dismisses() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Notification::success("one"));
        let second = queue.push(Notification::failure("two"));
        assert_ne!(first, second);
        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].notification.text, "two");
    }
}
