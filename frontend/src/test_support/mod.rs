#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod fake;

#[cfg(test)]
pub mod helpers {
    use crate::state::notifications::{Notification, NotificationReceiver};
    use futures::{FutureExt, StreamExt};

    /// Everything sent on the channel so far.
    pub fn drain(rx: &mut NotificationReceiver) -> Vec<Notification> {
        let mut out = Vec::new();
        while let Some(Some(notification)) = rx.next().now_or_never() {
            out.push(notification);
        }
        out
    }
}
