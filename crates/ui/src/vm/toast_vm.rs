use chrono::{DateTime, Duration, Utc};

use coach_core::model::NotificationKind;

/// How long a toast stays on screen.
pub const TOAST_TTL_MS: u64 = 3_000;

/// Identifier keeping repeated messages apart in the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl std::fmt::Display for ToastId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One floating notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    id: ToastId,
    message: String,
    kind: NotificationKind,
    expires_at: DateTime<Utc>,
}

impl Toast {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}

/// The set of toasts currently stacked on screen.
///
/// Toasts stack independently: no dedup, no cap, no ordering guarantee
/// beyond insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a toast that expires `TOAST_TTL_MS` after `now`.
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind, now: DateTime<Utc>) {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            expires_at: now + Duration::milliseconds(TOAST_TTL_MS as i64),
        });
    }

    /// Drops every toast whose lifetime has passed.
    pub fn prune_expired(&mut self, now: DateTime<Utc>) {
        self.toasts.retain(|toast| toast.expires_at > now);
    }

    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coach_core::time::fixed_now;

    #[test]
    fn repeated_messages_get_distinct_ids() {
        let mut queue = ToastQueue::new();
        let now = fixed_now();
        queue.push("Saved", NotificationKind::Success, now);
        queue.push("Saved", NotificationKind::Success, now);
        assert_eq!(queue.toasts().len(), 2);
        assert_ne!(queue.toasts()[0].id(), queue.toasts()[1].id());
        assert_eq!(
            queue.toasts()[0].expires_at(),
            now + Duration::milliseconds(3_000)
        );
    }

    #[test]
    fn toasts_expire_exactly_at_the_ttl() {
        let mut queue = ToastQueue::new();
        let now = fixed_now();
        queue.push("x", NotificationKind::Error, now);

        queue.prune_expired(now + Duration::milliseconds(2_999));
        assert_eq!(queue.toasts().len(), 1);

        queue.prune_expired(now + Duration::milliseconds(3_000));
        assert!(queue.is_empty());
    }

    #[test]
    fn staggered_toasts_expire_independently() {
        let mut queue = ToastQueue::new();
        let now = fixed_now();
        queue.push("first", NotificationKind::Info, now);
        queue.push("second", NotificationKind::Info, now + Duration::milliseconds(1_000));

        queue.prune_expired(now + Duration::milliseconds(3_000));
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].message(), "second");

        queue.prune_expired(now + Duration::milliseconds(4_000));
        assert!(queue.is_empty());
    }

    #[test]
    fn default_kind_is_info() {
        let mut queue = ToastQueue::new();
        queue.push("hello", NotificationKind::default(), fixed_now());
        assert_eq!(queue.toasts()[0].kind(), NotificationKind::Info);
    }
}
