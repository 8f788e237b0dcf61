use serde::{Deserialize, Serialize};

/// Visual severity of a toast notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    /// The CSS class selecting the toast's color scheme.
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Info => "notification-info",
            NotificationKind::Success => "notification-success",
            NotificationKind::Error => "notification-error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_is_the_default_kind() {
        assert_eq!(NotificationKind::default(), NotificationKind::Info);
    }

    #[test]
    fn kinds_map_to_distinct_classes() {
        assert_eq!(NotificationKind::Info.css_class(), "notification-info");
        assert_eq!(NotificationKind::Success.css_class(), "notification-success");
        assert_eq!(NotificationKind::Error.css_class(), "notification-error");
    }
}
