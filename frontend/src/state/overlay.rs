use crate::api::Task;

/// Identifies which task a detail request was issued for, so a response that
/// arrives after the user moved on can be dropped instead of overwriting the
/// overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailKey {
    pub employee_id: String,
    pub task_id: String,
}

/// What a confirmed dialog performs. Declarative so the pending action can
/// run at most once and cannot outlive the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    Exit,
}

/// The single modal surface of the page. At most one overlay is ever
/// visible; showing a new one replaces whatever was up.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Overlay {
    #[default]
    None,
    Alert(String),
    Confirm {
        message: String,
        action: ConfirmAction,
    },
    TaskDetail {
        task: Task,
        key: DetailKey,
    },
}

impl Overlay {
    pub fn alert_message(&self) -> Option<&str> {
        match self {
            Overlay::Alert(message) => Some(message),
            _ => None,
        }
    }

    pub fn confirm_message(&self) -> Option<&str> {
        match self {
            Overlay::Confirm { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn task(&self) -> Option<&Task> {
        match self {
            Overlay::TaskDetail { task, .. } => Some(task),
            _ => None,
        }
    }

    pub fn shows_detail_for(&self, key: &DetailKey) -> bool {
        matches!(self, Overlay::TaskDetail { key: shown, .. } if shown == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_replaces_any_previous_overlay() {
        let mut overlay = Overlay::Alert("first".into());
        assert_eq!(overlay.alert_message(), Some("first"));

        overlay = Overlay::Alert("second".into());
        assert_eq!(overlay.alert_message(), Some("second"));
    }

    #[test]
    fn detail_key_comparison_is_exact() {
        let shown = Overlay::TaskDetail {
            task: Task::roster_stub("E7-0", "Fix bug"),
            key: DetailKey {
                employee_id: "E7".into(),
                task_id: "E7-0".into(),
            },
        };
        let same = DetailKey {
            employee_id: "E7".into(),
            task_id: "E7-0".into(),
        };
        let other = DetailKey {
            employee_id: "E7".into(),
            task_id: "E7-1".into(),
        };
        assert!(shown.shows_detail_for(&same));
        assert!(!shown.shows_detail_for(&other));
    }

    #[test]
    fn accessors_are_variant_specific() {
        let confirm = Overlay::Confirm {
            message: "Are you sure you want to exit?".into(),
            action: ConfirmAction::Exit,
        };
        assert_eq!(confirm.confirm_message(), Some("Are you sure you want to exit?"));
        assert_eq!(confirm.alert_message(), None);
        assert!(confirm.task().is_none());
    }
}
