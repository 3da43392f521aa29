use crate::api::{EvaluationEntry, RosterEntryResponse, Task};

use super::types::EmployeeRow;

/// Builds roster rows from a by-date response. Task names become stub tasks
/// with the synthetic id `{employeeId}-{index}` (0-based, input order).
/// Ratings and remarks already drafted for an employee id survive the reload.
pub fn roster_rows(entries: Vec<RosterEntryResponse>, previous: &[EmployeeRow]) -> Vec<EmployeeRow> {
    entries
        .into_iter()
        .map(|entry| {
            let carried = previous
                .iter()
                .find(|row| row.employee_id == entry.employee_id);
            EmployeeRow {
                tasks: entry
                    .tasks
                    .iter()
                    .enumerate()
                    .map(|(index, name)| {
                        Task::roster_stub(format!("{}-{}", entry.employee_id, index), name.clone())
                    })
                    .collect(),
                rating: carried.and_then(|row| row.rating),
                remark: carried.map(|row| row.remark.clone()).unwrap_or_default(),
                employee_id: entry.employee_id,
                employee_name: entry.employee_name,
            }
        })
        .collect()
}

/// One evaluation per roster row, in roster order. Unset ratings submit as 0
/// and unset remarks as the empty string.
pub fn build_evaluations(rows: &[EmployeeRow]) -> Vec<EvaluationEntry> {
    rows.iter()
        .map(|row| EvaluationEntry {
            employee_id: row.employee_id.clone(),
            rating: row.rating.unwrap_or(0),
            remarks: row.remark.clone(),
        })
        .collect()
}

pub fn is_form_valid(date: &str, rows: &[EmployeeRow]) -> bool {
    !date.is_empty() && !rows.is_empty()
}

/// Status strings are an open enumeration; anything unrecognized gets the
/// neutral badge.
pub fn status_badge_class(status: &str) -> &'static str {
    match status {
        "Completed" => "bg-status-success-bg text-status-success-text",
        "In Progress" => "bg-status-info-bg text-status-info-text",
        "Pending" => "bg-status-warning-bg text-status-warning-text",
        _ => "bg-surface-muted text-fg-muted",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{employee_row, roster_entry};

    #[test]
    fn tasks_get_positional_ids_in_input_order() {
        let rows = roster_rows(
            vec![roster_entry("E7", "Ann", &["Fix bug", "Write docs"])],
            &[],
        );

        assert_eq!(rows.len(), 1);
        let tasks = &rows[0].tasks;
        assert_eq!(tasks[0].id, "E7-0");
        assert_eq!(tasks[0].name, "Fix bug");
        assert_eq!(tasks[1].id, "E7-1");
        assert_eq!(tasks[1].name, "Write docs");
    }

    #[test]
    fn reload_carries_drafts_for_matching_ids_only() {
        let mut previous = vec![
            employee_row("E7", "Ann", &["Old task"]),
            employee_row("E8", "Gone", &[]),
        ];
        previous[0].rating = Some(4);
        previous[0].remark = "solid".into();
        previous[1].rating = Some(1);

        let rows = roster_rows(
            vec![
                roster_entry("E7", "Ann", &["New task"]),
                roster_entry("E9", "Ben", &[]),
            ],
            &previous,
        );

        assert_eq!(rows[0].rating, Some(4));
        assert_eq!(rows[0].remark, "solid");
        assert_eq!(rows[0].tasks[0].id, "E7-0");
        assert_eq!(rows[1].rating, None);
        assert_eq!(rows[1].remark, "");
    }

    #[test]
    fn evaluations_substitute_defaults_for_unset_fields() {
        let mut rows = vec![
            employee_row("E7", "Ann", &[]),
            employee_row("E9", "Ben", &[]),
        ];
        rows[0].rating = Some(5);
        rows[0].remark = "great".into();

        let evaluations = build_evaluations(&rows);
        assert_eq!(evaluations.len(), 2);
        assert_eq!(evaluations[0].employee_id, "E7");
        assert_eq!(evaluations[0].rating, 5);
        assert_eq!(evaluations[0].remarks, "great");
        assert_eq!(evaluations[1].rating, 0);
        assert_eq!(evaluations[1].remarks, "");
    }

    #[test]
    fn form_is_valid_only_with_date_and_employees() {
        let rows = vec![employee_row("E7", "Ann", &[])];
        assert!(is_form_valid("2024-05-01", &rows));
        assert!(!is_form_valid("", &rows));
        assert!(!is_form_valid("2024-05-01", &[]));
        assert!(!is_form_valid("", &[]));
    }

    #[test]
    fn unrecognized_status_gets_the_neutral_badge() {
        assert_eq!(
            status_badge_class("Completed"),
            "bg-status-success-bg text-status-success-text"
        );
        assert_eq!(status_badge_class("Blocked"), "bg-surface-muted text-fg-muted");
    }
}
