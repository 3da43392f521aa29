#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{RosterEntryResponse, Task};
    use crate::pages::evaluation::types::EmployeeRow;

    pub fn roster_entry(
        employee_id: &str,
        employee_name: &str,
        task_names: &[&str],
    ) -> RosterEntryResponse {
        RosterEntryResponse {
            employee_id: employee_id.into(),
            employee_name: employee_name.into(),
            tasks: task_names.iter().map(|name| name.to_string()).collect(),
        }
    }

    pub fn roster_task(id: &str, name: &str) -> Task {
        Task::roster_stub(id, name)
    }

    /// Row with tasks already carrying their synthetic positional ids, the
    /// way the roster loader produces them.
    pub fn employee_row(employee_id: &str, employee_name: &str, task_names: &[&str]) -> EmployeeRow {
        EmployeeRow {
            employee_id: employee_id.into(),
            employee_name: employee_name.into(),
            tasks: task_names
                .iter()
                .enumerate()
                .map(|(index, name)| {
                    Task::roster_stub(format!("{}-{}", employee_id, index), *name)
                })
                .collect(),
            rating: None,
            remark: String::new(),
        }
    }
}
