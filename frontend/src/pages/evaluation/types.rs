use crate::api::Task;

/// One roster line: an employee, their tasks for the selected date, and the
/// evaluation the team lead is drafting for them. Rating and remark live on
/// the row itself rather than in id-keyed side maps, so they cannot drift
/// from the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRow {
    pub employee_id: String,
    pub employee_name: String,
    pub tasks: Vec<Task>,
    pub rating: Option<i32>,
    pub remark: String,
}
