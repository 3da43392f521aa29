use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: String,
    /// HTTP status of the failed call; 0 marks a transport-level failure
    /// (browser XHR convention). Never sent over the wire.
    #[serde(skip)]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl ApiError {
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            status: None,
            details: None,
        }
    }

    pub fn connection(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "CONNECTION_ERROR".to_string(),
            status: Some(0),
            details: None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }

    pub fn is_connection_failure(&self) -> bool {
        self.status == Some(0)
    }
}

/// Response of the team-lead name lookup. The service occasionally answers
/// 200 without a usable name; callers must handle the `None` case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamLeadResponse {
    #[serde(default)]
    pub employee_name: Option<String>,
}

/// One employee in the by-date roster; tasks arrive as bare names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntryResponse {
    pub employee_id: String,
    pub employee_name: String,
    #[serde(default)]
    pub tasks: Vec<String>,
}

/// Full task record as the rating service returns it. `id` is numeric on the
/// wire and `hours`/`extraHours` may be either strings or numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetailResponse {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub pr_link: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub hours: Value,
    #[serde(default)]
    pub extra_hours: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationEntry {
    pub employee_id: String,
    pub rating: i32,
    pub remarks: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitEvaluationsRequest {
    pub team_lead_id: String,
    pub date: String,
    pub evaluations: Vec<EvaluationEntry>,
}

/// Local view of a task. Roster entries populate only `id`/`name`; the rest
/// is filled in once detail is fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub pr_link: Option<String>,
    pub status: Option<String>,
    pub hours: Option<String>,
    pub extra_hours: Option<String>,
}

impl Task {
    pub fn roster_stub(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn from_detail(detail: TaskDetailResponse) -> Self {
        Self {
            id: display_value(&detail.id).unwrap_or_default(),
            name: detail.task.unwrap_or_default(),
            description: detail.description,
            pr_link: detail.pr_link,
            status: detail.status,
            hours: display_value(&detail.hours),
            extra_hours: display_value(&detail.extra_hours),
        }
    }
}

fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn task_from_detail_stringifies_id_and_maps_task_to_name() {
        let detail: TaskDetailResponse = serde_json::from_value(json!({
            "id": 42,
            "task": "Fix bug",
            "description": "Null pointer in login",
            "prLink": "https://example.com/pr/9",
            "status": "Completed",
            "hours": 7.5,
            "extraHours": "1"
        }))
        .unwrap();

        let task = Task::from_detail(detail);
        assert_eq!(task.id, "42");
        assert_eq!(task.name, "Fix bug");
        assert_eq!(task.status.as_deref(), Some("Completed"));
        assert_eq!(task.hours.as_deref(), Some("7.5"));
        assert_eq!(task.extra_hours.as_deref(), Some("1"));
    }

    #[test]
    fn task_from_detail_tolerates_missing_fields() {
        let detail: TaskDetailResponse = serde_json::from_value(json!({
            "id": 1,
            "task": "Write docs"
        }))
        .unwrap();

        let task = Task::from_detail(detail);
        assert_eq!(task.id, "1");
        assert_eq!(task.name, "Write docs");
        assert!(task.description.is_none());
        assert!(task.hours.is_none());
    }

    #[test]
    fn roster_entry_parses_task_name_list() {
        let entry: RosterEntryResponse = serde_json::from_value(json!({
            "employeeId": "E7",
            "employeeName": "Ann",
            "tasks": ["Fix bug", "Write docs"]
        }))
        .unwrap();

        assert_eq!(entry.employee_id, "E7");
        assert_eq!(entry.tasks, vec!["Fix bug", "Write docs"]);
    }

    #[test]
    fn submit_request_serializes_camel_case() {
        let payload = SubmitEvaluationsRequest {
            team_lead_id: "TL1".into(),
            date: "2024-05-01".into(),
            evaluations: vec![EvaluationEntry {
                employee_id: "E7".into(),
                rating: 4,
                remarks: "solid".into(),
            }],
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "teamLeadId": "TL1",
                "date": "2024-05-01",
                "evaluations": [{"employeeId": "E7", "rating": 4, "remarks": "solid"}]
            })
        );
    }

    #[test]
    fn api_error_display_uses_message() {
        let error = ApiError::unknown("boom");
        assert_eq!(error.to_string(), "boom");
        assert_eq!(String::from(error), "boom");
    }

    #[test]
    fn connection_error_reports_status_zero() {
        let error = ApiError::connection("Request failed: refused");
        assert!(error.is_connection_failure());
        assert!(!error.is_not_found());
    }
}
