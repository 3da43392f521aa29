use super::{
    client::ApiClient,
    types::{RosterEntryResponse, TaskDetailResponse},
    ApiError,
};

impl ApiClient {
    /// Fetches the employee/task roster a team lead should evaluate for the
    /// given date. Tasks come back as bare names.
    pub async fn get_tasks_by_date(
        &self,
        date: &str,
        employee_id: &str,
    ) -> Result<Vec<RosterEntryResponse>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/api/v1/tasks/by-date", base_url))
            .query(&[("date", date), ("employeeId", employee_id)])
            .send()
            .await
            .map_err(Self::transport_error)?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    /// Fetches the full record for a single named task.
    pub async fn get_task_detail(
        &self,
        task_name: &str,
        employee_id: &str,
        work_date: &str,
    ) -> Result<TaskDetailResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/rating/getTasks", base_url))
            .query(&[
                ("taskNames", task_name),
                ("employeeId", employee_id),
                ("workDate", work_date),
            ])
            .send()
            .await
            .map_err(Self::transport_error)?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }
}
