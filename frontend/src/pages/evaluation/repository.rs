use std::rc::Rc;

use crate::api::{
    ApiClient, ApiError, RosterEntryResponse, SubmitEvaluationsRequest, TaskDetailResponse,
    TeamLeadResponse,
};

#[derive(Clone)]
pub struct EvaluationRepository {
    client: Rc<ApiClient>,
}

impl EvaluationRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn team_lead(&self, employee_id: &str) -> Result<TeamLeadResponse, ApiError> {
        self.client.get_team_lead(employee_id).await
    }

    pub async fn roster_by_date(
        &self,
        date: &str,
        employee_id: &str,
    ) -> Result<Vec<RosterEntryResponse>, ApiError> {
        self.client.get_tasks_by_date(date, employee_id).await
    }

    pub async fn task_detail(
        &self,
        task_name: &str,
        employee_id: &str,
        work_date: &str,
    ) -> Result<TaskDetailResponse, ApiError> {
        self.client
            .get_task_detail(task_name, employee_id, work_date)
            .await
    }

    pub async fn submit(&self, payload: &SubmitEvaluationsRequest) -> Result<(), ApiError> {
        self.client.submit_evaluations(payload).await
    }
}

impl Default for EvaluationRepository {
    fn default() -> Self {
        Self::new()
    }
}
