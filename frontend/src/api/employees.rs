use super::{client::ApiClient, types::TeamLeadResponse, ApiError};

impl ApiClient {
    /// Looks up an employee's display record by id. Used at startup to put a
    /// name next to the acting team lead.
    pub async fn get_team_lead(&self, employee_id: &str) -> Result<TeamLeadResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/api/{}", base_url, employee_id))
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
