use super::{client::ApiClient, types::SubmitEvaluationsRequest, ApiError};

impl ApiClient {
    /// Submits one evaluation batch. The service answers 2xx with no body on
    /// success, so only the status is inspected.
    pub async fn submit_evaluations(
        &self,
        payload: &SubmitEvaluationsRequest,
    ) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/rating/submit", base_url))
            .json(payload)
            .send()
            .await
            .map_err(Self::transport_error)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }
}
