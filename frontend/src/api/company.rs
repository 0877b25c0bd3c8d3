use super::{
    client::ApiClient,
    types::{ApiError, CompanyRegistration, CompanyResponse, PlanResponse},
};

impl ApiClient {
    /// Open endpoint; signup happens before any session exists, so no
    /// authorization header is attached.
    pub async fn register_company(
        &self,
        registration: CompanyRegistration,
    ) -> Result<CompanyResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let builder = self
            .http_client()
            .post(format!("{}/companies/cadastro", base_url))
            .json(&registration);
        self.request_json(builder).await
    }

    pub async fn list_plans(&self) -> Result<Vec<PlanResponse>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let builder = self.http_client().get(format!("{}/plans/list", base_url));
        self.request_json(builder).await
    }
}
