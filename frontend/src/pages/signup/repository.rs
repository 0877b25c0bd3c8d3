use crate::api::{ApiClient, ApiError, CompanyRegistration, CompanyResponse, PlanResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct SignupRepository {
    client: Rc<ApiClient>,
}

impl SignupRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn register(
        &self,
        registration: CompanyRegistration,
    ) -> Result<CompanyResponse, ApiError> {
        self.client.register_company(registration).await
    }

    pub async fn list_plans(&self) -> Result<Vec<PlanResponse>, ApiError> {
        self.client.list_plans().await
    }
}
