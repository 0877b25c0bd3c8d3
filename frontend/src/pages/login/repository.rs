use crate::api::{ApiClient, ApiError, LoginRequest, LoginResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        self.client.login(request).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;

    fn repository(server: &MockServer) -> LoginRepository {
        LoginRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )))
    }

    #[tokio::test]
    async fn login_calls_api() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200).json_body(serde_json::json!({
                "token": "jwt-token",
                "user": { "id": 1, "name": "Alice", "email": "alice@example.com" }
            }));
        });

        let repo = repository(&server);
        let response = repo
            .login(LoginRequest {
                email: "alice@example.com".into(),
                password: "secret".into(),
                remember: true,
            })
            .await
            .unwrap();
        assert_eq!(response.token, "jwt-token");
    }

    #[tokio::test]
    async fn login_propagates_unauthorized_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(401).json_body(serde_json::json!({
                "error": "Credenciais inválidas",
                "code": "UNAUTHORIZED"
            }));
        });

        let repo = repository(&server);
        let error = repo
            .login(LoginRequest {
                email: "alice@example.com".into(),
                password: "wrong".into(),
                remember: false,
            })
            .await
            .expect_err("should return unauthorized error");
        assert_eq!(error.code, "UNAUTHORIZED");
    }
}
