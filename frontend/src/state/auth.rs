use crate::{
    api::{ApiClient, ApiError, LoginRequest, UserResponse},
    pages::login::repository as login_repository,
};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserResponse>,
    pub is_authenticated: bool,
    pub loading: bool,
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_signal(AuthState::default());
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    request: LoginRequest,
    repo: &login_repository::LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match repo.login(request).await {
        Ok(response) => {
            #[cfg(target_arch = "wasm32")]
            persist_session(&response)?;
            set_auth_state.update(|state| {
                state.token = Some(response.token);
                state.user = Some(response.user);
                state.is_authenticated = true;
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn persist_session(response: &crate::api::LoginResponse) -> Result<(), ApiError> {
    let user_json = serde_json::to_string(&response.user)
        .map_err(|_| ApiError::unknown("Failed to serialize user profile"))?;
    crate::utils::storage::save_session(&response.token, &user_json).map_err(ApiError::unknown)
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = login_repository::LoginRepository::new_with_client(std::rc::Rc::new(api));

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}
