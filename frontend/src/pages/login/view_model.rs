use super::{
    repository::LoginRepository,
    utils::{landing_route, user_name_from_email, CredentialsFormState},
};
use crate::{
    api::{ApiError, CreateUserRequest, LoginRequest},
    state::session::{SessionContext, SessionUser, UserType},
};
use leptos::*;

#[derive(Clone)]
pub struct LoginViewModel {
    pub form: CredentialsFormState,
    pub error: RwSignal<Option<ApiError>>,
    repository: LoginRepository,
    session: SessionContext,
    on_navigate: Callback<String>,
}

impl LoginViewModel {
    pub fn new(
        repository: LoginRepository,
        session: SessionContext,
        on_navigate: Callback<String>,
    ) -> Self {
        Self {
            form: CredentialsFormState::default(),
            error: create_rw_signal(None),
            repository,
            session,
            on_navigate,
        }
    }

    /// Logs in with the role's form, creating the account when login is refused.
    pub async fn handle_submit(&self, user_type: UserType) -> Result<(), ApiError> {
        self.error.set(None);
        let result = self.submit(user_type).await;
        if let Err(err) = &result {
            log::error!("{} login failed: {}", user_type.as_str(), err);
            self.error.set(Some(err.clone()));
        }
        result
    }

    async fn submit(&self, user_type: UserType) -> Result<(), ApiError> {
        let (email, password) = self.form.credentials(user_type);
        self.session
            .set_user(&SessionUser::connected(user_type, email.clone(), password.clone()))?;

        let credentials = LoginRequest { email, password };
        let jwt = match self.repository.login(&credentials).await {
            Ok(response) => response.jwt,
            Err(err) => {
                log::warn!("login refused for {}: {}", credentials.email, err);
                self.create_user(user_type, &credentials).await?;
                self.repository.login(&credentials).await?.jwt
            }
        };
        self.session.set_jwt(&jwt)?;

        let route = landing_route(user_type);
        self.on_navigate.call(route.to_string());
        self.session.set_previous_location(route)?;
        Ok(())
    }

    async fn create_user(&self, user_type: UserType, credentials: &LoginRequest) -> Result<(), ApiError> {
        let request = CreateUserRequest {
            user_type: user_type.as_str().to_string(),
            name: user_name_from_email(&credentials.email).to_string(),
            email: credentials.email.clone(),
            password: credentials.password.clone(),
        };
        self.repository.create_user(&request).await?;
        log::info!("User with {} is created", credentials.email);
        Ok(())
    }
}
