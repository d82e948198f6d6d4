use reqwest::{multipart, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{api::types::*, config, state::session::SessionContext};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: Option<SessionContext>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            session: None,
        }
    }

    /// Attaches the session whose jwt authenticates subsequent requests.
    pub fn with_session(mut self, session: SessionContext) -> Self {
        self.session = Some(session);
        self
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        let token = self
            .session
            .as_ref()
            .and_then(|session| session.jwt().ok().flatten());
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        builder
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(ApiError::http(status.as_u16()))
        }
    }

    fn expect_success(response: Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::http(status.as_u16()))
        }
    }

    pub async fn list_bills(&self) -> Result<Vec<Bill>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self.with_auth(self.client.get(format!("{}/bills", base_url)));
        let response = Self::send(request).await?;
        Self::parse_json(response).await
    }

    pub async fn upload_receipt(&self, upload: ReceiptUpload) -> Result<UploadResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let mut part = multipart::Part::bytes(upload.bytes).file_name(upload.file_name);
        if !upload.content_type.is_empty() {
            part = part
                .mime_str(&upload.content_type)
                .map_err(|e| ApiError::validation(format!("Invalid content type: {}", e)))?;
        }
        let form = multipart::Form::new()
            .part("file", part)
            .text("email", upload.email);
        let request = self.with_auth(
            self.client
                .post(format!("{}/bills", base_url))
                .multipart(form),
        );
        let response = Self::send(request).await?;
        Self::parse_json(response).await
    }

    pub async fn update_bill(&self, selector: &str, bill: &NewBillPayload) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self.with_auth(
            self.client
                .patch(format!("{}/bills/{}", base_url, selector))
                .json(bill),
        );
        let response = Self::send(request).await?;
        Self::expect_success(response)
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let builder = self
            .client
            .post(format!("{}/auth/login", base_url))
            .json(request);
        let response = Self::send(builder).await?;
        Self::parse_json(response).await
    }

    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let builder = self
            .client
            .post(format!("{}/users", base_url))
            .json(request);
        let response = Self::send(builder).await?;
        Self::expect_success(response)
    }
}
