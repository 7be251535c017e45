//! Typed HTTP client for the roster API.

use crate::error::{ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Response envelope used by every endpoint.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
    message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub employee_id: i64,
    pub name: String,
    pub age: i32,
    pub class: String,
    pub subjects: Vec<String>,
    pub attendance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeList {
    pub employees: Vec<Employee>,
    pub total_count: u64,
    pub total_pages: u64,
    pub current_page: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthData {
    pub id: i64,
    pub username: String,
    pub role: String,
    pub token: String,
    pub expires_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewEmployee {
    pub name: String,
    pub age: i32,
    pub class: String,
    pub subjects: Vec<String>,
    pub attendance: f64,
}

/// Partial update payload: absent fields are left untouched by the server.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendance: Option<f64>,
}

/// Listing request parameters, serialized straight into the query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_attendance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

/// HTTP client for the roster API.
///
/// A bearer token captured by `login`/`register` is attached to every
/// subsequent request. Logout is client-local: the server keeps no session
/// state, so dropping the token is all there is to it.
#[derive(Debug, Clone)]
pub struct RosterClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl RosterClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Drops the stored token. No server call is involved.
    pub fn logout(&mut self) {
        self.token = None;
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&ListParams>,
    ) -> ClientResult<Envelope<T>> {
        let mut request = self.client.get(self.url(path));
        if let Some(params) = query {
            request = request.query(params);
        }
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        Self::handle_response(request.send().await?).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<Envelope<T>> {
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        Self::handle_response(request.send().await?).await
    }

    async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<Envelope<T>> {
        let mut request = self.client.put(self.url(path)).json(body);
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        Self::handle_response(request.send().await?).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<Envelope<T>> {
        let mut request = self.client.delete(self.url(path));
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        Self::handle_response(request.send().await?).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> ClientResult<Envelope<T>> {
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<Envelope<serde_json::Value>>()
                .await
                .map(|envelope| envelope.message)
                .unwrap_or_else(|_| status.to_string());

            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(message)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::BAD_REQUEST | StatusCode::CONFLICT => {
                    Err(ClientError::Validation(message))
                }
                _ => Err(ClientError::Internal(message)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    fn expect_data<T>(envelope: Envelope<T>) -> ClientResult<T> {
        envelope
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing response data".to_string()))
    }

    // ========== Read API ==========

    /// Liveness probe.
    pub async fn health(&self) -> ClientResult<String> {
        Self::expect_data(self.get::<String>("/api/health", None).await?)
    }

    /// Fetch one page of the employee listing.
    pub async fn list_employees(&self, params: &ListParams) -> ClientResult<EmployeeList> {
        Self::expect_data(self.get("/api/employees", Some(params)).await?)
    }

    /// Fetch a single employee; `None` when the ID does not exist.
    pub async fn get_employee(&self, id: i64) -> ClientResult<Option<Employee>> {
        match self
            .get::<Employee>(&format!("/api/employees/{}", id), None)
            .await
        {
            Ok(envelope) => Ok(Some(Self::expect_data(envelope)?)),
            Err(ClientError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Fetch the distinct class values, sorted ascending.
    pub async fn unique_classes(&self) -> ClientResult<Vec<String>> {
        Self::expect_data(self.get("/api/employees/classes", None).await?)
    }

    // ========== Auth API ==========

    /// Register a new account and keep its token for subsequent requests.
    pub async fn register(
        &mut self,
        username: &str,
        password: &str,
        role: Option<&str>,
    ) -> ClientResult<AuthData> {
        #[derive(Serialize)]
        struct RegisterRequest<'a> {
            username: &'a str,
            password: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            role: Option<&'a str>,
        }

        let data: AuthData = Self::expect_data(
            self.post(
                "/api/auth/register",
                &RegisterRequest {
                    username,
                    password,
                    role,
                },
            )
            .await?,
        )?;
        self.token = Some(data.token.clone());
        Ok(data)
    }

    /// Login and keep the token for subsequent requests.
    pub async fn login(&mut self, username: &str, password: &str) -> ClientResult<AuthData> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            username: &'a str,
            password: &'a str,
        }

        let data: AuthData = Self::expect_data(
            self.post("/api/auth/login", &LoginRequest { username, password })
                .await?,
        )?;
        self.token = Some(data.token.clone());
        Ok(data)
    }

    // ========== Write API (admin only) ==========

    /// Create a new employee.
    pub async fn add_employee(&self, employee: &NewEmployee) -> ClientResult<Employee> {
        Self::expect_data(self.post("/api/employees", employee).await?)
    }

    /// Partially update an employee.
    pub async fn update_employee(
        &self,
        id: i64,
        update: &EmployeeUpdate,
    ) -> ClientResult<Employee> {
        Self::expect_data(
            self.put(&format!("/api/employees/{}", id), update)
                .await?,
        )
    }

    /// Delete an employee, returning the server's confirmation message.
    pub async fn delete_employee(&self, id: i64) -> ClientResult<String> {
        let envelope = self
            .delete::<serde_json::Value>(&format!("/api/employees/{}", id))
            .await?;
        if !envelope.success {
            return Err(ClientError::InvalidResponse(envelope.message));
        }
        Ok(envelope.message)
    }
}
