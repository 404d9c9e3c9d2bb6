use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::{
    api::{
        error::{extract_detail, ApiError},
        gateway::HrGateway,
        types::*,
    },
    config,
};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    timeout: Duration,
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
            timeout: REQUEST_TIMEOUT,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            timeout: REQUEST_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(base) => base.clone(),
            None => config::api_base_url(),
        }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.resolved_base_url(), path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = execute(request, self.timeout).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        let detail = extract_detail(&body);
        log::warn!(
            "{} responded {}: {}",
            url,
            status.as_u16(),
            detail.as_deref().unwrap_or("<no detail>")
        );
        Err(ApiError::Server {
            status: status.as_u16(),
            detail,
        })
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout
            } else {
                ApiError::Decode(e.to_string())
            }
        })
    }
}

#[async_trait(?Send)]
impl HrGateway for ApiClient {
    async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let url = self.url("/api/employees");
        log::debug!("GET {}", url);
        self.send_json(self.client.get(url)).await
    }

    async fn create_employee(&self, employee: &NewEmployee) -> Result<Employee, ApiError> {
        let url = self.url("/api/employees");
        log::debug!("POST {} ({})", url, employee.employee_id);
        self.send_json(self.client.post(url).json(employee)).await
    }

    async fn delete_employee(&self, employee_id: &str) -> Result<(), ApiError> {
        let url = self.url(&employee_path(employee_id));
        log::debug!("DELETE {}", url);
        self.send(self.client.delete(url)).await.map(|_| ())
    }

    async fn list_attendance(
        &self,
        filter: &AttendanceFilter,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let url = self.url("/api/attendance");
        let query = filter.query_pairs();
        log::debug!("GET {} {:?}", url, query);
        self.send_json(self.client.get(url).query(&query)).await
    }

    async fn mark_attendance(
        &self,
        request: &MarkAttendance,
    ) -> Result<AttendanceRecord, ApiError> {
        let url = self.url("/api/attendance");
        log::debug!("POST {} ({} {})", url, request.employee_id, request.date);
        self.send_json(self.client.post(url).json(request)).await
    }

    async fn dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        let url = self.url("/api/dashboard/summary");
        log::debug!("GET {}", url);
        self.send_json(self.client.get(url)).await
    }
}

fn map_transport_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::Timeout
    } else {
        log::warn!("request failed without a response: {}", error);
        ApiError::Network(error.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn execute(request: RequestBuilder, timeout: Duration) -> Result<Response, ApiError> {
    request
        .timeout(timeout)
        .send()
        .await
        .map_err(map_transport_error)
}

#[cfg(target_arch = "wasm32")]
async fn execute(request: RequestBuilder, timeout: Duration) -> Result<Response, ApiError> {
    use futures::future::{select, Either};

    let send = Box::pin(request.send());
    let timer = Box::pin(gloo_timers::future::sleep(timeout));
    match select(send, timer).await {
        Either::Left((result, _)) => result.map_err(map_transport_error),
        Either::Right(_) => {
            log::warn!("request timed out after {:?}", timeout);
            Err(ApiError::Timeout)
        }
    }
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

pub(crate) fn employee_path(employee_id: &str) -> String {
    format!(
        "/api/employees/{}",
        utf8_percent_encode(employee_id, PATH_SEGMENT)
    )
}
