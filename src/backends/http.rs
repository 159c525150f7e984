use async_trait::async_trait;
use http::StatusCode;
use uuid::Uuid;

use crate::backends::{BackendError, BackendResult, EmployeeBackend};
use crate::config::BackendConfig;
use crate::models::{BackendEnvelope, CreateEmployeeRequest, DeleteEmployeeRequest, Employee};

/// HTTP implementation of [`EmployeeBackend`] over a shared `reqwest` client.
///
/// The base URL points at the backend's collection endpoint; per-id requests
/// append the id as a path segment.
pub struct HttpEmployeeBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpEmployeeBackend {
    pub fn new(config: &BackendConfig) -> Self {
        Self::with_client(reqwest::Client::new(), &config.base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn employee_url(&self, id: Uuid) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

#[async_trait]
impl EmployeeBackend for HttpEmployeeBackend {
    async fn list_employees(&self) -> BackendResult<Vec<Employee>> {
        tracing::debug!("GET {}", self.base_url);
        let response = self.client.get(&self.base_url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(BackendError::Unavailable {
                status: status.as_u16(),
            });
        }

        // The collection endpoint returns a bare JSON array, not an envelope.
        Ok(response.json::<Vec<Employee>>().await?)
    }

    async fn get_employee(&self, id: Uuid) -> BackendResult<Employee> {
        let url = self.employee_url(id);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(BackendError::NotFound {
                status: status.as_u16(),
            });
        }
        if status != StatusCode::OK {
            return Err(BackendError::Unavailable {
                status: status.as_u16(),
            });
        }

        let envelope = response.json::<BackendEnvelope<Employee>>().await?;
        envelope
            .into_data()
            .ok_or(BackendError::Envelope("employee payload"))
    }

    async fn create_employee(&self, request: &CreateEmployeeRequest) -> BackendResult<Employee> {
        tracing::debug!("POST {}", self.base_url);
        let response = self
            .client
            .post(&self.base_url)
            .json(request)
            .send()
            .await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(BackendError::Unavailable {
                status: status.as_u16(),
            });
        }

        let envelope = response.json::<BackendEnvelope<Employee>>().await?;
        envelope
            .into_data()
            .ok_or(BackendError::Envelope("employee payload"))
    }

    async fn delete_employee(&self, name: &str) -> BackendResult<bool> {
        tracing::debug!("DELETE {} ({})", self.base_url, name);
        let body = DeleteEmployeeRequest {
            name: name.to_string(),
        };
        let response = self
            .client
            .delete(&self.base_url)
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(BackendError::Unavailable {
                status: status.as_u16(),
            });
        }

        let envelope = response.json::<BackendEnvelope<bool>>().await?;
        envelope
            .into_data()
            .ok_or(BackendError::Envelope("deletion flag"))
    }
}
