use super::error::{ApiError, ApiResult};
use crate::models::{AdmissionApplication, Announcement, Course, Material};
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

pub const ADMISSIONS_PATH: &str = "/api/admissions";
pub const COURSES_PATH: &str = "/api/courses";
pub const MATERIALS_PATH: &str = "/api/materials";
pub const ANNOUNCEMENTS_PATH: &str = "/api/announcements";

/// Thin JSON client for the academy backend.
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and decode the JSON body
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        let response = ensure_success(response)?;
        Ok(response.json::<T>().await?)
    }

    /// POST `body` as JSON to `path`.
    ///
    /// A successful response without a JSON body yields `Value::Null`.
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Value> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        let response = ensure_success(response)?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text).unwrap_or(Value::Null))
    }

    pub async fn submit_admission(&self, application: &AdmissionApplication) -> ApiResult<Value> {
        self.post(ADMISSIONS_PATH, application).await
    }

    pub async fn courses(&self) -> ApiResult<Vec<Course>> {
        self.get(COURSES_PATH).await
    }

    pub async fn materials(&self) -> ApiResult<Vec<Material>> {
        self.get(MATERIALS_PATH).await
    }

    pub async fn announcements(&self) -> ApiResult<Vec<Announcement>> {
        self.get(ANNOUNCEMENTS_PATH).await
    }
}

fn ensure_success(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(status))
    }
}
