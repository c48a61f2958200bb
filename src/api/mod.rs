use crate::config::{ClientConfig, UploadRoute};
use crate::errors::AppError;
use crate::models::employee::{CreatedEmployee, Employee, NewEmployee};
use crate::models::file::{DocumentBundle, UploadReceipt};
use crate::models::stats::{CountResponse, Stat};
use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

/// HTTP client for the HR backend. Every method is a single round trip.
#[derive(Debug, Clone)]
pub struct HrApi {
    client: Client,
    base_url: Url,
    upload_route: UploadRoute,
}

impl HrApi {
    pub fn new(config: &ClientConfig) -> Result<Self, AppError> {
        let client = Client::builder().build()?;
        Ok(HrApi {
            client,
            base_url: config.base_url.clone(),
            upload_route: config.upload_route,
        })
    }

    /// Appends `segments` to the base URL, escaping each one as a single
    /// path segment.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Config(format!("'{}' cannot be used as a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn create_employee(&self, employee: &NewEmployee) -> Result<CreatedEmployee, AppError> {
        let url = self.endpoint(&["employee"])?;
        debug!("POST {}", url);
        let response = self.client.post(url).json(employee).send().await?;
        read_json(response).await
    }

    /// Uploads the bundle to the configured route unless `route` overrides it.
    pub async fn upload_documents(
        &self,
        employee_id: &str,
        bundle: DocumentBundle,
        route: Option<UploadRoute>,
    ) -> Result<UploadReceipt, AppError> {
        let mut segments = route.unwrap_or(self.upload_route).segments().to_vec();
        segments.push(employee_id);
        let url = self.endpoint(&segments)?;
        debug!("POST {} (multipart)", url);
        let response = self
            .client
            .post(url)
            .multipart(document_form(bundle)?)
            .send()
            .await?;
        read_json(response).await
    }

    /// Looks up one employee. Any non-ok status counts as "no such employee".
    pub async fn get_employee(&self, employee_id: &str) -> Result<Option<Employee>, AppError> {
        let url = self.endpoint(&["employee", employee_id])?;
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            debug!("lookup of '{}' returned {}", employee_id, response.status());
            return Ok(None);
        }
        Ok(Some(response.json().await?))
    }

    /// Case-insensitive substring match on the employee name.
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<Employee>, AppError> {
        let mut url = self.endpoint(&["employee", "search", ""])?;
        url.query_pairs_mut().append_pair("name", name);
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        read_json(response).await
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, AppError> {
        let url = self.endpoint(&["employee"])?;
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        read_json(response).await
    }

    pub async fn count(&self, stat: Stat) -> Result<u64, AppError> {
        let resource = match stat {
            Stat::Employees => "employees",
            Stat::Documents => "documents",
        };
        let url = self.endpoint(&["stats", resource])?;
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let body: CountResponse = read_json(response).await?;
        Ok(body.count)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }
    let body = response.bytes().await?;
    Err(AppError::rejected(status.as_u16(), &body))
}

/// One part per document kind. A kind with no selection still gets an empty
/// part so the backend always sees all six field names.
fn document_form(bundle: DocumentBundle) -> Result<Form, AppError> {
    let mut form = Form::new();
    for (kind, file) in bundle.into_entries() {
        let part = match file {
            Some(file) => {
                let mime = file.mime_type();
                Part::bytes(file.bytes).file_name(file.file_name).mime_str(mime)?
            }
            None => Part::bytes(Vec::new())
                .file_name(String::new())
                .mime_str("application/octet-stream")?,
        };
        form = form.part(kind.field_name(), part);
    }
    Ok(form)
}
