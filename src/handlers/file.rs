use crate::api::HrApi;
use crate::config::UploadRoute;
use crate::errors::AppError;
use crate::models::file::{DocumentBundle, DocumentKind, UploadReceipt};
use crate::ui::{DisabledControl, FieldBindings, Page};
use log::{info, warn};

const REJECTED: &str = "Failed to upload documents.";
const FAILED: &str = "An error occurred while uploading documents.";

/// Where the upload handler takes the employee id from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeIdSource {
    /// The form's own `employee_id` field.
    Field,
    /// A value supplied by whoever triggered the upload.
    Argument(String),
}

impl EmployeeIdSource {
    fn resolve<P: Page + ?Sized>(&self, page: &P, bindings: &FieldBindings) -> String {
        match self {
            EmployeeIdSource::Field => bindings.text(page, "employee_id").trim().to_string(),
            EmployeeIdSource::Argument(id) => id.trim().to_string(),
        }
    }
}

fn read_bundle<P: Page + ?Sized>(page: &P, bindings: &FieldBindings) -> DocumentBundle {
    let mut bundle = DocumentBundle::default();
    for kind in DocumentKind::ALL {
        bundle.set(kind, bindings.file(page, kind.field_name()));
    }
    bundle
}

/// Submit handler of the document upload form. `route` overrides the
/// route the API client was configured with.
pub async fn upload_documents<P: Page + ?Sized>(
    api: &HrApi,
    page: &P,
    bindings: &FieldBindings,
    id_source: &EmployeeIdSource,
    route: Option<UploadRoute>,
) -> Result<UploadReceipt, AppError> {
    let _upload = DisabledControl::new(page, bindings.control());

    let employee_id = id_source.resolve(page, bindings);
    let result = if employee_id.is_empty() {
        Err(AppError::Validation("Employee ID is required.".to_string()))
    } else {
        let bundle = read_bundle(page, bindings);
        let missing: Vec<DocumentKind> = bundle
            .entries()
            .filter_map(|(kind, file)| file.is_none().then_some(kind))
            .collect();
        if !missing.is_empty() {
            warn!("uploading for employee {} without {:?}", employee_id, missing);
        }
        api.upload_documents(&employee_id, bundle, route).await
    };

    match &result {
        Ok(_) => {
            info!("uploaded documents for employee {}", employee_id);
            page.alert("Documents uploaded successfully!");
            page.reset();
        }
        Err(err) => {
            warn!("document upload failed: {}", err);
            page.alert(&err.user_message(REJECTED, FAILED));
        }
    }
    result
}
