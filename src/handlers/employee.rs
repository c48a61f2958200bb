use crate::api::HrApi;
use crate::errors::AppError;
use crate::models::employee::{CreatedEmployee, NewEmployee};
use crate::ui::{DisabledControl, FieldBindings, Page};
use crate::utils::validation::validate_payload;
use log::{info, warn};

const REJECTED: &str = "Failed to register employee.";
const FAILED: &str = "An error occurred while registering the employee.";

fn read_form<P: Page + ?Sized>(page: &P, bindings: &FieldBindings) -> NewEmployee {
    NewEmployee::trimmed(
        &bindings.text(page, "name"),
        &bindings.text(page, "date_of_birth"),
        &bindings.text(page, "address"),
        &bindings.text(page, "contact_number"),
        &bindings.text(page, "pan_number"),
        &bindings.text(page, "aadhar_number"),
    )
}

/// Submit handler of the registration form.
///
/// The submit control stays disabled for the duration of the call. Every
/// outcome is reported on the page; the returned result only tells the
/// caller whether an employee was created.
pub async fn register_employee<P: Page + ?Sized>(
    api: &HrApi,
    page: &P,
    bindings: &FieldBindings,
) -> Result<CreatedEmployee, AppError> {
    let _submit = DisabledControl::new(page, bindings.control());

    let new_employee = read_form(page, bindings);
    let result = match validate_payload(&new_employee) {
        Ok(()) => api.create_employee(&new_employee).await,
        Err(err) => Err(err),
    };

    match &result {
        Ok(created) => {
            info!("registered employee {}", created.id);
            page.alert(&format!("Employee registered successfully! ID: {}", created.id));
            page.reset();
        }
        Err(err) => {
            warn!("employee registration failed: {}", err);
            page.alert(&err.user_message(REJECTED, FAILED));
        }
    }
    result
}
