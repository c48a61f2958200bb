use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

#[derive(Serialize, Validate, Debug, Clone, PartialEq)]
pub struct NewEmployee {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub date_of_birth: String,
    #[validate(length(min = 1))]
    pub address: String,
    #[validate(length(min = 1))]
    pub contact_number: String,
    #[validate(length(min = 1))]
    pub pan_number: String,
    #[validate(length(min = 1))]
    pub aadhar_number: String,
}

impl NewEmployee {
    /// Builds the create payload, trimming every field.
    pub fn trimmed(
        name: &str,
        date_of_birth: &str,
        address: &str,
        contact_number: &str,
        pan_number: &str,
        aadhar_number: &str,
    ) -> Self {
        NewEmployee {
            name: name.trim().to_string(),
            date_of_birth: date_of_birth.trim().to_string(),
            address: address.trim().to_string(),
            contact_number: contact_number.trim().to_string(),
            pan_number: pan_number.trim().to_string(),
            aadhar_number: aadhar_number.trim().to_string(),
        }
    }
}

/// Identifier assigned by the backend. Numeric on the current backend, but
/// older deployments hand out strings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum EmployeeId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmployeeId::Number(id) => write!(f, "{}", id),
            EmployeeId::Text(id) => write!(f, "{}", id),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CreatedEmployee {
    pub id: EmployeeId,
    #[serde(default)]
    pub message: Option<String>,
}

// every column but the id is nullable on the backend
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: EmployeeId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub pan_number: Option<String>,
    #[serde(default)]
    pub aadhar_number: Option<String>,
}

impl Employee {
    pub fn summary_line(&self) -> String {
        let or_dash = |value: &Option<String>| value.as_deref().unwrap_or("-").to_string();
        format!(
            "ID: {}, Name: {}, DOB: {}, Address: {}, Contact: {}, PAN: {}, Aadhar: {}",
            self.id,
            or_dash(&self.name),
            or_dash(&self.date_of_birth),
            or_dash(&self.address),
            or_dash(&self.contact_number),
            or_dash(&self.pan_number),
            or_dash(&self.aadhar_number),
        )
    }
}
