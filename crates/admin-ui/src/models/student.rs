//! Student records owned by the student service

use serde::{Deserialize, Serialize};

use crate::models::envelope::HalResource;

/// A student as returned by `GET /students`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// `S` followed by three digits; the record key on the service
    #[serde(default)]
    pub registration_number: String,
    pub full_name: String,
    pub address: String,
    pub contact: String,
    pub email: String,
}

impl HalResource for Student {
    const RELATION: &'static str = "students";

    fn identifier_mut(&mut self) -> &mut String {
        &mut self.registration_number
    }
}

/// Raw values typed into the "Add New Student" dialog
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudentForm {
    pub registration_number: String,
    pub full_name: String,
    pub email: String,
    pub contact: String,
    pub address: String,
}

impl StudentForm {
    pub const REGISTRATION_NUMBER: &'static str = "registrationNumber";
    pub const FULL_NAME: &'static str = "fullName";
    pub const EMAIL: &'static str = "email";
    pub const CONTACT: &'static str = "contact";
    pub const ADDRESS: &'static str = "address";

    /// Field names in the order they appear on the form
    pub const FIELDS: [&'static str; 5] = [
        Self::REGISTRATION_NUMBER,
        Self::FULL_NAME,
        Self::EMAIL,
        Self::CONTACT,
        Self::ADDRESS,
    ];

    pub fn set(&mut self, field: &str, value: String) {
        match field {
            Self::REGISTRATION_NUMBER => self.registration_number = value,
            Self::FULL_NAME => self.full_name = value,
            Self::EMAIL => self.email = value,
            Self::CONTACT => self.contact = value,
            Self::ADDRESS => self.address = value,
            _ => {}
        }
    }

    /// Body for `POST /students`. Callers validate first.
    pub fn to_student(&self) -> Student {
        Student {
            registration_number: self.registration_number.clone(),
            full_name: self.full_name.clone(),
            address: self.address.clone(),
            contact: self.contact.clone(),
            email: self.email.clone(),
        }
    }
}
