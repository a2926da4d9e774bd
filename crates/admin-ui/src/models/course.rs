//! Course records owned by the course service

use serde::{Deserialize, Serialize};

use crate::models::envelope::HalResource;

/// A course as returned by `GET /courses`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Course {
    /// Letters only, e.g. `HDSE`. Missing ids are recovered from `_links.self`.
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub duration: String,
}

impl HalResource for Course {
    const RELATION: &'static str = "courses";

    fn identifier_mut(&mut self) -> &mut String {
        &mut self.id
    }
}

/// Raw values typed into the "Add New Course" dialog
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseForm {
    pub id: String,
    pub name: String,
    pub duration: String,
}

impl CourseForm {
    pub const ID: &'static str = "id";
    pub const NAME: &'static str = "name";
    pub const DURATION: &'static str = "duration";

    /// Field names in the order they appear on the form
    pub const FIELDS: [&'static str; 3] = [Self::ID, Self::NAME, Self::DURATION];

    pub fn set(&mut self, field: &str, value: String) {
        match field {
            Self::ID => self.id = value,
            Self::NAME => self.name = value,
            Self::DURATION => self.duration = value,
            _ => {}
        }
    }

    /// Body for `POST /courses`. Callers validate first.
    pub fn to_course(&self) -> Course {
        Course {
            id: self.id.clone(),
            name: self.name.clone(),
            duration: self.duration.clone(),
        }
    }
}
